//! Resolves map clicks to a state name.

use rate_map_dashboard_models::ClickPayload;
use rate_map_dataset::DatasetStore;

/// Separator between the state name and the rest of a hover label.
pub const LABEL_SEPARATOR: &str = "<br>";

/// Resolves the clicked state from a click's payloads.
///
/// Identifiers are tried first, then hover-label text, then location
/// codes. Within a tier, payloads are tried in the order given. Only names
/// present in `store` resolve; anything else yields `None` so the caller
/// can keep its previous selection.
#[must_use]
pub fn resolve_click<'a>(store: &'a DatasetStore, payloads: &[ClickPayload]) -> Option<&'a str> {
    let by_identifier = || {
        payloads.iter().find_map(|payload| match payload {
            ClickPayload::Identifier(id) => known_state(store, id.trim()),
            ClickPayload::Label(_) | ClickPayload::Location(_) => None,
        })
    };
    let by_label = || {
        payloads.iter().find_map(|payload| match payload {
            ClickPayload::Label(text) => text
                .split_once(LABEL_SEPARATOR)
                .and_then(|(name, _)| known_state(store, name.trim())),
            ClickPayload::Identifier(_) | ClickPayload::Location(_) => None,
        })
    };
    let by_location = || {
        payloads.iter().find_map(|payload| match payload {
            ClickPayload::Location(code) => store.state_for_abbreviation(code),
            ClickPayload::Identifier(_) | ClickPayload::Label(_) => None,
        })
    };

    by_identifier().or_else(by_label).or_else(by_location)
}

fn known_state<'a>(store: &'a DatasetStore, name: &str) -> Option<&'a str> {
    store
        .states()
        .iter()
        .find(|state| state.as_str() == name)
        .map(String::as_str)
}
