//! Choropleth map descriptors.

use rate_map_dashboard_models::{MapView, Outline, StateDescriptor};
use rate_map_dataset::DatasetStore;
use rate_map_geography_models::labels::label_position;
use rate_map_rates_models::{FILTERED_COLOR, INACTIVE_LEGEND_COLOR, RateRecord, TEXT_PRIMARY};

use super::SELECTION_COLOR;
use crate::interaction::ActiveBands;

/// Border drawn around every unselected state.
pub const BORDER_COLOR: &str = INACTIVE_LEGEND_COLOR;

const BORDER_WIDTH: f64 = 1.0;
const SELECTED_BORDER_WIDTH: f64 = 3.0;

/// Rates at or above this get light label text on the dark fills.
const LIGHT_LABEL_THRESHOLD: f64 = 25.0;
const LIGHT_LABEL_COLOR: &str = "#ffffff";

#[must_use]
pub fn map_title(year: u16) -> String {
    format!("Suicide Rates per 100,000 Population — {year}")
}

#[must_use]
pub fn hover_text(record: &RateRecord) -> String {
    format!(
        "{}<br>Rate: {:.1} per 100k<br>Region: {}",
        record.state, record.rate, record.region
    )
}

/// One descriptor per state with a record in `year`.
#[must_use]
pub fn derive_map(
    store: &DatasetStore,
    year: u16,
    active: &ActiveBands,
    selected: Option<&str>,
) -> MapView {
    let states = store
        .year_records(year)
        .map(|record| describe(record, active, selected))
        .collect();

    MapView {
        title: map_title(year),
        year,
        states,
    }
}

fn describe(record: &RateRecord, active: &ActiveBands, selected: Option<&str>) -> StateDescriptor {
    let is_filtered = !active.contains(record.band);
    let is_selected = selected == Some(record.state.as_str());

    // Missing placements are reported once when the dataset loads.
    let position = label_position(&record.state);
    let label_color = match &position {
        Some(p) if p.is_offset() => TEXT_PRIMARY,
        _ if record.rate < LIGHT_LABEL_THRESHOLD => TEXT_PRIMARY,
        _ => LIGHT_LABEL_COLOR,
    };

    let outline = if is_selected {
        Outline {
            color: SELECTION_COLOR.to_string(),
            width: SELECTED_BORDER_WIDTH,
        }
    } else {
        Outline {
            color: BORDER_COLOR.to_string(),
            width: BORDER_WIDTH,
        }
    };

    StateDescriptor {
        state: record.state.clone(),
        abbreviation: record.abbreviation.clone(),
        rate: record.rate,
        band: record.band,
        region: record.region,
        fill_color: if is_filtered {
            FILTERED_COLOR
        } else {
            record.band.color()
        }
        .to_string(),
        is_filtered,
        is_selected,
        outline,
        label_position: position,
        label_color: label_color.to_string(),
        hover_text: hover_text(record),
    }
}

#[cfg(test)]
mod tests {
    use rate_map_rates_models::{RateBand, Region};

    use super::*;
    use crate::fixtures;

    fn find<'a>(view: &'a MapView, state: &str) -> &'a StateDescriptor {
        view.states.iter().find(|s| s.state == state).unwrap()
    }

    #[test]
    fn fills_follow_band_unless_filtered() {
        let store = fixtures::store();
        let mut active = ActiveBands::default();
        active.toggle(RateBand::AboveThirty);
        let view = derive_map(&store, 2023, &active, None);

        let texas = find(&view, "Texas");
        assert_eq!(texas.band, RateBand::TenToFifteen);
        assert_eq!(texas.fill_color, "#bbdb44");
        assert!(!texas.is_filtered);

        let alaska = find(&view, "Alaska");
        assert!(alaska.is_filtered);
        assert_eq!(alaska.fill_color, "#e9ecef");
    }

    #[test]
    fn selection_is_independent_of_filtering() {
        let store = fixtures::store();
        let mut active = ActiveBands::default();
        active.toggle(RateBand::AboveThirty);
        let view = derive_map(&store, 2023, &active, Some("Wyoming"));

        let wyoming = find(&view, "Wyoming");
        assert!(wyoming.is_filtered);
        assert!(wyoming.is_selected);
        assert_eq!(wyoming.outline.color, "#0d6efd");
        assert_eq!(view.states.iter().filter(|s| s.is_selected).count(), 1);
    }

    #[test]
    fn hover_text_survives_filtering() {
        let store = fixtures::store();
        let mut active = ActiveBands::default();
        active.toggle(RateBand::TenToFifteen);
        let view = derive_map(&store, 2000, &active, None);

        assert_eq!(
            find(&view, "Texas").hover_text,
            "Texas<br>Rate: 10.0 per 100k<br>Region: West South Central"
        );
    }

    #[test]
    fn label_colors() {
        let store = fixtures::store();
        let view = derive_map(&store, 2023, &ActiveBands::default(), None);

        assert_eq!(find(&view, "Texas").label_color, "#212529");
        assert_eq!(find(&view, "Alaska").label_color, "#ffffff");

        let rhode_island = find(&view, "Rhode Island");
        assert!(rhode_island.label_position.as_ref().unwrap().is_offset());
        assert_eq!(rhode_island.label_color, "#212529");
    }

    #[test]
    fn state_without_placement_is_drawn_unlabeled() {
        let store = fixtures::custom_store(
            2000,
            &[("Atlantis", "AT", Region::Pacific, &[27.0])],
        );
        let view = derive_map(&store, 2000, &ActiveBands::default(), None);

        let atlantis = find(&view, "Atlantis");
        assert_eq!(atlantis.label_position, None);
        assert_eq!(atlantis.label_color, "#ffffff");
        assert_eq!(atlantis.fill_color, "#e51f1f");
    }

    #[test]
    fn title_carries_year() {
        let store = fixtures::store();
        let view = derive_map(&store, 2015, &ActiveBands::default(), None);
        assert_eq!(view.title, "Suicide Rates per 100,000 Population — 2015");
    }
}
