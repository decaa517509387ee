//! Pure derivations from an interaction-state snapshot to render-ready
//! views.
//!
//! Nothing here mutates; [`derive_view`] recomputes every view from
//! scratch for each published revision.

pub mod controls;
pub mod detail;
pub mod legend;
pub mod map;
pub mod rank;
pub mod regional;
pub mod trend;

use rate_map_dashboard_models::DashboardView;
use rate_map_dataset::DatasetStore;

use crate::interaction::InteractionState;

/// Color that marks the selected state across views.
pub const SELECTION_COLOR: &str = "#0d6efd";

/// Secondary gray used for leader lines and unselected bars.
pub const MUTED_COLOR: &str = "#adb5bd";

/// Derives every view for one state snapshot.
#[must_use]
pub fn derive_view(store: &DatasetStore, state: &InteractionState) -> DashboardView {
    let year = state.selected_year();
    let selected = state.selected_state();
    let rank = rank::derive_rank(store, year, selected);
    let rank_text = rank.as_ref().map(|r| r.text.clone()).unwrap_or_default();

    DashboardView {
        controls: controls::derive_controls(store.year_range(), year, state.animation()),
        legend: legend::derive_legend(state.active_bands()),
        map: map::derive_map(store, year, state.active_bands(), selected),
        detail: detail::derive_detail(store, selected),
        rank,
        rank_text,
        trend: trend::derive_trend(store, selected),
        regional: regional::derive_regional(store, year, selected),
    }
}

#[cfg(test)]
mod tests {
    use rate_map_dashboard_models::{DetailView, RegionalView, TrendView};

    use super::*;
    use crate::fixtures;

    #[test]
    fn initial_view_has_placeholders() {
        let store = fixtures::store();
        let state = InteractionState::new(&store);
        let view = derive_view(&store, &state);

        assert_eq!(view.map.year, 2023);
        assert_eq!(view.map.states.len(), 7);
        assert!(matches!(view.detail, DetailView::Placeholder { .. }));
        assert!(matches!(view.trend, TrendView::Placeholder { .. }));
        assert!(matches!(view.regional, RegionalView::Placeholder { .. }));
        assert_eq!(view.rank, None);
        assert_eq!(view.rank_text, "");
    }

    #[test]
    fn selection_fills_every_dependent_view() {
        let store = fixtures::store();
        let mut state = InteractionState::new(&store);
        state.select_state(&store, "Texas");
        let view = derive_view(&store, &state);

        assert!(matches!(view.detail, DetailView::Stats(_)));
        assert!(matches!(view.trend, TrendView::Chart(_)));
        assert!(matches!(view.regional, RegionalView::Chart(_)));
        assert_eq!(view.rank_text, "Rank in 2023: #5 of 7");
        assert_eq!(
            view.map.states.iter().filter(|s| s.is_selected).count(),
            1
        );
    }

    #[test]
    fn derivation_is_deterministic() {
        let store = fixtures::store();
        let mut state = InteractionState::new(&store);
        state.select_state(&store, "Alaska");
        state.select_year(&store, 2011);
        assert_eq!(derive_view(&store, &state), derive_view(&store, &state));
    }
}
