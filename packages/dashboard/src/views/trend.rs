//! National versus selected-state trend lines.

use rate_map_dashboard_models::{Series, TrendChart, TrendView, YearValue};
use rate_map_dataset::DatasetStore;

pub const TREND_PLACEHOLDER: &str = "Select a state";
pub const NATIONAL_SERIES_NAME: &str = "US Average";

/// Fixed y-axis range so lines stay comparable across states.
pub const Y_RANGE: (f64, f64) = (0.0, 35.0);

#[must_use]
pub fn derive_trend(store: &DatasetStore, selected: Option<&str>) -> TrendView {
    let Some((state, series)) = selected.and_then(|s| Some((s, store.state_series(s)?))) else {
        return TrendView::Placeholder {
            message: TREND_PLACEHOLDER.to_string(),
        };
    };

    TrendView::Chart(TrendChart {
        national: Series {
            name: NATIONAL_SERIES_NAME.to_string(),
            points: store
                .national_series()
                .iter()
                .map(|n| YearValue {
                    year: n.year,
                    rate: n.rate,
                })
                .collect(),
        },
        state: Series {
            name: state.to_string(),
            points: series
                .iter()
                .map(|r| YearValue {
                    year: r.year,
                    rate: r.rate,
                })
                .collect(),
        },
        y_min: Y_RANGE.0,
        y_max: Y_RANGE.1,
    })
}
