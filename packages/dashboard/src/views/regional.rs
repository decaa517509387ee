//! Regional comparison bars for the selected state's region.

use rate_map_dashboard_models::{RegionalBar, RegionalChart, RegionalView};
use rate_map_dataset::DatasetStore;

use super::{MUTED_COLOR, SELECTION_COLOR};

/// Headroom above the tallest bar.
const X_AXIS_HEADROOM: f64 = 1.15;

#[must_use]
pub fn derive_regional(store: &DatasetStore, year: u16, selected: Option<&str>) -> RegionalView {
    let Some(state) = selected else {
        return RegionalView::Placeholder {
            message: super::trend::TREND_PLACEHOLDER.to_string(),
        };
    };
    let Some(record) = store.record(state, year) else {
        return RegionalView::Empty;
    };
    let region = record.region;

    let mut bars: Vec<RegionalBar> = store
        .year_records(year)
        .filter(|r| r.region == region)
        .map(|r| {
            let is_selected = r.state == state;
            RegionalBar {
                state: r.state.clone(),
                rate: r.rate,
                color: if is_selected { SELECTION_COLOR } else { MUTED_COLOR }.to_string(),
                is_selected,
            }
        })
        .collect();
    bars.sort_by(|a, b| a.rate.total_cmp(&b.rate));

    let max = bars.iter().map(|b| b.rate).fold(0.0, f64::max);

    RegionalView::Chart(RegionalChart {
        region,
        year,
        title: format!("{region} ({year})"),
        bars,
        x_max: max * X_AXIS_HEADROOM,
    })
}
