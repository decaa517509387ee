//! Legend toggles.

use rate_map_dashboard_models::LegendItem;
use rate_map_rates_models::{INACTIVE_LEGEND_COLOR, RateBand, TEXT_PRIMARY};

use crate::interaction::ActiveBands;

const INACTIVE_OPACITY: f64 = 0.4;

/// One entry per band, always in display order regardless of which bands
/// are active.
#[must_use]
pub fn derive_legend(active: &ActiveBands) -> Vec<LegendItem> {
    RateBand::all()
        .iter()
        .map(|&band| {
            let is_active = active.contains(band);
            let (background, text, opacity) = if is_active {
                (band.color(), band.text_color(), 1.0)
            } else {
                (INACTIVE_LEGEND_COLOR, TEXT_PRIMARY, INACTIVE_OPACITY)
            };
            LegendItem {
                band,
                label: band.to_string(),
                active: is_active,
                background_color: background.to_string(),
                text_color: text.to_string(),
                opacity,
            }
        })
        .collect()
}
