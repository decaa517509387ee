//! Year slider, play button, and speed slider.

use rate_map_dashboard_models::{ControlsView, SpeedMark, SpeedSlider, YearSlider};
use rate_map_rates_models::YearRange;

use crate::clock::{AnimationClock, DEFAULT_SPEED_MS, MAX_SPEED_MS, MIN_SPEED_MS, SPEED_STEP_MS};

/// Spacing between labeled years on the year slider.
pub const YEAR_MARK_INTERVAL: usize = 4;

pub const PLAY_LABEL: &str = "▶ Play";
pub const PAUSE_LABEL: &str = "⏸ Pause";

#[must_use]
pub fn derive_controls(years: YearRange, year: u16, clock: AnimationClock) -> ControlsView {
    let playing = clock.is_running();

    ControlsView {
        year: YearSlider {
            min: years.first(),
            max: years.last(),
            value: year,
            marks: years.iter().step_by(YEAR_MARK_INTERVAL).collect(),
        },
        playing,
        play_label: if playing { PAUSE_LABEL } else { PLAY_LABEL }.to_string(),
        speed: SpeedSlider {
            min: MIN_SPEED_MS,
            max: MAX_SPEED_MS,
            step: SPEED_STEP_MS,
            value: clock.speed_ms(),
            marks: [
                (MIN_SPEED_MS, "Fast"),
                (DEFAULT_SPEED_MS, "Med"),
                (MAX_SPEED_MS, "Slow"),
            ]
            .into_iter()
            .map(|(value, label)| SpeedMark {
                value,
                label: label.to_string(),
            })
            .collect(),
        },
    }
}
