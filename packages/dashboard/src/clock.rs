//! The animation clock.
//!
//! A two-state machine (stopped / running) plus the step period. The clock
//! itself never schedules anything; the session loop owns the timer and
//! feeds [`AnimationClock::tick`] through the same path as gestures.

use rate_map_rates_models::YearRange;

/// Fastest allowed step period in milliseconds.
pub const MIN_SPEED_MS: u32 = 200;

/// Slowest allowed step period in milliseconds.
pub const MAX_SPEED_MS: u32 = 1_500;

/// Speed slider step in milliseconds.
pub const SPEED_STEP_MS: u32 = 100;

/// Step period on startup.
pub const DEFAULT_SPEED_MS: u32 = 700;

/// Play/pause state and step period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationClock {
    running: bool,
    speed_ms: u32,
}

impl AnimationClock {
    /// Whether the clock is advancing the year.
    #[must_use]
    pub const fn is_running(self) -> bool {
        self.running
    }

    /// Current step period in milliseconds.
    #[must_use]
    pub const fn speed_ms(self) -> u32 {
        self.speed_ms
    }

    /// Stopped → Running. Returns whether the state changed.
    pub const fn start(&mut self) -> bool {
        let changed = !self.running;
        self.running = true;
        changed
    }

    /// Running → Stopped. Returns whether the state changed.
    pub const fn stop(&mut self) -> bool {
        let changed = self.running;
        self.running = false;
        changed
    }

    /// Flips between running and stopped.
    pub const fn toggle(&mut self) -> bool {
        self.running = !self.running;
        true
    }

    /// Sets the step period, clamped to
    /// [`MIN_SPEED_MS`]..=[`MAX_SPEED_MS`]. Returns whether it changed.
    pub fn set_speed(&mut self, speed_ms: u32) -> bool {
        let speed_ms = speed_ms.clamp(MIN_SPEED_MS, MAX_SPEED_MS);
        let changed = speed_ms != self.speed_ms;
        self.speed_ms = speed_ms;
        changed
    }

    /// The year after `year` if the clock is running, wrapping at the end
    /// of `years`. A tick delivered while stopped yields `None`.
    #[must_use]
    pub fn tick(self, years: YearRange, year: u16) -> Option<u16> {
        self.running.then(|| years.next_wrapping(year))
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self {
            running: false,
            speed_ms: DEFAULT_SPEED_MS,
        }
    }
}
