//! The mutable interaction state and the transitions gestures drive.
//!
//! Every transition returns whether anything observable changed so the
//! session loop can skip re-derivation for no-op gestures.

use std::collections::BTreeSet;

use rate_map_dashboard_models::{ClickPayload, Gesture};
use rate_map_dataset::DatasetStore;
use rate_map_rates_models::RateBand;

use crate::{clock::AnimationClock, selection::resolve_click};

/// The set of bands currently shown on the map. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveBands(BTreeSet<RateBand>);

impl ActiveBands {
    /// Whether `band` is shown.
    #[must_use]
    pub fn contains(&self, band: RateBand) -> bool {
        self.0.contains(&band)
    }

    /// Number of active bands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true; the last band cannot be toggled off.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Active bands in display order.
    pub fn iter(&self) -> impl Iterator<Item = RateBand> + '_ {
        self.0.iter().copied()
    }

    /// Flips `band`. Deactivating the only active band is refused.
    /// Returns whether the set changed.
    pub fn toggle(&mut self, band: RateBand) -> bool {
        if self.0.contains(&band) {
            if self.0.len() == 1 {
                return false;
            }
            self.0.remove(&band)
        } else {
            self.0.insert(band)
        }
    }
}

impl Default for ActiveBands {
    fn default() -> Self {
        Self(RateBand::all().iter().copied().collect())
    }
}

/// Everything the user can change. Views are a pure function of this and
/// the dataset store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionState {
    selected_year: u16,
    selected_state: Option<String>,
    active_bands: ActiveBands,
    animation: AnimationClock,
}

impl InteractionState {
    /// Initial state: latest year, no selection, all bands, clock stopped.
    #[must_use]
    pub fn new(store: &DatasetStore) -> Self {
        Self {
            selected_year: store.year_range().last(),
            selected_state: None,
            active_bands: ActiveBands::default(),
            animation: AnimationClock::default(),
        }
    }

    #[must_use]
    pub const fn selected_year(&self) -> u16 {
        self.selected_year
    }

    #[must_use]
    pub fn selected_state(&self) -> Option<&str> {
        self.selected_state.as_deref()
    }

    #[must_use]
    pub const fn active_bands(&self) -> &ActiveBands {
        &self.active_bands
    }

    #[must_use]
    pub const fn animation(&self) -> AnimationClock {
        self.animation
    }

    /// Applies one gesture. Returns whether the state changed.
    pub fn apply(&mut self, store: &DatasetStore, gesture: &Gesture) -> bool {
        match gesture {
            Gesture::SelectYear { year } => self.select_year(store, *year),
            Gesture::ToggleBand { band } => self.toggle_band(*band),
            Gesture::MapClick { payloads } => self.click(store, payloads),
            Gesture::SelectState { state } => self.select_state(store, state),
            Gesture::ClearSelection => self.clear_selection(),
            Gesture::Play => self.animation.start(),
            Gesture::Pause => self.animation.stop(),
            Gesture::TogglePlay => self.animation.toggle(),
            Gesture::SetSpeed { speed_ms } => self.animation.set_speed(*speed_ms),
        }
    }

    /// Moves to `year`, clamped into the dataset's range.
    pub fn select_year(&mut self, store: &DatasetStore, year: u16) -> bool {
        let year = store.year_range().clamp(year);
        let changed = year != self.selected_year;
        self.selected_year = year;
        changed
    }

    pub fn toggle_band(&mut self, band: RateBand) -> bool {
        let changed = self.active_bands.toggle(band);
        if !changed {
            log::debug!("toggle_band: refusing to hide the last active band {band}");
        }
        changed
    }

    /// Selects `state` if the store knows it; otherwise keeps the prior
    /// selection.
    pub fn select_state(&mut self, store: &DatasetStore, state: &str) -> bool {
        if !store.contains_state(state) {
            log::debug!("select_state: unknown state {state:?}");
            return false;
        }
        self.set_selection(state)
    }

    pub fn clear_selection(&mut self) -> bool {
        self.selected_state.take().is_some()
    }

    /// Selects the clicked state. A click that resolves to nothing keeps the
    /// prior selection.
    pub fn click(&mut self, store: &DatasetStore, payloads: &[ClickPayload]) -> bool {
        match resolve_click(store, payloads) {
            Some(state) => self.set_selection(state),
            None => {
                log::trace!("click: no state resolved from {payloads:?}");
                false
            }
        }
    }

    /// Advances the year one step if the clock is running.
    pub fn tick(&mut self, store: &DatasetStore) -> bool {
        match self.animation.tick(store.year_range(), self.selected_year) {
            Some(year) => {
                let changed = year != self.selected_year;
                self.selected_year = year;
                changed
            }
            None => false,
        }
    }

    fn set_selection(&mut self, state: &str) -> bool {
        if self.selected_state.as_deref() == Some(state) {
            return false;
        }
        self.selected_state = Some(state.to_string());
        true
    }
}
