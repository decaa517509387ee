#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Rate band taxonomy and per-state rate record types.
//!
//! This crate defines the canonical six-band bucketing of annual suicide
//! rates (per 100,000 population) used for map coloring and legend
//! filtering, the nine census-style regions, and the immutable record
//! types held by the dataset store.

pub mod region;
pub mod years;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

pub use region::Region;
pub use years::YearRange;

/// Map fill used for states whose band is currently filtered out.
pub const FILTERED_COLOR: &str = "#e9ecef";

/// Neutral background used by legend entries for inactive bands.
pub const INACTIVE_LEGEND_COLOR: &str = "#dee2e6";

/// Primary text color.
pub const TEXT_PRIMARY: &str = "#212529";

/// A fixed rate range used to bucket a state's rate.
///
/// Variant declaration order is the display order: `Ord` sorts bands from
/// lowest to highest rate.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum RateBand {
    /// Rates below 10.
    #[serde(rename = "<10")]
    #[strum(serialize = "<10")]
    BelowTen,
    /// Rates in `[10, 15)`.
    #[serde(rename = "10-15")]
    #[strum(serialize = "10-15")]
    TenToFifteen,
    /// Rates in `[15, 20)`.
    #[serde(rename = "15-20")]
    #[strum(serialize = "15-20")]
    FifteenToTwenty,
    /// Rates in `[20, 25)`.
    #[serde(rename = "20-25")]
    #[strum(serialize = "20-25")]
    TwentyToTwentyFive,
    /// Rates in `[25, 30)`.
    #[serde(rename = "25-30")]
    #[strum(serialize = "25-30")]
    TwentyFiveToThirty,
    /// Rates of 30 and above.
    #[serde(rename = ">30")]
    #[strum(serialize = ">30")]
    AboveThirty,
}

impl RateBand {
    /// Returns all bands in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::BelowTen,
            Self::TenToFifteen,
            Self::FifteenToTwenty,
            Self::TwentyToTwentyFive,
            Self::TwentyFiveToThirty,
            Self::AboveThirty,
        ]
    }

    /// Exclusive upper bound of this band, `None` for the catch-all top band.
    #[must_use]
    pub const fn upper_bound(self) -> Option<f64> {
        match self {
            Self::BelowTen => Some(10.0),
            Self::TenToFifteen => Some(15.0),
            Self::FifteenToTwenty => Some(20.0),
            Self::TwentyToTwentyFive => Some(25.0),
            Self::TwentyFiveToThirty => Some(30.0),
            Self::AboveThirty => None,
        }
    }

    /// Fill color used on the map and the legend when the band is active.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::BelowTen => "#44ce1b",
            Self::TenToFifteen => "#bbdb44",
            Self::FifteenToTwenty => "#f7e379",
            Self::TwentyToTwentyFive => "#f2a134",
            Self::TwentyFiveToThirty => "#e51f1f",
            Self::AboveThirty => "#8e1f1f",
        }
    }

    /// Legend text color that stays readable on top of [`Self::color`].
    #[must_use]
    pub const fn text_color(self) -> &'static str {
        match self {
            Self::BelowTen
            | Self::TenToFifteen
            | Self::FifteenToTwenty
            | Self::TwentyToTwentyFive => "#000",
            Self::TwentyFiveToThirty | Self::AboveThirty => "#fff",
        }
    }
}

/// Buckets a rate into its [`RateBand`].
///
/// Thresholds are tested in ascending order and the first band whose upper
/// bound exceeds `rate` wins. Anything not below 30 (including `NaN`) falls
/// into [`RateBand::AboveThirty`].
#[must_use]
pub fn classify(rate: f64) -> RateBand {
    RateBand::all()
        .iter()
        .copied()
        .find(|band| band.upper_bound().is_some_and(|upper| rate < upper))
        .unwrap_or(RateBand::AboveThirty)
}

/// One state's rate for one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateRecord {
    /// Full state name (e.g. "Texas").
    pub state: String,
    /// Calendar year.
    pub year: u16,
    /// Rate per 100,000 population.
    pub rate: f64,
    /// Census region the state belongs to.
    pub region: Region,
    /// Two-letter postal abbreviation.
    pub abbreviation: String,
    /// Band derived from `rate`.
    pub band: RateBand,
}

impl RateRecord {
    /// Creates a record, deriving its band from `rate`.
    #[must_use]
    pub fn new(
        state: impl Into<String>,
        year: u16,
        rate: f64,
        region: Region,
        abbreviation: impl Into<String>,
    ) -> Self {
        Self {
            state: state.into(),
            year,
            rate,
            region,
            abbreviation: abbreviation.into(),
            band: classify(rate),
        }
    }
}

/// The national aggregate rate for one year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NationalAverageRecord {
    /// Calendar year.
    pub year: u16,
    /// Rate per 100,000 population.
    pub rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_boundaries() {
        assert_eq!(classify(0.0), RateBand::BelowTen);
        assert_eq!(classify(9.99), RateBand::BelowTen);
        assert_eq!(classify(10.0), RateBand::TenToFifteen);
        assert_eq!(classify(14.99), RateBand::TenToFifteen);
        assert_eq!(classify(15.0), RateBand::FifteenToTwenty);
        assert_eq!(classify(20.0), RateBand::TwentyToTwentyFive);
        assert_eq!(classify(25.0), RateBand::TwentyFiveToThirty);
        assert_eq!(classify(29.99), RateBand::TwentyFiveToThirty);
        assert_eq!(classify(30.0), RateBand::AboveThirty);
        assert_eq!(classify(1_000.0), RateBand::AboveThirty);
    }

    #[test]
    fn bands_partition_without_gaps() {
        // Walk [0, 40) in small steps; band index must never decrease and
        // must only change exactly at a declared bound.
        let mut previous = classify(0.0);
        for step in 1..4_000u32 {
            let rate = f64::from(step) / 100.0;
            let band = classify(rate);
            assert!(band >= previous, "band went backwards at {rate}");
            if band != previous {
                assert_eq!(previous.upper_bound(), Some(rate), "changed at {rate}");
            }
            previous = band;
        }
    }

    #[test]
    fn display_matches_serde_labels() {
        for band in RateBand::all() {
            let json = serde_json::to_string(band).unwrap();
            assert_eq!(json, format!("\"{band}\""));
            assert_eq!(band.as_ref().parse::<RateBand>().ok(), Some(*band));
        }
        assert_eq!(RateBand::AboveThirty.to_string(), ">30");
        assert_eq!("10-15".parse::<RateBand>().ok(), Some(RateBand::TenToFifteen));
    }

    #[test]
    fn record_band_follows_rate() {
        let record = RateRecord::new("Texas", 2023, 14.8, Region::WestSouthCentral, "TX");
        assert_eq!(record.band, RateBand::TenToFifteen);
    }

    #[test]
    fn text_colors_flip_for_the_two_darkest_bands() {
        let dark: Vec<_> = RateBand::all()
            .iter()
            .filter(|b| b.text_color() == "#fff")
            .copied()
            .collect();
        assert_eq!(
            dark,
            vec![RateBand::TwentyFiveToThirty, RateBand::AboveThirty]
        );
    }
}
