#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Immutable in-memory store of per-state annual rates.
//!
//! The store is built once at startup, either from the wide source CSV via
//! [`loader`] or directly from already-shaped records, and is read-only for
//! the rest of the process. Construction validates that every state has
//! exactly one record per year in the configured [`YearRange`] and that the
//! national series covers the same years; any violation is a fatal
//! [`DatasetError`].

pub mod loader;
pub mod parsing;

use std::collections::BTreeMap;

use rate_map_geography_models::states::abbr_to_state;
use rate_map_rates_models::{NationalAverageRecord, RateRecord, YearRange};
use thiserror::Error;

pub use loader::{load_from_path, load_from_reader};

/// Errors that can occur while loading or validating the dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Reading the source file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row.
    #[error("Missing column '{column}'")]
    MissingColumn {
        /// Header label that was expected.
        column: String,
    },

    /// A data row has an empty identifier cell.
    #[error("Row on line {line} has no state identifier")]
    MissingIdentifier {
        /// One-based line number in the source file.
        line: usize,
    },

    /// A rate cell is empty, unparseable, negative, or not finite.
    #[error("Invalid rate '{value}' for {state} in {year}")]
    InvalidRate {
        /// State (or national row) the cell belongs to.
        state: String,
        /// Year column of the cell.
        year: u16,
        /// Raw cell contents.
        value: String,
    },

    /// The same state appears on more than one row.
    #[error("Duplicate row for {state}")]
    DuplicateState {
        /// State name.
        state: String,
    },

    /// More than one record exists for a (state, year) pair.
    #[error("Duplicate record for {state} in {year}")]
    DuplicateRecord {
        /// State name.
        state: String,
        /// Year.
        year: u16,
    },

    /// A state is missing a year inside the range.
    #[error("{state} has no record for {year}")]
    MissingYear {
        /// State name.
        state: String,
        /// Year without a record.
        year: u16,
    },

    /// A record lies outside the configured year range.
    #[error("Record for {state} in {year} is outside the year range {first}-{last}")]
    YearOutOfRange {
        /// State name.
        state: String,
        /// Offending year.
        year: u16,
        /// First year of the range.
        first: u16,
        /// Last year of the range.
        last: u16,
    },

    /// The aggregate national row is absent.
    #[error("National average row not found")]
    MissingNationalRow,

    /// The national series does not cover the year range exactly.
    #[error("National series has no single value for {year}")]
    MissingNationalYear {
        /// Year without exactly one national value.
        year: u16,
    },

    /// No state rows survived loading.
    #[error("Dataset contains no state rows")]
    Empty,
}

/// The validated, read-only rate table plus the national series.
#[derive(Debug)]
pub struct DatasetStore {
    /// Sorted by state name, then year. Each state's records form one
    /// contiguous run of exactly `years.len()` entries.
    records: Vec<RateRecord>,
    /// One entry per year, ascending.
    national: Vec<NationalAverageRecord>,
    years: YearRange,
    /// State name to the start of its run in `records`.
    index: BTreeMap<String, usize>,
    states: Vec<String>,
}

impl DatasetStore {
    /// Builds a store from shaped records.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if the records do not hold exactly one
    /// record per state per year in `years`, if the national series does
    /// not hold exactly one value per year, or if there are no records.
    pub fn new(
        mut records: Vec<RateRecord>,
        mut national: Vec<NationalAverageRecord>,
        years: YearRange,
    ) -> Result<Self, DatasetError> {
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        records.sort_by(|a, b| a.state.cmp(&b.state).then(a.year.cmp(&b.year)));

        let mut index = BTreeMap::new();
        let mut start = 0;
        for run in records.chunk_by(|a, b| a.state == b.state) {
            let Some(first) = run.first() else {
                continue;
            };
            validate_series(&first.state, run.iter().map(|r| r.year), years)?;
            index.insert(first.state.clone(), start);
            start += run.len();
        }

        national.sort_by_key(|n| n.year);
        validate_series("U.S.A.", national.iter().map(|n| n.year), years).map_err(|e| {
            match e {
                DatasetError::MissingYear { year, .. }
                | DatasetError::DuplicateRecord { year, .. }
                | DatasetError::YearOutOfRange { year, .. } => {
                    DatasetError::MissingNationalYear { year }
                }
                other => other,
            }
        })?;

        let states = index.keys().cloned().collect();

        Ok(Self {
            records,
            national,
            years,
            index,
            states,
        })
    }

    /// Every record, sorted by state then year.
    #[must_use]
    pub fn records(&self) -> &[RateRecord] {
        &self.records
    }

    /// The national average series, ascending by year.
    #[must_use]
    pub fn national_series(&self) -> &[NationalAverageRecord] {
        &self.national
    }

    /// The closed year range every series covers.
    #[must_use]
    pub const fn year_range(&self) -> YearRange {
        self.years
    }

    /// State names, sorted.
    #[must_use]
    pub fn states(&self) -> &[String] {
        &self.states
    }

    /// Whether `state` is present in the store.
    #[must_use]
    pub fn contains_state(&self, state: &str) -> bool {
        self.index.contains_key(state)
    }

    /// Resolves a postal abbreviation to a state name present in the store.
    #[must_use]
    pub fn state_for_abbreviation(&self, abbreviation: &str) -> Option<&str> {
        let name = abbr_to_state(abbreviation)?;
        self.index
            .get_key_value(name)
            .map(|(state, _)| state.as_str())
    }

    /// The full series for one state, ascending by year.
    #[must_use]
    pub fn state_series(&self, state: &str) -> Option<&[RateRecord]> {
        let start = *self.index.get(state)?;
        self.records.get(start..start + self.years.len())
    }

    /// The record for one state in one year.
    #[must_use]
    pub fn record(&self, state: &str, year: u16) -> Option<&RateRecord> {
        let offset = self.years.offset(year)?;
        self.state_series(state)?.get(offset)
    }

    /// Every state's record for `year`, in state-name order. Empty when
    /// `year` is outside the range.
    pub fn year_records(&self, year: u16) -> impl Iterator<Item = &RateRecord> + '_ {
        let offset = self.years.offset(year);
        self.index
            .values()
            .filter_map(move |start| offset.and_then(|o| self.records.get(start + o)))
    }

    /// The national average for `year`.
    #[must_use]
    pub fn national_rate(&self, year: u16) -> Option<f64> {
        let offset = self.years.offset(year)?;
        self.national.get(offset).map(|n| n.rate)
    }
}

/// Checks that an ascending sequence of years is exactly `years`.
fn validate_series(
    state: &str,
    series: impl Iterator<Item = u16>,
    years: YearRange,
) -> Result<(), DatasetError> {
    let mut expected = years.iter();

    for year in series {
        if !years.contains(year) {
            return Err(DatasetError::YearOutOfRange {
                state: state.to_owned(),
                year,
                first: years.first(),
                last: years.last(),
            });
        }
        match expected.next() {
            Some(want) if want == year => {}
            Some(want) if year > want => {
                return Err(DatasetError::MissingYear {
                    state: state.to_owned(),
                    year: want,
                });
            }
            _ => {
                return Err(DatasetError::DuplicateRecord {
                    state: state.to_owned(),
                    year,
                });
            }
        }
    }

    if let Some(year) = expected.next() {
        return Err(DatasetError::MissingYear {
            state: state.to_owned(),
            year,
        });
    }

    Ok(())
}
