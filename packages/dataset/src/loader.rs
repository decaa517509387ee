//! Loads the wide source CSV into a [`DatasetStore`].
//!
//! The source has one row per state plus one aggregate `U.S.A.` row, and
//! one column per year. Only the columns inside the requested
//! [`YearRange`] are read; every one of them must be present. Files ending
//! in `.gz` are decompressed before parsing.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use rate_map_geography_models::labels::label_position;
use rate_map_geography_models::states::{STATE_NAMES, state_abbr};
use rate_map_rates_models::{NationalAverageRecord, RateRecord, Region, YearRange};

use crate::parsing::{parse_identifier, parse_rate};
use crate::{DatasetError, DatasetStore};

/// Header of the column holding `"<state> [<region code>]"`.
pub const IDENTIFIER_COLUMN: &str = "State / [Region]";

/// Identifier of the aggregate national row.
pub const NATIONAL_ROW: &str = "U.S.A.";

/// Loads the rate table from a file on disk.
///
/// # Errors
///
/// Returns [`DatasetError`] if the file cannot be read or the table is
/// malformed.
pub fn load_from_path(path: &Path, years: YearRange) -> Result<DatasetStore, DatasetError> {
    log::info!("Loading rate table from {}", path.display());

    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        log::debug!("Decompressing gzip input");
        load_from_reader(flate2::read::GzDecoder::new(file), years)
    } else {
        load_from_reader(file, years)
    }
}

/// Loads the rate table from any reader producing CSV bytes.
///
/// State rows whose name has no known abbreviation, or whose region code
/// is missing or unknown, are skipped with a warning.
///
/// # Errors
///
/// Returns [`DatasetError`] if a required column is missing, a rate cell
/// in range is invalid, a state appears twice, the national row is
/// missing, or no state rows remain.
pub fn load_from_reader<R: Read>(reader: R, years: YearRange) -> Result<DatasetStore, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_owned())
        .collect();

    let identifier_idx = headers
        .iter()
        .position(|h| h == IDENTIFIER_COLUMN)
        .ok_or_else(|| DatasetError::MissingColumn {
            column: IDENTIFIER_COLUMN.to_owned(),
        })?;

    let year_columns: Vec<(u16, usize)> = years
        .iter()
        .map(|year| {
            let label = year.to_string();
            headers
                .iter()
                .position(|h| *h == label)
                .map(|idx| (year, idx))
                .ok_or(DatasetError::MissingColumn { column: label })
        })
        .collect::<Result<_, _>>()?;

    let mut records = Vec::new();
    let mut national = None;
    let mut seen = BTreeSet::new();

    for (row_idx, result) in reader.records().enumerate() {
        let row = result?;

        let identifier = row.get(identifier_idx).unwrap_or("").trim();
        if identifier.is_empty() {
            return Err(DatasetError::MissingIdentifier { line: row_idx + 2 });
        }
        let parsed = parse_identifier(identifier);

        if !seen.insert(parsed.name.to_owned()) {
            return Err(DatasetError::DuplicateState {
                state: parsed.name.to_owned(),
            });
        }

        let rates = year_columns
            .iter()
            .map(|&(year, idx)| parse_rate(row.get(idx), parsed.name, year).map(|r| (year, r)))
            .collect::<Result<Vec<_>, _>>()?;

        if parsed.name == NATIONAL_ROW {
            national = Some(
                rates
                    .into_iter()
                    .map(|(year, rate)| NationalAverageRecord { year, rate })
                    .collect::<Vec<_>>(),
            );
            continue;
        }

        let Some(abbreviation) = state_abbr(parsed.name) else {
            log::warn!("Skipping '{}': no known state abbreviation", parsed.name);
            continue;
        };
        let Some(region) = parsed.region_code.and_then(Region::from_code) else {
            log::warn!(
                "Skipping '{}': unrecognized region code {:?}",
                parsed.name,
                parsed.region_code
            );
            continue;
        };

        records.extend(
            rates
                .into_iter()
                .map(|(year, rate)| RateRecord::new(parsed.name, year, rate, region, abbreviation)),
        );
    }

    let national = national.ok_or(DatasetError::MissingNationalRow)?;
    let store = DatasetStore::new(records, national, years)?;

    for name in absent_states(&store) {
        log::warn!("No rows for {name}");
    }
    for name in unlabeled_states(&store) {
        log::warn!("No label coordinates for {name}; the map draws it unlabeled");
    }

    log::info!(
        "Loaded {} state-year records for {} states ({}-{})",
        store.records().len(),
        store.states().len(),
        years.first(),
        years.last()
    );

    Ok(store)
}

/// Reference states with no row in the store.
fn absent_states(store: &DatasetStore) -> impl Iterator<Item = &'static str> + '_ {
    STATE_NAMES
        .iter()
        .copied()
        .filter(|name| !store.contains_state(name))
}

/// Stored states the map has no label placement for.
fn unlabeled_states(store: &DatasetStore) -> impl Iterator<Item = &str> {
    store
        .states()
        .iter()
        .map(String::as_str)
        .filter(|name| label_position(name).is_none())
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use rate_map_rates_models::RateBand;

    use super::*;

    fn years() -> YearRange {
        YearRange::new(2000, 2002).unwrap()
    }

    const TABLE: &str = "\
State / [Region],1999,2000,2001,2002
Alabama [ESC],11.0,12.0,15.0,11.0
District of Columbia [SA],5.0,6.1,6.4,7.0
U.S.A.,10.0,10.4,10.7,11.0
Wyoming [M],25.0,29.9,30.0,31.5
";

    #[test]
    fn loads_states_and_national_row() {
        let store = load_from_reader(TABLE.as_bytes(), years()).unwrap();

        assert_eq!(store.states().len(), 3);
        assert_eq!(store.records().len(), 9);
        assert_eq!(store.national_series().len(), 3);

        let alabama = store.record("Alabama", 2001).unwrap();
        assert_eq!(alabama.abbreviation, "AL");
        assert_eq!(alabama.region, Region::EastSouthCentral);
        assert_eq!(alabama.band, RateBand::FifteenToTwenty);

        let dc = store.record("District of Columbia", 2000).unwrap();
        assert_eq!(dc.region, Region::SouthAtlantic);
        assert_eq!(dc.band, RateBand::BelowTen);
    }

    #[test]
    fn coverage_gaps_are_computed_at_load() {
        let store = load_from_reader(TABLE.as_bytes(), years()).unwrap();

        assert_eq!(unlabeled_states(&store).count(), 0);
        let absent: Vec<_> = absent_states(&store).collect();
        assert_eq!(absent.len(), 48);
        assert!(absent.contains(&"Texas"));
        assert!(!absent.contains(&"Wyoming"));
    }

    #[test]
    fn ignores_columns_outside_range() {
        let store = load_from_reader(TABLE.as_bytes(), years()).unwrap();
        assert!(store.record("Wyoming", 1999).is_none());
        assert_eq!(store.record("Wyoming", 2001).unwrap().band, RateBand::AboveThirty);
    }

    #[test]
    fn missing_year_column_is_fatal() {
        let table = "State / [Region],2000,2001\nAlabama [ESC],1,2\nU.S.A.,1,2\n";
        let err = load_from_reader(table.as_bytes(), years()).unwrap_err();
        assert!(
            matches!(err, DatasetError::MissingColumn { ref column } if column == "2002"),
            "{err}"
        );
    }

    #[test]
    fn missing_identifier_column_is_fatal() {
        let table = "State,2000,2001,2002\nAlabama,1,2,3\n";
        let err = load_from_reader(table.as_bytes(), years()).unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn { .. }), "{err}");
    }

    #[test]
    fn unparseable_rate_is_fatal() {
        let table = "State / [Region],2000,2001,2002\nAlabama [ESC],1,x,3\nU.S.A.,1,2,3\n";
        let err = load_from_reader(table.as_bytes(), years()).unwrap_err();
        assert!(
            matches!(err, DatasetError::InvalidRate { year: 2001, ref value, .. } if value == "x"),
            "{err}"
        );
    }

    #[test]
    fn short_row_is_fatal() {
        let table = "State / [Region],2000,2001,2002\nAlabama [ESC],1,2\nU.S.A.,1,2,3\n";
        let err = load_from_reader(table.as_bytes(), years()).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidRate { year: 2002, .. }), "{err}");
    }

    #[test]
    fn missing_national_row_is_fatal() {
        let table = "State / [Region],2000,2001,2002\nAlabama [ESC],1,2,3\n";
        let err = load_from_reader(table.as_bytes(), years()).unwrap_err();
        assert!(matches!(err, DatasetError::MissingNationalRow), "{err}");
    }

    #[test]
    fn duplicate_state_row_is_fatal() {
        let table = "State / [Region],2000,2001,2002\nAlabama [ESC],1,2,3\nAlabama [ESC],1,2,3\n";
        let err = load_from_reader(table.as_bytes(), years()).unwrap_err();
        assert!(matches!(err, DatasetError::DuplicateState { .. }), "{err}");
    }

    #[test]
    fn skips_unknown_states_and_regions() {
        let table = "\
State / [Region],2000,2001,2002
Alabama [ESC],1,2,3
Puerto Rico [SA],1,2,3
Texas [ZZ],1,2,3
Ohio,1,2,3
U.S.A.,1,2,3
";
        let store = load_from_reader(table.as_bytes(), years()).unwrap();
        assert_eq!(store.states(), ["Alabama".to_string()]);
    }

    #[test]
    fn only_unknown_states_is_fatal() {
        let table = "State / [Region],2000,2001,2002\nPuerto Rico [SA],1,2,3\nU.S.A.,1,2,3\n";
        let err = load_from_reader(table.as_bytes(), years()).unwrap_err();
        assert!(matches!(err, DatasetError::Empty), "{err}");
    }

    #[test]
    fn loads_gzip_file() {
        let dir = std::env::temp_dir().join(format!("rate_map_loader_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("rates.csv.gz");

        let mut encoder =
            flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(TABLE.as_bytes()).unwrap();
        std::fs::write(&path, encoder.finish().unwrap()).unwrap();

        let store = load_from_path(&path, years()).unwrap();
        assert_eq!(store.states().len(), 3);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_from_path(Path::new("does/not/exist.csv"), years()).unwrap_err();
        assert!(matches!(err, DatasetError::Io(_)), "{err}");
    }
}
