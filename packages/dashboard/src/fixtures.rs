use std::sync::Arc;

use rate_map_dataset::DatasetStore;
use rate_map_rates_models::{NationalAverageRecord, RateRecord, Region, YearRange};

/// `(state, abbreviation, region, rate in the first year, yearly slope)`
const STATES: &[(&str, &str, Region, f64, f64)] = &[
    ("Alaska", "AK", Region::Pacific, 22.0, 0.5),
    ("Arkansas", "AR", Region::WestSouthCentral, 13.0, 0.35),
    ("Louisiana", "LA", Region::WestSouthCentral, 11.0, 0.1),
    ("Oklahoma", "OK", Region::WestSouthCentral, 15.0, 0.4),
    ("Rhode Island", "RI", Region::NewEngland, 8.0, 0.05),
    ("Texas", "TX", Region::WestSouthCentral, 10.0, 0.2),
    ("Wyoming", "WY", Region::Mountain, 20.0, 0.6),
];

/// Seven states over 2000..=2023, each rising linearly.
///
/// Ranking in 2023: Wyoming, Alaska, Oklahoma, Arkansas, Texas, Louisiana,
/// Rhode Island.
pub fn store() -> Arc<DatasetStore> {
    let years = YearRange::default();
    let mut records = vec![];
    for &(state, abbreviation, region, base, slope) in STATES {
        for (i, year) in years.iter().enumerate() {
            let rate = base + slope * f64::from(u16::try_from(i).unwrap());
            records.push(RateRecord::new(state, year, rate, region, abbreviation));
        }
    }
    let national = years
        .iter()
        .map(|year| NationalAverageRecord {
            year,
            rate: 10.0 + f64::from(year - years.first()) * 0.15,
        })
        .collect();

    Arc::new(DatasetStore::new(records, national, years).unwrap())
}

/// Builds a store from explicit per-year rates over `first..`.
pub fn custom_store(first: u16, states: &[(&str, &str, Region, &[f64])]) -> Arc<DatasetStore> {
    let len = states[0].3.len();
    let last = first + u16::try_from(len).unwrap() - 1;
    let years = YearRange::new(first, last).unwrap();
    let mut records = vec![];
    for &(state, abbreviation, region, rates) in states {
        for (year, &rate) in years.iter().zip(rates) {
            records.push(RateRecord::new(state, year, rate, region, abbreviation));
        }
    }
    let national = years
        .iter()
        .map(|year| NationalAverageRecord { year, rate: 12.0 })
        .collect();

    Arc::new(DatasetStore::new(records, national, years).unwrap())
}
