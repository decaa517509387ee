//! Cell-level parsing for the source rate table.
//!
//! The identifier column packs the state name and an optional bracketed
//! region code into one cell (`"Alabama [ESC]"`), and each year column
//! holds a plain decimal rate.

use std::sync::LazyLock;

use regex::Regex;

use crate::DatasetError;

static REGION_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([A-Z]+)\]").unwrap_or_else(|_| unreachable!()));

/// A parsed identifier cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateIdentifier<'a> {
    /// State name with the bracketed suffix removed.
    pub name: &'a str,
    /// Region code from the bracketed suffix, if any.
    pub region_code: Option<&'a str>,
}

/// Splits an identifier cell into state name and region code.
#[must_use]
pub fn parse_identifier(raw: &str) -> StateIdentifier<'_> {
    let region_code = REGION_CODE
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str());
    let name = raw.find('[').map_or(raw, |idx| &raw[..idx]).trim();

    StateIdentifier { name, region_code }
}

/// Parses one rate cell. Rates must be finite and non-negative.
///
/// # Errors
///
/// Returns [`DatasetError::InvalidRate`] if the cell is missing, empty,
/// unparseable, negative, or not finite.
pub fn parse_rate(cell: Option<&str>, state: &str, year: u16) -> Result<f64, DatasetError> {
    let raw = cell.unwrap_or("").trim();
    raw.parse::<f64>()
        .ok()
        .filter(|rate| rate.is_finite() && *rate >= 0.0)
        .ok_or_else(|| DatasetError::InvalidRate {
            state: state.to_owned(),
            year,
            value: raw.to_owned(),
        })
}
