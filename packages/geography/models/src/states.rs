//! US state name and postal abbreviation lookups.
//!
//! Provides mappings between full state names and two-letter state
//! abbreviations for the 50 US states + DC.

/// Full names of the 50 states + DC, alphabetical.
pub const STATE_NAMES: &[&str] = &[
    "Alabama", "Alaska", "Arizona", "Arkansas", "California", "Colorado", "Connecticut",
    "Delaware", "District of Columbia", "Florida", "Georgia", "Hawaii", "Idaho", "Illinois",
    "Indiana", "Iowa", "Kansas", "Kentucky", "Louisiana", "Maine", "Maryland", "Massachusetts",
    "Michigan", "Minnesota", "Mississippi", "Missouri", "Montana", "Nebraska", "Nevada",
    "New Hampshire", "New Jersey", "New Mexico", "New York", "North Carolina", "North Dakota",
    "Ohio", "Oklahoma", "Oregon", "Pennsylvania", "Rhode Island", "South Carolina", "South Dakota",
    "Tennessee", "Texas", "Utah", "Vermont", "Virginia", "Washington", "West Virginia",
    "Wisconsin", "Wyoming",
];

/// Maps a full state name to its two-letter abbreviation.
///
/// Returns `None` for unrecognized names (including the `U.S.A.`
/// aggregate row).
#[must_use]
pub fn state_abbr(name: &str) -> Option<&'static str> {
    match name {
        "Alabama" => Some("AL"),
        "Alaska" => Some("AK"),
        "Arizona" => Some("AZ"),
        "Arkansas" => Some("AR"),
        "California" => Some("CA"),
        "Colorado" => Some("CO"),
        "Connecticut" => Some("CT"),
        "Delaware" => Some("DE"),
        "District of Columbia" => Some("DC"),
        "Florida" => Some("FL"),
        "Georgia" => Some("GA"),
        "Hawaii" => Some("HI"),
        "Idaho" => Some("ID"),
        "Illinois" => Some("IL"),
        "Indiana" => Some("IN"),
        "Iowa" => Some("IA"),
        "Kansas" => Some("KS"),
        "Kentucky" => Some("KY"),
        "Louisiana" => Some("LA"),
        "Maine" => Some("ME"),
        "Maryland" => Some("MD"),
        "Massachusetts" => Some("MA"),
        "Michigan" => Some("MI"),
        "Minnesota" => Some("MN"),
        "Mississippi" => Some("MS"),
        "Missouri" => Some("MO"),
        "Montana" => Some("MT"),
        "Nebraska" => Some("NE"),
        "Nevada" => Some("NV"),
        "New Hampshire" => Some("NH"),
        "New Jersey" => Some("NJ"),
        "New Mexico" => Some("NM"),
        "New York" => Some("NY"),
        "North Carolina" => Some("NC"),
        "North Dakota" => Some("ND"),
        "Ohio" => Some("OH"),
        "Oklahoma" => Some("OK"),
        "Oregon" => Some("OR"),
        "Pennsylvania" => Some("PA"),
        "Rhode Island" => Some("RI"),
        "South Carolina" => Some("SC"),
        "South Dakota" => Some("SD"),
        "Tennessee" => Some("TN"),
        "Texas" => Some("TX"),
        "Utah" => Some("UT"),
        "Vermont" => Some("VT"),
        "Virginia" => Some("VA"),
        "Washington" => Some("WA"),
        "West Virginia" => Some("WV"),
        "Wisconsin" => Some("WI"),
        "Wyoming" => Some("WY"),
        _ => None,
    }
}

/// Maps a two-letter abbreviation to the full state name.
///
/// Matching is case-insensitive. Returns `None` for unrecognized
/// abbreviations.
#[must_use]
pub fn abbr_to_state(abbr: &str) -> Option<&'static str> {
    match abbr.trim().to_uppercase().as_str() {
        "AL" => Some("Alabama"),
        "AK" => Some("Alaska"),
        "AZ" => Some("Arizona"),
        "AR" => Some("Arkansas"),
        "CA" => Some("California"),
        "CO" => Some("Colorado"),
        "CT" => Some("Connecticut"),
        "DE" => Some("Delaware"),
        "DC" => Some("District of Columbia"),
        "FL" => Some("Florida"),
        "GA" => Some("Georgia"),
        "HI" => Some("Hawaii"),
        "ID" => Some("Idaho"),
        "IL" => Some("Illinois"),
        "IN" => Some("Indiana"),
        "IA" => Some("Iowa"),
        "KS" => Some("Kansas"),
        "KY" => Some("Kentucky"),
        "LA" => Some("Louisiana"),
        "ME" => Some("Maine"),
        "MD" => Some("Maryland"),
        "MA" => Some("Massachusetts"),
        "MI" => Some("Michigan"),
        "MN" => Some("Minnesota"),
        "MS" => Some("Mississippi"),
        "MO" => Some("Missouri"),
        "MT" => Some("Montana"),
        "NE" => Some("Nebraska"),
        "NV" => Some("Nevada"),
        "NH" => Some("New Hampshire"),
        "NJ" => Some("New Jersey"),
        "NM" => Some("New Mexico"),
        "NY" => Some("New York"),
        "NC" => Some("North Carolina"),
        "ND" => Some("North Dakota"),
        "OH" => Some("Ohio"),
        "OK" => Some("Oklahoma"),
        "OR" => Some("Oregon"),
        "PA" => Some("Pennsylvania"),
        "RI" => Some("Rhode Island"),
        "SC" => Some("South Carolina"),
        "SD" => Some("South Dakota"),
        "TN" => Some("Tennessee"),
        "TX" => Some("Texas"),
        "UT" => Some("Utah"),
        "VT" => Some("Vermont"),
        "VA" => Some("Virginia"),
        "WA" => Some("Washington"),
        "WV" => Some("West Virginia"),
        "WI" => Some("Wisconsin"),
        "WY" => Some("Wyoming"),
        _ => None,
    }
}
