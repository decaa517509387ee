//! US census-style regions.
//!
//! The source table tags each state with a short bracketed region code
//! (e.g. `Alabama [ESC]`). [`Region::from_code`] maps those codes to the
//! nine named regions.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// One of the nine regions used for the regional comparison chart.
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
pub enum Region {
    /// CT, ME, MA, NH, RI, VT
    #[serde(rename = "New England")]
    #[strum(serialize = "New England")]
    NewEngland,
    /// NJ, NY, PA
    #[serde(rename = "Mid-Atlantic")]
    #[strum(serialize = "Mid-Atlantic")]
    MidAtlantic,
    /// IL, IN, MI, OH, WI
    #[serde(rename = "East North Central")]
    #[strum(serialize = "East North Central")]
    EastNorthCentral,
    /// IA, KS, MN, MO, NE, ND, SD
    #[serde(rename = "West North Central")]
    #[strum(serialize = "West North Central")]
    WestNorthCentral,
    /// DE, DC, FL, GA, MD, NC, SC, VA, WV
    #[serde(rename = "South Atlantic")]
    #[strum(serialize = "South Atlantic")]
    SouthAtlantic,
    /// AL, KY, MS, TN
    #[serde(rename = "East South Central")]
    #[strum(serialize = "East South Central")]
    EastSouthCentral,
    /// AR, LA, OK, TX
    #[serde(rename = "West South Central")]
    #[strum(serialize = "West South Central")]
    WestSouthCentral,
    /// AZ, CO, ID, MT, NV, NM, UT, WY
    #[serde(rename = "Mountain")]
    #[strum(serialize = "Mountain")]
    Mountain,
    /// AK, CA, HI, OR, WA
    #[serde(rename = "Pacific")]
    #[strum(serialize = "Pacific")]
    Pacific,
}

impl Region {
    /// Returns all regions.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::NewEngland,
            Self::MidAtlantic,
            Self::EastNorthCentral,
            Self::WestNorthCentral,
            Self::SouthAtlantic,
            Self::EastSouthCentral,
            Self::WestSouthCentral,
            Self::Mountain,
            Self::Pacific,
        ]
    }

    /// Maps a bracketed source-table region code to its region.
    ///
    /// Returns `None` for unrecognized codes.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().iter().copied().find(|region| region.code() == code)
    }

    /// The short code used in the source table.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::NewEngland => "NE",
            Self::MidAtlantic => "MA",
            Self::EastNorthCentral => "ENC",
            Self::WestNorthCentral => "WNC",
            Self::SouthAtlantic => "SA",
            Self::EastSouthCentral => "ESC",
            Self::WestSouthCentral => "WSC",
            Self::Mountain => "M",
            Self::Pacific => "P",
        }
    }
}
