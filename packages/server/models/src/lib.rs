#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the rate map server.
//!
//! These types are serialized to JSON for the REST API. They are separate
//! from the dataset record types to allow independent evolution of the API
//! contract.

use rate_map_dashboard_models::ViewSnapshot;
use rate_map_rates_models::{NationalAverageRecord, RateBand, Region};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the server is healthy.
    pub healthy: bool,
    /// Server version.
    pub version: String,
}

/// One rate band with its display styling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiBand {
    /// The band.
    pub band: RateBand,
    /// Range label (e.g. `"10-15"`).
    pub label: String,
    /// Fill color.
    pub color: String,
    /// Exclusive upper bound, absent for the top band.
    pub upper_bound: Option<f64>,
}

impl From<RateBand> for ApiBand {
    fn from(band: RateBand) -> Self {
        Self {
            band,
            label: band.to_string(),
            color: band.color().to_string(),
            upper_bound: band.upper_bound(),
        }
    }
}

/// A state known to the dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiState {
    /// Full state name.
    pub name: String,
    /// Postal abbreviation.
    pub abbreviation: String,
    /// Census region.
    pub region: Region,
    /// Short region code as written in the dataset (e.g. `"WSC"`).
    pub region_code: String,
}

/// National average series.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiNational {
    /// First year of the series.
    pub first_year: u16,
    /// Last year of the series.
    pub last_year: u16,
    /// One entry per year, ascending.
    pub series: Vec<NationalAverageRecord>,
}

/// Response to `POST /api/sessions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSession {
    /// Identifier for subsequent session requests.
    pub session_id: Uuid,
    /// Initial view.
    pub view: ViewSnapshot,
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Human-readable message.
    pub error: String,
}

impl ApiError {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
