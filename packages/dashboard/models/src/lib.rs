#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Gesture and view-model types exchanged with the dashboard renderer.
//!
//! These types are serialized to JSON for the session API. The renderer
//! turns each [`DashboardView`] into pixels and sends [`Gesture`]s back;
//! it never sees the interaction state directly.

pub mod gesture;

use rate_map_geography_models::labels::LabelPosition;
use rate_map_rates_models::{RateBand, Region};
use serde::{Deserialize, Serialize};

pub use gesture::{ClickPayload, Gesture};

/// A published view together with the state revision it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSnapshot {
    /// Monotonically increasing per session; bumps on every state change.
    pub revision: u64,
    /// The derived view.
    pub view: DashboardView,
}

/// Every derived view for one interaction-state snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    /// Year slider, play button, and speed slider.
    pub controls: ControlsView,
    /// Band toggles in fixed display order.
    pub legend: Vec<LegendItem>,
    /// Choropleth map.
    pub map: MapView,
    /// State detail panel.
    pub detail: DetailView,
    /// Rank of the selected state in the selected year.
    pub rank: Option<RankLine>,
    /// Rank display text; empty when nothing is selected.
    pub rank_text: String,
    /// Trend chart for the selected state.
    pub trend: TrendView,
    /// Regional comparison bar chart.
    pub regional: RegionalView,
}

/// State of the input controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlsView {
    /// Year slider.
    pub year: YearSlider,
    /// Whether the animation is running.
    pub playing: bool,
    /// Play button caption.
    pub play_label: String,
    /// Speed slider.
    pub speed: SpeedSlider,
}

/// Year slider bounds and position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearSlider {
    /// First selectable year.
    pub min: u16,
    /// Last selectable year.
    pub max: u16,
    /// Selected year.
    pub value: u16,
    /// Years that get a tick label.
    pub marks: Vec<u16>,
}

/// Speed slider bounds and position, in milliseconds per step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeedSlider {
    /// Fastest setting.
    pub min: u32,
    /// Slowest setting.
    pub max: u32,
    /// Slider step.
    pub step: u32,
    /// Current setting.
    pub value: u32,
    /// Labeled positions.
    pub marks: Vec<SpeedMark>,
}

/// A labeled position on the speed slider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeedMark {
    /// Milliseconds per step.
    pub value: u32,
    /// Caption.
    pub label: String,
}

/// Styling for one legend toggle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendItem {
    /// The band this entry toggles.
    pub band: RateBand,
    /// Caption (the band's range label).
    pub label: String,
    /// Whether the band is currently shown.
    pub active: bool,
    /// Background color.
    pub background_color: String,
    /// Text color.
    pub text_color: String,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

/// The choropleth map for the selected year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapView {
    /// Map heading.
    pub title: String,
    /// Year the map shows.
    pub year: u16,
    /// One entry per state with data that year.
    pub states: Vec<StateDescriptor>,
}

/// Render descriptor for one state on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateDescriptor {
    /// Full state name.
    pub state: String,
    /// Postal abbreviation.
    pub abbreviation: String,
    /// Rate for the map's year.
    pub rate: f64,
    /// Band of `rate`.
    pub band: RateBand,
    /// Region of the state.
    pub region: Region,
    /// Fill color: band color when active, neutral when filtered out.
    pub fill_color: String,
    /// Whether the state's band is inactive.
    pub is_filtered: bool,
    /// Whether this is the selected state.
    pub is_selected: bool,
    /// Border styling; the selected state gets a distinct outline.
    pub outline: Outline,
    /// Where the abbreviation label is drawn, if the state has
    /// coordinates.
    pub label_position: Option<LabelPosition>,
    /// Color of the abbreviation label text.
    pub label_color: String,
    /// Hover text (state, exact rate, region).
    pub hover_text: String,
}

/// Border styling for a map shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outline {
    /// Stroke color.
    pub color: String,
    /// Stroke width in pixels.
    pub width: f64,
}

/// The state detail panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DetailView {
    /// Nothing selected.
    Placeholder {
        /// Prompt text.
        message: String,
    },
    /// Summary statistics over the selected state's full series.
    Stats(StateStats),
}

/// Descriptive statistics for one state's series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateStats {
    /// Full state name.
    pub state: String,
    /// Lowest rate and the first year it occurred.
    pub min: YearValue,
    /// Highest rate and the first year it occurred.
    pub max: YearValue,
    /// Mean rate over the series.
    pub mean: f64,
    /// Largest year-over-year change, `None` for a single-year series.
    pub largest_increase: Option<YearDelta>,
    /// Smallest (most negative) year-over-year change.
    pub largest_decrease: Option<YearDelta>,
    /// Formatted display lines.
    pub lines: Vec<StatLine>,
}

/// A rate observed in a specific year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearValue {
    /// Year.
    pub year: u16,
    /// Rate.
    pub rate: f64,
}

/// Change between two consecutive years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearDelta {
    /// Earlier year.
    pub from_year: u16,
    /// Later year.
    pub to_year: u16,
    /// `rate[to_year] - rate[from_year]`.
    pub change: f64,
}

/// One labeled line in the detail panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatLine {
    /// Caption.
    pub label: String,
    /// Formatted value.
    pub text: String,
}

/// Rank of the selected state among all states in one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankLine {
    /// Year ranked.
    pub year: u16,
    /// 1 + number of states with a strictly higher rate.
    pub rank: u32,
    /// Number of states with data that year.
    pub total: u32,
    /// Display text.
    pub text: String,
}

/// The trend chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TrendView {
    /// Nothing selected.
    Placeholder {
        /// Prompt text.
        message: String,
    },
    /// National and state series over the full year range.
    Chart(TrendChart),
}

/// Two aligned series over the full year range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendChart {
    /// National average series.
    pub national: Series,
    /// Selected state's series.
    pub state: Series,
    /// Fixed y-axis floor.
    pub y_min: f64,
    /// Fixed y-axis ceiling.
    pub y_max: f64,
}

/// A named series of per-year values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    /// Legend name.
    pub name: String,
    /// Points ascending by year.
    pub points: Vec<YearValue>,
}

/// The regional comparison chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RegionalView {
    /// Nothing selected.
    Placeholder {
        /// Prompt text.
        message: String,
    },
    /// The selected state has no record for the selected year.
    Empty,
    /// Bars for every state of the selected state's region.
    Chart(RegionalChart),
}

/// Bars for one region in one year, ascending by rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalChart {
    /// Region compared.
    pub region: Region,
    /// Year compared.
    pub year: u16,
    /// Chart heading.
    pub title: String,
    /// Bars ascending by rate.
    pub bars: Vec<RegionalBar>,
    /// Upper bound of the rate axis.
    pub x_max: f64,
}

/// One bar of the regional chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalBar {
    /// Full state name.
    pub state: String,
    /// Rate in the chart's year.
    pub rate: f64,
    /// Bar color.
    pub color: String,
    /// Whether this is the selected state.
    pub is_selected: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_views_serialize_with_kind_tag() {
        let detail = DetailView::Placeholder {
            message: "Click a state".to_string(),
        };
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["kind"], "placeholder");
        assert_eq!(json["message"], "Click a state");

        let json = serde_json::to_value(RegionalView::Empty).unwrap();
        assert_eq!(json["kind"], "empty");
    }

    #[test]
    fn chart_views_flatten_into_tagged_object() {
        let view = TrendView::Chart(TrendChart {
            national: Series {
                name: "US Average".to_string(),
                points: vec![YearValue {
                    year: 2000,
                    rate: 10.4,
                }],
            },
            state: Series {
                name: "Texas".to_string(),
                points: vec![],
            },
            y_min: 0.0,
            y_max: 35.0,
        });
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["kind"], "chart");
        assert_eq!(json["national"]["points"][0]["year"], 2000);
        assert_eq!(json["yMax"], 35.0);
    }
}
