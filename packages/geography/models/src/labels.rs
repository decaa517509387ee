//! Map label placement for state abbreviations.
//!
//! Most states draw their abbreviation at a fixed geographic centroid.
//! Small or densely packed eastern states instead draw it out over the
//! Atlantic, connected to the true location by a leader line.

use serde::{Deserialize, Serialize};

use crate::GeoPoint;

/// Where a state's abbreviation label is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LabelPosition {
    /// Label drawn directly on the state.
    Centroid {
        /// Label anchor.
        at: GeoPoint,
    },
    /// Label drawn at an offset with a leader line back to `origin`.
    LeaderLine {
        /// True location of the state.
        origin: GeoPoint,
        /// Where the label text sits.
        label: GeoPoint,
    },
}

impl LabelPosition {
    /// Whether the label is drawn away from the state.
    #[must_use]
    pub const fn is_offset(&self) -> bool {
        matches!(self, Self::LeaderLine { .. })
    }
}

/// States whose labels are offset, as `(state, origin, label)`.
pub const OFFSET_LABELS: &[(&str, GeoPoint, GeoPoint)] = &[
    (
        "Connecticut",
        GeoPoint::new(-72.7, 41.6),
        GeoPoint::new(-64.0, 40.2),
    ),
    (
        "Delaware",
        GeoPoint::new(-75.5, 39.0),
        GeoPoint::new(-64.0, 37.2),
    ),
    (
        "District of Columbia",
        GeoPoint::new(-77.0, 38.9),
        GeoPoint::new(-70.0, 35.5),
    ),
    (
        "Maryland",
        GeoPoint::new(-76.6, 39.3),
        GeoPoint::new(-64.0, 36.0),
    ),
    (
        "Massachusetts",
        GeoPoint::new(-71.8, 42.2),
        GeoPoint::new(-64.0, 42.6),
    ),
    (
        "New Hampshire",
        GeoPoint::new(-71.5, 43.7),
        GeoPoint::new(-64.0, 45.0),
    ),
    (
        "New Jersey",
        GeoPoint::new(-74.4, 40.1),
        GeoPoint::new(-64.0, 38.4),
    ),
    (
        "Rhode Island",
        GeoPoint::new(-71.5, 41.7),
        GeoPoint::new(-64.0, 41.4),
    ),
    (
        "Vermont",
        GeoPoint::new(-72.6, 44.0),
        GeoPoint::new(-64.0, 46.4),
    ),
];

/// Returns the label placement for a state, `None` if the state has no
/// known coordinates.
#[must_use]
pub fn label_position(state: &str) -> Option<LabelPosition> {
    if let Some((_, origin, label)) = OFFSET_LABELS.iter().find(|(name, ..)| *name == state) {
        return Some(LabelPosition::LeaderLine {
            origin: *origin,
            label: *label,
        });
    }

    centroid(state).map(|at| LabelPosition::Centroid { at })
}

/// Geographic label centroid for states drawn in place.
fn centroid(state: &str) -> Option<GeoPoint> {
    let (lon, lat) = match state {
        "Alabama" => (-86.8, 32.8),
        "Alaska" => (-153.5, 64.2),
        "Arizona" => (-111.7, 34.3),
        "Arkansas" => (-92.4, 34.9),
        "California" => (-119.5, 37.2),
        "Colorado" => (-105.5, 39.0),
        "Florida" => (-81.7, 28.1),
        "Georgia" => (-83.4, 32.6),
        "Hawaii" => (-155.2, 20.5),
        "Idaho" => (-114.5, 44.4),
        "Illinois" => (-89.2, 40.0),
        "Indiana" => (-86.3, 39.9),
        "Iowa" => (-93.5, 42.0),
        "Kansas" => (-98.4, 38.5),
        "Kentucky" => (-85.3, 37.8),
        "Louisiana" => (-91.9, 31.0),
        "Maine" => (-69.2, 45.4),
        "Michigan" => (-85.4, 44.3),
        "Minnesota" => (-94.3, 46.3),
        "Mississippi" => (-89.7, 32.7),
        "Missouri" => (-92.5, 38.3),
        "Montana" => (-109.6, 47.0),
        "Nebraska" => (-99.8, 41.5),
        "Nevada" => (-117.0, 39.5),
        "New Mexico" => (-106.0, 34.4),
        "New York" => (-75.5, 43.0),
        "North Carolina" => (-79.4, 35.5),
        "North Dakota" => (-100.5, 47.4),
        "Ohio" => (-82.8, 40.3),
        "Oklahoma" => (-97.5, 35.5),
        "Oregon" => (-120.5, 44.0),
        "Pennsylvania" => (-77.6, 40.9),
        "South Carolina" => (-80.9, 33.9),
        "South Dakota" => (-100.2, 44.4),
        "Tennessee" => (-86.3, 35.8),
        "Texas" => (-99.3, 31.5),
        "Utah" => (-111.7, 39.3),
        "Virginia" => (-78.8, 37.5),
        "Washington" => (-120.5, 47.4),
        "West Virginia" => (-80.6, 38.9),
        "Wisconsin" => (-89.8, 44.6),
        "Wyoming" => (-107.5, 43.0),
        _ => return None,
    };
    Some(GeoPoint::new(lon, lat))
}
