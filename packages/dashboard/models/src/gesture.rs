//! User gestures routed from the renderer into the session.

use rate_map_rates_models::RateBand;
use serde::{Deserialize, Serialize};

/// One shape in which a map click can surface the clicked state.
///
/// A single click may carry several shapes at once; resolution tries
/// them in a fixed priority order (identifier, label, location).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum ClickPayload {
    /// A direct state-name identifier attached to the clicked shape.
    Identifier(String),
    /// Hover label text of the form `"<state><br>..."`.
    Label(String),
    /// A two-letter location code (postal abbreviation).
    Location(String),
}

/// A user action that may mutate the interaction state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Gesture {
    /// Move the year slider.
    #[serde(rename_all = "camelCase")]
    SelectYear {
        /// Requested year; clamped into the dataset range.
        year: u16,
    },
    /// Click a legend entry.
    #[serde(rename_all = "camelCase")]
    ToggleBand {
        /// Band whose visibility flips.
        band: RateBand,
    },
    /// Click somewhere on the map.
    #[serde(rename_all = "camelCase")]
    MapClick {
        /// Every payload shape the click surfaced. Empty for a click on
        /// empty space.
        #[serde(default)]
        payloads: Vec<ClickPayload>,
    },
    /// Pick a state by name (e.g. from a dropdown).
    #[serde(rename_all = "camelCase")]
    SelectState {
        /// Full state name.
        state: String,
    },
    /// Drop the current selection.
    ClearSelection,
    /// Start the animation.
    Play,
    /// Stop the animation.
    Pause,
    /// Press the play/pause button.
    TogglePlay,
    /// Move the speed slider.
    #[serde(rename_all = "camelCase")]
    SetSpeed {
        /// Milliseconds per step; clamped into the allowed range.
        speed_ms: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_tagged_gestures() {
        let gesture: Gesture =
            serde_json::from_str(r#"{"type":"toggleBand","band":"25-30"}"#).unwrap();
        assert_eq!(
            gesture,
            Gesture::ToggleBand {
                band: RateBand::TwentyFiveToThirty
            }
        );

        let gesture: Gesture = serde_json::from_str(r#"{"type":"setSpeed","speedMs":300}"#).unwrap();
        assert_eq!(gesture, Gesture::SetSpeed { speed_ms: 300 });

        let gesture: Gesture = serde_json::from_str(r#"{"type":"togglePlay"}"#).unwrap();
        assert_eq!(gesture, Gesture::TogglePlay);
    }

    #[test]
    fn deserializes_map_click_payloads() {
        let gesture: Gesture = serde_json::from_str(
            r#"{"type":"mapClick","payloads":[{"kind":"label","value":"Texas<br>Rate: 14.8"},{"kind":"location","value":"TX"}]}"#,
        )
        .unwrap();
        assert_eq!(
            gesture,
            Gesture::MapClick {
                payloads: vec![
                    ClickPayload::Label("Texas<br>Rate: 14.8".to_string()),
                    ClickPayload::Location("TX".to_string()),
                ]
            }
        );
    }

    #[test]
    fn map_click_without_payloads_is_empty() {
        let gesture: Gesture = serde_json::from_str(r#"{"type":"mapClick"}"#).unwrap();
        assert_eq!(gesture, Gesture::MapClick { payloads: vec![] });
    }
}
