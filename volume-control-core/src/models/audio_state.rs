use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::AudioControllerError;

/// Snapshot of the default output device: master volume and mute flag.
///
/// Serializable for JSON export. The dictionary form uses the keys
/// `"volume"` and `"muted"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AudioState {
    pub volume: f64,
    pub muted: bool,
}

impl AudioState {
    pub fn new(volume: f64, muted: bool) -> Self {
        Self { volume, muted }
    }

    /// The state as a JSON object: `{"volume": <number>, "muted": <bool>}`.
    ///
    /// A non-finite volume has no JSON representation and is written as `null`.
    pub fn to_dictionary(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("volume".into(), Value::from(self.volume));
        map.insert("muted".into(), Value::Bool(self.muted));
        map
    }

    /// Build a state from a JSON object.
    ///
    /// Returns `None` unless `volume` is a number and `muted` is a boolean.
    /// Other keys are ignored.
    pub fn from_json(json: &Value) -> Option<Self> {
        let object = json.as_object()?;
        let volume = object.get("volume")?.as_f64()?;
        let muted = object.get("muted")?.as_bool()?;
        Some(Self { volume, muted })
    }

    /// Parse a state from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, AudioControllerError> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| AudioControllerError::InvalidState(e.to_string()))?;
        Self::from_json(&value).ok_or_else(|| {
            AudioControllerError::InvalidState(
                "expected an object with numeric \"volume\" and boolean \"muted\"".into(),
            )
        })
    }
}

impl From<AudioState> for Value {
    fn from(state: AudioState) -> Self {
        Value::Object(state.to_dictionary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dictionary_has_both_keys() {
        let dict = AudioState::new(0.25, true).to_dictionary();

        assert_eq!(dict.len(), 2);
        assert_eq!(dict["volume"], json!(0.25));
        assert_eq!(dict["muted"], json!(true));
    }

    #[test]
    fn from_json_reads_object() {
        let state = AudioState::from_json(&json!({ "volume": 0.5, "muted": false }));
        assert_eq!(state, Some(AudioState::new(0.5, false)));
    }

    #[test]
    fn from_json_accepts_integer_volume_and_extra_keys() {
        let state = AudioState::from_json(&json!({ "volume": 1, "muted": true, "device": "x" }));
        assert_eq!(state, Some(AudioState::new(1.0, true)));
    }

    #[test]
    fn from_json_rejects_wrong_types() {
        assert_eq!(AudioState::from_json(&json!({ "volume": "0.5", "muted": false })), None);
        assert_eq!(AudioState::from_json(&json!({ "volume": 0.5, "muted": 0 })), None);
        assert_eq!(AudioState::from_json(&json!({ "volume": 0.5 })), None);
        assert_eq!(AudioState::from_json(&json!([0.5, false])), None);
    }

    #[test]
    fn from_json_str_reports_invalid_input() {
        assert!(matches!(
            AudioState::from_json_str("{not json"),
            Err(AudioControllerError::InvalidState(_))
        ));
        assert!(matches!(
            AudioState::from_json_str(r#"{"volume": true, "muted": true}"#),
            Err(AudioControllerError::InvalidState(_))
        ));
        assert_eq!(
            AudioState::from_json_str(r#"{"volume": 0.75, "muted": true}"#),
            Ok(AudioState::new(0.75, true))
        );
    }

    #[test]
    fn serde_uses_dictionary_field_names() {
        let text = serde_json::to_string(&AudioState::new(0.5, true)).unwrap();
        assert_eq!(text, r#"{"volume":0.5,"muted":true}"#);
    }
}
