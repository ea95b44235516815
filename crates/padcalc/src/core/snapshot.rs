//! Flat state records for save/restore across presentation teardown.
//!
//! The presentation layer serializes the engine's four fields as an opaque
//! record, persists it across a teardown/recreate cycle, and hands it back
//! verbatim; [`crate::core::Engine::from_snapshot`] reproduces identical
//! subsequent behavior.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Operation;

/// Errors surfaced when decoding a persisted snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The persisted record did not decode as a snapshot
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A flat export of the engine's state: string, float, optional operator
/// tag, boolean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// Current display text
    pub display: String,
    /// Left operand of the pending binary operation
    pub stored_value: f64,
    /// The pending binary operator, if any
    pub pending_op: Option<Operation>,
    /// Whether the next digit starts a new entry
    pub fresh: bool,
}

impl Default for EngineSnapshot {
    /// The engine's initial state.
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            stored_value: 0.0,
            pending_op: None,
            fresh: true,
        }
    }
}

impl EngineSnapshot {
    /// Serializes the snapshot to JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserializes a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Engine;

    // ===== Record shape tests =====

    #[test]
    fn test_default_is_initial_engine_state() {
        assert_eq!(EngineSnapshot::default(), Engine::new().snapshot());
    }

    #[test]
    fn test_serialize_flat_record() {
        let snapshot = EngineSnapshot {
            display: "3.5".to_string(),
            stored_value: 7.0,
            pending_op: Some(Operation::Divide),
            fresh: false,
        };
        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"display\":\"3.5\""));
        assert!(json.contains("\"stored_value\":7.0"));
        assert!(json.contains("\"pending_op\":\"Divide\""));
        assert!(json.contains("\"fresh\":false"));
    }

    #[test]
    fn test_serialize_no_pending_op_as_null() {
        let json = EngineSnapshot::default().to_json().unwrap();
        assert!(json.contains("\"pending_op\":null"));
    }

    #[test]
    fn test_json_round_trip() {
        let snapshot = EngineSnapshot {
            display: "Error".to_string(),
            stored_value: 5.0,
            pending_op: Some(Operation::Divide),
            fresh: false,
        };
        let restored = EngineSnapshot::from_json(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(restored, snapshot);
    }

    #[test]
    fn test_from_json_malformed() {
        let result = EngineSnapshot::from_json("not json");
        assert!(matches!(result, Err(SnapshotError::Malformed(_))));
    }

    #[test]
    fn test_from_json_unknown_operator_tag() {
        let json = r#"{"display":"0","stored_value":0.0,"pending_op":"Exp","fresh":true}"#;
        assert!(EngineSnapshot::from_json(json).is_err());
    }

    #[test]
    fn test_snapshot_error_display() {
        let err = EngineSnapshot::from_json("{").unwrap_err();
        assert!(err.to_string().starts_with("malformed snapshot"));
    }

    // ===== Behavioral round trip =====

    #[test]
    fn test_restored_engine_resolves_pending_operation() {
        let snapshot = EngineSnapshot {
            display: "4".to_string(),
            stored_value: 12.0,
            pending_op: Some(Operation::Divide),
            fresh: false,
        };
        let mut engine = Engine::from_snapshot(snapshot);
        engine.press_equals();
        assert_eq!(engine.display(), "3.000000");
    }
}
