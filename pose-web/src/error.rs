//! Errors reported back to the JS caller

use wasm_bindgen::prelude::*;

/// Everything that can go wrong while analysing one frame
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PoseError {
    #[error("Landmark count mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Malformed landmark input: {0}")]
    MalformedInput(String),

    #[error("Landmark {0} missing from list")]
    MissingLandmark(usize),

    #[error("Invalid frame config: {0}")]
    InvalidConfig(String),

    #[error("Frame already being processed")]
    Reentrant,
}

impl From<PoseError> for JsValue {
    fn from(err: PoseError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<serde_json::Error> for PoseError {
    fn from(err: serde_json::Error) -> Self {
        PoseError::InvalidConfig(err.to_string())
    }
}
