//! Frame configuration - the control panel's values as one immutable object
//!
//! JS rebuilds a `FrameConfig` whenever a control changes and hands it to
//! every `process_frame` call. Detector options are forwarded to the pose
//! library untouched; only the analysis fields are read here.

use serde::{Deserialize, Serialize};
use crate::error::PoseError;
use crate::geometry::{AngleConvention, ReorientMode, SidePolicy};

/// Pose model size (the detector's `modelComplexity` 0/1/2)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ModelComplexity {
    Lite,
    #[default]
    Full,
    Heavy,
}

impl TryFrom<u8> for ModelComplexity {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ModelComplexity::Lite),
            1 => Ok(ModelComplexity::Full),
            2 => Ok(ModelComplexity::Heavy),
            other => Err(format!("model complexity {} not in 0..=2", other)),
        }
    }
}

impl From<ModelComplexity> for u8 {
    fn from(value: ModelComplexity) -> Self {
        match value {
            ModelComplexity::Lite => 0,
            ModelComplexity::Full => 1,
            ModelComplexity::Heavy => 2,
        }
    }
}

/// Segmentation overlay effect
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effect {
    /// Tint everything except the subject
    #[default]
    Background,
    /// Tint the subject
    Mask,
    Both,
}

/// Options forwarded verbatim to the pose detector
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectorOptions {
    pub selfie_mode: bool,
    pub model_complexity: ModelComplexity,
    pub smooth_landmarks: bool,
    pub enable_segmentation: bool,
    pub smooth_segmentation: bool,
    pub min_detection_confidence: f32,
    pub min_tracking_confidence: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FrameConfig {
    // Detector pass-through
    pub selfie_mode: bool,
    pub model_complexity: ModelComplexity,
    pub smooth_landmarks: bool,
    pub enable_segmentation: bool,
    pub smooth_segmentation: bool,
    pub min_detection_confidence: f32,
    pub min_tracking_confidence: f32,

    // Overlay
    pub effect: Effect,

    // Analysis
    pub side_policy: SidePolicy,
    pub angle_convention: AngleConvention,
    pub reorient: ReorientMode,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            selfie_mode: true,
            model_complexity: ModelComplexity::Full,
            smooth_landmarks: true,
            enable_segmentation: false,
            smooth_segmentation: true,
            min_detection_confidence: 0.5,
            min_tracking_confidence: 0.5,
            effect: Effect::Background,
            side_policy: SidePolicy::HipDepth,
            angle_convention: AngleConvention::Wrapped,
            reorient: ReorientMode::Yaw,
        }
    }
}

impl FrameConfig {
    /// Parse the control panel's options object (as JSON). Missing fields
    /// take their defaults; unknown fields are ignored.
    pub fn from_json(json: &str) -> Result<Self, PoseError> {
        let config: FrameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), PoseError> {
        for (name, value) in [
            ("minDetectionConfidence", self.min_detection_confidence),
            ("minTrackingConfidence", self.min_tracking_confidence),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(PoseError::InvalidConfig(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    pub fn detector_options(&self) -> DetectorOptions {
        DetectorOptions {
            selfie_mode: self.selfie_mode,
            model_complexity: self.model_complexity,
            smooth_landmarks: self.smooth_landmarks,
            enable_segmentation: self.enable_segmentation,
            smooth_segmentation: self.smooth_segmentation,
            min_detection_confidence: self.min_detection_confidence,
            min_tracking_confidence: self.min_tracking_confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_panel_options_parse() {
        let json = r#"{
            "selfieMode": false,
            "modelComplexity": 2,
            "smoothLandmarks": true,
            "enableSegmentation": true,
            "smoothSegmentation": true,
            "minDetectionConfidence": 0.7,
            "minTrackingConfidence": 0.4,
            "effect": "mask"
        }"#;
        let config = FrameConfig::from_json(json).unwrap();
        assert!(!config.selfie_mode);
        assert_eq!(config.model_complexity, ModelComplexity::Heavy);
        assert_eq!(config.effect, Effect::Mask);
        // Analysis fields fall back to defaults
        assert_eq!(config.side_policy, SidePolicy::HipDepth);
        assert_eq!(config.reorient, ReorientMode::Yaw);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(FrameConfig::from_json("{}").unwrap(), FrameConfig::default());
    }

    #[test]
    fn test_analysis_fields_parse() {
        let json = r#"{"sidePolicy": "visibility", "angleConvention": "raw", "reorient": "yawPitch"}"#;
        let config = FrameConfig::from_json(json).unwrap();
        assert_eq!(config.side_policy, SidePolicy::Visibility);
        assert_eq!(config.angle_convention, AngleConvention::Raw);
        assert_eq!(config.reorient, ReorientMode::YawPitch);
    }

    #[test]
    fn test_bad_model_complexity() {
        let err = FrameConfig::from_json(r#"{"modelComplexity": 3}"#).unwrap_err();
        assert!(matches!(err, PoseError::InvalidConfig(_)));
    }

    #[test]
    fn test_confidence_out_of_range() {
        let err = FrameConfig::from_json(r#"{"minTrackingConfidence": 1.5}"#).unwrap_err();
        assert!(matches!(err, PoseError::InvalidConfig(_)));
    }

    #[test]
    fn test_detector_options_are_pass_through() {
        let config = FrameConfig { effect: Effect::Both, ..FrameConfig::default() };
        let json = serde_json::to_value(config.detector_options()).unwrap();
        assert_eq!(json["modelComplexity"], 1);
        assert_eq!(json["selfieMode"], true);
        assert!(json.get("effect").is_none());
    }
}
