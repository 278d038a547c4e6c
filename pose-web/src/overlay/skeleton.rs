//! Skeleton draw plan - connectors and colored landmark dots

use serde::Serialize;
use crate::config::FrameConfig;
use crate::landmarks::{
    Landmark, POSE_CONNECTIONS, POSE_LANDMARKS_LEFT, POSE_LANDMARKS_RIGHT, POSE_LANDMARKS_NEUTRAL,
};
use super::style::{colors, MaskStyle, VISIBILITY_MIN};

/// Landmark dots drawn with one fill and outline
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LandmarkGroup {
    pub points: Vec<[f32; 2]>,
    pub fill: &'static str,
    pub outline: &'static str,
}

impl LandmarkGroup {
    fn visible(landmarks: &[Landmark], indices: &[usize], fill: &'static str) -> Self {
        let points = indices
            .iter()
            .filter_map(|&i| landmarks.get(i))
            .filter(|lm| lm.is_visible(VISIBILITY_MIN))
            .map(|lm| [lm.x, lm.y])
            .collect();
        Self { points, fill, outline: colors::OUTLINE }
    }
}

/// Everything the canvas needs for one frame, in normalized coordinates
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayPlan {
    /// `[x1, y1, x2, y2]` per drawn connection
    pub connectors: Vec<[f32; 4]>,
    pub connector_color: &'static str,
    pub left: LandmarkGroup,
    pub right: LandmarkGroup,
    pub neutral: LandmarkGroup,
    /// Only present when segmentation is enabled
    pub mask: Option<MaskStyle>,
}

impl OverlayPlan {
    pub fn build(landmarks: &[Landmark], config: &FrameConfig) -> Self {
        let connectors = POSE_CONNECTIONS
            .iter()
            .filter_map(|&(a, b)| Some((landmarks.get(a)?, landmarks.get(b)?)))
            .filter(|(a, b)| a.is_visible(VISIBILITY_MIN) && b.is_visible(VISIBILITY_MIN))
            .map(|(a, b)| [a.x, a.y, b.x, b.y])
            .collect();

        Self {
            connectors,
            connector_color: colors::CONNECTOR,
            left: LandmarkGroup::visible(landmarks, &POSE_LANDMARKS_LEFT, colors::LEFT_FILL),
            right: LandmarkGroup::visible(landmarks, &POSE_LANDMARKS_RIGHT, colors::RIGHT_FILL),
            neutral: LandmarkGroup::visible(landmarks, &POSE_LANDMARKS_NEUTRAL, colors::NEUTRAL_FILL),
            mask: config.enable_segmentation.then(|| MaskStyle::for_effect(config.effect)),
        }
    }

    /// Connectors flattened for a Float32Array
    pub fn connectors_flat(&self) -> Vec<f32> {
        self.connectors.iter().flatten().copied().collect()
    }
}
