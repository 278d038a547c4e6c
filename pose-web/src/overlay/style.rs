//! Colors, thresholds and segmentation styling

use serde::Serialize;
use crate::config::Effect;
use crate::landmarks::{POSE_LANDMARKS_LEFT, POSE_LANDMARKS_RIGHT};

/// Landmarks and connectors below this visibility are not drawn
pub const VISIBILITY_MIN: f32 = 0.65;

/// CSS colors for the 2D overlay, hex colors for the 3D grid
pub mod colors {
    pub const CONNECTOR: &str = "white";
    pub const OUTLINE: &str = "white";
    /// Subject's left side
    pub const LEFT_FILL: &str = "rgb(255,138,0)";
    /// Subject's right side
    pub const RIGHT_FILL: &str = "rgb(0,217,231)";
    pub const NEUTRAL_FILL: &str = "white";

    pub const MASK_FOREGROUND: &str = "#00FF007F";
    pub const MASK_BACKGROUND: &str = "#0000FF7F";

    pub const GRID_LEFT: u32 = 0xffa500;
    pub const GRID_RIGHT: u32 = 0x00ffff;
    pub const GRID_CONNECTION: u32 = 0xcccccc;
}

/// How to tint the segmentation mask: a canvas composite operation and fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaskStyle {
    pub composite: &'static str,
    pub fill: &'static str,
}

impl MaskStyle {
    pub fn for_effect(effect: Effect) -> Self {
        match effect {
            // Only overwrite existing (subject) pixels
            Effect::Mask | Effect::Both => Self {
                composite: "source-in",
                fill: colors::MASK_FOREGROUND,
            },
            Effect::Background => Self {
                composite: "source-out",
                fill: colors::MASK_BACKGROUND,
            },
        }
    }
}

/// Named index set for the 3D landmark grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridGroup {
    pub name: &'static str,
    pub color: u32,
    pub list: &'static [usize],
}

pub fn grid_groups() -> [GridGroup; 2] {
    [
        GridGroup { name: "LEFT", color: colors::GRID_LEFT, list: &POSE_LANDMARKS_LEFT },
        GridGroup { name: "RIGHT", color: colors::GRID_RIGHT, list: &POSE_LANDMARKS_RIGHT },
    ]
}

/// Everything the 3D grid needs besides the landmarks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridStyle {
    pub connection_color: u32,
    pub groups: [GridGroup; 2],
}

pub fn grid_style() -> GridStyle {
    GridStyle {
        connection_color: colors::GRID_CONNECTION,
        groups: grid_groups(),
    }
}
