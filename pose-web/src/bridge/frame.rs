//! Per-frame analysis - side selection, joint angles, filtering, re-orientation
//!
//! Runs once per detector result, to completion, on data owned by the call.

use serde::Serialize;
use crate::config::FrameConfig;
use crate::error::PoseError;
use crate::geometry::{
    angle3d, filter_landmarks, reorient_to_side, to_vector, torso_inclination,
    world_torso_inclination, AnglePolicy, BodyAngles, Side, SidePolicy,
};
use crate::landmarks::{
    Landmark, landmark_at, POSE_LANDMARKS_NEUTRAL,
    LEFT_HIP, RIGHT_HIP, LEFT_SHOULDER, RIGHT_SHOULDER,
    LEFT_ELBOW, RIGHT_ELBOW, LEFT_WRIST, RIGHT_WRIST,
};
use crate::overlay::OverlayPlan;

/// One detector result, as handed over by JS
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PoseFrame {
    /// Canvas size in pixels
    pub width: f32,
    pub height: f32,
    /// Image-normalized landmarks, `None` when nobody was detected
    pub landmarks: Option<Vec<Landmark>>,
    /// Metric camera-relative landmarks
    pub world_landmarks: Option<Vec<Landmark>>,
}

/// Analysis output for one frame
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameReport {
    pub near_side: Option<Side>,
    pub angles: Option<BodyAngles>,
    /// Trunk inclination above horizontal in frame pixels, degrees
    pub trunk_lean: Option<f32>,
    /// Trunk inclination from the world landmarks, depth included, degrees
    pub world_trunk_lean: Option<f32>,
    /// Unsigned elbow angle from the world landmarks, degrees
    pub spatial_elbow: Option<f32>,
    /// 2D landmarks with the far side hidden
    pub landmarks: Vec<Landmark>,
    /// World landmarks rotated for the 3D grid
    pub world_landmarks: Vec<Landmark>,
    pub overlay: OverlayPlan,
}

impl FrameReport {
    /// Report for a frame with no detected person
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn has_pose(&self) -> bool {
        self.angles.is_some()
    }
}

/// Landmark indices kept when drawing only `side`
fn keep_list(side: Side) -> Vec<usize> {
    side.indices().iter().chain(POSE_LANDMARKS_NEUTRAL.iter()).copied().collect()
}

fn hip_and_shoulder(side: Side) -> (usize, usize) {
    match side {
        Side::Left => (LEFT_HIP, LEFT_SHOULDER),
        Side::Right => (RIGHT_HIP, RIGHT_SHOULDER),
    }
}

/// Trunk lean on the world landmarks, on the side whose hip is nearer
/// the camera in world depth
fn measure_world_trunk_lean(world: &[Landmark]) -> Result<f32, PoseError> {
    let (hip, shoulder) = hip_and_shoulder(SidePolicy::HipDepth.near_side(world)?);
    Ok(world_torso_inclination(landmark_at(world, hip)?, landmark_at(world, shoulder)?))
}

/// Elbow flexion in 3D: 180° for a straight arm
fn measure_spatial_elbow(world: &[Landmark], side: Side) -> Result<f32, PoseError> {
    let (shoulder, elbow, wrist) = match side {
        Side::Left => (LEFT_SHOULDER, LEFT_ELBOW, LEFT_WRIST),
        Side::Right => (RIGHT_SHOULDER, RIGHT_ELBOW, RIGHT_WRIST),
    };
    let joint = to_vector(landmark_at(world, elbow)?);
    let upper = to_vector(landmark_at(world, shoulder)?) - joint;
    let fore = to_vector(landmark_at(world, wrist)?) - joint;
    Ok(angle3d(&upper, &fore))
}

pub fn analyze_frame(frame: &PoseFrame, config: &FrameConfig) -> Result<FrameReport, PoseError> {
    let landmarks = match frame.landmarks.as_deref() {
        Some(lms) if !lms.is_empty() => lms,
        _ => return Ok(FrameReport::empty()),
    };

    if !(frame.width > 0.0 && frame.height > 0.0) {
        return Err(PoseError::MalformedInput(format!(
            "frame size {}x{} must be positive",
            frame.width, frame.height
        )));
    }

    let side = config.side_policy.near_side(landmarks)?;
    let policy = AnglePolicy::new(frame.width, frame.height, config.angle_convention);
    let angles = BodyAngles::measure(landmarks, side, &policy)?;

    let (hip, shoulder) = hip_and_shoulder(side);
    let trunk_lean = torso_inclination(
        landmark_at(landmarks, hip)?,
        landmark_at(landmarks, shoulder)?,
        frame.width,
        frame.height,
    );

    let filtered = filter_landmarks(&keep_list(side), landmarks);

    let (world_landmarks, spatial_elbow, world_trunk_lean) = match frame.world_landmarks.as_deref() {
        Some(world) if !world.is_empty() => (
            reorient_to_side(world, side, config.reorient)?,
            Some(measure_spatial_elbow(world, side)?),
            Some(measure_world_trunk_lean(world)?),
        ),
        _ => (Vec::new(), None, None),
    };

    let overlay = OverlayPlan::build(&filtered, config);

    Ok(FrameReport {
        near_side: Some(side),
        angles: Some(angles),
        trunk_lean: Some(trunk_lean),
        world_trunk_lean,
        spatial_elbow,
        landmarks: filtered,
        world_landmarks,
        overlay,
    })
}
