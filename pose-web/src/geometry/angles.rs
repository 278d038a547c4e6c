//! Angle calculation between landmark vectors
//!
//! The planar angle is the difference of the two direction angles
//! (arctangent of y over x) after scaling normalized coordinates back to
//! frame pixels, so a non-square frame does not skew the result.
//!
//! Sign convention: with a 1×1 frame, `angle2d((1,0), (0,1)) == -90°`.

use nalgebra::{Vector2, Vector3};
use serde::{Deserialize, Serialize};
use crate::landmarks::Landmark;

/// Range convention for planar angles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AngleConvention {
    /// Plain difference of direction angles, anywhere in (-360, 360)
    Raw,
    /// Normalized to (-180, 180]
    #[default]
    Wrapped,
}

impl AngleConvention {
    pub fn apply(self, degrees: f32) -> f32 {
        match self {
            AngleConvention::Raw => degrees,
            AngleConvention::Wrapped => wrap_degrees(degrees),
        }
    }
}

/// Wrap any angle into (-180, 180]
pub fn wrap_degrees(degrees: f32) -> f32 {
    let r = degrees.rem_euclid(360.0);
    if r > 180.0 { r - 360.0 } else { r }
}

/// Signed planar angle from `b` to `a` in degrees, unwrapped.
/// Zero vectors have direction 0, so two zero vectors give 0.
pub fn angle2d(a: Vector2<f32>, b: Vector2<f32>, width: f32, height: f32) -> f32 {
    let angle_a = (a.y * height).atan2(a.x * width);
    let angle_b = (b.y * height).atan2(b.x * width);
    (angle_a - angle_b).to_degrees()
}

/// Unsigned angle between two 3D vectors (dot product), in degrees.
/// Returns 0 when either vector has no length.
pub fn angle3d(a: &Vector3<f32>, b: &Vector3<f32>) -> f32 {
    let norm_a = a.norm();
    let norm_b = b.norm();
    if norm_a < 1e-6 || norm_b < 1e-6 {
        return 0.0;
    }
    let cos_angle = (a.dot(b) / (norm_a * norm_b)).clamp(-1.0, 1.0);
    cos_angle.acos().to_degrees()
}

/// Planar angle settings for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnglePolicy {
    pub width: f32,
    pub height: f32,
    pub convention: AngleConvention,
}

impl AnglePolicy {
    pub fn new(width: f32, height: f32, convention: AngleConvention) -> Self {
        Self { width, height, convention }
    }

    /// Angle from `b` to `a` under this policy
    pub fn between(&self, a: Vector2<f32>, b: Vector2<f32>) -> f32 {
        self.convention.apply(angle2d(a, b, self.width, self.height))
    }
}

/// Trunk inclination above horizontal in degrees, range [0, 90], on the
/// image landmarks. Offsets are scaled to frame pixels first.
/// 90 means the shoulder is straight above the hip.
pub fn torso_inclination(hip: &Landmark, shoulder: &Landmark, width: f32, height: f32) -> f32 {
    let dx = (shoulder.x - hip.x).abs() * width;
    let dy = (shoulder.y - hip.y).abs() * height;
    dy.atan2(dx).to_degrees()
}

/// Trunk inclination on world landmarks (metres). The depth offset is
/// folded into both the horizontal and the vertical leg.
pub fn world_torso_inclination(hip: &Landmark, shoulder: &Landmark) -> f32 {
    let dx = (shoulder.x - hip.x).abs();
    let dy = (shoulder.y - hip.y).abs();
    let dz = (shoulder.z - hip.z).abs();
    let x = (dx * dx + dz * dz).sqrt();
    let y = (dy * dy + dz * dz).sqrt();
    y.atan2(x).to_degrees()
}
