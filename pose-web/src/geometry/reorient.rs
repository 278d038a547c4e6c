//! 3D re-orientation - rotate a world skeleton into a canonical frame
//!
//! The rotation is derived from the shoulder line (near shoulder minus far
//! shoulder). After the yaw step the shoulder line has no x component, so
//! the subject is shown in clean profile with the near shoulder towards
//! the camera. Landmarks are rows of the coordinate matrix, so the rotation
//! is applied on the right: `C' = C · M`.
//!
//! Output is for the 3D grid view only; angles are always measured on the
//! detector's own landmarks.

use nalgebra::{Matrix3, Rotation3, Vector3};
use serde::{Deserialize, Serialize};
use crate::error::PoseError;
use crate::landmarks::{Landmark, landmark_at, LEFT_SHOULDER, RIGHT_SHOULDER};
use super::convert::{to_landmarks, to_matrix, to_vector};
use super::side::Side;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReorientMode {
    /// Leave world landmarks as the detector reported them
    Off,
    /// Rotate about the vertical axis only
    #[default]
    Yaw,
    /// Vertical axis, then lateral axis
    YawPitch,
}

/// Rotation matrix for a shoulder pair under `mode`
pub fn shoulder_rotation(near: &Landmark, far: &Landmark, mode: ReorientMode) -> Matrix3<f32> {
    let v: Vector3<f32> = to_vector(near) - to_vector(far);

    let rot_y = -v.x.atan2(-v.z);
    let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), rot_y);

    match mode {
        ReorientMode::Off => Matrix3::identity(),
        ReorientMode::Yaw => ry.into_inner(),
        ReorientMode::YawPitch => {
            let rot_x = -(-v.y).atan2(-v.z);
            let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), rot_x);
            (ry * rx).into_inner()
        }
    }
}

/// Rotate every landmark by the rotation derived from `near`/`far`.
/// Visibility is carried over unchanged.
pub fn reorient(
    landmarks: &[Landmark],
    near: &Landmark,
    far: &Landmark,
    mode: ReorientMode,
) -> Result<Vec<Landmark>, PoseError> {
    if mode == ReorientMode::Off {
        return Ok(landmarks.to_vec());
    }
    let m = shoulder_rotation(near, far, mode);
    let rotated = to_matrix(landmarks) * m;
    to_landmarks(&rotated, landmarks)
}

/// `reorient` using the list's own shoulders, `near_side` first
pub fn reorient_to_side(
    landmarks: &[Landmark],
    near_side: Side,
    mode: ReorientMode,
) -> Result<Vec<Landmark>, PoseError> {
    let (near_idx, far_idx) = match near_side {
        Side::Left => (LEFT_SHOULDER, RIGHT_SHOULDER),
        Side::Right => (RIGHT_SHOULDER, LEFT_SHOULDER),
    };
    let near = *landmark_at(landmarks, near_idx)?;
    let far = *landmark_at(landmarks, far_idx)?;
    reorient(landmarks, &near, &far, mode)
}
