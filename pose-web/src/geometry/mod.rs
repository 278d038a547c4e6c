//! Geometry module - landmark conversion, joint angles, side selection,
//! visibility filtering and skeleton re-orientation
//!
//! Re-exports only. All logic in submodules. Nothing here logs or touches
//! JS, so it runs unchanged under native tests.

mod convert;
mod angles;
mod side;
mod filter;
mod reorient;
mod joints;

pub use convert::{to_vector, to_matrix, to_landmarks};
pub use angles::{
    angle2d, angle3d, wrap_degrees, torso_inclination, world_torso_inclination,
    AngleConvention, AnglePolicy,
};
pub use side::{Side, SidePolicy, is_left_close};
pub use filter::filter_landmarks;
pub use reorient::{ReorientMode, shoulder_rotation, reorient, reorient_to_side};
pub use joints::BodyAngles;
