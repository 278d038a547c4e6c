//! Joint angles on the near side of the body
//!
//! Each angle is the planar angle between the two limb segments that meet
//! at the joint, measured in frame pixels.

use nalgebra::Vector2;
use serde::Serialize;
use crate::error::PoseError;
use crate::landmarks::{
    Landmark, landmark_at,
    LEFT_SHOULDER, RIGHT_SHOULDER, LEFT_ELBOW, RIGHT_ELBOW, LEFT_WRIST, RIGHT_WRIST,
    LEFT_HIP, RIGHT_HIP, LEFT_KNEE, RIGHT_KNEE, LEFT_ANKLE, RIGHT_ANKLE,
};
use super::angles::AnglePolicy;
use super::side::Side;

/// Image "up" (y grows downwards in normalized coordinates)
fn up() -> Vector2<f32> {
    Vector2::new(0.0, -1.0)
}

/// One frame's angle estimates, in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyAngles {
    /// Trunk (hip→shoulder) against vertical
    pub torso: f32,
    /// Upper arm against trunk
    pub shoulder: f32,
    /// Forearm against upper arm
    pub elbow: f32,
    /// Shank against thigh
    pub knee: f32,
    /// Measured on the left side
    pub left: bool,
}

struct Limb {
    shoulder: usize,
    elbow: usize,
    wrist: usize,
    hip: usize,
    knee: usize,
    ankle: usize,
}

fn limb(side: Side) -> Limb {
    match side {
        Side::Left => Limb {
            shoulder: LEFT_SHOULDER, elbow: LEFT_ELBOW, wrist: LEFT_WRIST,
            hip: LEFT_HIP, knee: LEFT_KNEE, ankle: LEFT_ANKLE,
        },
        Side::Right => Limb {
            shoulder: RIGHT_SHOULDER, elbow: RIGHT_ELBOW, wrist: RIGHT_WRIST,
            hip: RIGHT_HIP, knee: RIGHT_KNEE, ankle: RIGHT_ANKLE,
        },
    }
}

/// Segment from `from` to `to` in the image plane
fn segment(landmarks: &[Landmark], from: usize, to: usize) -> Result<Vector2<f32>, PoseError> {
    let a = landmark_at(landmarks, from)?;
    let b = landmark_at(landmarks, to)?;
    Ok(Vector2::new(b.x - a.x, b.y - a.y))
}

impl BodyAngles {
    /// Measure all four joints on `side`
    pub fn measure(
        landmarks: &[Landmark],
        side: Side,
        policy: &AnglePolicy,
    ) -> Result<Self, PoseError> {
        let l = limb(side);

        let torso = policy.between(segment(landmarks, l.hip, l.shoulder)?, up());
        let shoulder = policy.between(
            segment(landmarks, l.shoulder, l.elbow)?,
            segment(landmarks, l.shoulder, l.hip)?,
        );
        let elbow = policy.between(
            segment(landmarks, l.elbow, l.wrist)?,
            segment(landmarks, l.elbow, l.shoulder)?,
        );
        let knee = policy.between(
            segment(landmarks, l.knee, l.ankle)?,
            segment(landmarks, l.knee, l.hip)?,
        );

        Ok(Self { torso, shoulder, elbow, knee, left: side.is_left() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::angles::AngleConvention;
    use crate::landmarks::POSE_LANDMARK_COUNT;

    /// Side-on standing pose, arm hanging, leg straight
    fn standing(side: Side) -> Vec<Landmark> {
        let l = limb(side);
        let mut lms = vec![Landmark::new(0.5, 0.5, 0.0).with_visibility(0.9); POSE_LANDMARK_COUNT];
        lms[l.shoulder] = Landmark::new(0.5, 0.3, 0.0);
        lms[l.elbow] = Landmark::new(0.5, 0.45, 0.0);
        lms[l.wrist] = Landmark::new(0.6, 0.45, 0.0);
        lms[l.hip] = Landmark::new(0.5, 0.6, 0.0);
        lms[l.knee] = Landmark::new(0.5, 0.75, 0.0);
        lms[l.ankle] = Landmark::new(0.5, 0.9, 0.0);
        lms
    }

    fn policy() -> AnglePolicy {
        AnglePolicy::new(1.0, 1.0, AngleConvention::Wrapped)
    }

    #[test]
    fn test_upright_torso_is_zero() {
        let angles = BodyAngles::measure(&standing(Side::Left), Side::Left, &policy()).unwrap();
        assert!(angles.torso.abs() < 1e-3);
        assert!(angles.left);
    }

    #[test]
    fn test_hanging_arm_and_straight_leg() {
        let angles = BodyAngles::measure(&standing(Side::Right), Side::Right, &policy()).unwrap();
        // Upper arm runs along the trunk
        assert!(angles.shoulder.abs() < 1e-3);
        // Straight leg: thigh and shank point in opposite directions
        assert!((angles.knee.abs() - 180.0).abs() < 1e-3);
        // Forearm bent forward at a right angle
        assert!((angles.elbow.abs() - 90.0).abs() < 1e-3);
        assert!(!angles.left);
    }

    #[test]
    fn test_only_near_side_is_read() {
        let lms = standing(Side::Left);
        // Right side is all the same point; measuring it degenerates to zero vectors
        let angles = BodyAngles::measure(&lms, Side::Right, &policy()).unwrap();
        assert_eq!(angles.elbow, 0.0);
    }

    #[test]
    fn test_short_list() {
        let lms = vec![Landmark::default(); 20];
        assert!(matches!(
            BodyAngles::measure(&lms, Side::Left, &policy()),
            Err(PoseError::MissingLandmark(_))
        ));
    }
}
