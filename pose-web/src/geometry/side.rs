//! Near-side selection - which body side faces the camera
//!
//! Angles are only measured on the near side, since the far side is
//! mostly occluded when the subject stands side-on.

use serde::{Deserialize, Serialize};
use crate::error::PoseError;
use crate::landmarks::{
    Landmark, landmark_at,
    LEFT_HIP, RIGHT_HIP, LEFT_SHOULDER, RIGHT_SHOULDER,
    POSE_LANDMARKS_LEFT, POSE_LANDMARKS_RIGHT,
};

/// Anatomical body side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn from_is_left(left: bool) -> Self {
        if left { Side::Left } else { Side::Right }
    }

    pub fn is_left(self) -> bool {
        self == Side::Left
    }

    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Every landmark index belonging to this side
    pub fn indices(self) -> &'static [usize] {
        match self {
            Side::Left => &POSE_LANDMARKS_LEFT,
            Side::Right => &POSE_LANDMARKS_RIGHT,
        }
    }
}

/// Heuristic used to pick the near side. Every policy prefers left on a tie.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SidePolicy {
    /// Left hip z <= right hip z
    #[default]
    HipDepth,
    /// Left shoulder z <= right shoulder z
    ShoulderDepth,
    /// Summed visibility of the left set >= the right set
    Visibility,
}

impl SidePolicy {
    pub fn is_left_near(self, landmarks: &[Landmark]) -> Result<bool, PoseError> {
        match self {
            SidePolicy::HipDepth => depth_left_near(landmarks, LEFT_HIP, RIGHT_HIP),
            SidePolicy::ShoulderDepth => depth_left_near(landmarks, LEFT_SHOULDER, RIGHT_SHOULDER),
            SidePolicy::Visibility => is_left_close(landmarks),
        }
    }

    pub fn near_side(self, landmarks: &[Landmark]) -> Result<Side, PoseError> {
        self.is_left_near(landmarks).map(Side::from_is_left)
    }
}

fn depth_left_near(landmarks: &[Landmark], left: usize, right: usize) -> Result<bool, PoseError> {
    let l = landmark_at(landmarks, left)?;
    let r = landmark_at(landmarks, right)?;
    Ok(l.z <= r.z)
}

/// Visibility heuristic: the side the detector sees better is the near one.
/// Missing scores count as 0.
pub fn is_left_close(landmarks: &[Landmark]) -> Result<bool, PoseError> {
    let total = |indices: &[usize]| -> Result<f32, PoseError> {
        let mut sum = 0.0;
        for &i in indices {
            sum += landmark_at(landmarks, i)?.visibility_or(0.0);
        }
        Ok(sum)
    };
    Ok(total(&POSE_LANDMARKS_LEFT)? >= total(&POSE_LANDMARKS_RIGHT)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::POSE_LANDMARK_COUNT;

    fn body() -> Vec<Landmark> {
        vec![Landmark::new(0.5, 0.5, 0.0).with_visibility(0.5); POSE_LANDMARK_COUNT]
    }

    #[test]
    fn test_hip_depth_prefers_nearer_hip() {
        let mut lms = body();
        lms[LEFT_HIP].z = 0.1;
        lms[RIGHT_HIP].z = 0.5;
        assert!(SidePolicy::HipDepth.is_left_near(&lms).unwrap());

        lms[LEFT_HIP].z = 0.6;
        assert!(!SidePolicy::HipDepth.is_left_near(&lms).unwrap());
    }

    #[test]
    fn test_depth_tie_goes_left() {
        let lms = body();
        assert_eq!(SidePolicy::HipDepth.near_side(&lms).unwrap(), Side::Left);
        assert_eq!(SidePolicy::ShoulderDepth.near_side(&lms).unwrap(), Side::Left);
    }

    #[test]
    fn test_selection_is_stable() {
        let mut lms = body();
        lms[LEFT_HIP].z = 0.3;
        lms[RIGHT_HIP].z = -0.2;
        let first = SidePolicy::HipDepth.is_left_near(&lms).unwrap();
        let second = SidePolicy::HipDepth.is_left_near(&lms).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_shoulder_depth() {
        let mut lms = body();
        lms[LEFT_SHOULDER].z = 0.2;
        lms[RIGHT_SHOULDER].z = -0.2;
        assert_eq!(SidePolicy::ShoulderDepth.near_side(&lms).unwrap(), Side::Right);
    }

    #[test]
    fn test_visibility_policy() {
        let mut lms = body();
        for &i in POSE_LANDMARKS_RIGHT.iter() {
            lms[i].visibility = Some(0.9);
        }
        assert_eq!(SidePolicy::Visibility.near_side(&lms).unwrap(), Side::Right);

        assert!(is_left_close(&body()).unwrap());
    }

    #[test]
    fn test_short_list_is_an_error() {
        let lms = vec![Landmark::default(); 12];
        assert_eq!(
            SidePolicy::HipDepth.is_left_near(&lms),
            Err(PoseError::MissingLandmark(LEFT_HIP))
        );
    }

    #[test]
    fn test_side_indices() {
        assert!(Side::Left.indices().contains(&LEFT_SHOULDER));
        assert!(Side::Right.indices().contains(&RIGHT_HIP));
        assert_eq!(Side::Left.opposite(), Side::Right);
    }
}
