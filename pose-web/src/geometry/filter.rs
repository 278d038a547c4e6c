//! Visibility filter - hide every landmark not on a keep-list

use crate::landmarks::Landmark;

/// Copy of `landmarks` where every index absent from `keep` has its
/// visibility forced to 0. The input is left untouched.
pub fn filter_landmarks(keep: &[usize], landmarks: &[Landmark]) -> Vec<Landmark> {
    landmarks
        .iter()
        .enumerate()
        .map(|(i, lm)| {
            if keep.contains(&i) {
                *lm
            } else {
                Landmark { visibility: Some(0.0), ..*lm }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::{POSE_LANDMARK_COUNT, POSE_LANDMARKS_LEFT, POSE_LANDMARKS_RIGHT};

    fn body() -> Vec<Landmark> {
        (0..POSE_LANDMARK_COUNT)
            .map(|i| Landmark::new(i as f32 / 40.0, 0.5, 0.0).with_visibility(0.9))
            .collect()
    }

    #[test]
    fn test_empty_keep_hides_everything() {
        let lms = body();
        let filtered = filter_landmarks(&[], &lms);
        assert!(filtered.iter().all(|lm| lm.visibility == Some(0.0)));
        // Coordinates untouched
        assert_eq!(filtered[5].x, lms[5].x);
    }

    #[test]
    fn test_full_keep_is_identity() {
        let lms = body();
        let all: Vec<usize> = (0..lms.len()).collect();
        assert_eq!(filter_landmarks(&all, &lms), lms);
    }

    #[test]
    fn test_input_not_mutated() {
        let lms = body();
        let before = lms.clone();
        let _ = filter_landmarks(&POSE_LANDMARKS_LEFT, &lms);
        assert_eq!(lms, before);
    }

    #[test]
    fn test_left_keep_hides_right_side() {
        let filtered = filter_landmarks(&POSE_LANDMARKS_LEFT, &body());
        for &i in POSE_LANDMARKS_RIGHT.iter() {
            assert_eq!(filtered[i].visibility, Some(0.0));
        }
        for &i in POSE_LANDMARKS_LEFT.iter() {
            assert_eq!(filtered[i].visibility, Some(0.9));
        }
    }

    #[test]
    fn test_missing_visibility_becomes_zero() {
        let lms = vec![Landmark::new(0.1, 0.1, 0.1)];
        assert_eq!(filter_landmarks(&[], &lms)[0].visibility, Some(0.0));
        assert_eq!(filter_landmarks(&[0], &lms)[0].visibility, None);
    }
}
