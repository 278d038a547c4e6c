//! Landmark data structure and flat-array packing for the JS boundary
//!
//! JavaScript hands over each landmark list as one Float32Array with
//! 4 values per landmark: x, y, z, visibility. A NaN visibility means the
//! detector did not report one (world landmarks from older builds).

use serde::{Deserialize, Serialize};
use crate::error::PoseError;

/// Floats per landmark in a flat array
pub const FLAT_STRIDE: usize = 4;

/// A single detected keypoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,  // 0-1 normalized (metres for world landmarks)
    pub y: f32,  // 0-1 normalized, grows downwards
    pub z: f32,  // Relative depth, smaller = nearer the camera
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f32>,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z, visibility: None }
    }

    pub fn with_visibility(mut self, visibility: f32) -> Self {
        self.visibility = Some(visibility);
        self
    }

    /// Visibility score, treating a missing score as `default`
    pub fn visibility_or(&self, default: f32) -> f32 {
        self.visibility.unwrap_or(default)
    }

    /// Whether the landmark passes a drawing threshold.
    /// Landmarks without a score are always drawn.
    pub fn is_visible(&self, min: f32) -> bool {
        self.visibility_or(1.0) >= min
    }
}

/// Look up a landmark by anatomical index
pub fn landmark_at(landmarks: &[Landmark], index: usize) -> Result<&Landmark, PoseError> {
    landmarks.get(index).ok_or(PoseError::MissingLandmark(index))
}

/// Unpack a flat `[x, y, z, visibility, ...]` array
pub fn landmarks_from_flat(data: &[f32]) -> Result<Vec<Landmark>, PoseError> {
    if data.len() % FLAT_STRIDE != 0 {
        return Err(PoseError::MalformedInput(format!(
            "flat landmark length {} is not a multiple of {}",
            data.len(),
            FLAT_STRIDE
        )));
    }

    data.chunks_exact(FLAT_STRIDE)
        .enumerate()
        .map(|(i, chunk)| {
            if !(chunk[0].is_finite() && chunk[1].is_finite() && chunk[2].is_finite()) {
                return Err(PoseError::MalformedInput(format!(
                    "landmark {} has non-finite coordinates",
                    i
                )));
            }
            Ok(Landmark {
                x: chunk[0],
                y: chunk[1],
                z: chunk[2],
                visibility: if chunk[3].is_nan() { None } else { Some(chunk[3]) },
            })
        })
        .collect()
}

/// Pack landmarks back into the flat layout JS expects
pub fn landmarks_to_flat(landmarks: &[Landmark]) -> Vec<f32> {
    let mut flat = Vec::with_capacity(landmarks.len() * FLAT_STRIDE);
    for lm in landmarks {
        flat.extend_from_slice(&[lm.x, lm.y, lm.z, lm.visibility.unwrap_or(f32::NAN)]);
    }
    flat
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flat_reads_visibility() {
        let data = [0.1, 0.2, -0.3, 0.9, 0.5, 0.6, 0.0, f32::NAN];
        let lms = landmarks_from_flat(&data).unwrap();
        assert_eq!(lms.len(), 2);
        assert_eq!(lms[0], Landmark::new(0.1, 0.2, -0.3).with_visibility(0.9));
        assert_eq!(lms[1].visibility, None);
    }

    #[test]
    fn test_from_flat_rejects_ragged_input() {
        let err = landmarks_from_flat(&[0.0; 7]).unwrap_err();
        assert!(matches!(err, PoseError::MalformedInput(_)));
    }

    #[test]
    fn test_from_flat_rejects_nan_coordinates() {
        let err = landmarks_from_flat(&[f32::NAN, 0.0, 0.0, 1.0]).unwrap_err();
        assert!(matches!(err, PoseError::MalformedInput(_)));
    }

    #[test]
    fn test_landmark_at_out_of_range() {
        let lms = vec![Landmark::default(); 3];
        assert!(landmark_at(&lms, 2).is_ok());
        assert_eq!(landmark_at(&lms, 3), Err(PoseError::MissingLandmark(3)));
    }

    #[test]
    fn test_to_flat_marks_missing_visibility() {
        let flat = landmarks_to_flat(&[Landmark::new(1.0, 2.0, 3.0)]);
        assert_eq!(&flat[..3], &[1.0, 2.0, 3.0]);
        assert!(flat[3].is_nan());
    }

    #[test]
    fn test_missing_visibility_counts_as_visible() {
        assert!(Landmark::new(0.0, 0.0, 0.0).is_visible(0.65));
        assert!(!Landmark::new(0.0, 0.0, 0.0).with_visibility(0.5).is_visible(0.65));
    }
}
