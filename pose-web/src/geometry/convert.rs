//! Landmark ↔ vector / matrix conversion
//!
//! The coordinate matrix is N×3, one landmark per row, in list order.
//! Visibility is not part of the matrix; `to_landmarks` takes it back
//! from the list the matrix was built from.

use nalgebra::{MatrixXx3, Vector3};
use crate::error::PoseError;
use crate::landmarks::Landmark;

/// `(x, y, z)` as a column vector
pub fn to_vector(lm: &Landmark) -> Vector3<f32> {
    Vector3::new(lm.x, lm.y, lm.z)
}

/// Stack landmarks into an N×3 matrix
pub fn to_matrix(landmarks: &[Landmark]) -> MatrixXx3<f32> {
    MatrixXx3::from_fn(landmarks.len(), |row, col| {
        let lm = &landmarks[row];
        match col {
            0 => lm.x,
            1 => lm.y,
            _ => lm.z,
        }
    })
}

/// Rebuild a landmark list from matrix rows, reattaching the visibility of
/// `original[i]` to row i.
pub fn to_landmarks(
    matrix: &MatrixXx3<f32>,
    original: &[Landmark],
) -> Result<Vec<Landmark>, PoseError> {
    if matrix.nrows() != original.len() {
        return Err(PoseError::LengthMismatch {
            expected: original.len(),
            actual: matrix.nrows(),
        });
    }

    Ok(matrix
        .row_iter()
        .zip(original)
        .map(|(row, lm)| Landmark {
            x: row[0],
            y: row[1],
            z: row[2],
            visibility: lm.visibility,
        })
        .collect())
}
