use itertools::Itertools;

use super::matrix::{identity, Matrix, Shape};
use crate::error::{KernelError, KernelResult};

// [m | I]
fn augmented_with_identity(m: &[Vec<f64>], n: usize) -> Matrix {
    m.iter()
        .zip(identity(n))
        .map(|(row, id_row)| row.iter().copied().chain(id_row).collect_vec())
        .collect_vec()
}

/// Inverse of a square matrix by Gauss-Jordan elimination on `[m | I]`.
///
/// The pivot for column `i` is always the working diagonal entry; rows are
/// never searched or swapped. An invertible matrix whose diagonal becomes
/// zero during elimination (e.g. `[[0, 1], [1, 0]]`) is therefore reported
/// as [`KernelError::Singular`].
pub fn inverse(m: &[Vec<f64>]) -> KernelResult<Matrix> {
    let shape = Shape::of(m)?;
    if !shape.is_square() {
        return Err(KernelError::NotSquare);
    }
    let n = shape.number_of_rows;
    let mut augmented = augmented_with_identity(m, n);
    for i in 0..n {
        let pivot = augmented[i][i];
        if pivot == 0.0 {
            return Err(KernelError::Singular { index: i });
        }
        for x in augmented[i].iter_mut() {
            *x /= pivot;
        }
        let pivot_row = augmented[i].clone();
        for (j, row) in augmented.iter_mut().enumerate() {
            if j == i {
                continue;
            }
            let factor = row[i];
            for (x, y) in row.iter_mut().zip(&pivot_row) {
                *x -= factor * y;
            }
        }
    }
    Ok(augmented
        .into_iter()
        .map(|row| row[n..].to_vec())
        .collect_vec())
}
