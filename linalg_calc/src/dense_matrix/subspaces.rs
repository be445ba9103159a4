use bitvec::prelude::*;
use itertools::Itertools;

use super::gauss_jordan::rref;
use super::matrix::{is_nonzero_row, Matrix};
use crate::error::KernelResult;

// columns of the reduced matrix holding at least one nonzero entry
fn nonzero_columns(reduced: &[Vec<f64>]) -> BitVec {
    let number_of_columns = reduced.first().map_or(0, Vec::len);
    let mut columns = bitvec![usize, Lsb0; 0; number_of_columns];
    for row in reduced {
        for (col_idx, x) in row.iter().enumerate() {
            if *x != 0.0 {
                columns.set(col_idx, true);
            }
        }
    }
    columns
}

pub fn rank(m: &[Vec<f64>]) -> KernelResult<usize> {
    let reduced = rref(m)?;
    Ok(reduced.iter().filter(|row| is_nonzero_row(row)).count())
}

/// Basis of the row space: the nonzero rows of the reduced form.
pub fn row_space(m: &[Vec<f64>]) -> KernelResult<Matrix> {
    let reduced = rref(m)?;
    Ok(reduced.into_iter().filter(|row| is_nonzero_row(row)).collect_vec())
}

/// Columns of the original matrix at every column index where the reduced
/// form is not entirely zero.
pub fn column_space(m: &[Vec<f64>]) -> KernelResult<Matrix> {
    let reduced = rref(m)?;
    let columns = nonzero_columns(&reduced);
    Ok(columns
        .iter_ones()
        .map(|col_idx| m.iter().map(|row| row[col_idx]).collect_vec())
        .collect_vec())
}
