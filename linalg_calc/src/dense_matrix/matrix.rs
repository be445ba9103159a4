use crate::error::{KernelError, KernelResult};

pub type Matrix = Vec<Vec<f64>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub number_of_rows: usize,
    pub number_of_columns: usize,
}

impl Shape {
    // a matrix needs at least one row, and every row the same nonzero length
    pub fn of(m: &[Vec<f64>]) -> KernelResult<Self> {
        let first = m
            .first()
            .ok_or_else(|| KernelError::Malformed("Matrix must have at least one row.".into()))?;
        let number_of_columns = first.len();
        if number_of_columns == 0 {
            return Err(KernelError::Malformed(
                "Matrix rows must not be empty.".into(),
            ));
        }
        if let Some(idx) = m.iter().position(|row| row.len() != number_of_columns) {
            return Err(KernelError::Malformed(format!(
                "Matrix rows must all have the same length (row {idx} has {} entries, expected {number_of_columns}).",
                m[idx].len()
            )));
        }
        Ok(Self {
            number_of_rows: m.len(),
            number_of_columns,
        })
    }

    pub fn is_square(&self) -> bool {
        self.number_of_rows == self.number_of_columns
    }
}

pub fn zeroes(rows: usize, cols: usize) -> Matrix {
    (0..rows).map(|_| vec![0.0; cols]).collect()
}

pub fn identity(n: usize) -> Matrix {
    let mut m = zeroes(n, n);
    for (idx, row) in m.iter_mut().enumerate() {
        row[idx] = 1.0;
    }
    m
}

pub fn is_nonzero_row(row: &[f64]) -> bool {
    row.iter().any(|x| *x != 0.0)
}
