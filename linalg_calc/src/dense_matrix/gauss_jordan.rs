use super::matrix::{Matrix, Shape};
use crate::error::KernelResult;

/// Working state of a Gauss-Jordan reduction.
///
/// Owns a private copy of the input rows, so the caller's matrix is never
/// touched. Pivots are the first nonzero entry found at or below the active
/// row; there is no magnitude-based pivot selection and zero tests are exact.
pub struct GaussJordan {
    pub number_of_columns: usize,
    pub rows: Matrix,
    active_row: usize,
    lead_column: usize,
}

impl GaussJordan {
    pub fn from_matrix(m: &[Vec<f64>]) -> KernelResult<Self> {
        let shape = Shape::of(m)?;
        Ok(Self {
            number_of_columns: shape.number_of_columns,
            rows: m.to_vec(),
            active_row: 0,
            lead_column: 0,
        })
    }

    pub fn go_to_reduced_form(&mut self) {
        while self.is_not_in_reduced_form() {
            self.pivot_lead_column();
            self.go_to_next_column();
        }
    }

    pub fn into_rows(self) -> Matrix {
        self.rows
    }

    fn is_not_in_reduced_form(&self) -> bool {
        self.active_row < self.rows.len() && self.lead_column < self.number_of_columns
    }

    // when the lead column has no usable pivot, the same row is retried
    // against the next column
    fn pivot_lead_column(&mut self) {
        if let Some(pivot_index) = self.find_pivot() {
            self.rows.swap(pivot_index, self.active_row);
            self.normalize_active_row();
            self.eliminate_lead_column_from_other_rows();
            self.active_row += 1;
        }
    }

    fn find_pivot(&self) -> Option<usize> {
        (self.active_row..self.rows.len()).find(|&idx| self.rows[idx][self.lead_column] != 0.0)
    }

    fn normalize_active_row(&mut self) {
        let row = &mut self.rows[self.active_row];
        let pivot = row[self.lead_column];
        for x in row.iter_mut() {
            *x /= pivot;
        }
    }

    fn eliminate_lead_column_from_other_rows(&mut self) {
        let pivot_row = self.rows[self.active_row].clone();
        for (row_index, row) in self.rows.iter_mut().enumerate() {
            if row_index == self.active_row {
                continue;
            }
            let multiplier = row[self.lead_column];
            for (x, y) in row.iter_mut().zip(&pivot_row) {
                *x -= multiplier * y;
            }
        }
    }

    fn go_to_next_column(&mut self) {
        self.lead_column += 1;
    }
}

/// Reduced row echelon form of `m`.
pub fn rref(m: &[Vec<f64>]) -> KernelResult<Matrix> {
    let mut gj = GaussJordan::from_matrix(m)?;
    gj.go_to_reduced_form();
    Ok(gj.into_rows())
}
