use itertools::Itertools;

use super::matrix::{Matrix, Shape};
use crate::error::{KernelError, KernelResult};

fn same_shape(a: &[Vec<f64>], b: &[Vec<f64>], op_name: &str) -> KernelResult<Shape> {
    let shape_a = Shape::of(a)?;
    let shape_b = Shape::of(b)?;
    if shape_a != shape_b {
        return Err(KernelError::DimensionMismatch(format!(
            "Matrices must have the same dimensions for {op_name}."
        )));
    }
    Ok(shape_a)
}

fn elementwise(a: &[Vec<f64>], b: &[Vec<f64>], f: impl Fn(f64, f64) -> f64) -> Matrix {
    a.iter()
        .zip(b)
        .map(|(row_a, row_b)| row_a.iter().zip(row_b).map(|(x, y)| f(*x, *y)).collect_vec())
        .collect_vec()
}

pub fn add(a: &[Vec<f64>], b: &[Vec<f64>]) -> KernelResult<Matrix> {
    same_shape(a, b, "addition")?;
    Ok(elementwise(a, b, |x, y| x + y))
}

pub fn subtract(a: &[Vec<f64>], b: &[Vec<f64>]) -> KernelResult<Matrix> {
    same_shape(a, b, "subtraction")?;
    Ok(elementwise(a, b, |x, y| x - y))
}

pub fn scalar_multiply(scalar: f64, m: &[Vec<f64>]) -> KernelResult<Matrix> {
    Shape::of(m)?;
    Ok(m.iter()
        .map(|row| row.iter().map(|x| scalar * x).collect_vec())
        .collect_vec())
}

pub fn multiply(a: &[Vec<f64>], b: &[Vec<f64>]) -> KernelResult<Matrix> {
    let shape_a = Shape::of(a)?;
    let shape_b = Shape::of(b)?;
    if shape_a.number_of_columns != shape_b.number_of_rows {
        return Err(KernelError::DimensionMismatch(
            "Number of columns in Matrix 1 must equal the number of rows in Matrix 2!".into(),
        ));
    }
    let product = a
        .iter()
        .map(|row| {
            (0..shape_b.number_of_columns)
                .map(|j| row.iter().zip(b).map(|(x, b_row)| x * b_row[j]).sum::<f64>())
                .collect_vec()
        })
        .collect_vec();
    Ok(product)
}
