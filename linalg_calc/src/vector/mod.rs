use itertools::Itertools;

use crate::error::{KernelError, KernelResult};

pub type Vector = Vec<f64>;

fn non_empty(v: &[f64]) -> KernelResult<()> {
    if v.is_empty() {
        return Err(KernelError::Malformed("Vector must not be empty.".into()));
    }
    Ok(())
}

fn same_length(u: &[f64], v: &[f64], op_name: &str) -> KernelResult<()> {
    non_empty(u)?;
    non_empty(v)?;
    if u.len() != v.len() {
        return Err(KernelError::DimensionMismatch(format!(
            "Vectors must have the same length for {op_name}."
        )));
    }
    Ok(())
}

pub fn add(u: &[f64], v: &[f64]) -> KernelResult<Vector> {
    same_length(u, v, "addition")?;
    Ok(u.iter().zip(v).map(|(x, y)| x + y).collect_vec())
}

pub fn subtract(u: &[f64], v: &[f64]) -> KernelResult<Vector> {
    same_length(u, v, "subtraction")?;
    Ok(u.iter().zip(v).map(|(x, y)| x - y).collect_vec())
}

pub fn scalar_multiply(scalar: f64, v: &[f64]) -> KernelResult<Vector> {
    non_empty(v)?;
    Ok(v.iter().map(|x| scalar * x).collect_vec())
}

pub fn dot(u: &[f64], v: &[f64]) -> KernelResult<f64> {
    same_length(u, v, "dot product")?;
    Ok(u.iter().zip(v).map(|(x, y)| x * y).sum())
}

pub fn cross(u: &[f64], v: &[f64]) -> KernelResult<Vector> {
    if u.len() != 3 || v.len() != 3 {
        return Err(KernelError::DimensionError);
    }
    Ok(vec![
        u[1] * v[2] - u[2] * v[1],
        u[2] * v[0] - u[0] * v[2],
        u[0] * v[1] - u[1] * v[0],
    ])
}

pub fn magnitude(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

pub fn normalize(v: &[f64]) -> KernelResult<Vector> {
    non_empty(v)?;
    let magnitude = magnitude(v);
    if magnitude == 0.0 {
        return Err(KernelError::ZeroVector);
    }
    Ok(v.iter().map(|x| x / magnitude).collect_vec())
}
