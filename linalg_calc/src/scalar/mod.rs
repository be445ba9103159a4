use std::str::FromStr;

use strum_macros::{Display, EnumIter, EnumString};

use crate::error::{KernelError, KernelResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ScalarOperation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Exponent,
}

impl ScalarOperation {
    pub fn parse(name: &str) -> KernelResult<Self> {
        Self::from_str(name).map_err(|_| KernelError::UnsupportedOperation(name.to_string()))
    }

    pub fn apply(self, a: f64, b: f64) -> KernelResult<f64> {
        match self {
            Self::Add => Ok(add(a, b)),
            Self::Subtract => Ok(subtract(a, b)),
            Self::Multiply => Ok(multiply(a, b)),
            Self::Divide => divide(a, b),
            Self::Exponent => exponent(a, b),
        }
    }
}

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

pub fn divide(a: f64, b: f64) -> KernelResult<f64> {
    if b == 0.0 {
        return Err(KernelError::DivisionByZero);
    }
    Ok(a / b)
}

/// `a` raised to `b`. Combinations with no real result (a negative base with
/// a fractional exponent) fail instead of returning NaN.
pub fn exponent(a: f64, b: f64) -> KernelResult<f64> {
    let result = a.powf(b);
    if result.is_nan() && !a.is_nan() && !b.is_nan() {
        return Err(KernelError::Domain(format!(
            "{a} raised to {b} is not a real number"
        )));
    }
    Ok(result)
}
