use thiserror::Error;

/// Failures raised by the scalar, vector and matrix kernels.
///
/// Every variant is an input-validation or domain failure; none of them
/// signals an internal fault.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KernelError {
    /// Operand shapes are incompatible for the requested operation.
    #[error("{0}")]
    DimensionMismatch(String),

    /// Cross product requested on vectors that are not 3-dimensional.
    #[error("Vectors must be 3D for cross product.")]
    DimensionError,

    /// Inverse requested on a non-square matrix.
    #[error("Matrix must be square.")]
    NotSquare,

    /// Working pivot was exactly zero at elimination step `index`.
    #[error("Matrix is singular and cannot be inverted.")]
    Singular { index: usize },

    #[error("Cannot normalize the zero vector.")]
    ZeroVector,

    #[error("Division by zero is not allowed")]
    DivisionByZero,

    #[error("Operation '{0}' not supported")]
    UnsupportedOperation(String),

    /// The result of the computation is not a real number.
    #[error("{0}")]
    Domain(String),

    /// Input does not describe a non-empty rectangular matrix or a non-empty vector.
    #[error("{0}")]
    Malformed(String),
}

impl KernelError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DimensionMismatch(_) => "DimensionMismatch",
            Self::DimensionError => "DimensionError",
            Self::NotSquare => "NotSquare",
            Self::Singular { .. } => "Singular",
            Self::ZeroVector => "ZeroVector",
            Self::DivisionByZero => "DivisionByZero",
            Self::UnsupportedOperation(_) => "UnsupportedOperation",
            Self::Domain(_) => "Domain",
            Self::Malformed(_) => "Malformed",
        }
    }

    /// Whether the failure comes from the shape of the payload rather than
    /// from the arithmetic applied to it.
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }
}

pub type KernelResult<T> = Result<T, KernelError>;
