pub mod dense_matrix;
pub mod error;
pub mod scalar;
pub mod service;
pub mod vector;
