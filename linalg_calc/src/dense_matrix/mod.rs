pub mod arithmetic;
pub mod gauss_jordan;
pub mod inverse;
pub mod matrix;
pub mod subspaces;

pub use arithmetic::{add, multiply, scalar_multiply, subtract};
pub use gauss_jordan::{rref, GaussJordan};
pub use inverse::inverse;
pub use matrix::{identity, Matrix, Shape};
pub use subspaces::{column_space, rank, row_space};
