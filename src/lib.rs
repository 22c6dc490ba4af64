//! densemat: dense, arbitrary-size real-valued matrices.
//!
//! This crate provides a single owned [`Matrix`] type over a row-major
//! `Vec<f64>` buffer, together with the classical operation set:
//! element-wise arithmetic, scalar scaling, matrix multiplication,
//! transpose, determinant, cofactor matrix, and inverse.
//!
//! The design favors a small, explicit surface: every dimension
//! precondition is a `Result`-returning method, equality is
//! tolerance-based (see [`EPSILON`]), and failed operations leave their
//! operands untouched.
pub mod error;
pub mod matrix;

mod linalg;
mod ops;

pub use error::MatrixError;
pub use matrix::{Matrix, EPSILON};
