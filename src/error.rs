use std::error::Error;
use std::fmt;

/// Error type for fallible matrix operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// A constructor or resize was given a zero row or column count.
    InvalidDimension { rows: usize, cols: usize },
    /// Operand shapes are incompatible for the requested operation.
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// An element access was outside the matrix bounds.
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// Determinant, cofactors, or inverse requested on a non-square matrix.
    NotSquare { rows: usize, cols: usize },
    /// Inverse requested on a matrix whose determinant is within tolerance of zero.
    Singular,
    /// A buffer's length does not match the requested shape.
    ShapeMismatch { rows: usize, cols: usize, len: usize },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::InvalidDimension { rows, cols } => {
                write!(f, "invalid matrix dimensions ({}, {})", rows, cols)
            }
            MatrixError::DimensionMismatch { left, right } => write!(
                f,
                "incompatible matrix dimensions ({}, {}) and ({}, {})",
                left.0, left.1, right.0, right.1
            ),
            MatrixError::OutOfRange {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "index ({}, {}) out of range for a {}x{} matrix",
                row, col, rows, cols
            ),
            MatrixError::NotSquare { rows, cols } => {
                write!(f, "operation requires a square matrix, got {}x{}", rows, cols)
            }
            MatrixError::Singular => write!(f, "matrix is singular within tolerance"),
            MatrixError::ShapeMismatch { rows, cols, len } => write!(
                f,
                "invalid shape ({}, {}) for buffer of length {}",
                rows, cols, len
            ),
        }
    }
}

impl Error for MatrixError {}
