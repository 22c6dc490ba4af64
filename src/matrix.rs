use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};

use crate::error::MatrixError;

/// Absolute tolerance used by equality comparison and the singularity check.
pub const EPSILON: f64 = 1e-6;

/// A dense, owned, row-major matrix of `f64` values.
///
/// Elements are stored in a single contiguous buffer of `rows * cols`
/// values, addressed as `(i, j) -> i * cols + j`. Every validating
/// constructor requires at least one row and one column; the sole
/// degenerate value is the empty `0x0` matrix produced by
/// [`Matrix::default`] and left behind by [`Matrix::take`].
#[derive(Clone, Debug, Default)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Creates a zero-initialized `rows x cols` matrix.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidDimension { rows, cols });
        }
        Ok(Self::zeroed(rows, cols))
    }

    /// Creates a matrix that adopts `data` as its row-major buffer.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<f64>) -> Result<Self, MatrixError> {
        let (rows, cols) = shape;
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidDimension { rows, cols });
        }
        if data.len() != rows * cols {
            return Err(MatrixError::ShapeMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates the `n x n` identity matrix.
    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        let mut out = Self::new(n, n)?;
        for i in 0..n {
            out.data[i * n + i] = 1.0;
        }
        Ok(out)
    }

    /// Crate-internal constructor for shapes already known to be valid.
    pub(crate) fn zeroed(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// True for the degenerate `0x0` matrix.
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for a {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    pub fn row_slice(&self, row: usize) -> &[f64] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    /// Returns the element at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<f64, MatrixError> {
        if row >= self.rows || col >= self.cols {
            return Err(self.out_of_range(row, col));
        }
        Ok(self.data[row * self.cols + col])
    }

    /// Returns a mutable reference to the element at `(row, col)`.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut f64, MatrixError> {
        if row >= self.rows || col >= self.cols {
            return Err(self.out_of_range(row, col));
        }
        let offset = row * self.cols + col;
        Ok(&mut self.data[offset])
    }

    fn out_of_range(&self, row: usize, col: usize) -> MatrixError {
        MatrixError::OutOfRange {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Changes the row count in place.
    ///
    /// Rows in the overlapping region keep their values; added rows are
    /// zero-filled and removed rows are truncated. Fails on the empty
    /// matrix or a zero target.
    pub fn set_rows(&mut self, rows: usize) -> Result<(), MatrixError> {
        if rows == 0 || self.is_empty() {
            return Err(MatrixError::InvalidDimension {
                rows,
                cols: self.cols,
            });
        }
        if rows != self.rows {
            log::trace!(
                "resizing matrix from {}x{} to {}x{}",
                self.rows,
                self.cols,
                rows,
                self.cols
            );
            self.data.resize(rows * self.cols, 0.0);
            self.rows = rows;
        }
        Ok(())
    }

    /// Changes the column count in place.
    ///
    /// Columns in the overlapping region keep their values; added
    /// columns are zero-filled and removed columns are truncated. Fails
    /// on the empty matrix or a zero target.
    pub fn set_cols(&mut self, cols: usize) -> Result<(), MatrixError> {
        if cols == 0 || self.is_empty() {
            return Err(MatrixError::InvalidDimension {
                rows: self.rows,
                cols,
            });
        }
        if cols != self.cols {
            log::trace!(
                "resizing matrix from {}x{} to {}x{}",
                self.rows,
                self.cols,
                self.rows,
                cols
            );
            let kept = cols.min(self.cols);
            let mut data = vec![0.0; self.rows * cols];
            for row in 0..self.rows {
                let src = row * self.cols;
                let dst = row * cols;
                data[dst..dst + kept].copy_from_slice(&self.data[src..src + kept]);
            }
            self.data = data;
            self.cols = cols;
        }
        Ok(())
    }

    /// Moves the matrix out of the receiver, leaving the empty matrix.
    pub fn take(&mut self) -> Matrix {
        mem::take(self)
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            write!(f, "[")?;
            for (idx, value) in self.row_slice(row).iter().enumerate() {
                write!(f, "{}", value)?;
                if idx + 1 != self.cols {
                    write!(f, ", ")?;
                }
            }
            write!(f, "]")?;
            if row + 1 != self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
