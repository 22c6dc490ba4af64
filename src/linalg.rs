//! Transpose, determinant, cofactor matrix, and inverse.
use log::debug;

use crate::error::MatrixError;
use crate::matrix::{Matrix, EPSILON};

impl Matrix {
    /// Returns the transpose: a `cols x rows` matrix with
    /// `out[(j, i)] == self[(i, j)]`. Valid for any matrix; the empty
    /// matrix transposes to itself.
    pub fn transpose(&self) -> Matrix {
        if self.is_empty() {
            return Matrix::default();
        }
        let mut out = Matrix::zeroed(self.ncols(), self.nrows());
        for i in 0..self.nrows() {
            for j in 0..self.ncols() {
                out[(j, i)] = self[(i, j)];
            }
        }
        out
    }

    /// Computes the determinant by cofactor expansion along the first row.
    ///
    /// The expansion is recursive and factorial in the matrix size, so
    /// this is only suitable for small matrices. Fails with
    /// [`MatrixError::NotSquare`] on non-square or empty input.
    pub fn determinant(&self) -> Result<f64, MatrixError> {
        self.check_square()?;
        Ok(det_laplace(self))
    }

    /// Computes the matrix of cofactors: entry `(i, j)` is the
    /// determinant of the minor at `(i, j)` with sign `(-1)^(i + j)`.
    ///
    /// The cofactor matrix of a `1x1` matrix is `[1]`.
    pub fn cofactor_matrix(&self) -> Result<Matrix, MatrixError> {
        self.check_square()?;
        let n = self.nrows();
        if n == 1 {
            return Matrix::from_shape_vec((1, 1), vec![1.0]);
        }
        let mut out = Matrix::zeroed(n, n);
        for i in 0..n {
            for j in 0..n {
                let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
                out[(i, j)] = sign * det_laplace(&self.minor(i, j));
            }
        }
        Ok(out)
    }

    /// Computes the inverse via the adjugate: the transposed cofactor
    /// matrix scaled by `1/det`. Fails with [`MatrixError::Singular`]
    /// when the determinant is within [`EPSILON`] of zero.
    pub fn inverse(&self) -> Result<Matrix, MatrixError> {
        let det = self.determinant()?;
        if det.abs() <= EPSILON {
            debug!(
                "rejecting inverse of {}x{} matrix, determinant {} within tolerance of zero",
                self.nrows(),
                self.ncols(),
                det
            );
            return Err(MatrixError::Singular);
        }
        let mut out = self.cofactor_matrix()?.transpose();
        out.mul_scalar(1.0 / det);
        Ok(out)
    }

    /// The submatrix left by deleting `skip_row` and `skip_col`.
    /// Callers guarantee a square matrix with at least two rows.
    fn minor(&self, skip_row: usize, skip_col: usize) -> Matrix {
        let mut out = Matrix::zeroed(self.nrows() - 1, self.ncols() - 1);
        let mut r = 0;
        for i in 0..self.nrows() {
            if i == skip_row {
                continue;
            }
            let mut c = 0;
            for j in 0..self.ncols() {
                if j == skip_col {
                    continue;
                }
                out[(r, c)] = self[(i, j)];
                c += 1;
            }
            r += 1;
        }
        out
    }

    fn check_square(&self) -> Result<(), MatrixError> {
        if self.is_empty() || self.nrows() != self.ncols() {
            return Err(MatrixError::NotSquare {
                rows: self.nrows(),
                cols: self.ncols(),
            });
        }
        Ok(())
    }
}

/// Laplace expansion along row 0. Assumes a square, non-empty matrix.
///
/// Kept as a free function so an elimination-based determinant can be
/// substituted without touching the public methods.
fn det_laplace(m: &Matrix) -> f64 {
    match m.nrows() {
        1 => m[(0, 0)],
        2 => m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)],
        n => {
            let mut det = 0.0;
            let mut sign = 1.0;
            for col in 0..n {
                det += sign * m[(0, col)] * det_laplace(&m.minor(0, col));
                sign = -sign;
            }
            det
        }
    }
}
