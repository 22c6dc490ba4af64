//! Equality and arithmetic for [`Matrix`].
//!
//! Verb forms mutate the receiver and return `Result`; the operator
//! impls work on references, return a fresh matrix, and panic on
//! dimension violations.
use std::ops::{Add, Mul, Sub};

use crate::error::MatrixError;
use crate::matrix::{Matrix, EPSILON};

impl Matrix {
    /// Tolerance-based equality: same shape and every element pair
    /// within [`EPSILON`]. A shape mismatch short-circuits without
    /// comparing elements.
    pub fn approx_eq(&self, other: &Matrix) -> bool {
        self.shape() == other.shape()
            && self
                .as_slice()
                .iter()
                .zip(other.as_slice())
                .all(|(a, b)| (a - b).abs() <= EPSILON)
    }

    /// Adds `other` to the receiver element-wise.
    pub fn sum_matrix(&mut self, other: &Matrix) -> Result<(), MatrixError> {
        self.check_same_shape(other)?;
        for (a, b) in self.as_mut_slice().iter_mut().zip(other.as_slice()) {
            *a += b;
        }
        Ok(())
    }

    /// Subtracts `other` from the receiver element-wise.
    pub fn sub_matrix(&mut self, other: &Matrix) -> Result<(), MatrixError> {
        self.check_same_shape(other)?;
        for (a, b) in self.as_mut_slice().iter_mut().zip(other.as_slice()) {
            *a -= b;
        }
        Ok(())
    }

    /// Multiplies every element by `factor`.
    pub fn mul_scalar(&mut self, factor: f64) {
        for value in self.as_mut_slice() {
            *value *= factor;
        }
    }

    /// Replaces the receiver with the product `self * other`.
    ///
    /// The product is computed into a fresh buffer and swapped in only
    /// once complete, so a failure never leaves the receiver partially
    /// overwritten.
    pub fn mul_matrix(&mut self, other: &Matrix) -> Result<(), MatrixError> {
        *self = self.multiply(other)?;
        Ok(())
    }

    pub(crate) fn multiply(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.ncols() != other.nrows() {
            return Err(MatrixError::DimensionMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        let mut out = Matrix::zeroed(self.nrows(), other.ncols());
        for i in 0..self.nrows() {
            for j in 0..other.ncols() {
                let mut acc = 0.0;
                for k in 0..self.ncols() {
                    acc += self[(i, k)] * other[(k, j)];
                }
                out[(i, j)] = acc;
            }
        }
        Ok(out)
    }

    fn check_same_shape(&self, other: &Matrix) -> Result<(), MatrixError> {
        if self.shape() != other.shape() {
            return Err(MatrixError::DimensionMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(())
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl<'a, 'b> Add<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn add(self, rhs: &'b Matrix) -> Matrix {
        assert_eq!(
            self.shape(),
            rhs.shape(),
            "matrix addition requires equal dimensions"
        );
        let mut out = self.clone();
        for (a, b) in out.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *a += b;
        }
        out
    }
}

impl<'a, 'b> Sub<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn sub(self, rhs: &'b Matrix) -> Matrix {
        assert_eq!(
            self.shape(),
            rhs.shape(),
            "matrix subtraction requires equal dimensions"
        );
        let mut out = self.clone();
        for (a, b) in out.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *a -= b;
        }
        out
    }
}

impl<'a, 'b> Mul<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &'b Matrix) -> Matrix {
        match self.multiply(rhs) {
            Ok(out) => out,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<'a> Mul<f64> for &'a Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f64) -> Matrix {
        let mut out = self.clone();
        out.mul_scalar(rhs);
        out
    }
}

impl<'a> Mul<&'a Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, rhs: &'a Matrix) -> Matrix {
        rhs * self
    }
}
