use std::fmt;

use crate::error::{MatrixError, Result};
use crate::width::Elem;

/// A fixed-shape, row-major matrix of W-bit signed elements.
///
/// Both dimensions are const generics, so the shared-dimension constraint
/// of a product (A is R x C, B must be C x S) is enforced by the compiler
/// rather than checked at runtime. Matrices are plain stack values: no
/// heap allocation, cheap to copy at these sizes, owned by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matrix<const R: usize, const C: usize> {
    data: [[Elem; C]; R],
}

impl<const R: usize, const C: usize> Matrix<R, C> {
    /// Create a zero-filled matrix.
    pub const fn zeros() -> Self {
        Matrix { data: [[0; C]; R] }
    }

    /// Create a matrix from row-major nested arrays.
    pub const fn from_rows(data: [[Elem; C]; R]) -> Self {
        Matrix { data }
    }

    /// Create a matrix from a row-major flat slice.
    ///
    /// # Errors
    /// Returns `MatrixError::LengthMismatch` if `flat.len() != R * C`.
    pub fn from_flat(flat: &[Elem]) -> Result<Self> {
        if flat.len() != R * C {
            return Err(MatrixError::LengthMismatch {
                expected: R * C,
                got: flat.len(),
            });
        }
        let mut m = Self::zeros();
        for i in 0..R {
            for j in 0..C {
                m.data[i][j] = flat[i * C + j];
            }
        }
        Ok(m)
    }

    /// Number of rows.
    pub const fn rows(&self) -> usize {
        R
    }

    /// Number of columns.
    pub const fn cols(&self) -> usize {
        C
    }

    /// Element at (i, j).
    ///
    /// # Panics
    /// Panics if `i >= R` or `j >= C`.
    pub fn get(&self, i: usize, j: usize) -> Elem {
        self.data[i][j]
    }

    /// Overwrite the element at (i, j).
    ///
    /// # Panics
    /// Panics if `i >= R` or `j >= C`.
    pub fn set(&mut self, i: usize, j: usize, v: Elem) {
        self.data[i][j] = v;
    }
}

impl<const R: usize, const C: usize> Default for Matrix<R, C> {
    fn default() -> Self {
        Self::zeros()
    }
}

/// Fixed-width columns, one line per row, matching the harness dump format.
impl<const R: usize, const C: usize> fmt::Display for Matrix<R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.data {
            for v in row {
                write!(f, "{:6} ", v)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
