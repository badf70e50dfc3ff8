//! Shipped kernel shapes.
//!
//! The dimensions are compile-time constants: A is `ROWS x SHARED`, B is
//! `SHARED x COLS`, and the product is `ROWS x COLS`. Changing any of them
//! means re-deriving the accumulator width (see `width::acc_bits`); the
//! kernel asserts that relationship at compile time.

use crate::matrix::Matrix;

/// Rows of the A operand (and of the product).
pub const ROWS: usize = 4;

/// The shared dimension: columns of A, rows of B. Accumulation runs over it.
pub const SHARED: usize = 4;

/// Columns of the B operand (and of the product).
pub const COLS: usize = 4;

/// A operand shape.
pub type MatA = Matrix<ROWS, SHARED>;

/// B operand shape.
pub type MatB = Matrix<SHARED, COLS>;

/// Product shape.
pub type MatProduct = Matrix<ROWS, COLS>;
