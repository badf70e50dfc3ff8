//! `mv-kernel` - Fixed-shape integer matrix multiply kernel for matmul-verify.
//!
//! This crate provides:
//! - A const-generic `Matrix` type holding row-major W-bit signed elements
//! - The `multiply` kernel with an explicit wide-accumulator contract
//! - The single `narrow` truncation point (two's-complement wraparound)
//! - The shipped shape constants and the accumulator-width derivation

pub mod dims;
pub mod error;
pub mod kernel;
pub mod matrix;
pub mod width;

// Re-export primary types at the crate root for convenience.
pub use dims::{MatA, MatB, MatProduct, COLS, ROWS, SHARED};
pub use error::{MatrixError, Result};
pub use kernel::multiply;
pub use matrix::Matrix;
pub use width::{acc_bits, narrow, Acc, Elem, ELEM_BITS};
