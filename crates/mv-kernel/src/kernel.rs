use crate::matrix::Matrix;
use crate::width::{acc_bits, narrow, Acc};

/// Multiply A (R x C) by B (C x S), producing an R x S matrix.
///
/// Each output element accumulates `sum over k of a[i][k] * b[k][j]` in the
/// wide `Acc` type, then is narrowed exactly once to the element width with
/// two's-complement wraparound. No intermediate narrowing: an in-range
/// partial sum that later wraps must wrap only at the final step.
///
/// The function is pure and has no error path. Shape agreement between the
/// operands is part of the signature, and a compile-time assertion checks
/// that `Acc` can hold C products of two W-bit values. Elements are assumed
/// already in range; the kernel does not validate them.
pub fn multiply<const R: usize, const C: usize, const S: usize>(
    a: &Matrix<R, C>,
    b: &Matrix<C, S>,
) -> Matrix<R, S> {
    const {
        assert!(acc_bits(C) <= Acc::BITS);
    }

    let mut out = Matrix::zeros();
    for i in 0..R {
        for j in 0..S {
            let mut acc: Acc = 0;
            for k in 0..C {
                acc += a.get(i, k) as Acc * b.get(k, j) as Acc;
            }
            out.set(i, j, narrow(acc));
        }
    }
    out
}
