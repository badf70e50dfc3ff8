use mv_kernel::{Elem, Matrix};

/// Trusted reference product used to validate the kernel.
///
/// Intentionally simpler than the kernel and sharing no code path with it:
/// the sum is held in `i128`, strictly wider than the kernel's accumulator,
/// and truncated to the element width inline at the end (an `as` cast is
/// two's-complement truncation). Any disagreement between the two is a
/// kernel defect, not a reference ambiguity.
pub fn reference_multiply<const R: usize, const C: usize, const S: usize>(
    a: &Matrix<R, C>,
    b: &Matrix<C, S>,
) -> Matrix<R, S> {
    let mut out = Matrix::zeros();
    for i in 0..R {
        for j in 0..S {
            let mut acc: i128 = 0;
            for k in 0..C {
                acc += a.get(i, k) as i128 * b.get(k, j) as i128;
            }
            out.set(i, j, acc as Elem);
        }
    }
    out
}
