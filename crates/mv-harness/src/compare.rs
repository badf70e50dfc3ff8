use mv_kernel::{Elem, Matrix};

/// A single element-wise disagreement between kernel and reference output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    pub row: usize,
    pub col: usize,
    pub got: Elem,
    pub expected: Elem,
}

/// Compare kernel output against the reference, element by element.
///
/// Always scans the full R x C grid rather than stopping at the first
/// disagreement, and returns every mismatched coordinate in row-major
/// order. An empty result means the matrices agree.
pub fn compare<const R: usize, const C: usize>(
    got: &Matrix<R, C>,
    expected: &Matrix<R, C>,
) -> Vec<Mismatch> {
    let mut mismatches = Vec::new();
    for i in 0..R {
        for j in 0..C {
            if got.get(i, j) != expected.get(i, j) {
                mismatches.push(Mismatch {
                    row: i,
                    col: j,
                    got: got.get(i, j),
                    expected: expected.get(i, j),
                });
            }
        }
    }
    mismatches
}
