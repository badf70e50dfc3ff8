use mv_kernel::{narrow, Acc, Elem, Matrix};
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Trait for test-data generators that fill a matrix in place.
///
/// The single capability is "overwrite every element in row-major order";
/// generators carry whatever state they need (a counter, an RNG) across
/// calls.
pub trait Fill {
    /// Returns the name of this generator.
    fn name(&self) -> &str;

    /// Overwrite every element of `m` in row-major order.
    fn fill<const R: usize, const C: usize>(&mut self, m: &mut Matrix<R, C>);
}

/// Sequential generator: `start, start+1, start+2, ...` row-major, each
/// value narrowed to the element width if the count walks past the range.
/// Deterministic, no seed.
pub struct SequentialFill {
    next: Acc,
}

impl SequentialFill {
    pub fn new(start: Elem) -> Self {
        Self {
            next: start as Acc,
        }
    }
}

impl Fill for SequentialFill {
    fn name(&self) -> &str {
        "sequential"
    }

    fn fill<const R: usize, const C: usize>(&mut self, m: &mut Matrix<R, C>) {
        for i in 0..R {
            for j in 0..C {
                m.set(i, j, narrow(self.next));
                self.next += 1;
            }
        }
    }
}

/// Random generator: uniform draws from `[lo, hi]` using a `StdRng` seeded
/// with a fixed value, so the same seed reproduces the exact same sequence
/// of matrices on every run.
pub struct RandomFill {
    rng: StdRng,
    dist: Uniform<Elem>,
}

impl RandomFill {
    /// Create a generator drawing from the inclusive range `[lo, hi]`.
    ///
    /// # Panics
    /// Panics if `lo > hi`.
    pub fn new(seed: u64, lo: Elem, hi: Elem) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            dist: Uniform::new_inclusive(lo, hi),
        }
    }
}

impl Fill for RandomFill {
    fn name(&self) -> &str {
        "random"
    }

    fn fill<const R: usize, const C: usize>(&mut self, m: &mut Matrix<R, C>) {
        for i in 0..R {
            for j in 0..C {
                m.set(i, j, self.dist.sample(&mut self.rng));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_row_major() {
        let mut m: Matrix<2, 3> = Matrix::zeros();
        SequentialFill::new(10).fill(&mut m);
        assert_eq!(m, Matrix::from_rows([[10, 11, 12], [13, 14, 15]]));
    }

    #[test]
    fn test_sequential_continues_across_matrices() {
        let mut gen = SequentialFill::new(1);
        let mut a: Matrix<2, 2> = Matrix::zeros();
        let mut b: Matrix<2, 2> = Matrix::zeros();
        gen.fill(&mut a);
        gen.fill(&mut b);
        assert_eq!(a, Matrix::from_rows([[1, 2], [3, 4]]));
        assert_eq!(b, Matrix::from_rows([[5, 6], [7, 8]]));
    }

    #[test]
    fn test_sequential_narrows_past_range() {
        let mut m: Matrix<1, 3> = Matrix::zeros();
        SequentialFill::new(Elem::MAX - 1).fill(&mut m);
        assert_eq!(m, Matrix::from_rows([[32766, 32767, -32768]]));
    }

    #[test]
    fn test_random_in_range() {
        let mut m: Matrix<4, 4> = Matrix::zeros();
        RandomFill::new(42, -8, 8).fill(&mut m);
        for i in 0..4 {
            for j in 0..4 {
                let v = m.get(i, j);
                assert!((-8..=8).contains(&v), "value {} out of range", v);
            }
        }
    }

    #[test]
    fn test_random_reproducible() {
        let mut a: Matrix<4, 4> = Matrix::zeros();
        let mut b: Matrix<4, 4> = Matrix::zeros();
        RandomFill::new(0xC0FFEE, -8, 8).fill(&mut a);
        RandomFill::new(0xC0FFEE, -8, 8).fill(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_seed_changes_output() {
        let mut a: Matrix<4, 4> = Matrix::zeros();
        let mut b: Matrix<4, 4> = Matrix::zeros();
        RandomFill::new(1, -8, 8).fill(&mut a);
        RandomFill::new(2, -8, 8).fill(&mut b);
        assert_ne!(a, b);
    }

    #[test]
    fn test_generator_names() {
        assert_eq!(SequentialFill::new(0).name(), "sequential");
        assert_eq!(RandomFill::new(0, 0, 1).name(), "random");
    }
}
