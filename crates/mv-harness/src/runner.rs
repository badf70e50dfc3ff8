use std::io::{self, Write};

use mv_kernel::{multiply, Elem, MatA, MatB, MatProduct};

use crate::compare::compare;
use crate::generate::{Fill, RandomFill, SequentialFill};
use crate::reference::reference_multiply;
use crate::report;

/// Number of seeded-random test cases after the sequential smoke test.
pub const RANDOM_ITERS: usize = 10;

/// Symmetric element range for random tests. Wide enough to exercise the
/// accumulator with mixed signs, small enough that inputs stay in range.
pub const RAND_LO: Elem = -8;
pub const RAND_HI: Elem = 8;

/// Fixed RNG seed: every harness run generates the identical matrices.
pub const SEED: u64 = 0xC0FFEE;

/// First value of the sequential smoke test.
pub const SEQ_START: Elem = 1;

/// Outcome of a full harness run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub passed: usize,
    pub total: usize,
}

impl RunSummary {
    /// True if every test in the plan passed.
    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }
}

/// Run the fixed test plan against the production kernel, writing the
/// report to `out`.
///
/// Plan, in order: one sequential-data smoke test, then [`RANDOM_ITERS`]
/// seeded-random tests over `[RAND_LO, RAND_HI]`. Every test runs to
/// completion regardless of earlier failures; the caller turns the summary
/// into a process exit code.
pub fn run<W: Write>(out: &mut W) -> io::Result<RunSummary> {
    run_with(out, |a, b| multiply(a, b))
}

/// Same as [`run`] but with a caller-supplied kernel, so the failure path
/// can be exercised with a deliberately corrupted kernel.
pub fn run_with<W, K>(out: &mut W, mut kernel: K) -> io::Result<RunSummary>
where
    W: Write,
    K: FnMut(&MatA, &MatB) -> MatProduct,
{
    let mut passed = 0;
    let mut total = 0;

    let mut a = MatA::zeros();
    let mut b = MatB::zeros();

    // Test 1: sequential data, with verbose mismatch coordinates. Inputs
    // increase linearly from a known start value for easy hand-checking.
    total += 1;
    SequentialFill::new(SEQ_START).fill(&mut a);
    SequentialFill::new(SEQ_START).fill(&mut b);
    let got = kernel(&a, &b);
    let expected = reference_multiply(&a, &b);
    let mismatches = compare(&got, &expected);
    report::mismatch_lines(out, &mismatches)?;
    let ok = mismatches.is_empty();
    report::test_line(out, total, "Sequential data", ok)?;
    passed += ok as usize;

    // Tests 2..: seeded-random sweeps. All four matrices are dumped on the
    // first failure only, to keep the report readable.
    let mut random = RandomFill::new(SEED, RAND_LO, RAND_HI);
    let mut dumped = false;
    for t in 0..RANDOM_ITERS {
        total += 1;
        random.fill(&mut a);
        random.fill(&mut b);
        let got = kernel(&a, &b);
        let expected = reference_multiply(&a, &b);
        let ok = compare(&got, &expected).is_empty();
        report::test_line(out, total, &format!("Random {}", t + 1), ok)?;
        if !ok && !dumped {
            dumped = true;
            report::matrix_dump(out, "A", &a)?;
            report::matrix_dump(out, "B", &b)?;
            report::matrix_dump(out, "R_kernel", &got)?;
            report::matrix_dump(out, "R_ref", &expected)?;
        }
        passed += ok as usize;
    }

    report::summary_line(out, passed, total)?;
    Ok(RunSummary { passed, total })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string() -> (String, RunSummary) {
        let mut buf = Vec::new();
        let summary = run(&mut buf).unwrap();
        (String::from_utf8(buf).unwrap(), summary)
    }

    #[test]
    fn test_full_plan_passes() {
        let (output, summary) = run_to_string();
        assert_eq!(summary.passed, 1 + RANDOM_ITERS);
        assert_eq!(summary.total, 1 + RANDOM_ITERS);
        assert!(summary.all_passed());
        assert!(output.contains("[Test 1] Sequential data: PASS"));
        assert!(output.contains("[Test 11] Random 10: PASS"));
        assert!(output.contains("Summary: 11/11 tests passed."));
        assert!(!output.contains("Mismatch"));
    }

    #[test]
    fn test_report_reproducible() {
        let (first, _) = run_to_string();
        let (second, _) = run_to_string();
        assert_eq!(first, second);
    }

    #[test]
    fn test_corrupted_sequential_reports_coordinate() {
        // Corrupt only the first kernel call; the smoke test must FAIL with
        // the exact coordinate while the random tests are unaffected.
        let mut calls = 0;
        let mut buf = Vec::new();
        let summary = run_with(&mut buf, |a, b| {
            calls += 1;
            let mut m = multiply(a, b);
            if calls == 1 {
                m.set(0, 0, m.get(0, 0).wrapping_add(1));
            }
            m
        })
        .unwrap();
        let output = String::from_utf8(buf).unwrap();

        assert_eq!(summary.passed, RANDOM_ITERS);
        assert_eq!(summary.total, 1 + RANDOM_ITERS);
        assert!(output.contains("Mismatch at (0,0): got=91 exp=90"));
        assert!(output.contains("[Test 1] Sequential data: FAIL"));
        assert!(output.contains("[Test 2] Random 1: PASS"));
    }

    #[test]
    fn test_corrupted_random_dumps_matrices_once() {
        // Corrupt the second and third kernel calls: both random tests fail
        // but only the first failure dumps the four matrices.
        let mut calls = 0;
        let mut buf = Vec::new();
        let summary = run_with(&mut buf, |a, b| {
            calls += 1;
            let mut m = multiply(a, b);
            if calls == 2 || calls == 3 {
                m.set(1, 2, m.get(1, 2).wrapping_add(1));
            }
            m
        })
        .unwrap();
        let output = String::from_utf8(buf).unwrap();

        assert_eq!(summary.passed, RANDOM_ITERS - 1);
        assert!(!summary.all_passed());
        assert!(output.contains("[Test 2] Random 1: FAIL"));
        assert!(output.contains("[Test 3] Random 2: FAIL"));
        assert_eq!(output.matches("A =").count(), 1);
        assert_eq!(output.matches("R_kernel =").count(), 1);
        assert_eq!(output.matches("R_ref =").count(), 1);
        // No fail-fast: the plan still ran to completion.
        assert!(output.contains("Summary: 9/11 tests passed."));
    }
}
