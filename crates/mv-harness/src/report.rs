//! The harness's stdout protocol.
//!
//! Lines are written to a caller-supplied `Write` so tests can capture the
//! report in a buffer. The formats here are the process's external
//! interface and are kept stable:
//!
//! ```text
//! [Test <n>] <description>: PASS|FAIL
//! Mismatch at (<i>,<j>): got=<v> exp=<v>
//! Summary: <passed>/<total> tests passed.
//! ```

use std::io::{self, Write};

use mv_kernel::Matrix;

use crate::compare::Mismatch;

/// Write one per-test result line.
pub fn test_line<W: Write>(out: &mut W, index: usize, description: &str, ok: bool) -> io::Result<()> {
    writeln!(
        out,
        "[Test {}] {}: {}",
        index,
        description,
        if ok { "PASS" } else { "FAIL" }
    )
}

/// Write one line per mismatched coordinate.
pub fn mismatch_lines<W: Write>(out: &mut W, mismatches: &[Mismatch]) -> io::Result<()> {
    for m in mismatches {
        writeln!(
            out,
            "Mismatch at ({},{}): got={} exp={}",
            m.row, m.col, m.got, m.expected
        )?;
    }
    Ok(())
}

/// Dump a named matrix as fixed-width columns.
pub fn matrix_dump<W: Write, const R: usize, const C: usize>(
    out: &mut W,
    name: &str,
    m: &Matrix<R, C>,
) -> io::Result<()> {
    writeln!(out, "{} =", name)?;
    write!(out, "{}", m)
}

/// Write the final pass-count summary.
pub fn summary_line<W: Write>(out: &mut W, passed: usize, total: usize) -> io::Result<()> {
    writeln!(out, "\nSummary: {}/{} tests passed.", passed, total)
}
