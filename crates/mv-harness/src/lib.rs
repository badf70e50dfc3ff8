//! `mv-harness` - Verification harness for the matmul-verify kernel.
//!
//! This crate provides:
//! - Test-data generators (a `Fill` trait with sequential and seeded-random impls)
//! - An independent reference model with a generously wide accumulator
//! - Element-wise comparison that always scans the full output grid
//! - The fixed test-plan runner and its stdout report format

pub mod compare;
pub mod generate;
pub mod reference;
pub mod report;
pub mod runner;

pub use compare::{compare, Mismatch};
pub use generate::{Fill, RandomFill, SequentialFill};
pub use reference::reference_multiply;
pub use runner::{run, RunSummary};
