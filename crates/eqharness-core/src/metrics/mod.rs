//! Result collection for harness runs
//!
//! This module provides the per-case result types and the run summary.

mod collector;
mod types;

pub use collector::ResultCollector;
pub use types::{CaseOutcome, ReportSummary, TestResult};
