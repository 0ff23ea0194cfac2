//! Result collector for a harness run
//!
//! Collects per-case results during execution.

use std::time::Instant;

use super::types::{ReportSummary, TestResult};

/// Collector for gathering results during a run
pub struct ResultCollector {
    /// Results collected so far, in execution order
    results: Vec<TestResult>,

    /// Start time of the run
    start_time: Instant,
}

impl ResultCollector {
    /// Create a new collector
    pub fn new() -> Self {
        Self {
            results: Vec::new(),
            start_time: Instant::now(),
        }
    }

    /// Record a finished case
    pub fn record(&mut self, result: TestResult) {
        self.results.push(result);
    }

    /// Get all collected results
    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    /// Get total elapsed time
    pub fn elapsed_secs(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }

    /// Get count of passed cases
    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|r| r.passed()).count()
    }

    /// Get count of failed cases
    pub fn failed_count(&self) -> usize {
        self.results.iter().filter(|r| !r.passed()).count()
    }

    /// Summarize everything collected so far
    pub fn summary(&self) -> ReportSummary {
        ReportSummary::from_results(&self.results)
    }
}

impl Default for ResultCollector {
    fn default() -> Self {
        Self::new()
    }
}
