//! Result types for test case execution
//!
//! Defines per-case results and the run summary handed to the reporter.

use serde::{Deserialize, Serialize};

use crate::generator::TestCase;

/// Outcome of a single test case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseOutcome {
    /// Subject classified the value as expected
    Passed,
    /// Subject classified the value differently
    Failed,
    /// Subject raised an error or panicked
    Error,
}

impl CaseOutcome {
    /// Check if the outcome represents success
    pub fn is_success(&self) -> bool {
        matches!(self, CaseOutcome::Passed)
    }
}

/// Result of executing one test case
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResult {
    /// The executed case
    pub case: TestCase,

    /// Execution outcome
    pub outcome: CaseOutcome,

    /// Human-readable diagnostic
    pub message: String,
}

impl TestResult {
    pub fn new(case: TestCase, outcome: CaseOutcome, message: impl Into<String>) -> Self {
        Self {
            case,
            outcome,
            message: message.into(),
        }
    }

    /// Check if the case passed
    pub fn passed(&self) -> bool {
        self.outcome.is_success()
    }
}

/// Aggregated pass/fail messages for a run.
///
/// Counts are derived from the message lists, so
/// `total() == passed() + failed()` always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    passed_messages: Vec<String>,
    failed_messages: Vec<String>,
}

impl ReportSummary {
    /// Build a summary from results in execution order
    pub fn from_results<'a, I>(results: I) -> Self
    where
        I: IntoIterator<Item = &'a TestResult>,
    {
        let mut summary = Self::default();
        for result in results {
            summary.record(result);
        }
        summary
    }

    /// Append one result
    pub fn record(&mut self, result: &TestResult) {
        if result.passed() {
            self.passed_messages.push(result.message.clone());
        } else {
            self.failed_messages.push(result.message.clone());
        }
    }

    pub fn total(&self) -> usize {
        self.passed() + self.failed()
    }

    pub fn passed(&self) -> usize {
        self.passed_messages.len()
    }

    pub fn failed(&self) -> usize {
        self.failed_messages.len()
    }

    /// Passed messages in execution order
    pub fn passed_messages(&self) -> &[String] {
        &self.passed_messages
    }

    /// Failed messages in execution order
    pub fn failed_messages(&self) -> &[String] {
        &self.failed_messages
    }

    /// Whether any case failed
    pub fn has_failures(&self) -> bool {
        !self.failed_messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::Classification;
    use crate::schema::Literal;

    fn result(outcome: CaseOutcome, message: &str) -> TestResult {
        TestResult::new(
            TestCase::new("f", Literal::Number(1.0), Classification::Valid),
            outcome,
            message,
        )
    }

    #[test]
    fn test_summary_counts_add_up() {
        let results = vec![
            result(CaseOutcome::Passed, "p1"),
            result(CaseOutcome::Failed, "f1"),
            result(CaseOutcome::Error, "e1"),
            result(CaseOutcome::Passed, "p2"),
        ];
        let summary = ReportSummary::from_results(&results);

        assert_eq!(summary.total(), 4);
        assert_eq!(summary.passed(), 2);
        assert_eq!(summary.failed(), 2);
        assert_eq!(summary.passed_messages(), ["p1", "p2"]);
        assert_eq!(summary.failed_messages(), ["f1", "e1"]);
        assert!(summary.has_failures());
    }

    #[test]
    fn test_empty_summary() {
        let summary = ReportSummary::default();
        assert_eq!(summary.total(), 0);
        assert!(!summary.has_failures());
    }
}
