//! Test case executor
//!
//! Runs generated cases against a [`Subject`] and compares the subject's
//! classification with the expected one. A subject that errors or panics
//! produces a failed result; the run always continues. Subject panics are
//! kept off stderr; their message ends up in the result instead.

use std::cell::Cell;
use std::panic::AssertUnwindSafe;
use std::sync::Once;

use super::subject::Subject;
use crate::generator::{Classification, GeneratedCases, TestCase};
use crate::metrics::{CaseOutcome, ReportSummary, ResultCollector, TestResult};

/// Callback invoked after each executed case
pub type ProgressCallback = Box<dyn Fn(ExecutionProgress<'_>)>;

/// Progress update during execution
#[derive(Debug, Clone, Copy)]
pub struct ExecutionProgress<'a> {
    /// Current case index (0-based)
    pub current: usize,
    /// Total number of cases
    pub total: usize,
    /// Result of the case that just ran
    pub result: &'a TestResult,
}

/// Executor for running test cases against a subject
pub struct TestExecutor<S> {
    subject: S,
    progress_callback: Option<ProgressCallback>,
}

impl<S: Subject> TestExecutor<S> {
    pub fn new(subject: S) -> Self {
        Self {
            subject,
            progress_callback: None,
        }
    }

    /// Set progress callback
    pub fn set_progress_callback(&mut self, callback: ProgressCallback) {
        self.progress_callback = Some(callback);
    }

    /// Execute a single case
    pub fn execute_one(&self, case: &TestCase) -> TestResult {
        install_quiet_panic_hook();
        QUIET_PANICS.with(|quiet| quiet.set(true));
        let invocation = std::panic::catch_unwind(AssertUnwindSafe(|| {
            self.subject.process_input(&case.field_name, &case.value)
        }));
        QUIET_PANICS.with(|quiet| quiet.set(false));

        let error = match invocation {
            Ok(Ok(is_valid)) => {
                return Self::compare(case, Classification::from_valid(is_valid));
            }
            Ok(Err(e)) => e.to_string(),
            Err(panic) => panic_message(panic.as_ref()),
        };

        tracing::debug!(
            field = %case.field_name,
            value = %case.value,
            "subject raised: {}",
            error
        );

        TestResult::new(
            case.clone(),
            CaseOutcome::Error,
            format!(
                "Test case raised an exception for field '{}' with value '{}': {}",
                case.field_name, case.value, error
            ),
        )
    }

    fn compare(case: &TestCase, actual: Classification) -> TestResult {
        if actual == case.expected {
            TestResult::new(
                case.clone(),
                CaseOutcome::Passed,
                format!(
                    "Test case passed for field '{}' with value '{}'",
                    case.field_name, case.value
                ),
            )
        } else {
            TestResult::new(
                case.clone(),
                CaseOutcome::Failed,
                format!(
                    "Test case FAILED for field '{}' with value '{}': Expected {}, got {}",
                    case.field_name, case.value, case.expected, actual
                ),
            )
        }
    }

    /// Execute every case in field order, valid before invalid, keeping
    /// the individual results
    pub fn run(&self, cases: &GeneratedCases) -> ResultCollector {
        let total = cases.total();
        let mut collector = ResultCollector::new();

        for (current, case) in cases.iter().enumerate() {
            let result = self.execute_one(case);
            if let Some(callback) = &self.progress_callback {
                callback(ExecutionProgress {
                    current,
                    total,
                    result: &result,
                });
            }
            collector.record(result);
        }

        tracing::debug!(
            "executed {} cases in {:.3}s ({} passed, {} failed)",
            total,
            collector.elapsed_secs(),
            collector.passed_count(),
            collector.failed_count()
        );

        collector
    }

    /// Execute every case and summarize the messages
    pub fn execute_all(&self, cases: &GeneratedCases) -> ReportSummary {
        self.run(cases).summary()
    }
}

thread_local! {
    static QUIET_PANICS: Cell<bool> = const { Cell::new(false) };
}

static QUIET_HOOK: Once = Once::new();

/// Wrap the process panic hook so it stays silent while a subject runs on
/// this thread. Panics anywhere else still reach the previous hook.
fn install_quiet_panic_hook() {
    QUIET_HOOK.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if !QUIET_PANICS.with(Cell::get) {
                previous(info);
            }
        }));
    });
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
