//! End-to-end harness pipeline
//!
//! Generate cases from the suite, execute them against the subject, report.

use tracing::{info, warn};

use super::HarnessConfig;
use super::executor::{ProgressCallback, TestExecutor};
use super::subject::Subject;
use crate::classes::check_consistency;
use crate::error::HarnessResult;
use crate::generator::TestCaseGenerator;
use crate::metrics::ReportSummary;
use crate::report::Reporter;
use crate::suite::Suite;

/// Runs a suite against one subject and reports the outcome
pub struct Harness<S> {
    suite: Suite,
    config: HarnessConfig,
    executor: TestExecutor<S>,
}

impl<S: Subject> Harness<S> {
    pub fn new(suite: Suite, subject: S, config: HarnessConfig) -> Self {
        Self {
            suite,
            config,
            executor: TestExecutor::new(subject),
        }
    }

    /// Set a callback invoked after every executed case
    pub fn set_progress_callback(&mut self, callback: ProgressCallback) {
        self.executor.set_progress_callback(callback);
    }

    /// Run the whole pipeline.
    ///
    /// Table inconsistencies are logged but do not stop the run. Errors from
    /// the consistency check (`UnknownField`) and from writing the report
    /// are returned. A [`Suite`] never names a field its schema lacks, so in
    /// practice the report write is the one that surfaces.
    pub fn run(&self) -> HarnessResult<ReportSummary> {
        info!("Starting the input validation testing process.");

        if self.config.verify_schema {
            let violations = check_consistency(self.suite.schema(), self.suite.table())?;
            for violation in &violations {
                warn!("Equivalence class mismatch: {}", violation);
            }
        }

        info!("Generating test cases for all fields.");
        let cases = TestCaseGenerator::new(self.suite.table()).generate_all();

        info!("Executing test cases.");
        let summary = self.executor.execute_all(&cases);

        info!("Reporting test results.");
        Reporter::new(&self.config.report_path, self.config.report_format).report(&summary)?;

        info!("Input validation testing process completed.");
        Ok(summary)
    }
}
