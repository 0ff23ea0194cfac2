//! Plain text report generation

use crate::metrics::ReportSummary;

/// Plain text report generator
pub struct TextReporter;

impl TextReporter {
    /// Generate the text report.
    ///
    /// The failed section only appears when something failed. Lines are
    /// joined with `\n` and there is no trailing newline.
    pub fn generate(summary: &ReportSummary) -> String {
        let mut lines = vec![
            "Test Case Execution Report".to_string(),
            "==========================".to_string(),
            format!("Total Test Cases: {}", summary.total()),
            format!("Passed: {}", summary.passed()),
            format!("Failed: {}", summary.failed()),
            String::new(),
        ];

        if summary.has_failures() {
            lines.push("Failed Test Cases:".to_string());
            lines.push("------------------".to_string());
            lines.extend(summary.failed_messages().iter().cloned());
            lines.push(String::new());
        }

        lines.push("Passed Test Cases:".to_string());
        lines.push("------------------".to_string());
        lines.extend(summary.passed_messages().iter().cloned());

        lines.join("\n")
    }
}
