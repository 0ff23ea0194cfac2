//! JSON report generation

use serde_json::json;

use crate::error::HarnessResult;
use crate::metrics::ReportSummary;

/// JSON report generator
pub struct JsonReporter;

impl JsonReporter {
    /// Generate a JSON report
    pub fn generate(summary: &ReportSummary) -> HarnessResult<String> {
        let value = json!({
            "total": summary.total(),
            "passed": summary.passed(),
            "failed": summary.failed(),
            "failed_messages": summary.failed_messages(),
            "passed_messages": summary.passed_messages(),
        });
        Ok(serde_json::to_string_pretty(&value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{Classification, TestCase};
    use crate::metrics::{CaseOutcome, TestResult};
    use crate::schema::Literal;

    #[test]
    fn test_json_generation() {
        let case = TestCase::new("customer_id", Literal::text("CUST1234"), Classification::Valid);
        let summary = ReportSummary::from_results(&[
            TestResult::new(case.clone(), CaseOutcome::Passed, "ok"),
            TestResult::new(case, CaseOutcome::Failed, "nope"),
        ]);

        let json = JsonReporter::generate(&summary).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["total"], 2);
        assert_eq!(parsed["passed"], 1);
        assert_eq!(parsed["failed"], 1);
        assert_eq!(parsed["failed_messages"][0], "nope");
        assert_eq!(parsed["passed_messages"][0], "ok");
    }
}
