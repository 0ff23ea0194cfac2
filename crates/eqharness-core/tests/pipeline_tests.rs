//! Integration tests for the generate, execute, report pipeline

use chrono::NaiveDate;
use eqharness_core::report::TextReporter;
use eqharness_core::schema::{DataTypeConstraints, FloatConstraint, StringConstraint};
use eqharness_core::{
    Classification, ConstantSubject, EquivalenceClassSet, EquivalenceTable, FieldSchema,
    FieldSpec, Harness, HarnessConfig, Literal, ReferenceSubject, Reporter, ReportFormat, Suite,
    SubjectError, TestCaseGenerator, TestExecutor, builtin_suite, check_consistency,
};
use tempfile::TempDir;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

fn customer_suite() -> Suite {
    let schema = FieldSchema::new(vec![FieldSpec::new(
        "customer_id",
        DataTypeConstraints::String(StringConstraint::new("customer_id", r"^CUST\d{4}$").unwrap()),
    )])
    .unwrap();
    let table = EquivalenceTable::new(vec![
        EquivalenceClassSet::new("customer_id")
            .with_valid("CUST1234")
            .with_invalid("1234CUST")
            .with_invalid("CUST-1234")
            .with_invalid("CUST ABCD"),
    ])
    .unwrap();
    Suite::new(schema, table).unwrap()
}

fn weight_suite() -> Suite {
    let schema = FieldSchema::new(vec![FieldSpec::new(
        "transaction_weight",
        DataTypeConstraints::Float(FloatConstraint::new("transaction_weight", 1.0, 1000.0).unwrap()),
    )])
    .unwrap();
    let table = EquivalenceTable::new(vec![
        EquivalenceClassSet::new("transaction_weight")
            .with_valid(1.0)
            .with_valid(1000.0)
            .with_invalid(0.9)
            .with_invalid(1000.1),
    ])
    .unwrap();
    Suite::new(schema, table).unwrap()
}

#[test]
fn test_customer_id_scenario() {
    let suite = customer_suite();
    let subject = |_field: &str, value: &Literal| -> Result<bool, SubjectError> {
        let text = value.as_str().unwrap_or_default();
        Ok(text.len() == 8 && text.starts_with("CUST") && text[4..].chars().all(|c| c.is_ascii_digit()))
    };

    let cases = TestCaseGenerator::new(suite.table()).generate_all();
    let summary = TestExecutor::new(subject).execute_all(&cases);

    assert_eq!(summary.total(), 4);
    assert_eq!(summary.passed(), 4);
    assert_eq!(summary.failed(), 0);
}

#[test]
fn test_weight_scenario_with_exact_subject() {
    let suite = weight_suite();
    let subject = |_field: &str, value: &Literal| -> Result<bool, SubjectError> {
        Ok(value.as_f64().is_some_and(|w| (1.0..=1000.0).contains(&w)))
    };

    let cases = TestCaseGenerator::new(suite.table()).generate_all();
    let summary = TestExecutor::new(subject).execute_all(&cases);

    assert_eq!(summary.passed(), 4);
    assert_eq!(summary.failed(), 0);
}

#[test]
fn test_weight_scenario_missing_upper_bound() {
    let suite = weight_suite();
    let subject = |_field: &str, value: &Literal| -> Result<bool, SubjectError> {
        Ok(value.as_f64().is_some_and(|w| w >= 1.0))
    };

    let cases = TestCaseGenerator::new(suite.table()).generate_all();
    let summary = TestExecutor::new(subject).execute_all(&cases);

    assert_eq!(summary.passed(), 3);
    assert_eq!(summary.failed(), 1);
    assert_eq!(
        summary.failed_messages(),
        &["Test case FAILED for field 'transaction_weight' with value '1000.1': Expected invalid, got valid".to_string()]
    );
}

#[test]
fn test_always_false_subject() {
    let suite = builtin_suite(&HarnessConfig::default(), today()).unwrap();
    let cases = TestCaseGenerator::new(suite.table()).generate_all();
    let executor = TestExecutor::new(ConstantSubject::always_invalid());

    for case in cases.iter() {
        let result = executor.execute_one(case);
        assert_eq!(result.passed(), case.expected == Classification::Invalid, "{}", result.message);
    }
}

#[test]
fn test_raising_subject_does_not_stop_the_run() {
    let suite = builtin_suite(&HarnessConfig::default(), today()).unwrap();
    let subject = |field: &str, _value: &Literal| -> Result<bool, SubjectError> {
        if field == "transaction_weight" {
            Err(SubjectError::new("weight service offline"))
        } else {
            Ok(true)
        }
    };

    let cases = TestCaseGenerator::new(suite.table()).generate_all();
    let summary = TestExecutor::new(subject).execute_all(&cases);

    assert_eq!(summary.total(), 12);
    let raised: Vec<_> = summary
        .failed_messages()
        .iter()
        .filter(|m| m.contains("raised an exception") && m.ends_with("weight service offline"))
        .collect();
    assert_eq!(raised.len(), 4);
    // customer_id runs after the failing field
    assert!(summary
        .passed_messages()
        .iter()
        .any(|m| m.contains("'customer_id' with value 'CUST1234'")));
}

#[test]
fn test_totals_match_table() {
    let suite = builtin_suite(&HarnessConfig::default(), today()).unwrap();
    let cases = TestCaseGenerator::new(suite.table()).generate_all();
    let summary = TestExecutor::new(ConstantSubject::always_valid()).execute_all(&cases);

    assert_eq!(summary.total(), summary.passed() + summary.failed());
    assert_eq!(summary.total(), suite.table().case_count());
    assert_eq!(cases.total(), suite.table().case_count());
}

#[test]
fn test_generation_is_deterministic() {
    let suite = builtin_suite(&HarnessConfig::default(), today()).unwrap();
    let generator = TestCaseGenerator::new(suite.table());
    assert_eq!(generator.generate_all(), generator.generate_all());
}

#[test]
fn test_reference_subject_never_fails() {
    let suite = builtin_suite(&HarnessConfig::default(), today()).unwrap();
    assert!(check_consistency(suite.schema(), suite.table()).unwrap().is_empty());

    let cases = TestCaseGenerator::new(suite.table()).generate_all();
    let summary = TestExecutor::new(ReferenceSubject::new(suite.schema().clone())).execute_all(&cases);
    assert_eq!(summary.failed(), 0);
}

#[test]
fn test_report_file_is_overwritten_with_rendered_text() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("test_case_report.txt");
    let config = HarnessConfig::default().with_report_path(&path);

    let first = Harness::new(customer_suite(), ConstantSubject::always_invalid(), config.clone())
        .run()
        .unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), TextReporter::generate(&first));

    let second = Harness::new(customer_suite(), ConstantSubject::always_valid(), config)
        .run()
        .unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, TextReporter::generate(&second));
    assert!(written.contains("Passed: 1\nFailed: 3"));
    assert!(!written.ends_with('\n'));
}

#[test]
fn test_json_report_on_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.json");

    let cases = TestCaseGenerator::new(weight_suite().table()).generate_all();
    let summary = TestExecutor::new(ConstantSubject::always_valid()).execute_all(&cases);
    Reporter::new(&path, ReportFormat::Json).report(&summary).unwrap();

    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed["passed"], 2);
    assert_eq!(parsed["failed"], 2);
}

#[test]
fn test_suite_from_yaml_runs_end_to_end() {
    let yaml = r#"
fields:
  - name: customer_id
    data_type: string
    constraints: { pattern: '^CUST\d{4}$' }
    valid: [CUST1234]
    invalid: [1234CUST, CUST-1234]
  - name: amount
    data_type: float
    constraints: { min_value: 1, max_value: 10 }
    valid: [1, 10]
    invalid: [0.9, 10.1]
"#;
    let suite = eqharness_core::suite::load_suite_from_yaml(yaml).unwrap();
    let dir = TempDir::new().unwrap();
    let config = HarnessConfig::default().with_report_path(dir.path().join("out.txt"));
    let subject = ReferenceSubject::new(suite.schema().clone());

    let summary = Harness::new(suite, subject, config).run().unwrap();
    assert_eq!(summary.total(), 7);
    assert_eq!(summary.failed(), 0);
}
