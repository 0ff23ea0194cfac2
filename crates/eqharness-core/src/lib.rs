//! Equivalence-class input validation harness
//!
//! This crate tests an input-processing function against declared field
//! constraints. A field schema says what each input must look like, an
//! equivalence table lists valid and invalid example literals per field, and
//! the harness turns those literals into test cases, runs them against the
//! subject under test, and reports which cases disagreed.
//!
//! # Features
//!
//! - **Field schema**: date, float and string fields with per-type constraints
//! - **Equivalence classes**: boundary literals, checked offline against the
//!   validator
//! - **Isolated execution**: subject errors and panics become failed cases
//! - **Report generation**: text and JSON output, printed and written to disk
//!
//! # Example
//!
//! ```rust,ignore
//! use eqharness_core::{Harness, HarnessConfig, ReferenceSubject, builtin_suite};
//!
//! let config = HarnessConfig::default();
//! let suite = builtin_suite(&config, chrono::Local::now().date_naive())?;
//! let subject = ReferenceSubject::new(suite.schema().clone());
//! let summary = Harness::new(suite, subject, config).run()?;
//! assert_eq!(summary.failed(), 0);
//! ```

pub mod classes;
pub mod error;
pub mod generator;
pub mod logging;
pub mod metrics;
pub mod report;
pub mod runner;
pub mod schema;
pub mod suite;

// Re-exports for convenience
pub use classes::{ClassViolation, EquivalenceClassSet, EquivalenceTable, check_consistency};
pub use error::{HarnessError, HarnessResult};
pub use generator::{Classification, FieldCases, GeneratedCases, TestCase, TestCaseGenerator};
pub use metrics::{CaseOutcome, ReportSummary, ResultCollector, TestResult};
pub use report::{ReportFormat, Reporter};
pub use runner::{
    ConstantSubject, Harness, HarnessConfig, ReferenceSubject, Subject, SubjectError,
    TestExecutor, UnimplementedSubject,
};
pub use schema::{DataType, FieldSchema, FieldSpec, Literal};
pub use suite::{Suite, SuiteLoader, builtin_suite};
