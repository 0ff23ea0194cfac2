//! Harness runner components
//!
//! This module provides the execution infrastructure: the subject boundary,
//! the per-case executor, and the end-to-end pipeline.

mod config;
mod executor;
mod harness;
mod subject;

pub use config::{DEFAULT_REPORT_PATH, HarnessConfig};
pub use executor::{ExecutionProgress, ProgressCallback, TestExecutor};
pub use harness::Harness;
pub use subject::{
    ConstantSubject, ReferenceSubject, Subject, SubjectError, UnimplementedSubject,
};
