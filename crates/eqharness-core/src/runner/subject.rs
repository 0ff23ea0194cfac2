//! Subject-under-test boundary
//!
//! The harness never calls business logic directly. Whatever classifies
//! inputs is injected as a [`Subject`], so runs can target the real
//! implementation, the reference validator, or fakes.

use thiserror::Error;

use crate::schema::{FieldSchema, Literal};

/// Error raised by a subject during a single invocation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct SubjectError {
    pub message: String,
}

impl SubjectError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The function under test: `true` means the input was accepted as valid
#[cfg_attr(test, mockall::automock)]
pub trait Subject {
    fn process_input(&self, field_name: &str, value: &Literal) -> Result<bool, SubjectError>;
}

impl<F> Subject for F
where
    F: Fn(&str, &Literal) -> Result<bool, SubjectError>,
{
    fn process_input(&self, field_name: &str, value: &Literal) -> Result<bool, SubjectError> {
        self(field_name, value)
    }
}

/// Placeholder for a processing function that has not been written yet.
///
/// Every call fails, so every case is reported as failed.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnimplementedSubject;

impl Subject for UnimplementedSubject {
    fn process_input(&self, _field_name: &str, _value: &Literal) -> Result<bool, SubjectError> {
        Err(SubjectError::new("process_input is not implemented"))
    }
}

/// Subject that answers with the schema's own validator
#[derive(Debug, Clone)]
pub struct ReferenceSubject {
    schema: FieldSchema,
}

impl ReferenceSubject {
    pub fn new(schema: FieldSchema) -> Self {
        Self { schema }
    }
}

impl Subject for ReferenceSubject {
    fn process_input(&self, field_name: &str, value: &Literal) -> Result<bool, SubjectError> {
        self.schema
            .validate(field_name, value)
            .map_err(|e| SubjectError::new(e.to_string()))
    }
}

/// Subject that gives the same answer for every input
#[derive(Debug, Clone, Copy)]
pub struct ConstantSubject {
    answer: bool,
}

impl ConstantSubject {
    pub fn always_valid() -> Self {
        Self { answer: true }
    }

    pub fn always_invalid() -> Self {
        Self { answer: false }
    }
}

impl Subject for ConstantSubject {
    fn process_input(&self, _field_name: &str, _value: &Literal) -> Result<bool, SubjectError> {
        Ok(self.answer)
    }
}
