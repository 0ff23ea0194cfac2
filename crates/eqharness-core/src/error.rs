//! Error types for the validation harness
//!
//! Schema and I/O failures are fatal and surface through [`HarnessError`].
//! Failures raised by the subject under test live in
//! [`SubjectError`](crate::runner::SubjectError) and never abort a run.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for harness operations
pub type HarnessResult<T> = Result<T, HarnessError>;

/// Main error type for the harness
#[derive(Error, Debug)]
pub enum HarnessError {
    /// A field declared a data type the validator cannot dispatch on
    #[error("Unsupported data type: {data_type}")]
    UnsupportedType { data_type: String },

    /// A field name that is not part of the schema
    #[error("Unknown field: {field}")]
    UnknownField { field: String },

    /// Two fields share the same name
    #[error("Duplicate field in schema: {field}")]
    DuplicateField { field: String },

    /// A string constraint whose pattern does not compile
    #[error("Invalid pattern for field '{field}': {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },

    /// Constraint values that are missing or malformed
    #[error("Invalid constraint for field '{field}': {message}")]
    InvalidConstraint { field: String, message: String },

    /// Configuration or suite file problems
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Summary could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Report file could not be written
    #[error("Failed to write report to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl HarnessError {
    /// Create an unsupported type error
    pub fn unsupported_type(data_type: impl Into<String>) -> Self {
        Self::UnsupportedType {
            data_type: data_type.into(),
        }
    }

    /// Create an unknown field error
    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::UnknownField {
            field: field.into(),
        }
    }

    /// Create an invalid constraint error
    pub fn invalid_constraint(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConstraint {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Whether this error comes from the schema definition itself
    pub fn is_schema_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedType { .. }
                | Self::UnknownField { .. }
                | Self::DuplicateField { .. }
                | Self::InvalidPattern { .. }
                | Self::InvalidConstraint { .. }
        )
    }
}
