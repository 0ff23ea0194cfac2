//! Field definitions

use serde::{Deserialize, Serialize};

use super::constraints::DataTypeConstraints;
use super::literal::Literal;
use crate::error::{HarnessError, HarnessResult};

/// Declared data type of an input field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    Date,
    Float,
    String,
}

impl DataType {
    /// Parse a data type name, failing on anything the validator cannot
    /// dispatch on
    pub fn parse(name: &str) -> HarnessResult<Self> {
        match name {
            "date" => Ok(DataType::Date),
            "float" => Ok(DataType::Float),
            "string" => Ok(DataType::String),
            other => Err(HarnessError::unsupported_type(other)),
        }
    }

    /// Name used in schema files
    pub fn name(&self) -> &'static str {
        match self {
            DataType::Date => "date",
            DataType::Float => "float",
            DataType::String => "string",
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Declarative description of one input field
#[derive(Debug, Clone)]
pub struct FieldSpec {
    name: String,
    constraints: DataTypeConstraints,
}

impl FieldSpec {
    /// Create a field from its constraints; the data type follows from them
    pub fn new(name: impl Into<String>, constraints: DataTypeConstraints) -> Self {
        Self {
            name: name.into(),
            constraints,
        }
    }

    /// Field name (unique within a schema)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared data type
    pub fn data_type(&self) -> DataType {
        self.constraints.data_type()
    }

    /// Constraints for this field
    pub fn constraints(&self) -> &DataTypeConstraints {
        &self.constraints
    }

    /// Check a value against this field's constraints
    pub fn validate(&self, value: &Literal) -> bool {
        self.constraints.validate(value)
    }
}
