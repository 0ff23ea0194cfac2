//! Field schema and validation
//!
//! A [`FieldSchema`] is an ordered set of uniquely named [`FieldSpec`]s.
//! Validation dispatches on each field's data type and is pure; the only
//! side effect in this module is the `ERROR` log line emitted by
//! [`FieldSchema::validate_record`].

mod constraints;
mod field;
mod literal;

pub use constraints::{
    Constraint, DataTypeConstraints, DateConstraint, DateRange, FloatConstraint,
    StringConstraint, parse_date,
};
pub use field::{DataType, FieldSpec};
pub use literal::Literal;

use crate::error::{HarnessError, HarnessResult};

/// Ordered collection of field specifications
#[derive(Debug, Clone, Default)]
pub struct FieldSchema {
    fields: Vec<FieldSpec>,
}

impl FieldSchema {
    /// Build a schema, rejecting duplicate field names
    pub fn new(fields: Vec<FieldSpec>) -> HarnessResult<Self> {
        let mut schema = Self::default();
        for field in fields {
            schema.push(field)?;
        }
        Ok(schema)
    }

    /// Append a field
    pub fn push(&mut self, field: FieldSpec) -> HarnessResult<()> {
        if self.get(field.name()).is_some() {
            return Err(HarnessError::DuplicateField {
                field: field.name().to_string(),
            });
        }
        self.fields.push(field);
        Ok(())
    }

    /// Look up a field by name
    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Look up a field, failing if it is not declared
    pub fn field(&self, name: &str) -> HarnessResult<&FieldSpec> {
        self.get(name)
            .ok_or_else(|| HarnessError::unknown_field(name))
    }

    /// Fields in declaration order
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Field names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validate a single value for a named field
    pub fn validate(&self, field_name: &str, value: &Literal) -> HarnessResult<bool> {
        Ok(self.field(field_name)?.validate(value))
    }

    /// Validate a whole record, stopping at the first failing field.
    ///
    /// The failing field is logged at `ERROR`.
    pub fn validate_record<'a, I>(&self, record: I) -> HarnessResult<bool>
    where
        I: IntoIterator<Item = (&'a str, &'a Literal)>,
    {
        for (field_name, value) in record {
            if !self.validate(field_name, value)? {
                tracing::error!(
                    "Validation failed for field: {}, value: {}",
                    field_name,
                    value
                );
                return Ok(false);
            }
        }
        Ok(true)
    }
}
