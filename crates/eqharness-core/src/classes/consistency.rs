//! Offline self-consistency check of an equivalence table

use serde::Serialize;

use super::EquivalenceTable;
use crate::error::HarnessResult;
use crate::generator::Classification;
use crate::schema::{FieldSchema, Literal};

/// A literal whose validator outcome disagrees with its class
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassViolation {
    pub field_name: String,
    pub value: Literal,
    pub expected: Classification,
    pub actual: Classification,
    /// Description of the field's constraint
    pub constraint: String,
}

impl std::fmt::Display for ClassViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "field '{}' value '{}' is listed as {} but validates as {} ({})",
            self.field_name, self.value, self.expected, self.actual, self.constraint
        )
    }
}

/// Run every literal of the table through the schema's validator.
///
/// Returns the violations in table order. A class set naming a field the
/// schema does not declare is an error.
pub fn check_consistency(
    schema: &FieldSchema,
    table: &EquivalenceTable,
) -> HarnessResult<Vec<ClassViolation>> {
    let mut violations = Vec::new();

    for set in table.sets() {
        let field = schema.field(&set.field_name)?;
        let classes = set
            .valid
            .iter()
            .map(|v| (v, Classification::Valid))
            .chain(set.invalid.iter().map(|v| (v, Classification::Invalid)));

        for (value, expected) in classes {
            let actual = Classification::from_valid(field.validate(value));
            if actual != expected {
                violations.push(ClassViolation {
                    field_name: set.field_name.clone(),
                    value: value.clone(),
                    expected,
                    actual,
                    constraint: field.constraints().describe(),
                });
            }
        }
    }

    Ok(violations)
}
