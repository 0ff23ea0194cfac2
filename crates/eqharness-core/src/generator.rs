//! Test case generation
//!
//! Expands an [`EquivalenceTable`] into concrete test cases. Expansion is
//! deterministic and order preserving; each case touches exactly one field.

use serde::{Deserialize, Serialize};

use crate::classes::{EquivalenceClassSet, EquivalenceTable};
use crate::error::{HarnessError, HarnessResult};
use crate::schema::Literal;

/// Expected or observed classification of a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Valid,
    Invalid,
}

impl Classification {
    /// Map a validator/subject boolean to a classification
    pub fn from_valid(is_valid: bool) -> Self {
        if is_valid {
            Classification::Valid
        } else {
            Classification::Invalid
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Valid => "valid",
            Classification::Invalid => "invalid",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single generated test case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    pub field_name: String,
    pub value: Literal,
    pub expected: Classification,
}

impl TestCase {
    pub fn new(field_name: impl Into<String>, value: Literal, expected: Classification) -> Self {
        Self {
            field_name: field_name.into(),
            value,
            expected,
        }
    }
}

/// Generated cases for one field, valid before invalid
#[derive(Debug, Clone, PartialEq)]
pub struct FieldCases {
    pub field_name: String,
    pub valid: Vec<TestCase>,
    pub invalid: Vec<TestCase>,
}

impl FieldCases {
    fn from_set(set: &EquivalenceClassSet) -> Self {
        let expand = |values: &[Literal], expected: Classification| -> Vec<TestCase> {
            values
                .iter()
                .map(|v| TestCase::new(set.field_name.clone(), v.clone(), expected))
                .collect()
        };

        Self {
            field_name: set.field_name.clone(),
            valid: expand(&set.valid, Classification::Valid),
            invalid: expand(&set.invalid, Classification::Invalid),
        }
    }

    /// Valid cases followed by invalid cases
    pub fn iter(&self) -> impl Iterator<Item = &TestCase> {
        self.valid.iter().chain(self.invalid.iter())
    }

    pub fn len(&self) -> usize {
        self.valid.len() + self.invalid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Generated cases for every field, in declaration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratedCases {
    fields: Vec<FieldCases>,
}

impl GeneratedCases {
    /// Cases for a field
    pub fn get(&self, field_name: &str) -> Option<&FieldCases> {
        self.fields.iter().find(|f| f.field_name == field_name)
    }

    /// Per-field cases in declaration order
    pub fn fields(&self) -> &[FieldCases] {
        &self.fields
    }

    /// All cases in execution order
    pub fn iter(&self) -> impl Iterator<Item = &TestCase> {
        self.fields.iter().flat_map(FieldCases::iter)
    }

    /// Total number of cases
    pub fn total(&self) -> usize {
        self.fields.iter().map(FieldCases::len).sum()
    }
}

/// Expands an equivalence table into test cases
pub struct TestCaseGenerator<'a> {
    table: &'a EquivalenceTable,
}

impl<'a> TestCaseGenerator<'a> {
    pub fn new(table: &'a EquivalenceTable) -> Self {
        Self { table }
    }

    /// Generate the cases for one field
    pub fn generate(&self, field_name: &str) -> HarnessResult<FieldCases> {
        self.table
            .get(field_name)
            .map(FieldCases::from_set)
            .ok_or_else(|| HarnessError::unknown_field(field_name))
    }

    /// Generate the cases for every field in the table
    pub fn generate_all(&self) -> GeneratedCases {
        GeneratedCases {
            fields: self.table.sets().iter().map(FieldCases::from_set).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> EquivalenceTable {
        EquivalenceTable::new(vec![
            EquivalenceClassSet::new("transaction_weight")
                .with_valid(1.0)
                .with_valid(1000.0)
                .with_invalid(0.9)
                .with_invalid(1000.1),
            EquivalenceClassSet::new("customer_id")
                .with_valid("CUST1234")
                .with_invalid("1234CUST")
                .with_invalid("CUST-1234")
                .with_invalid("CUST ABCD"),
        ])
        .unwrap()
    }

    #[test]
    fn test_generate_single_field() {
        let table = table();
        let cases = TestCaseGenerator::new(&table).generate("customer_id").unwrap();

        assert_eq!(cases.valid.len(), 1);
        assert_eq!(cases.invalid.len(), 3);
        assert_eq!(
            cases.valid[0],
            TestCase::new("customer_id", Literal::text("CUST1234"), Classification::Valid)
        );
        assert!(cases.invalid.iter().all(|c| c.expected == Classification::Invalid));
    }

    #[test]
    fn test_generate_unknown_field() {
        let table = table();
        let err = TestCaseGenerator::new(&table).generate("missing").unwrap_err();
        assert!(matches!(err, HarnessError::UnknownField { .. }));
    }

    #[test]
    fn test_generate_all_preserves_order() {
        let table = table();
        let all = TestCaseGenerator::new(&table).generate_all();

        let order: Vec<_> = all.fields().iter().map(|f| f.field_name.as_str()).collect();
        assert_eq!(order, vec!["transaction_weight", "customer_id"]);

        let weights: Vec<_> = all
            .get("transaction_weight")
            .unwrap()
            .iter()
            .map(|c| c.value.to_string())
            .collect();
        assert_eq!(weights, vec!["1", "1000", "0.9", "1000.1"]);
        assert_eq!(all.total(), table.case_count());
        assert_eq!(all.iter().count(), 8);
    }

    #[test]
    fn test_generate_all_is_deterministic() {
        let table = table();
        let generator = TestCaseGenerator::new(&table);
        assert_eq!(generator.generate_all(), generator.generate_all());
    }

    #[test]
    fn test_classification_from_valid() {
        assert_eq!(Classification::from_valid(true).to_string(), "valid");
        assert_eq!(Classification::from_valid(false).to_string(), "invalid");
    }
}
