//! Equivalence class tables
//!
//! For each field, an authored list of valid and invalid literals. Valid
//! entries cover the boundaries of the constrained range; invalid entries
//! sit just outside it or are structurally wrong.

mod consistency;

pub use consistency::{ClassViolation, check_consistency};

use serde::{Deserialize, Serialize};

use crate::error::{HarnessError, HarnessResult};
use crate::schema::Literal;

/// Valid and invalid example literals for one field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquivalenceClassSet {
    pub field_name: String,
    #[serde(default)]
    pub valid: Vec<Literal>,
    #[serde(default)]
    pub invalid: Vec<Literal>,
}

impl EquivalenceClassSet {
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            valid: Vec::new(),
            invalid: Vec::new(),
        }
    }

    /// Add a literal to the valid class
    pub fn with_valid(mut self, value: impl Into<Literal>) -> Self {
        self.valid.push(value.into());
        self
    }

    /// Add a literal to the invalid class
    pub fn with_invalid(mut self, value: impl Into<Literal>) -> Self {
        self.invalid.push(value.into());
        self
    }

    /// Number of test cases this set expands to
    pub fn case_count(&self) -> usize {
        self.valid.len() + self.invalid.len()
    }
}

/// Equivalence class sets for every field, in schema order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EquivalenceTable {
    sets: Vec<EquivalenceClassSet>,
}

impl EquivalenceTable {
    /// Build a table, rejecting repeated field names
    pub fn new(sets: Vec<EquivalenceClassSet>) -> HarnessResult<Self> {
        let mut table = Self::default();
        for set in sets {
            if table.get(&set.field_name).is_some() {
                return Err(HarnessError::DuplicateField {
                    field: set.field_name,
                });
            }
            table.sets.push(set);
        }
        Ok(table)
    }

    /// Class set for a field
    pub fn get(&self, field_name: &str) -> Option<&EquivalenceClassSet> {
        self.sets.iter().find(|s| s.field_name == field_name)
    }

    /// Class sets in declaration order
    pub fn sets(&self) -> &[EquivalenceClassSet] {
        &self.sets
    }

    /// Total number of test cases across all fields
    pub fn case_count(&self) -> usize {
        self.sets.iter().map(EquivalenceClassSet::case_count).sum()
    }
}
