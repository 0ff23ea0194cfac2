//! Validation suites
//!
//! A suite pairs a [`FieldSchema`] with the [`EquivalenceTable`] that
//! exercises it. Suites come from the built-in definition or from YAML/JSON
//! files.

mod builtin;
mod loader;

pub use builtin::{BOUNDARY_STEP, builtin_suite};
pub use loader::{SuiteLoader, load_suite_from_yaml};

use crate::classes::{EquivalenceClassSet, EquivalenceTable};
use crate::error::{HarnessError, HarnessResult};
use crate::schema::FieldSchema;

/// Schema plus the equivalence classes that test it
#[derive(Debug, Clone)]
pub struct Suite {
    schema: FieldSchema,
    table: EquivalenceTable,
}

impl Suite {
    /// Pair a schema with its table.
    ///
    /// Every table entry must name a schema field. The table is reordered to
    /// follow the schema, and fields without classes get an empty set.
    pub fn new(schema: FieldSchema, table: EquivalenceTable) -> HarnessResult<Self> {
        if let Some(stray) = table
            .sets()
            .iter()
            .find(|set| schema.get(&set.field_name).is_none())
        {
            return Err(HarnessError::unknown_field(&stray.field_name));
        }

        let ordered = schema
            .names()
            .map(|name| {
                table
                    .get(name)
                    .cloned()
                    .unwrap_or_else(|| EquivalenceClassSet::new(name))
            })
            .collect();

        Ok(Self {
            table: EquivalenceTable::new(ordered)?,
            schema,
        })
    }

    pub fn schema(&self) -> &FieldSchema {
        &self.schema
    }

    pub fn table(&self) -> &EquivalenceTable {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{DataTypeConstraints, FieldSpec, FloatConstraint, StringConstraint};

    fn schema() -> FieldSchema {
        FieldSchema::new(vec![
            FieldSpec::new(
                "weight",
                DataTypeConstraints::Float(FloatConstraint::new("weight", 1.0, 10.0).unwrap()),
            ),
            FieldSpec::new(
                "code",
                DataTypeConstraints::String(StringConstraint::new("code", "[A-Z]{3}").unwrap()),
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_table_follows_schema_order() {
        let table = EquivalenceTable::new(vec![
            EquivalenceClassSet::new("code").with_valid("ABC"),
            EquivalenceClassSet::new("weight").with_valid(5.0),
        ])
        .unwrap();

        let suite = Suite::new(schema(), table).unwrap();
        let names: Vec<_> = suite.table().sets().iter().map(|s| s.field_name.as_str()).collect();
        assert_eq!(names, vec!["weight", "code"]);
    }

    #[test]
    fn test_missing_classes_become_empty_sets() {
        let table =
            EquivalenceTable::new(vec![EquivalenceClassSet::new("code").with_valid("ABC")]).unwrap();

        let suite = Suite::new(schema(), table).unwrap();
        assert_eq!(suite.table().sets().len(), 2);
        assert_eq!(suite.table().get("weight").unwrap().case_count(), 0);
        assert_eq!(suite.table().case_count(), 1);
    }

    #[test]
    fn test_unknown_table_field_rejected() {
        let table =
            EquivalenceTable::new(vec![EquivalenceClassSet::new("colour").with_valid("red")]).unwrap();

        let err = Suite::new(schema(), table).unwrap_err();
        assert!(matches!(err, HarnessError::UnknownField { field } if field == "colour"));
    }
}
