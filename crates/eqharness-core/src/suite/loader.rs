//! Suite loading from YAML/JSON files
//!
//! Constraints are kept as raw values until the field's data type is known,
//! then decoded into the matching constraint type.

use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use super::Suite;
use crate::classes::{EquivalenceClassSet, EquivalenceTable};
use crate::error::{HarnessError, HarnessResult};
use crate::runner::HarnessConfig;
use crate::schema::{
    DataType, DataTypeConstraints, DateConstraint, DateRange, FieldSchema, FieldSpec,
    FloatConstraint, Literal, StringConstraint, parse_date,
};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SuiteFile {
    fields: Vec<FieldDefinition>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FieldDefinition {
    name: String,
    data_type: String,
    #[serde(default)]
    constraints: serde_json::Value,
    #[serde(default)]
    valid: Vec<Literal>,
    #[serde(default)]
    invalid: Vec<Literal>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FloatDefinition {
    min_value: f64,
    max_value: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StringDefinition {
    pattern: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DateDefinition {
    #[serde(default)]
    format: Option<String>,
    valid_range: RangeDefinition,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RangeDefinition {
    Absolute { start: String, end: String },
    Relative { last_days: u32 },
}

/// Loader for suite files
#[derive(Debug, Clone)]
pub struct SuiteLoader {
    /// Format for date fields that do not declare one
    default_date_format: String,
    /// Anchor for `last_days` ranges
    today: NaiveDate,
}

impl SuiteLoader {
    /// Create a loader using the configured date format and the local date
    pub fn new(config: &HarnessConfig) -> Self {
        Self {
            default_date_format: config.date_format.clone(),
            today: chrono::Local::now().date_naive(),
        }
    }

    /// Anchor relative date ranges on a fixed day
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Load a suite from a `.yaml`, `.yml` or `.json` file
    pub fn load_file(&self, path: impl AsRef<Path>) -> HarnessResult<Suite> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            HarnessError::config(format!("Failed to read suite file {}: {}", path.display(), e))
        })?;

        tracing::debug!("loading suite from {}", path.display());

        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => self.parse_yaml(&content),
            Some("json") => self.parse_json(&content),
            _ => Err(HarnessError::config(format!(
                "Unsupported suite file extension: {}",
                path.display()
            ))),
        }
    }

    /// Parse a suite from YAML text
    pub fn parse_yaml(&self, yaml: &str) -> HarnessResult<Suite> {
        let file: SuiteFile = serde_yaml::from_str(yaml)
            .map_err(|e| HarnessError::config(format!("Failed to parse YAML suite: {}", e)))?;
        self.build(file)
    }

    /// Parse a suite from JSON text
    pub fn parse_json(&self, json: &str) -> HarnessResult<Suite> {
        let file: SuiteFile = serde_json::from_str(json)
            .map_err(|e| HarnessError::config(format!("Failed to parse JSON suite: {}", e)))?;
        self.build(file)
    }

    fn build(&self, file: SuiteFile) -> HarnessResult<Suite> {
        let mut schema = FieldSchema::default();
        let mut sets = Vec::with_capacity(file.fields.len());

        for definition in file.fields {
            let data_type = DataType::parse(&definition.data_type)?;
            let constraints = self.constraints(&definition.name, data_type, definition.constraints)?;
            schema.push(FieldSpec::new(definition.name.clone(), constraints))?;
            sets.push(EquivalenceClassSet {
                field_name: definition.name,
                valid: definition.valid,
                invalid: definition.invalid,
            });
        }

        Suite::new(schema, EquivalenceTable::new(sets)?)
    }

    fn constraints(
        &self,
        field: &str,
        data_type: DataType,
        raw: serde_json::Value,
    ) -> HarnessResult<DataTypeConstraints> {
        match data_type {
            DataType::Float => {
                let def: FloatDefinition = decode(field, raw)?;
                Ok(DataTypeConstraints::Float(FloatConstraint::new(
                    field,
                    def.min_value,
                    def.max_value,
                )?))
            }
            DataType::String => {
                let def: StringDefinition = decode(field, raw)?;
                Ok(DataTypeConstraints::String(StringConstraint::new(
                    field,
                    def.pattern,
                )?))
            }
            DataType::Date => {
                let def: DateDefinition = decode(field, raw)?;
                let format = def
                    .format
                    .unwrap_or_else(|| self.default_date_format.clone());
                let range = self.date_range(field, &format, def.valid_range)?;
                Ok(DataTypeConstraints::Date(DateConstraint::new(
                    field, format, range,
                )?))
            }
        }
    }

    fn date_range(
        &self,
        field: &str,
        format: &str,
        range: RangeDefinition,
    ) -> HarnessResult<DateRange> {
        match range {
            RangeDefinition::Relative { last_days } => DateRange::last_days(field, self.today, last_days),
            RangeDefinition::Absolute { start, end } => {
                let bound = |text: &str| {
                    parse_date(format, text).ok_or_else(|| {
                        HarnessError::invalid_constraint(
                            field,
                            format!("range bound '{}' does not match format '{}'", text, format),
                        )
                    })
                };
                DateRange::new(bound(&start)?, bound(&end)?).ok_or_else(|| {
                    HarnessError::invalid_constraint(
                        field,
                        format!("range start '{}' is after end '{}'", start, end),
                    )
                })
            }
        }
    }
}

fn decode<T: serde::de::DeserializeOwned>(field: &str, raw: serde_json::Value) -> HarnessResult<T> {
    serde_json::from_value(raw).map_err(|e| HarnessError::invalid_constraint(field, e.to_string()))
}

/// Load a suite from a YAML string with default configuration
pub fn load_suite_from_yaml(yaml: &str) -> HarnessResult<Suite> {
    SuiteLoader::new(&HarnessConfig::default()).parse_yaml(yaml)
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SUITE_YAML: &str = r#"
fields:
  - name: customer_id
    data_type: string
    constraints: { pattern: '^CUST\d{4}$' }
    valid: [CUST1234]
    invalid: [1234CUST, CUST-1234]
  - name: amount
    data_type: float
    constraints: { min_value: 1, max_value: 10 }
    valid: [1, 10]
    invalid: [0.9, 10.1]
  - name: booked_on
    data_type: date
    constraints:
      format: '%Y-%m-%d'
      valid_range: { start: '2024-01-01', end: '2024-12-31' }
    valid: ['2024-01-01']
    invalid: ['2025-01-01']
"#;

    fn loader() -> SuiteLoader {
        SuiteLoader::new(&HarnessConfig::default())
            .with_today(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap())
    }

    #[test]
    fn test_load_suite_from_yaml() {
        let suite = loader().parse_yaml(SUITE_YAML).unwrap();

        let names: Vec<_> = suite.schema().names().collect();
        assert_eq!(names, vec!["customer_id", "amount", "booked_on"]);
        assert_eq!(suite.schema().field("amount").unwrap().data_type(), DataType::Float);

        let amount = suite.table().get("amount").unwrap();
        assert_eq!(amount.valid, vec![Literal::Number(1.0), Literal::Number(10.0)]);
        assert_eq!(suite.table().case_count(), 8);

        let schema = suite.schema();
        assert!(schema.validate("booked_on", &Literal::text("2024-12-31")).unwrap());
        assert!(!schema.validate("booked_on", &Literal::text("2025-01-01")).unwrap());
        assert!(schema.validate("customer_id", &Literal::text("CUST0001")).unwrap());
    }

    #[test]
    fn test_relative_range_uses_loader_today() {
        let yaml = r#"
fields:
  - name: seen
    data_type: date
    constraints:
      valid_range: { last_days: 2 }
"#;
        let suite = loader().parse_yaml(yaml).unwrap();
        let schema = suite.schema();
        assert!(schema.validate("seen", &Literal::text("2024-06-28")).unwrap());
        assert!(schema.validate("seen", &Literal::text("2024-06-30")).unwrap());
        assert!(!schema.validate("seen", &Literal::text("2024-06-27")).unwrap());
        assert!(!schema.validate("seen", &Literal::text("2024-07-01")).unwrap());
    }

    #[test]
    fn test_oversized_relative_range_is_constraint_error() {
        let yaml = r#"
fields:
  - name: seen
    data_type: date
    constraints:
      valid_range: { last_days: 4000000000 }
"#;
        let err = loader().parse_yaml(yaml).unwrap_err();
        assert!(matches!(err, HarnessError::InvalidConstraint { ref field, .. } if field == "seen"));
    }

    #[test]
    fn test_load_suite_from_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"fields": [{{"name": "code", "data_type": "string", "constraints": {{"pattern": "[A-Z]+"}}, "valid": ["ABC"], "invalid": ["abc", 12]}}]}}"#
        )
        .unwrap();

        let suite = loader().load_file(file.path()).unwrap();
        let code = suite.table().get("code").unwrap();
        assert_eq!(code.invalid, vec![Literal::text("abc"), Literal::Number(12.0)]);
    }

    #[test]
    fn test_unknown_data_type() {
        let yaml = r#"
fields:
  - name: flag
    data_type: boolean
"#;
        let err = loader().parse_yaml(yaml).unwrap_err();
        assert!(matches!(err, HarnessError::UnsupportedType { data_type } if data_type == "boolean"));
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let yaml = r#"
fields:
  - name: code
    data_type: string
    constraints: { pattern: 'A' }
  - name: code
    data_type: string
    constraints: { pattern: 'B' }
"#;
        let err = loader().parse_yaml(yaml).unwrap_err();
        assert!(matches!(err, HarnessError::DuplicateField { .. }));
    }

    #[test]
    fn test_malformed_constraints() {
        let missing_max = r#"
fields:
  - name: amount
    data_type: float
    constraints: { min_value: 1 }
"#;
        assert!(matches!(
            loader().parse_yaml(missing_max).unwrap_err(),
            HarnessError::InvalidConstraint { .. }
        ));

        let bad_bound = r#"
fields:
  - name: day
    data_type: date
    constraints:
      valid_range: { start: '01/02/2024', end: '2024-12-31' }
"#;
        assert!(matches!(
            loader().parse_yaml(bad_bound).unwrap_err(),
            HarnessError::InvalidConstraint { .. }
        ));

        let bad_pattern = r#"
fields:
  - name: code
    data_type: string
    constraints: { pattern: '[' }
"#;
        assert!(matches!(
            loader().parse_yaml(bad_pattern).unwrap_err(),
            HarnessError::InvalidPattern { .. }
        ));
    }

    #[test]
    fn test_unsupported_extension() {
        let file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        let err = loader().load_file(file.path()).unwrap_err();
        assert!(matches!(err, HarnessError::Config { .. }));
    }
}
