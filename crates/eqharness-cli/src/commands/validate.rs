//! Validate command: check a single record

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use eqharness_core::{DataType, FieldSchema, Literal};

use super::CommandContext;

/// Validate `FIELD=VALUE` pairs in order, stopping at the first failure
pub fn execute(
    ctx: &CommandContext,
    suite_path: Option<&Path>,
    pairs: &[(String, String)],
) -> Result<ExitCode> {
    let suite = ctx.load_suite(suite_path)?;
    let schema = suite.schema();

    let record: Vec<(&str, Literal)> = pairs
        .iter()
        .map(|(field, raw)| (field.as_str(), typed_literal(schema, field, raw)))
        .collect();

    let valid = schema.validate_record(record.iter().map(|(field, value)| (*field, value)))?;

    if valid {
        ctx.console.success("Record is valid");
        Ok(ExitCode::SUCCESS)
    } else {
        ctx.console.error("Record is invalid");
        Ok(ExitCode::FAILURE)
    }
}

/// Numbers only for float fields; other fields take the raw text
fn typed_literal(schema: &FieldSchema, field: &str, raw: &str) -> Literal {
    match schema.get(field).map(|f| f.data_type()) {
        Some(DataType::Float) => Literal::parse(raw),
        _ => Literal::text(raw),
    }
}
