//! Cases command: list generated test cases

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use eqharness_core::report::format_value;
use eqharness_core::schema::DataTypeConstraints;
use eqharness_core::{FieldCases, FieldSchema, TestCaseGenerator};

use super::CommandContext;

/// Print the cases the generator produces, optionally for one field
pub fn execute(ctx: &CommandContext, suite_path: Option<&Path>, field: Option<&str>) -> Result<ExitCode> {
    let suite = ctx.load_suite(suite_path)?;
    let generator = TestCaseGenerator::new(suite.table());

    let fields = match field {
        Some(name) => vec![generator.generate(name)?],
        None => generator.generate_all().fields().to_vec(),
    };

    ctx.console
        .print_table_header(&["Field", "Expected", "Value"]);

    let mut total = 0;
    for cases in &fields {
        total += print_field(ctx, suite.schema(), cases);
    }

    println!("\nTotal: {} test cases", total);
    Ok(ExitCode::SUCCESS)
}

fn print_field(ctx: &CommandContext, schema: &FieldSchema, cases: &FieldCases) -> usize {
    let Some(field) = schema.get(&cases.field_name) else {
        return 0;
    };
    let date_format = match field.constraints() {
        DataTypeConstraints::Date(date) => date.format.as_str(),
        _ => "",
    };

    for case in cases.iter() {
        let value = format_value(&case.value, field.data_type(), date_format);
        ctx.console
            .print_table_row(&[case.field_name.as_str(), case.expected.as_str(), value.as_str()]);
    }

    cases.len()
}
