//! Human-readable rendering of values and individual case outcomes

use crate::error::HarnessResult;
use crate::generator::TestCase;
use crate::schema::{DataType, DataTypeConstraints, FieldSchema, Literal, parse_date};

/// Render a value for display under its field's data type.
///
/// Dates are re-rendered in `date_format` when they parse and left as is
/// otherwise. Numbers on float fields get two decimals.
pub fn format_value(value: &Literal, data_type: DataType, date_format: &str) -> String {
    match (data_type, value) {
        (DataType::Date, Literal::Text(text)) => parse_date(date_format, text)
            .map(|instant| instant.format(date_format).to_string())
            .unwrap_or_else(|| text.clone()),
        (DataType::Float, Literal::Number(n)) => format!("{:.2}", n),
        _ => value.to_string(),
    }
}

/// One-line PASSED/FAILED summary of a case, with the value formatted for
/// its field
pub fn format_test_case_result(
    schema: &FieldSchema,
    case: &TestCase,
    passed: bool,
) -> HarnessResult<String> {
    let field = schema.field(&case.field_name)?;
    let date_format = match field.constraints() {
        DataTypeConstraints::Date(date) => date.format.as_str(),
        _ => "",
    };
    let formatted = format_value(&case.value, field.data_type(), date_format);

    Ok(format!(
        "Test case for field '{}' with value '{}' {}",
        case.field_name,
        formatted,
        if passed { "PASSED" } else { "FAILED" }
    ))
}
