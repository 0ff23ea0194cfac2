//! Built-in transaction suite
//!
//! Three fields: a transaction date in a trailing window, a bounded
//! transaction weight, and a customer identifier.

use chrono::{Duration, NaiveDate, NaiveTime};

use super::Suite;
use crate::classes::{EquivalenceClassSet, EquivalenceTable};
use crate::error::{HarnessError, HarnessResult};
use crate::runner::HarnessConfig;
use crate::schema::{
    DataTypeConstraints, DateConstraint, DateRange, FieldSchema, FieldSpec, FloatConstraint,
    StringConstraint,
};

/// Distance outside the weight bounds used for invalid boundary values
pub const BOUNDARY_STEP: f64 = 0.1;

const CUSTOMER_ID_PATTERN: &str = r"^CUST\d{4}$";

/// Build the built-in suite relative to `today`
pub fn builtin_suite(config: &HarnessConfig, today: NaiveDate) -> HarnessResult<Suite> {
    let window = i64::from(config.date_window_days);
    let date = |offset: i64| -> HarnessResult<String> {
        let day = today
            .checked_add_signed(Duration::days(offset))
            .ok_or_else(|| {
                HarnessError::invalid_constraint(
                    "transaction_date",
                    format!("{} days from {} is out of range", offset, today),
                )
            })?;
        Ok(day
            .and_time(NaiveTime::default())
            .format(&config.date_format)
            .to_string())
    };

    let min = config.min_transaction_weight;
    let max = config.max_transaction_weight;

    let schema = FieldSchema::new(vec![
        FieldSpec::new(
            "transaction_date",
            DataTypeConstraints::Date(DateConstraint::new(
                "transaction_date",
                config.date_format.clone(),
                DateRange::last_days("transaction_date", today, config.date_window_days)?,
            )?),
        ),
        FieldSpec::new(
            "transaction_weight",
            DataTypeConstraints::Float(FloatConstraint::new("transaction_weight", min, max)?),
        ),
        FieldSpec::new(
            "customer_id",
            DataTypeConstraints::String(StringConstraint::new(
                "customer_id",
                CUSTOMER_ID_PATTERN,
            )?),
        ),
    ])?;

    let table = EquivalenceTable::new(vec![
        EquivalenceClassSet::new("transaction_date")
            .with_valid(date(-window)?)
            .with_valid(date(0)?)
            .with_invalid(date(-window - 1)?)
            .with_invalid(date(1)?),
        EquivalenceClassSet::new("transaction_weight")
            .with_valid(min)
            .with_valid(max)
            .with_invalid(min - BOUNDARY_STEP)
            .with_invalid(max + BOUNDARY_STEP),
        EquivalenceClassSet::new("customer_id")
            .with_valid("CUST1234")
            .with_invalid("1234CUST")
            .with_invalid("CUST-1234")
            .with_invalid("CUST ABCD"),
    ])?;

    tracing::debug!(
        "built-in suite: {} fields, {} cases",
        schema.len(),
        table.case_count()
    );

    Suite::new(schema, table)
}
