//! Per-type constraint checks
//!
//! Each data kind has its own constraint type implementing [`Constraint`].
//! [`DataTypeConstraints`] is the tagged union stored on a field.

use chrono::format::{Item, StrftimeItems};
use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

use super::field::DataType;
use super::literal::Literal;
use crate::error::{HarnessError, HarnessResult};

/// Shared validation capability of every constraint kind
pub trait Constraint {
    /// Data type this constraint applies to
    fn data_type(&self) -> DataType;

    /// Check whether a value satisfies the constraint
    fn validate(&self, value: &Literal) -> bool;

    /// Short human-readable description
    fn describe(&self) -> String;
}

/// Parse a date/time string under a strftime-style format.
///
/// Date-only formats resolve to midnight.
pub fn parse_date(format: &str, text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, format)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(text, format)
                .ok()
                .map(|d| d.and_time(NaiveTime::default()))
        })
}

/// Inclusive date range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateRange {
    /// Create a range; `start` must not be after `end`
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// The last `days` days up to and including the whole of `today`.
    ///
    /// A window reaching past the earliest representable date is an
    /// invalid constraint on `field`.
    pub fn last_days(field: &str, today: NaiveDate, days: u32) -> HarnessResult<Self> {
        let start = today
            .checked_sub_days(Days::new(u64::from(days)))
            .ok_or_else(|| {
                HarnessError::invalid_constraint(
                    field,
                    format!("a {} day window before {} is out of range", days, today),
                )
            })?
            .and_time(NaiveTime::default());
        let end = today
            .and_hms_opt(23, 59, 59)
            .unwrap_or_else(|| today.and_time(NaiveTime::default()));
        Ok(Self { start, end })
    }

    /// Whether an instant falls inside the range
    pub fn contains(&self, instant: &NaiveDateTime) -> bool {
        self.start <= *instant && *instant <= self.end
    }
}

/// Date constraint: parse under `format`, then fall within `valid_range`
#[derive(Debug, Clone)]
pub struct DateConstraint {
    pub format: String,
    pub valid_range: DateRange,
}

impl DateConstraint {
    /// Create a date constraint, rejecting formats chrono cannot render
    pub fn new(field: &str, format: impl Into<String>, valid_range: DateRange) -> HarnessResult<Self> {
        let format = format.into();
        if format.is_empty() || StrftimeItems::new(&format).any(|item| matches!(item, Item::Error)) {
            return Err(HarnessError::invalid_constraint(
                field,
                format!("invalid date format '{}'", format),
            ));
        }
        Ok(Self {
            format,
            valid_range,
        })
    }
}

impl Constraint for DateConstraint {
    fn data_type(&self) -> DataType {
        DataType::Date
    }

    fn validate(&self, value: &Literal) -> bool {
        value
            .as_str()
            .and_then(|text| parse_date(&self.format, text))
            .is_some_and(|instant| self.valid_range.contains(&instant))
    }

    fn describe(&self) -> String {
        format!(
            "date {} in [{}, {}]",
            self.format,
            self.valid_range.start.format(&self.format),
            self.valid_range.end.format(&self.format)
        )
    }
}

/// Float constraint: inclusive `[min_value, max_value]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatConstraint {
    pub min_value: f64,
    pub max_value: f64,
}

impl FloatConstraint {
    /// Create a float range, rejecting inverted or non-finite bounds
    pub fn new(field: &str, min_value: f64, max_value: f64) -> HarnessResult<Self> {
        if !min_value.is_finite() || !max_value.is_finite() {
            return Err(HarnessError::invalid_constraint(
                field,
                "min_value and max_value must be finite",
            ));
        }
        if min_value > max_value {
            return Err(HarnessError::invalid_constraint(
                field,
                format!("min_value {} exceeds max_value {}", min_value, max_value),
            ));
        }
        Ok(Self {
            min_value,
            max_value,
        })
    }
}

impl Constraint for FloatConstraint {
    fn data_type(&self) -> DataType {
        DataType::Float
    }

    fn validate(&self, value: &Literal) -> bool {
        value
            .as_f64()
            .is_some_and(|v| self.min_value <= v && v <= self.max_value)
    }

    fn describe(&self) -> String {
        format!("float in [{}, {}]", self.min_value, self.max_value)
    }
}

/// String constraint: the whole value must match `pattern`
#[derive(Debug, Clone)]
pub struct StringConstraint {
    pattern: String,
    regex: Regex,
}

impl StringConstraint {
    /// Compile a pattern with full-match semantics.
    ///
    /// Unanchored patterns are wrapped so they never match a substring.
    pub fn new(field: &str, pattern: impl Into<String>) -> HarnessResult<Self> {
        let pattern = pattern.into();
        let regex = Regex::new(&format!(r"\A(?:{})\z", pattern)).map_err(|source| {
            HarnessError::InvalidPattern {
                field: field.to_string(),
                source,
            }
        })?;
        Ok(Self { pattern, regex })
    }

    /// Pattern as declared
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Constraint for StringConstraint {
    fn data_type(&self) -> DataType {
        DataType::String
    }

    fn validate(&self, value: &Literal) -> bool {
        value.as_str().is_some_and(|s| self.regex.is_match(s))
    }

    fn describe(&self) -> String {
        format!("string matching {}", self.pattern)
    }
}

/// Constraints attached to a field, tagged by data type
#[derive(Debug, Clone)]
pub enum DataTypeConstraints {
    Date(DateConstraint),
    Float(FloatConstraint),
    String(StringConstraint),
}

impl DataTypeConstraints {
    /// The constraint as a trait object
    pub fn as_constraint(&self) -> &dyn Constraint {
        match self {
            DataTypeConstraints::Date(c) => c,
            DataTypeConstraints::Float(c) => c,
            DataTypeConstraints::String(c) => c,
        }
    }

    /// Data type of these constraints
    pub fn data_type(&self) -> DataType {
        self.as_constraint().data_type()
    }

    /// Check a value against these constraints
    pub fn validate(&self, value: &Literal) -> bool {
        self.as_constraint().validate(value)
    }

    pub fn describe(&self) -> String {
        self.as_constraint().describe()
    }
}
