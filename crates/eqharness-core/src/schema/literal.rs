//! Literal input values

use serde::{Deserialize, Serialize};

/// A literal input value handed to validators and the subject under test.
///
/// Dates travel as text in the field's declared format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Number(f64),
    Text(String),
}

impl Literal {
    /// Create a text literal
    pub fn text(value: impl Into<String>) -> Self {
        Literal::Text(value.into())
    }

    /// Numeric value, if this is a number
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Literal::Number(n) => Some(*n),
            Literal::Text(_) => None,
        }
    }

    /// Text value, if this is text
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::Text(s) => Some(s),
            Literal::Number(_) => None,
        }
    }

    /// Parse a command-line style value: numbers become numbers, anything
    /// else stays text.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Literal::Number(n),
            _ => Literal::Text(raw.to_string()),
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{}", n),
            Literal::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Number(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::Text(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::Text(value)
    }
}
