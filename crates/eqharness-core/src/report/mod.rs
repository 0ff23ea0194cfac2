//! Report generation for harness runs
//!
//! Renders a [`ReportSummary`] as text or JSON, prints it, and persists the
//! same content to the report file.

mod format;
mod json;
mod text;

pub use format::{format_test_case_result, format_value};
pub use json::JsonReporter;
pub use text::TextReporter;

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{HarnessError, HarnessResult};
use crate::metrics::ReportSummary;

/// Report format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl ReportFormat {
    /// Parse from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

/// Generate a report in the specified format
pub fn generate_report(summary: &ReportSummary, format: ReportFormat) -> HarnessResult<String> {
    match format {
        ReportFormat::Text => Ok(TextReporter::generate(summary)),
        ReportFormat::Json => JsonReporter::generate(summary),
    }
}

/// Prints a report and writes it to a file
#[derive(Debug, Clone)]
pub struct Reporter {
    path: PathBuf,
    format: ReportFormat,
}

impl Reporter {
    pub fn new(path: impl Into<PathBuf>, format: ReportFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    /// Print the report to stdout and overwrite the report file with the
    /// same content
    pub fn report(&self, summary: &ReportSummary) -> HarnessResult<()> {
        let content = generate_report(summary, self.format)?;
        println!("{}", content);
        self.write(&content)
    }

    fn write(&self, content: &str) -> HarnessResult<()> {
        let io_err = |source| HarnessError::Io {
            path: self.path.clone(),
            source,
        };

        let mut file = File::create(&self.path).map_err(io_err)?;
        file.write_all(content.as_bytes()).map_err(io_err)?;
        file.flush().map_err(io_err)?;
        tracing::debug!("report written to {}", self.path.display());
        Ok(())
    }
}
