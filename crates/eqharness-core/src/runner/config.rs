//! Harness configuration
//!
//! Global parameters for a run: the built-in field limits, where the report
//! goes, and whether the class table is checked before executing.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{HarnessError, HarnessResult};
use crate::report::ReportFormat;

/// Default report file, relative to the working directory
pub const DEFAULT_REPORT_PATH: &str = "test_case_report.txt";

/// Configuration for harness runs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Format of date inputs
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Lower bound of the built-in transaction weight field
    #[serde(default = "default_min_weight")]
    pub min_transaction_weight: f64,

    /// Upper bound of the built-in transaction weight field
    #[serde(default = "default_max_weight")]
    pub max_transaction_weight: f64,

    /// Size of the built-in transaction date window, in days before today
    #[serde(default = "default_date_window")]
    pub date_window_days: u32,

    /// Where the report is written (overwritten on every run)
    #[serde(default = "default_report_path")]
    pub report_path: PathBuf,

    /// Report layout
    #[serde(default)]
    pub report_format: ReportFormat,

    /// Whether to check the equivalence table against the validator first
    #[serde(default = "default_verify_schema")]
    pub verify_schema: bool,
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_min_weight() -> f64 {
    1.0
}

fn default_max_weight() -> f64 {
    1000.0
}

fn default_date_window() -> u32 {
    30
}

fn default_report_path() -> PathBuf {
    PathBuf::from(DEFAULT_REPORT_PATH)
}

fn default_verify_schema() -> bool {
    true
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            min_transaction_weight: default_min_weight(),
            max_transaction_weight: default_max_weight(),
            date_window_days: default_date_window(),
            report_path: default_report_path(),
            report_format: ReportFormat::default(),
            verify_schema: default_verify_schema(),
        }
    }
}

impl HarnessConfig {
    /// Load configuration from a TOML, YAML or JSON file
    pub fn from_file(path: impl AsRef<Path>) -> HarnessResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            HarnessError::config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        let parsed: Result<Self, String> = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => toml::from_str(&content).map_err(|e| e.to_string()),
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content).map_err(|e| e.to_string()),
            Some("json") => serde_json::from_str(&content).map_err(|e| e.to_string()),
            _ => {
                return Err(HarnessError::config(format!(
                    "Unsupported config file extension: {}",
                    path.display()
                )));
            }
        };

        parsed.map_err(|e| {
            HarnessError::config(format!("Failed to parse config file {}: {}", path.display(), e))
        })
    }

    /// Set the transaction weight bounds
    pub fn with_weight_range(mut self, min: f64, max: f64) -> Self {
        self.min_transaction_weight = min;
        self.max_transaction_weight = max;
        self
    }

    /// Set the date window
    pub fn with_date_window(mut self, days: u32) -> Self {
        self.date_window_days = days;
        self
    }

    /// Set the report path
    pub fn with_report_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.report_path = path.into();
        self
    }

    /// Set the report format
    pub fn with_report_format(mut self, format: ReportFormat) -> Self {
        self.report_format = format;
        self
    }

    /// Skip the equivalence table check
    pub fn skip_schema_check(mut self) -> Self {
        self.verify_schema = false;
        self
    }
}
