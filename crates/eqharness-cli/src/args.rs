//! CLI argument definitions using clap
//!
//! - eqharness run                # Run the built-in suite
//! - eqharness run --suite FILE   # Run a suite file
//! - eqharness check              # Check the class table against the validator
//! - eqharness cases              # List generated test cases
//! - eqharness validate F=V ...   # Validate a single record

use clap::{Parser, Subcommand, ValueEnum};
use eqharness_core::ReportFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "eqharness")]
#[command(about = "Equivalence-class input validation harness")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (TOML, YAML or JSON)
    #[arg(long, global = true, env = "EQHARNESS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate, execute and report every test case
    Run {
        /// Suite file to run instead of the built-in suite
        #[arg(long)]
        suite: Option<PathBuf>,

        /// Function under test
        #[arg(long, value_enum, default_value = "unimplemented")]
        subject: SubjectArg,

        /// Report file (overrides the configuration)
        #[arg(long)]
        report: Option<PathBuf>,

        /// Report format (overrides the configuration)
        #[arg(long, value_enum)]
        format: Option<FormatArg>,

        /// Exit successfully even when test cases fail
        #[arg(long)]
        allow_failures: bool,
    },

    /// Check that every class literal validates as its class says
    Check {
        /// Suite file to check instead of the built-in suite
        #[arg(long)]
        suite: Option<PathBuf>,
    },

    /// List generated test cases
    Cases {
        /// Suite file instead of the built-in suite
        #[arg(long)]
        suite: Option<PathBuf>,

        /// Only list cases for this field
        #[arg(long)]
        field: Option<String>,
    },

    /// Validate one record given as FIELD=VALUE pairs
    Validate {
        /// Suite file instead of the built-in suite
        #[arg(long)]
        suite: Option<PathBuf>,

        /// Field assignments, checked in order
        #[arg(required = true, value_name = "FIELD=VALUE", value_parser = parse_assignment)]
        pairs: Vec<(String, String)>,
    },
}

/// Subjects selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SubjectArg {
    /// Placeholder that fails on every call
    Unimplemented,
    /// The schema's own validator
    Reference,
    /// Accepts every input
    AlwaysValid,
    /// Rejects every input
    AlwaysInvalid,
}

/// Report formats selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => ReportFormat::Text,
            FormatArg::Json => ReportFormat::Json,
        }
    }
}

fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((field, value)) if !field.is_empty() => Ok((field.to_string(), value.to_string())),
        _ => Err(format!("expected FIELD=VALUE, got '{}'", raw)),
    }
}
