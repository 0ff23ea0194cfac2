//! CLI commands

pub mod cases;
pub mod check;
pub mod run;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};
use eqharness_core::{HarnessConfig, Suite, SuiteLoader, builtin_suite};

use crate::console::CliConsole;

/// Settings shared by every command
pub struct CommandContext {
    pub config: HarnessConfig,
    pub verbose: bool,
    pub console: CliConsole,
}

impl CommandContext {
    /// Load the configuration file, or fall back to defaults
    pub fn new(config_path: Option<&Path>, verbose: bool) -> Result<Self> {
        let config = match config_path {
            Some(path) => HarnessConfig::from_file(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
            None => HarnessConfig::default(),
        };

        Ok(Self {
            config,
            verbose,
            console: CliConsole::new(verbose),
        })
    }

    /// Load a suite file, or build the built-in suite for today
    pub fn load_suite(&self, suite_path: Option<&Path>) -> Result<Suite> {
        match suite_path {
            Some(path) => {
                self.console
                    .info(&format!("Loading suite from {}", path.display()));
                SuiteLoader::new(&self.config)
                    .load_file(path)
                    .with_context(|| format!("Failed to load suite from {}", path.display()))
            }
            None => builtin_suite(&self.config, chrono::Local::now().date_naive())
                .context("Failed to build the built-in suite"),
        }
    }
}
