//! eqharness command-line interface
//!
//! Runs equivalence-class validation suites against a subject and reports
//! the outcome. The exit status is non-zero when any test case fails (unless
//! `--allow-failures` is given) or when the harness itself errors.
//!
//! # Installation
//!
//! ```bash
//! cargo install --path crates/eqharness-cli
//! ```

mod args;
mod commands;
mod console;
mod router;

use std::process::ExitCode;

use clap::Parser;

use args::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG overrides the default level unless --verbose is given
    eqharness_core::logging::init_logging(cli.verbose);

    match router::route(cli) {
        Ok(code) => code,
        Err(err) => {
            console::CliConsole::new(false).error(&format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
