//! Command routing logic for CLI

use std::process::ExitCode;

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands::{self, CommandContext};

/// Route CLI commands to their respective handlers
pub fn route(cli: Cli) -> Result<ExitCode> {
    let ctx = CommandContext::new(cli.config.as_deref(), cli.verbose)?;

    match cli.command {
        Commands::Run {
            suite,
            subject,
            report,
            format,
            allow_failures,
        } => commands::run::execute(
            &ctx,
            commands::run::RunOptions {
                suite,
                subject,
                report,
                format: format.map(Into::into),
                allow_failures,
            },
        ),
        Commands::Check { suite } => commands::check::execute(&ctx, suite.as_deref()),
        Commands::Cases { suite, field } => {
            commands::cases::execute(&ctx, suite.as_deref(), field.as_deref())
        }
        Commands::Validate { suite, pairs } => {
            commands::validate::execute(&ctx, suite.as_deref(), &pairs)
        }
    }
}
