//! Check command: verify the class table against the validator

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use eqharness_core::check_consistency;

use super::CommandContext;

/// Report every literal whose class disagrees with the validator
pub fn execute(ctx: &CommandContext, suite_path: Option<&Path>) -> Result<ExitCode> {
    let suite = ctx.load_suite(suite_path)?;
    let violations = check_consistency(suite.schema(), suite.table())?;

    ctx.console.print_header("Equivalence Class Check");
    println!(
        "{} fields, {} literals checked",
        suite.schema().len(),
        suite.table().case_count()
    );

    if violations.is_empty() {
        ctx.console.success("Every literal matches its class");
        return Ok(ExitCode::SUCCESS);
    }

    for violation in &violations {
        ctx.console.warn(&violation.to_string());
    }
    ctx.console
        .error(&format!("{} literal(s) disagree with the validator", violations.len()));
    Ok(ExitCode::FAILURE)
}
