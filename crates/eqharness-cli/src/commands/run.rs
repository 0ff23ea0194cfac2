//! Run command: the full generate, execute, report pipeline

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use eqharness_core::report::format_test_case_result;
use eqharness_core::runner::ExecutionProgress;
use eqharness_core::{
    ConstantSubject, Harness, HarnessConfig, ReferenceSubject, ReportFormat, ReportSummary,
    Subject, Suite, UnimplementedSubject,
};

use super::CommandContext;
use crate::args::SubjectArg;
use crate::console::CliConsole;

/// Options for the run command
pub struct RunOptions {
    pub suite: Option<PathBuf>,
    pub subject: SubjectArg,
    pub report: Option<PathBuf>,
    pub format: Option<ReportFormat>,
    pub allow_failures: bool,
}

/// Run a suite against the selected subject
pub fn execute(ctx: &CommandContext, options: RunOptions) -> Result<ExitCode> {
    let suite = ctx.load_suite(options.suite.as_deref())?;

    let mut config = ctx.config.clone();
    if let Some(path) = options.report {
        config = config.with_report_path(path);
    }
    if let Some(format) = options.format {
        config = config.with_report_format(format);
    }

    ctx.console.info(&format!(
        "Running {} test cases against the {:?} subject",
        suite.table().case_count(),
        options.subject
    ));

    let summary = match options.subject {
        SubjectArg::Unimplemented => run_with(ctx, suite, UnimplementedSubject, config.clone()),
        SubjectArg::Reference => {
            let subject = ReferenceSubject::new(suite.schema().clone());
            run_with(ctx, suite, subject, config.clone())
        }
        SubjectArg::AlwaysValid => {
            run_with(ctx, suite, ConstantSubject::always_valid(), config.clone())
        }
        SubjectArg::AlwaysInvalid => {
            run_with(ctx, suite, ConstantSubject::always_invalid(), config.clone())
        }
    }?;

    println!();
    if summary.has_failures() {
        ctx.console.warn(&format!(
            "{}/{} test cases failed (report: {})",
            summary.failed(),
            summary.total(),
            config.report_path.display()
        ));
        if !options.allow_failures {
            return Ok(ExitCode::FAILURE);
        }
    } else {
        ctx.console.success(&format!(
            "All {} test cases passed (report: {})",
            summary.total(),
            config.report_path.display()
        ));
    }

    Ok(ExitCode::SUCCESS)
}

fn run_with<S: Subject>(
    ctx: &CommandContext,
    suite: Suite,
    subject: S,
    config: HarnessConfig,
) -> Result<ReportSummary> {
    let schema = suite.schema().clone();
    let mut harness = Harness::new(suite, subject, config);

    if ctx.verbose {
        let console = CliConsole::new(ctx.verbose);
        harness.set_progress_callback(Box::new(move |progress: ExecutionProgress<'_>| {
            let result = progress.result;
            let line = format_test_case_result(&schema, &result.case, result.passed())
                .unwrap_or_else(|_| result.message.clone());
            console.print_case_result(progress.current, progress.total, result.passed(), &line);
        }));
    }

    harness.run().context("Harness run failed")
}
