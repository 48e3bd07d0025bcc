use std::io::{self, Write};
use std::path::Path;

use crate::checker::{Report, RunConfiguration, SUCCESS_MESSAGE, StyleChecker};
use crate::cli::{CheckArgs, Cli};
use crate::config::Config;
use crate::filesystem::{FileSystem, RealFileSystem};
use crate::output::ErrorOutput;
use crate::{EXIT_FAILURE, EXIT_SUCCESS, Result};

use super::context::{color_choice_to_mode, load_config, resolve_root};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            ErrorOutput::new(color_choice_to_mode(cli.color)).print(&e);
            EXIT_FAILURE
        }
    }
}

/// Runs the style checks for the resolved project.
///
/// Diagnostics go to stderr as they are found; the success line goes to stdout.
///
/// # Errors
/// Returns an error if the configuration is invalid, or a configured file or
/// directory cannot be read.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    let project_root = resolve_root(&RealFileSystem, cli.root.as_deref())?;
    let config = load_config(&project_root, args.config.as_deref(), cli.no_config)?;

    if cli.verbose > 0 {
        eprintln!("Project root: {}", project_root.display());
    }

    let report = check_project(
        &RealFileSystem,
        &project_root,
        &config,
        cli.verbose,
        io::stderr().lock(),
    )?;

    finish_check(&report, cli.quiet, &mut io::stdout().lock())
}

/// Run every check over `project_root`, echoing diagnostics to `sink`.
///
/// # Errors
/// Returns an error on the first fatal condition. Diagnostics found before
/// it have already been written to `sink`.
pub fn check_project<F: FileSystem, W: Write>(
    fs: &F,
    project_root: &Path,
    config: &Config,
    verbose: u8,
    sink: W,
) -> Result<Report<W>> {
    let checker =
        StyleChecker::new(fs, project_root, RunConfiguration::from(config)).with_verbose(verbose);
    let mut report = Report::new(sink);
    checker.run(&mut report)?;
    Ok(report)
}

/// Turn a finished report into the process exit code.
///
/// # Errors
/// Returns an error if the success line cannot be written.
pub fn finish_check<W: Write, O: Write>(report: &Report<W>, quiet: bool, out: &mut O) -> Result<i32> {
    if report.is_failed() {
        return Ok(EXIT_FAILURE);
    }
    if !quiet {
        writeln!(out, "{SUCCESS_MESSAGE}")?;
    }
    Ok(EXIT_SUCCESS)
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
