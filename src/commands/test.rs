use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::cli::{Cli, TestArgs};
use crate::config::Config;
use crate::filesystem::{FileSystem, RealFileSystem};
use crate::harness::{ProcessRunner, ScriptRunner, TestHarness, resolve_interpreter};
use crate::output::ErrorOutput;
use crate::{EXIT_FAILURE, EXIT_SUCCESS, Result, StyleGuardError};

use super::context::{color_choice_to_mode, load_config, resolve_root};

#[must_use]
pub fn run_test(args: &TestArgs, cli: &Cli) -> i32 {
    match run_test_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            ErrorOutput::new(color_choice_to_mode(cli.color)).print(&e);
            EXIT_FAILURE
        }
    }
}

/// Runs the configured script suites through the interpreter.
///
/// # Errors
/// Returns an error if the configuration is invalid, the interpreter cannot be
/// resolved, or a script process cannot be started.
pub fn run_test_impl(args: &TestArgs, cli: &Cli) -> Result<i32> {
    let fs = RealFileSystem;
    let project_root = resolve_root(&fs, cli.root.as_deref())?;
    let config = load_config(&project_root, args.config.as_deref(), cli.no_config)?;
    let interpreter = select_interpreter(
        &fs,
        &project_root,
        &config,
        args.interpreter.as_deref(),
        std::env::consts::OS,
    )?;

    if cli.verbose > 0 {
        eprintln!("Using interpreter: {}", interpreter.display());
    }

    let use_colors = color_choice_to_mode(cli.color).use_colors_on_stdout();
    run_suites(
        ProcessRunner,
        interpreter,
        &project_root,
        &config,
        use_colors,
        &mut io::stdout().lock(),
    )
}

/// The `--interpreter` override if given, else the entry for `os`.
///
/// # Errors
/// Returns an error if `os` has no entry or the interpreter does not exist.
fn select_interpreter<F: FileSystem>(
    fs: &F,
    project_root: &Path,
    config: &Config,
    explicit: Option<&Path>,
    os: &str,
) -> Result<PathBuf> {
    match explicit {
        Some(path) if fs.exists(path) => Ok(path.to_path_buf()),
        Some(path) => Err(StyleGuardError::InterpreterNotFound(path.to_path_buf())),
        None => resolve_interpreter(fs, project_root, &config.harness.interpreters, os),
    }
}

fn run_suites<R: ScriptRunner, W: Write>(
    runner: R,
    interpreter: PathBuf,
    project_root: &Path,
    config: &Config,
    use_colors: bool,
    out: &mut W,
) -> Result<i32> {
    let harness = TestHarness::new(
        runner,
        interpreter,
        project_root.join(&config.harness.tests_dir),
    )
    .with_colors(use_colors);
    let summary = harness.run(&config.harness.suites, out)?;

    if summary.is_success() {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_FAILURE)
    }
}

#[cfg(test)]
#[path = "test_tests.rs"]
mod tests;
