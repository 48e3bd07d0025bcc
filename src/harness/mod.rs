//! Script test harness.
//!
//! Runs each configured script through a previously built interpreter and
//! reports pass/fail per script. A script passes when the interpreter exits
//! with status 0; on failure its captured stderr is shown indented.

mod runner;

pub use runner::{ProcessRunner, ScriptOutcome, ScriptRunner};

use std::io::Write;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::config::TestSuite;
use crate::error::{Result, StyleGuardError};
use crate::filesystem::FileSystem;
use crate::output::{ansi, paint};

/// Width the script name column is padded to.
const SCRIPT_COLUMN_WIDTH: usize = 25;

/// Prefix for each `\n`-separated piece of a failing script's stderr,
/// including an empty one.
const STDERR_INDENT: &str = "  | ";

const BANNER: &str = "----------------------------------";

/// Resolve the interpreter for `os` from the configured table.
///
/// # Errors
/// Returns `UnsupportedPlatform` if the table has no entry for `os`, and
/// `InterpreterNotFound` if the resolved path does not exist.
pub fn resolve_interpreter<F: FileSystem>(
    fs: &F,
    project_root: &Path,
    interpreters: &IndexMap<String, String>,
    os: &str,
) -> Result<PathBuf> {
    let relative = interpreters
        .get(os)
        .ok_or_else(|| StyleGuardError::UnsupportedPlatform(os.to_string()))?;
    let path = project_root.join(relative);
    if !fs.exists(&path) {
        return Err(StyleGuardError::InterpreterNotFound(path));
    }
    Ok(path)
}

/// Totals for a harness run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HarnessSummary {
    pub passed: usize,
    pub failed: usize,
}

impl HarnessSummary {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.failed == 0
    }
}

pub struct TestHarness<R: ScriptRunner> {
    runner: R,
    interpreter: PathBuf,
    tests_dir: PathBuf,
    use_colors: bool,
}

impl<R: ScriptRunner> TestHarness<R> {
    #[must_use]
    pub fn new(runner: R, interpreter: impl Into<PathBuf>, tests_dir: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            interpreter: interpreter.into(),
            tests_dir: tests_dir.into(),
            use_colors: false,
        }
    }

    #[must_use]
    pub const fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Run every suite in order, writing progress to `out`.
    ///
    /// # Errors
    /// Returns an error if an interpreter process cannot be started.
    pub fn run<W: Write>(&self, suites: &[TestSuite], out: &mut W) -> Result<HarnessSummary> {
        let mut summary = HarnessSummary::default();

        for suite in suites {
            writeln!(out, "{BANNER}")?;
            writeln!(out, " {} ", suite.name)?;
            writeln!(out, "{BANNER}")?;

            for script in &suite.scripts {
                write!(out, "{script:<width$}", width = SCRIPT_COLUMN_WIDTH)?;
                out.flush()?;

                let outcome = self
                    .runner
                    .run(&self.interpreter, &self.tests_dir.join(script))?;
                if outcome.passed() {
                    summary.passed += 1;
                    writeln!(out, "{}", paint("-- PASSED", ansi::GREEN, self.use_colors))?;
                } else {
                    summary.failed += 1;
                    writeln!(out, "{}", paint("-- Failed", ansi::RED, self.use_colors))?;
                    for line in outcome.stderr.split('\n') {
                        let line = line.strip_suffix('\r').unwrap_or(line);
                        let indented = format!("{STDERR_INDENT}{line}");
                        writeln!(out, "{}", paint(&indented, ansi::RED, self.use_colors))?;
                    }
                }
            }
        }

        Ok(summary)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
