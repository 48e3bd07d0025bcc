use std::fs;

use crate::cli::{Cli, InitArgs};
use crate::output::ErrorOutput;
use crate::{EXIT_FAILURE, EXIT_SUCCESS, Result, StyleGuardError};

use super::context::color_choice_to_mode;

#[must_use]
pub fn run_init(args: &InitArgs, cli: &Cli) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            ErrorOutput::new(color_choice_to_mode(cli.color)).print(&e);
            EXIT_FAILURE
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(StyleGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

/// The reference policy as a commented `.style-guard.toml`.
#[must_use]
pub fn generate_config_template() -> String {
    r#"# style-guard configuration file
# Every key is optional; anything left out keeps the built-in value shown here.

[scan]
# Directories whose top-level files get the line rules (not recursive)
source_dirs = ["src/", "cli/", "docs/", "docs/try/"]

# File name suffixes to check
extensions = [".c", ".h", ".py", ".pk", ".js"]

[lines]
# Lines with at least this many characters are reported
threshold = 80

# Lines containing any of these are exempt from the length rule
long_line_exemptions = ["http://", "https://", "<script ", "<link "]

[hash]
# Files scanned for CHECK_HASH("name", 0x...) directives
files = ["src/pk_core.c", "src/pk_var.c"]

# Files that must stay byte-identical: the primary first, then its mirrors
[[mirror]]
files = ["src/pk_common.h", "cli/common.h"]

[harness]
# Interpreter per OS, relative to the project root
interpreters = { windows = 'build\debug\bin\pocket.exe', linux = "build/debug/pocket", macos = "build/debug/pocket" }

# Scripts are relative to this directory
tests_dir = "tests"

[[harness.suites]]
name = "Unit Tests"
scripts = [
    "lang/basics.pk",
    "lang/class.pk",
    "lang/core.pk",
    "lang/controlflow.pk",
    "lang/fibers.pk",
    "lang/functions.pk",
    "lang/import.pk",
]

[[harness.suites]]
name = "Examples"
scripts = [
    "examples/brainfuck.pk",
    "examples/fib.pk",
    "examples/fizzbuzz.pk",
    "examples/helloworld.pk",
    "examples/pi.pk",
    "examples/prime.pk",
]
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
