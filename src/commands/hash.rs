use std::io::{self, Write};

use crate::cli::{Cli, HashArgs};
use crate::hash::directive_for;
use crate::output::ErrorOutput;
use crate::{EXIT_FAILURE, EXIT_SUCCESS, Result, StyleGuardError};

use super::context::color_choice_to_mode;

#[must_use]
pub fn run_hash(args: &HashArgs, cli: &Cli) -> i32 {
    match run_hash_impl(&args.names, &mut io::stdout().lock()) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            ErrorOutput::new(color_choice_to_mode(cli.color)).print(&e);
            EXIT_FAILURE
        }
    }
}

/// Prints the `CHECK_HASH` directive for each name, one per line.
///
/// All names are validated before anything is printed.
///
/// # Errors
/// Returns an error if a name is not a valid identifier, or output fails.
pub fn run_hash_impl<W: Write>(names: &[String], out: &mut W) -> Result<()> {
    if let Some(bad) = names.iter().find(|name| !is_identifier(name)) {
        return Err(StyleGuardError::Config(format!(
            "invalid identifier name {bad:?}: expected letters, digits and underscores"
        )));
    }

    for name in names {
        writeln!(out, "{}", directive_for(name))?;
    }
    Ok(())
}

/// Whether `name` matches `[A-Za-z0-9_]+`.
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
#[path = "hash_tests.rs"]
mod tests;
