//! Configuration semantic validation.
//!
//! Validates that configuration values are usable after parsing: a positive
//! line threshold, a non-empty extension filter and well-formed mirror groups.

use crate::config::Config;
use crate::{Result, StyleGuardError};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if the threshold is zero, no extensions are configured,
/// a path entry is empty, or a mirror group lacks a mirror.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_scan_section(config)?;
    validate_lines_section(config)?;
    validate_paths(config)?;
    validate_mirror_groups(config)?;
    validate_harness_section(config)?;
    Ok(())
}

fn validate_scan_section(config: &Config) -> Result<()> {
    if config.scan.extensions.is_empty() {
        return Err(StyleGuardError::Config(
            "scan.extensions must list at least one file suffix".to_string(),
        ));
    }
    if config.scan.extensions.iter().any(String::is_empty) {
        return Err(StyleGuardError::Config(
            "scan.extensions cannot contain an empty suffix".to_string(),
        ));
    }
    Ok(())
}

fn validate_lines_section(config: &Config) -> Result<()> {
    if config.lines.threshold == 0 {
        return Err(StyleGuardError::Config(
            "lines.threshold must be greater than 0".to_string(),
        ));
    }
    if config.lines.long_line_exemptions.iter().any(String::is_empty) {
        // An empty exemption matches every line and silently disables the rule.
        return Err(StyleGuardError::Config(
            "lines.long_line_exemptions cannot contain an empty string".to_string(),
        ));
    }
    Ok(())
}

fn validate_paths(config: &Config) -> Result<()> {
    for (i, dir) in config.scan.source_dirs.iter().enumerate() {
        if dir.is_empty() {
            return Err(StyleGuardError::Config(format!(
                "scan.source_dirs[{i}] cannot be empty"
            )));
        }
    }
    for (i, file) in config.hash.files.iter().enumerate() {
        if file.is_empty() {
            return Err(StyleGuardError::Config(format!(
                "hash.files[{i}] cannot be empty"
            )));
        }
    }
    Ok(())
}

fn validate_mirror_groups(config: &Config) -> Result<()> {
    for (index, group) in config.mirrors.iter().enumerate() {
        if group.files.len() < 2 {
            return Err(StyleGuardError::EmptyMirrorGroup { index });
        }
        if let Some(i) = group.files.iter().position(String::is_empty) {
            return Err(StyleGuardError::Config(format!(
                "mirror[{index}].files[{i}] cannot be empty"
            )));
        }
    }
    Ok(())
}

fn validate_harness_section(config: &Config) -> Result<()> {
    for (i, suite) in config.harness.suites.iter().enumerate() {
        if suite.name.trim().is_empty() {
            return Err(StyleGuardError::Config(format!(
                "harness.suites[{i}].name cannot be empty"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
