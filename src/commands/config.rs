use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs, ConfigFormat};
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::filesystem::RealFileSystem;
use crate::output::ErrorOutput;
use crate::{EXIT_FAILURE, EXIT_SUCCESS, Result, StyleGuardError};

use super::context::{color_choice_to_mode, load_config, resolve_root};

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    let result = match &args.action {
        ConfigAction::Validate { config } => run_config_validate_impl(config).map(|()| {
            println!("Configuration is valid: {}", config.display());
        }),
        ConfigAction::Show { config, format } => {
            run_config_show_impl(config.as_deref(), *format, cli).map(|output| {
                print!("{output}");
            })
        }
    };

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            ErrorOutput::new(color_choice_to_mode(cli.color)).print(&e);
            EXIT_FAILURE
        }
    }
}

/// Validates a configuration file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has semantic errors.
pub fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(StyleGuardError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    FileConfigLoader::new().load_from_path(config_path)?;
    Ok(())
}

/// Shows the effective configuration.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or serialization fails.
pub fn run_config_show_impl(
    config_path: Option<&Path>,
    format: ConfigFormat,
    cli: &Cli,
) -> Result<String> {
    let project_root = resolve_root(&RealFileSystem, cli.root.as_deref())?;
    let config = load_config(&project_root, config_path, cli.no_config)?;

    match format {
        ConfigFormat::Json => {
            let json = serde_json::to_string_pretty(&config)?;
            Ok(format!("{json}\n"))
        }
        ConfigFormat::Text => Ok(format_config_text(&config)),
    }
}

#[must_use]
pub fn format_config_text(config: &Config) -> String {
    use std::fmt::Write;

    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n\n");

    output.push_str("[scan]\n");
    let _ = writeln!(output, "  source_dirs = {:?}", config.scan.source_dirs);
    let _ = writeln!(output, "  extensions = {:?}", config.scan.extensions);

    output.push_str("\n[lines]\n");
    let _ = writeln!(output, "  threshold = {}", config.lines.threshold);
    let _ = writeln!(
        output,
        "  long_line_exemptions = {:?}",
        config.lines.long_line_exemptions
    );

    output.push_str("\n[hash]\n");
    let _ = writeln!(output, "  files = {:?}", config.hash.files);

    for (i, group) in config.mirrors.iter().enumerate() {
        let _ = writeln!(output, "\n[[mirror]]  # group {i}");
        let _ = writeln!(output, "  files = {:?}", group.files);
    }

    output.push_str("\n[harness]\n");
    for (os, path) in &config.harness.interpreters {
        let _ = writeln!(output, "  interpreters.{os} = {path:?}");
    }
    let _ = writeln!(output, "  tests_dir = {:?}", config.harness.tests_dir);
    for suite in &config.harness.suites {
        let _ = writeln!(
            output,
            "  suite {:?}: {} script(s)",
            suite.name,
            suite.scripts.len()
        );
    }

    output
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
