use std::path::{Path, PathBuf};

use crate::Result;
use crate::cli::ColorChoice;
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::filesystem::FileSystem;
use crate::output::ColorMode;
use crate::project::resolve_project_root;

#[must_use]
pub const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Resolve the project root from `--root` or the current directory.
///
/// # Errors
/// Returns an error if the current directory cannot be determined.
pub fn resolve_root<F: FileSystem>(fs: &F, explicit: Option<&Path>) -> Result<PathBuf> {
    let current_dir = fs.current_dir()?;
    Ok(resolve_project_root(explicit, &current_dir))
}

/// Load the effective configuration for `project_root`.
///
/// `--no-config` wins over everything; an explicit `--config` path is read
/// as given; otherwise the project's `.style-guard.toml` is used if present.
///
/// # Errors
/// Returns an error if a config file exists but cannot be read, parsed or validated.
pub fn load_config(
    project_root: &Path,
    config_path: Option<&Path>,
    no_config: bool,
) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    match config_path {
        Some(path) => loader.load_from_path(path),
        None => loader.load(project_root),
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
