use std::path::{Path, PathBuf};

use crate::error::{Result, StyleGuardError};
use crate::filesystem::{FileSystem, RealFileSystem};

use super::Config;
use super::validation::validate_config_semantics;

/// Name of the project-level configuration file.
pub const LOCAL_CONFIG_NAME: &str = ".style-guard.toml";

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration for the project rooted at `project_root`.
    ///
    /// Falls back to the built-in policy when the project has no config file.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be read, parsed or validated.
    fn load(&self, project_root: &Path) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed or validated.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

/// Loads configuration from the filesystem.
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    /// Path the project-level config file would live at.
    #[must_use]
    pub fn local_config_path(project_root: &Path) -> PathBuf {
        project_root.join(LOCAL_CONFIG_NAME)
    }

    fn parse_config(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content).map_err(StyleGuardError::from)?;
        validate_config_semantics(&config)?;
        Ok(config)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self, project_root: &Path) -> Result<Config> {
        let path = Self::local_config_path(project_root);
        if self.fs.exists(&path) {
            return self.load_from_path(&path);
        }
        Ok(Config::default())
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        let content =
            self.fs
                .read_to_string(path)
                .map_err(|source| StyleGuardError::FileRead {
                    path: path.to_path_buf(),
                    source,
                })?;
        Self::parse_config(&content)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
