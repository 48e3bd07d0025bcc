use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StyleGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to list directory: {path}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Mirror group #{index} must list a primary file and at least one mirror")]
    EmptyMirrorGroup { index: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("Interpreter not found at: {0}")]
    InterpreterNotFound(PathBuf),
}

impl StyleGuardError {
    /// Short category name used as the headline of a printed error.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) | Self::EmptyMirrorGroup { .. } => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::DirectoryRead { .. } => "DirectoryRead",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Serialization",
            Self::UnsupportedPlatform(_) | Self::InterpreterNotFound(_) => "Harness",
        }
    }

    /// The error message without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) | Self::UnsupportedPlatform(msg) => msg.clone(),
            Self::FileRead { path, .. } | Self::DirectoryRead { path, .. } => {
                path.display().to_string()
            }
            Self::InterpreterNotFound(path) => {
                format!("interpreter not found at '{}'", path.display())
            }
            Self::EmptyMirrorGroup { index } => {
                format!("mirror group #{index} has no mirror files")
            }
            Self::Io(e) => e.to_string(),
            Self::TomlParse(e) => e.message().to_string(),
            Self::JsonSerialize(e) => e.to_string(),
        }
    }

    /// Underlying cause, when there is one worth showing.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } | Self::DirectoryRead { source, .. } => {
                Some(source.to_string())
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Config(_) | Self::TomlParse(_) => {
                Some("Check the config file format with `style-guard config validate`")
            }
            Self::EmptyMirrorGroup { .. } => {
                Some("List the primary file first, followed by one or more mirrors")
            }
            Self::FileRead { source, .. } | Self::DirectoryRead { source, .. } => {
                match source.kind() {
                    std::io::ErrorKind::NotFound => {
                        Some("Check that the file path exists relative to the project root")
                    }
                    std::io::ErrorKind::PermissionDenied => Some("Check file permissions"),
                    _ => None,
                }
            }
            Self::InterpreterNotFound(_) => {
                Some("Build the interpreter first or pass --interpreter <path>")
            }
            Self::UnsupportedPlatform(_) => {
                Some("Add an entry for this platform under [harness.interpreters]")
            }
            Self::Io(_) | Self::JsonSerialize(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, StyleGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
