use std::path::PathBuf;

use crate::config::Config;

/// The fixed inputs of one checker run.
///
/// Paths are relative to the project root the engine is constructed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfiguration {
    /// Directories whose top-level files get the line rules, in scan order.
    pub source_directories: Vec<PathBuf>,
    /// File name suffixes selecting which files are scanned.
    pub checked_extensions: Vec<String>,
    /// Substrings that exempt a line from the length rule.
    pub long_line_exemptions: Vec<String>,
    /// Lines of at least this many characters are reported.
    pub line_length_threshold: usize,
    /// Files scanned for `CHECK_HASH` directives, in order.
    pub hash_checked_files: Vec<PathBuf>,
    /// Each group is a primary file followed by its mirrors.
    pub mirrored_header_groups: Vec<Vec<PathBuf>>,
}

impl From<&Config> for RunConfiguration {
    fn from(config: &Config) -> Self {
        Self {
            source_directories: config.scan.source_dirs.iter().map(PathBuf::from).collect(),
            checked_extensions: config.scan.extensions.iter().cloned().collect(),
            long_line_exemptions: config.lines.long_line_exemptions.clone(),
            line_length_threshold: config.lines.threshold,
            hash_checked_files: config.hash.files.iter().map(PathBuf::from).collect(),
            mirrored_header_groups: config
                .mirrors
                .iter()
                .map(|group| group.files.iter().map(PathBuf::from).collect())
                .collect(),
        }
    }
}

impl Default for RunConfiguration {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

#[cfg(test)]
#[path = "run_config_tests.rs"]
mod tests;
