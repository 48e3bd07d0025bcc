mod filter;

pub use filter::{FileFilter, SuffixFilter};

use std::path::{Path, PathBuf};

use crate::error::{Result, StyleGuardError};
use crate::filesystem::FileSystem;

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// Lists the matching files directly inside a directory, in file-name order.
///
/// Subdirectories are skipped, never descended into.
pub struct DirectoryScanner<'a, FS: FileSystem, F: FileFilter> {
    fs: &'a FS,
    filter: F,
}

impl<'a, FS: FileSystem, F: FileFilter> DirectoryScanner<'a, FS, F> {
    #[must_use]
    pub const fn new(fs: &'a FS, filter: F) -> Self {
        Self { fs, filter }
    }
}

impl<FS: FileSystem, F: FileFilter> FileScanner for DirectoryScanner<'_, FS, F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let files = self
            .fs
            .list_files(root)
            .map_err(|source| StyleGuardError::DirectoryRead {
                path: root.to_path_buf(),
                source,
            })?;
        Ok(files
            .into_iter()
            .filter(|p| self.filter.should_include(p))
            .collect())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
