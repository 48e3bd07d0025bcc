//! The style checking engine.
//!
//! [`StyleChecker`] runs three verifiers in a fixed order and feeds their
//! diagnostics into a [`Report`]:
//!
//! 1. `CHECK_HASH` directives in the configured files
//! 2. line rules on the top-level files of each source directory
//! 3. byte identity of each mirror group
//!
//! Diagnostics accumulate; I/O failures and malformed mirror groups abort
//! the run with an error.

mod diagnostic;
mod directive;
mod lines;
mod mirror;
mod report;
mod run_config;

pub use diagnostic::{Diagnostic, Location};
pub use directive::{DirectiveVerifier, HashDirective};
pub use lines::LineRules;
pub use mirror::check_mirror;
pub use report::{Report, SUCCESS_MESSAGE};
pub use run_config::RunConfiguration;

use std::io::Write;
use std::path::{Component, Path, PathBuf};

use crate::error::{Result, StyleGuardError};
use crate::filesystem::FileSystem;
use crate::scanner::{DirectoryScanner, FileScanner, SuffixFilter};

pub struct StyleChecker<'a, F: FileSystem> {
    fs: &'a F,
    root: PathBuf,
    config: RunConfiguration,
    directives: DirectiveVerifier,
    verbose: u8,
}

impl<'a, F: FileSystem> StyleChecker<'a, F> {
    #[must_use]
    pub fn new(fs: &'a F, root: impl Into<PathBuf>, config: RunConfiguration) -> Self {
        Self {
            fs,
            root: root.into(),
            config,
            directives: DirectiveVerifier::new(),
            verbose: 0,
        }
    }

    #[must_use]
    pub const fn with_verbose(mut self, verbose: u8) -> Self {
        self.verbose = verbose;
        self
    }

    /// Run every check, recording diagnostics into `report`.
    ///
    /// # Errors
    /// Returns an error if a configured file or directory cannot be read, or
    /// a mirror group has no mirror. Diagnostics recorded before the failure
    /// stay in the report.
    pub fn run<W: Write>(&self, report: &mut Report<W>) -> Result<()> {
        self.check_hash_directives(report)?;
        self.check_source_dirs(report)?;
        self.check_mirror_groups(report)?;
        Ok(())
    }

    /// Verify `CHECK_HASH` directives in every hash-checked file.
    ///
    /// # Errors
    /// Returns an error if a file cannot be read.
    pub fn check_hash_directives<W: Write>(&self, report: &mut Report<W>) -> Result<()> {
        for file in &self.config.hash_checked_files {
            let file = normalize_relative(file);
            let content = self.read_text(&file)?;
            if self.verbose > 0 {
                eprintln!("Verifying hash directives in {}", file.display());
            }
            report.extend(self.directives.check(&file, &content));
        }
        Ok(())
    }

    /// Apply the line rules to each source directory's top-level files.
    ///
    /// # Errors
    /// Returns an error if a directory or file cannot be read.
    pub fn check_source_dirs<W: Write>(&self, report: &mut Report<W>) -> Result<()> {
        let rules = LineRules::new(
            self.config.line_length_threshold,
            &self.config.long_line_exemptions,
        );
        let scanner = DirectoryScanner::new(
            self.fs,
            SuffixFilter::new(&self.config.checked_extensions),
        );

        for dir in &self.config.source_directories {
            let dir = normalize_relative(dir);
            let files = scanner.scan(&self.root.join(&dir))?;
            if self.verbose > 0 {
                eprintln!("Scanning {} ({} files)", dir.display(), files.len());
            }
            for path in files {
                let Some(name) = path.file_name() else {
                    continue;
                };
                let relative = dir.join(name);
                let content = self.read_text(&relative)?;
                report.extend(rules.check(&relative, &content));
            }
        }
        Ok(())
    }

    /// Compare each mirror against the primary file of its group.
    ///
    /// # Errors
    /// Returns an error if a group lacks a mirror or a file cannot be read.
    pub fn check_mirror_groups<W: Write>(&self, report: &mut Report<W>) -> Result<()> {
        for (index, group) in self.config.mirrored_header_groups.iter().enumerate() {
            let Some((primary, mirrors)) = group.split_first() else {
                return Err(StyleGuardError::EmptyMirrorGroup { index });
            };
            if mirrors.is_empty() {
                return Err(StyleGuardError::EmptyMirrorGroup { index });
            }

            let primary = normalize_relative(primary);
            let primary_content = self.read_bytes(&primary)?;
            for mirror in mirrors {
                let mirror = normalize_relative(mirror);
                let mirror_content = self.read_bytes(&mirror)?;
                if let Some(diagnostic) =
                    check_mirror(&primary, &primary_content, &mirror, &mirror_content)
                {
                    report.record(diagnostic);
                }
            }
        }
        Ok(())
    }

    fn read_text(&self, relative: &Path) -> Result<String> {
        let path = self.root.join(relative);
        self.fs
            .read_to_string(&path)
            .map_err(|source| StyleGuardError::FileRead { path, source })
    }

    fn read_bytes(&self, relative: &Path) -> Result<Vec<u8>> {
        let path = self.root.join(relative);
        self.fs
            .read(&path)
            .map_err(|source| StyleGuardError::FileRead { path, source })
    }
}

/// `path` without `.` components, rebuilt with the host separator.
///
/// Configured paths are written with `/`; diagnostics print them this way so
/// `./cli/` and `cli` both report as `cli/<file>`.
fn normalize_relative(path: &Path) -> PathBuf {
    path.components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
