//! Project root resolution.
//!
//! All configured paths and all printed diagnostic paths are relative to the
//! project root.

use std::path::{Path, PathBuf};

use crate::config::LOCAL_CONFIG_NAME;

/// Discover the project root by walking up from `start` looking for markers.
///
/// Markers (checked in order at each directory level):
///   1. `.style-guard.toml` - explicit style-guard config
///   2. `.git/` directory - git repository root
///
/// Returns `start` if no markers are found.
#[must_use]
pub fn discover_project_root(start: &Path) -> PathBuf {
    let abs_start = dunce::canonicalize(start).unwrap_or_else(|_| start.to_path_buf());

    for ancestor in abs_start.ancestors() {
        if ancestor.join(LOCAL_CONFIG_NAME).is_file() {
            return ancestor.to_path_buf();
        }
        if ancestor.join(".git").is_dir() {
            return ancestor.to_path_buf();
        }
    }

    abs_start
}

/// Resolve the root to check: an explicit `--root`, or the discovered one.
#[must_use]
pub fn resolve_project_root(explicit: Option<&Path>, current_dir: &Path) -> PathBuf {
    explicit.map_or_else(
        || discover_project_root(current_dir),
        |root| dunce::canonicalize(root).unwrap_or_else(|_| root.to_path_buf()),
    )
}

#[cfg(test)]
#[path = "project_tests.rs"]
mod tests;
