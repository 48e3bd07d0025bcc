use std::path::Path;

use super::diagnostic::Diagnostic;

/// Compare a mirror file against its primary, byte for byte.
///
/// Returns one diagnostic naming both files on any difference, regardless
/// of how many bytes differ.
#[must_use]
pub fn check_mirror(
    primary: &Path,
    primary_content: &[u8],
    mirror: &Path,
    mirror_content: &[u8],
) -> Option<Diagnostic> {
    if primary_content == mirror_content {
        return None;
    }
    Some(Diagnostic::file_level(format!(
        "file content mismatch: \"{}\" and \"{}\" should be identical.",
        primary.display(),
        mirror.display()
    )))
}

#[cfg(test)]
#[path = "mirror_tests.rs"]
mod tests;
