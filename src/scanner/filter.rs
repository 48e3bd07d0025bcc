use std::path::Path;

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Includes files whose name ends with one of the configured suffixes.
///
/// Matching is a plain string suffix test on the file name, so `.c` selects
/// `main.c` and a suffix such as `_test.py` works as well.
pub struct SuffixFilter<'a> {
    suffixes: &'a [String],
}

impl<'a> SuffixFilter<'a> {
    #[must_use]
    pub const fn new(suffixes: &'a [String]) -> Self {
        Self { suffixes }
    }
}

impl FileFilter for SuffixFilter<'_> {
    fn should_include(&self, path: &Path) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };
        let name = name.to_string_lossy();
        self.suffixes
            .iter()
            .any(|suffix| name.ends_with(suffix.as_str()))
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
