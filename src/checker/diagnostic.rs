use std::fmt;
use std::path::{Path, PathBuf};

/// Width the file column of a location is padded to.
const PATH_COLUMN_WIDTH: usize = 17;

/// Width the line-number column of a location is padded to.
const LINE_COLUMN_WIDTH: usize = 4;

/// A line inside a file, with the path relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: PathBuf,
    pub line: usize,
}

impl Location {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, line: usize) -> Self {
        Self {
            path: path.into(),
            line,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path.display().to_string();
        write!(
            f,
            "{path:<path_width$} : {line:>line_width$}",
            line = self.line,
            path_width = PATH_COLUMN_WIDTH,
            line_width = LINE_COLUMN_WIDTH,
        )
    }
}

/// A single reported violation.
///
/// Diagnostics from the line rules and hash directives carry a location;
/// mirror mismatches concern whole files and carry none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub location: Option<Location>,
    pub message: String,
}

impl Diagnostic {
    #[must_use]
    pub fn at(path: &Path, line: usize, message: impl Into<String>) -> Self {
        Self {
            location: Some(Location::new(path, line)),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn file_level(message: impl Into<String>) -> Self {
        Self {
            location: None,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn line(&self) -> Option<usize> {
        self.location.as_ref().map(|loc| loc.line)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(location) => write!(f, "{location} - {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

#[cfg(test)]
#[path = "diagnostic_tests.rs"]
mod tests;
