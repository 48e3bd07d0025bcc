//! `CHECK_HASH("name", 0x...)` directive verification.
//!
//! Source files cache FNV-1a hashes of identifier names as literals wrapped in
//! a `CHECK_HASH` marker. The verifier recomputes each hash and compares the
//! canonical spelling against the literal as written, so `0x00ff` does not
//! match a computed `0xff`.

use std::path::Path;

use regex::Regex;

use crate::hash::{fnv1a_32, format_hash};

use super::diagnostic::Diagnostic;
use super::lines::text_lines;

/// A directive parsed from a single source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashDirective<'a> {
    pub name: &'a str,
    pub declared: &'a str,
}

pub struct DirectiveVerifier {
    pattern: Regex,
}

impl Default for DirectiveVerifier {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectiveVerifier {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(
                r#"CHECK_HASH\(\s*"([A-Za-z0-9_]+)"\s*,\s*(0x[0-9a-f]+)\s*\)"#,
            )
            .expect("Invalid regex"),
        }
    }

    /// Parse the first directive on `line`, if any.
    #[must_use]
    pub fn parse<'a>(&self, line: &'a str) -> Option<HashDirective<'a>> {
        let caps = self.pattern.captures(line)?;
        Some(HashDirective {
            name: caps.get(1)?.as_str(),
            declared: caps.get(2)?.as_str(),
        })
    }

    /// Verify every directive in `content`, reporting mismatches against `path`.
    #[must_use]
    pub fn check(&self, path: &Path, content: &str) -> Vec<Diagnostic> {
        text_lines(content)
            .enumerate()
            .filter_map(|(index, line)| {
                let directive = self.parse(line)?;
                let computed = format_hash(fnv1a_32(directive.name));
                if computed == directive.declared {
                    return None;
                }
                Some(Diagnostic::at(
                    path,
                    index + 1,
                    format!(
                        "hash mismatch. hash('{}') = {computed} not {}",
                        directive.name, directive.declared
                    ),
                ))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "directive_tests.rs"]
mod tests;
