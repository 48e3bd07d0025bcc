//! Per-line style rules.
//!
//! Four independent rules run on every line of a file: no tabs, a maximum
//! length (with substring exemptions), no trailing space, and no run of
//! two or more empty lines. One line can trip several rules at once.

use std::path::Path;

use super::diagnostic::Diagnostic;

/// Stateful single-pass scanner for one file's lines.
pub struct LineRules<'a> {
    threshold: usize,
    exemptions: &'a [String],
}

impl<'a> LineRules<'a> {
    #[must_use]
    pub const fn new(threshold: usize, exemptions: &'a [String]) -> Self {
        Self {
            threshold,
            exemptions,
        }
    }

    /// Apply every rule to every line of `content`.
    ///
    /// `path` is only used to attribute diagnostics. Lines are split as by
    /// [`text_lines`].
    #[must_use]
    pub fn check(&self, path: &Path, content: &str) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let mut previous_empty = false;

        for (index, line) in text_lines(content).enumerate() {
            let line_no = index + 1;

            if line.contains('\t') {
                diagnostics.push(Diagnostic::at(
                    path,
                    line_no,
                    format!("contains tab(s) ({}).", quote_line(line)),
                ));
            }

            let length = line.chars().count();
            if length >= self.threshold && !self.is_exempt(line) {
                diagnostics.push(Diagnostic::at(
                    path,
                    line_no,
                    format!(
                        "contains {length} (> {}) characters.",
                        self.threshold.saturating_sub(1)
                    ),
                ));
            }

            if line.ends_with(' ') {
                diagnostics.push(Diagnostic::at(
                    path,
                    line_no,
                    "contains trailing white space.",
                ));
            }

            let is_empty = line.is_empty();
            if is_empty && previous_empty {
                diagnostics.push(Diagnostic::at(path, line_no, "consecutive empty lines."));
            }
            previous_empty = is_empty;
        }

        diagnostics
    }

    fn is_exempt(&self, line: &str) -> bool {
        self.exemptions
            .iter()
            .any(|exemption| line.contains(exemption.as_str()))
    }
}

/// Split `content` into lines, treating `\n`, `\r\n` and a lone `\r` as
/// terminators. A final line without terminator is yielded; a trailing
/// terminator does not produce an extra empty line.
pub fn text_lines(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(end) = rest.find(['\n', '\r']) else {
            let line = rest;
            rest = "";
            return Some(line);
        };
        let line = &rest[..end];
        let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + terminator..];
        Some(line)
    })
}

/// Quote `line` the way the tab diagnostic shows it: single quotes, or
/// double quotes when the line holds a `'` but no `"`, with backslash,
/// quote and control characters escaped.
#[must_use]
pub fn quote_line(line: &str) -> String {
    let quote = if line.contains('\'') && !line.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut quoted = String::with_capacity(line.len() + 2);
    quoted.push(quote);
    for c in line.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\t' => quoted.push_str("\\t"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            c if c == quote => {
                quoted.push('\\');
                quoted.push(c);
            }
            c if u32::from(c) < 0x100 && c.is_control() => {
                quoted.push_str(&format!("\\x{:02x}", u32::from(c)));
            }
            c if c.is_control() => quoted.push_str(&format!("\\u{:04x}", u32::from(c))),
            c => quoted.push(c),
        }
    }
    quoted.push(quote);
    quoted
}

#[cfg(test)]
#[path = "lines_tests.rs"]
mod tests;
