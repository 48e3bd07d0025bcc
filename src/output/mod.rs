mod error_output;

pub use error_output::ErrorOutput;

use std::io::IsTerminal;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if the stream is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorMode {
    /// Resolve the mode for stdout.
    #[must_use]
    pub fn use_colors_on_stdout(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => !is_no_color_set() && std::io::stdout().is_terminal(),
        }
    }

    /// Resolve the mode for stderr.
    #[must_use]
    pub fn use_colors_on_stderr(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => !is_no_color_set() && std::io::stderr().is_terminal(),
        }
    }
}

/// Per <https://no-color.org>: presence of the variable (any value) disables color.
fn is_no_color_set() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// ANSI color codes
pub(crate) mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

/// Wrap `text` in `color` when `enabled`.
#[must_use]
pub fn paint(text: &str, color: &str, enabled: bool) -> String {
    if enabled {
        format!("{color}{text}{}", ansi::RESET)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
