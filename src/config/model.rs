use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Default number of characters at which a line is reported as too long.
pub const DEFAULT_LINE_LENGTH_THRESHOLD: usize = 80;

/// Root of `.style-guard.toml`.
///
/// Every section is optional; anything left out keeps the built-in policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Which directories and file types the line rules apply to.
    #[serde(default)]
    pub scan: ScanConfig,

    /// Line rule settings.
    #[serde(default)]
    pub lines: LinesConfig,

    /// Files scanned for `CHECK_HASH` directives.
    #[serde(default)]
    pub hash: HashConfig,

    /// Groups of files that must stay byte-identical [[mirror]].
    #[serde(default = "default_mirror_groups", rename = "mirror")]
    pub mirrors: Vec<MirrorGroup>,

    /// Script test harness settings.
    #[serde(default)]
    pub harness: HarnessConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scan: ScanConfig::default(),
            lines: LinesConfig::default(),
            hash: HashConfig::default(),
            mirrors: default_mirror_groups(),
            harness: HarnessConfig::default(),
        }
    }
}

/// Scan configuration [scan].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanConfig {
    /// Directories (relative to the project root) whose top-level files are checked.
    #[serde(default = "default_source_dirs")]
    pub source_dirs: Vec<String>,

    /// File name suffixes that select files for checking, e.g. `.c`.
    #[serde(default = "default_extensions")]
    pub extensions: IndexSet<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            source_dirs: default_source_dirs(),
            extensions: default_extensions(),
        }
    }
}

/// Line rule configuration [lines].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinesConfig {
    /// Lines with at least this many characters are reported.
    #[serde(default = "default_threshold")]
    pub threshold: usize,

    /// Substrings that exempt a line from the length rule.
    #[serde(default = "default_long_line_exemptions")]
    pub long_line_exemptions: Vec<String>,
}

impl Default for LinesConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            long_line_exemptions: default_long_line_exemptions(),
        }
    }
}

/// Hash directive configuration [hash].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HashConfig {
    #[serde(default = "default_hash_files")]
    pub files: Vec<String>,
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            files: default_hash_files(),
        }
    }
}

/// A primary file followed by the files that mirror it [[mirror]].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MirrorGroup {
    pub files: Vec<String>,
}

/// Test harness configuration [harness].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Interpreter location per OS name (`std::env::consts::OS`), relative to the project root.
    #[serde(default = "default_interpreters")]
    pub interpreters: IndexMap<String, String>,

    /// Directory holding test scripts, relative to the project root.
    #[serde(default = "default_tests_dir")]
    pub tests_dir: String,

    /// Ordered test suites [[harness.suites]].
    #[serde(default = "default_suites")]
    pub suites: Vec<TestSuite>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            interpreters: default_interpreters(),
            tests_dir: default_tests_dir(),
            suites: default_suites(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestSuite {
    pub name: String,
    pub scripts: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn default_source_dirs() -> Vec<String> {
    strings(&["src/", "cli/", "docs/", "docs/try/"])
}

fn default_extensions() -> IndexSet<String> {
    [".c", ".h", ".py", ".pk", ".js"]
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

const fn default_threshold() -> usize {
    DEFAULT_LINE_LENGTH_THRESHOLD
}

fn default_long_line_exemptions() -> Vec<String> {
    strings(&["http://", "https://", "<script ", "<link "])
}

fn default_hash_files() -> Vec<String> {
    strings(&["src/pk_core.c", "src/pk_var.c"])
}

fn default_mirror_groups() -> Vec<MirrorGroup> {
    vec![MirrorGroup {
        files: strings(&["src/pk_common.h", "cli/common.h"]),
    }]
}

fn default_interpreters() -> IndexMap<String, String> {
    [
        ("windows", "build\\debug\\bin\\pocket.exe"),
        ("linux", "build/debug/pocket"),
        ("macos", "build/debug/pocket"),
    ]
    .iter()
    .map(|(os, path)| ((*os).to_string(), (*path).to_string()))
    .collect()
}

fn default_tests_dir() -> String {
    "tests".to_string()
}

fn default_suites() -> Vec<TestSuite> {
    vec![
        TestSuite {
            name: "Unit Tests".to_string(),
            scripts: strings(&[
                "lang/basics.pk",
                "lang/class.pk",
                "lang/core.pk",
                "lang/controlflow.pk",
                "lang/fibers.pk",
                "lang/functions.pk",
                "lang/import.pk",
            ]),
        },
        TestSuite {
            name: "Examples".to_string(),
            scripts: strings(&[
                "examples/brainfuck.pk",
                "examples/fib.pk",
                "examples/fizzbuzz.pk",
                "examples/helloworld.pk",
                "examples/pi.pk",
                "examples/prime.pk",
            ]),
        },
    ]
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
