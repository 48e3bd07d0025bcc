use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Output format for `config show`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "style-guard")]
#[command(author, version, about = "Source tree style guard - enforce whitespace, line length and cached hash rules")]
#[command(long_about = "A pre-commit / CI gate that checks a source tree for tabs, long lines, \
    trailing white space, consecutive empty lines, stale CHECK_HASH literals and diverged \
    mirrored files.\n\n\
    Runs `check` when no subcommand is given.\n\n\
    Exit codes:\n  \
    0 - All checks passed\n  \
    1 - Violations found, or a configuration/IO error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading the configuration file and use the built-in policy
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Project root (default: nearest ancestor with .style-guard.toml or .git)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check the source tree against the style rules
    Check(CheckArgs),

    /// Print the CHECK_HASH directive for identifier names
    Hash(HashArgs),

    /// Run the script test suites through the interpreter
    Test(TestArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Parser, Debug, Default)]
pub struct CheckArgs {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct HashArgs {
    /// Identifier names to hash
    #[arg(required = true)]
    pub names: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct TestArgs {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Interpreter executable (overrides the per-platform table)
    #[arg(long)]
    pub interpreter: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".style-guard.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and semantics
    Validate {
        /// Path to configuration file
        #[arg(short, long, default_value = ".style-guard.toml")]
        config: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ConfigFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
