use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "commandments")]
#[command(author, version, about = "Check a source file against the house-style commandments")]
#[command(long_about = "Reports, line by line, violations of a fixed set of style rules: \
    missing comments, constant and variable naming, line length, tab indentation, \
    method length and optional header/log markers.\n\n\
    Exit codes:\n  \
    0 - No violations\n  \
    1 - Violations found\n  \
    2 - Usage, file or configuration error")]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Source files to check
    pub files: Vec<PathBuf>,

    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the report on stdout
    #[arg(short, long)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Maximum characters per line (overrides config)
    #[arg(long)]
    pub max_line_length: Option<usize>,

    /// Maximum body lines per method (overrides config)
    #[arg(long)]
    pub max_method_length: Option<usize>,

    /// Require the header marker on the first line
    #[arg(long)]
    pub require_header: bool,

    /// Require the log marker somewhere in the file
    #[arg(long)]
    pub require_log: bool,

    /// Report numeric literals other than 0 and 1
    #[arg(long)]
    pub magic_numbers: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report violations but exit with success
    #[arg(long)]
    pub warn_only: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
