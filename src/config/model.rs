use serde::{Deserialize, Serialize};

/// Default header marker: a CVS `$Id$` keyword, expanded or not.
pub const DEFAULT_HEADER_PATTERN: &str = r"\$Id(?::[^$]*)?\$";

/// Default log marker: a CVS `$Log$` keyword, expanded or not.
pub const DEFAULT_LOG_PATTERN: &str = r"\$Log(?::[^$]*)?\$";

/// House-style settings for one scan.
///
/// Every key is optional in `.commandments.toml`; missing keys take the
/// defaults below.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Maximum characters per line (default: 120).
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,

    /// Maximum body lines per method (default: 50).
    ///
    /// The body is every line strictly between the line that opens the
    /// method and the line that closes it.
    #[serde(default = "default_max_method_length")]
    pub max_method_length: usize,

    /// Require the header marker on the first line.
    #[serde(default)]
    pub require_header_marker: bool,

    /// Require the log marker somewhere in the file.
    #[serde(default)]
    pub require_log_marker: bool,

    /// Report numeric literals other than 0 and 1.
    #[serde(default)]
    pub check_magic_numbers: bool,

    /// Regex the first line must match when `require_header_marker` is set.
    #[serde(default = "default_header_pattern")]
    pub header_pattern: String,

    /// Regex some line must match when `require_log_marker` is set.
    #[serde(default = "default_log_pattern")]
    pub log_pattern: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_line_length: default_max_line_length(),
            max_method_length: default_max_method_length(),
            require_header_marker: false,
            require_log_marker: false,
            check_magic_numbers: false,
            header_pattern: default_header_pattern(),
            log_pattern: default_log_pattern(),
        }
    }
}

const fn default_max_line_length() -> usize {
    120
}

const fn default_max_method_length() -> usize {
    50
}

fn default_header_pattern() -> String {
    DEFAULT_HEADER_PATTERN.to_string()
}

fn default_log_pattern() -> String {
    DEFAULT_LOG_PATTERN.to_string()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
