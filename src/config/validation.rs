//! Configuration semantic validation.
//!
//! Runs after parsing: range checks on the limits and a compile check on
//! the marker patterns, so a bad config fails before any file is scanned.

use regex::Regex;

use crate::config::Config;
use crate::{CommandmentError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if a limit is zero or a marker pattern does not compile.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_limits(config)?;
    compile_pattern("header_pattern", &config.header_pattern)?;
    compile_pattern("log_pattern", &config.log_pattern)?;
    Ok(())
}

fn validate_limits(config: &Config) -> Result<()> {
    if config.max_line_length == 0 {
        return Err(CommandmentError::Config(
            "max_line_length must be greater than 0".to_string(),
        ));
    }
    if config.max_method_length == 0 {
        return Err(CommandmentError::Config(
            "max_method_length must be greater than 0".to_string(),
        ));
    }
    Ok(())
}

/// Compile a user-supplied pattern, naming the config key on failure.
///
/// # Errors
/// Returns [`CommandmentError::InvalidPattern`] if the regex is malformed.
pub fn compile_pattern(field: &'static str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| CommandmentError::InvalidPattern {
        field,
        pattern: pattern.to_string(),
        source,
    })
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
