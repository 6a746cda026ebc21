use regex::Regex;

use crate::config::{Config, compile_pattern};
use crate::error::Result;
use crate::rules::{RuleKind, Violation};

/// File-level marker checks: a header on the first line and a log marker
/// somewhere in the file. Each is enabled independently.
#[derive(Debug, Default)]
pub struct MarkerRules {
    header: Option<Regex>,
    log: Option<Regex>,
}

impl MarkerRules {
    /// Compile the enabled marker patterns.
    ///
    /// # Errors
    /// Returns an error if an enabled pattern is not a valid regex.
    pub fn from_config(config: &Config) -> Result<Self> {
        let header = config
            .require_header_marker
            .then(|| compile_pattern("header_pattern", &config.header_pattern))
            .transpose()?;
        let log = config
            .require_log_marker
            .then(|| compile_pattern("log_pattern", &config.log_pattern))
            .transpose()?;
        Ok(Self { header, log })
    }

    /// Check the first line against the header marker.
    #[must_use]
    pub fn check_header(&self, first_line: &str) -> Option<Violation> {
        let header = self.header.as_ref()?;
        (!header.is_match(first_line))
            .then(|| Violation::on_line(RuleKind::HeaderMarker, 1, first_line))
    }

    /// Start watching a file for the log marker.
    #[must_use]
    pub const fn log_tracker(&self) -> LogMarkerTracker<'_> {
        LogMarkerTracker {
            pattern: self.log.as_ref(),
            seen: false,
        }
    }
}

/// Remembers whether the log marker has appeared so far.
#[derive(Debug)]
pub struct LogMarkerTracker<'a> {
    pattern: Option<&'a Regex>,
    seen: bool,
}

impl LogMarkerTracker<'_> {
    pub fn observe(&mut self, text: &str) {
        if !self.seen
            && let Some(pattern) = self.pattern
        {
            self.seen = pattern.is_match(text);
        }
    }

    /// Verdict after the last line: a violation if the check is enabled and
    /// the marker never showed up.
    #[must_use]
    pub fn finish(self) -> Option<Violation> {
        if self.pattern.is_some() && !self.seen {
            Some(Violation::whole_file(RuleKind::LogMarker))
        } else {
            None
        }
    }
}

#[cfg(test)]
#[path = "markers_tests.rs"]
mod tests;
