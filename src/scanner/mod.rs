mod markers;
mod method;
mod report;

pub use markers::{LogMarkerTracker, MarkerRules};
pub use method::{MethodBoundaryTracker, MethodMatcher, MethodScanState};
pub use report::FileReport;

use crate::config::Config;
use crate::error::Result;
use crate::rules::{LineContext, RuleEngine, Violation};

/// Split file content into lines on `\n` only.
///
/// Everything else, `\r` included, stays part of the line so length and tab
/// checks see the exact text. A trailing newline yields a final empty line.
#[must_use]
pub fn split_lines(content: &str) -> Vec<&str> {
    content.split('\n').collect()
}

/// Single-pass style scanner.
///
/// Holds only immutable, compiled rules; every call to [`Scanner::scan`]
/// builds its own method tracking state, so one scanner can serve many
/// files (and threads) at once.
#[derive(Debug)]
pub struct Scanner {
    engine: RuleEngine,
    methods: MethodMatcher,
    markers: MarkerRules,
    max_method_length: usize,
}

impl Scanner {
    /// Build a scanner for `config`.
    ///
    /// # Errors
    /// Returns an error if an enabled marker pattern does not compile.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self::with_engine(
            RuleEngine::from_config(config),
            MarkerRules::from_config(config)?,
            config.max_method_length,
        ))
    }

    /// Build a scanner from an explicit rule table.
    #[must_use]
    pub fn with_engine(engine: RuleEngine, markers: MarkerRules, max_method_length: usize) -> Self {
        Self {
            engine,
            methods: MethodMatcher::new(),
            markers,
            max_method_length,
        }
    }

    /// Scan `lines` (line 1 first) and return violations in detection order.
    ///
    /// On each line the header check (line 1 only) comes first, then the
    /// line rules in table order, then the method-length verdict of a body
    /// closing on that line. The log-marker verdict comes after the last line.
    /// Never fails: malformed input at worst yields odd violations.
    pub fn scan<S: AsRef<str>>(&self, lines: &[S]) -> Vec<Violation> {
        let mut violations = Vec::new();
        let mut methods = MethodBoundaryTracker::new(&self.methods, self.max_method_length);
        let mut log = self.markers.log_tracker();

        if lines.is_empty() {
            violations.extend(self.markers.check_header(""));
        }

        let mut previous = None;
        for (index, line) in lines.iter().enumerate() {
            let text = line.as_ref();
            let number = index + 1;

            if number == 1 {
                violations.extend(self.markers.check_header(text));
            }

            let context = LineContext {
                number,
                text,
                previous,
            };
            self.engine.evaluate(&context, &mut violations);
            violations.extend(methods.feed(number, text));
            log.observe(text);

            previous = Some(text);
        }

        violations.extend(log.finish());
        violations
    }

    /// Split `content` with [`split_lines`] and scan it.
    #[must_use]
    pub fn scan_content(&self, content: &str) -> Vec<Violation> {
        self.scan(&split_lines(content))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
