mod kind;
mod line_rules;
mod violation;

pub use kind::RuleKind;
pub use line_rules::{
    ClassCommentRule, ConstantCaseRule, LineLengthRule, LineRule, MagicNumberRule,
    TabIndentRule, VariableCommentRule,
};
pub use violation::{Measurement, Violation};

use crate::config::Config;

/// One line of input as seen by the line rules.
#[derive(Debug, Clone, Copy)]
pub struct LineContext<'a> {
    /// 1-based line number.
    pub number: usize,
    /// Raw line text, trailing whitespace included.
    pub text: &'a str,
    /// The line just before this one, `None` on the first line.
    pub previous: Option<&'a str>,
}

/// Coarse comment detection: any `*` or `//` on the line counts.
///
/// Markers inside string literals are not told apart from real comments.
#[must_use]
pub fn is_comment_line(text: &str) -> bool {
    text.contains('*') || text.contains("//")
}

/// Ordered table of per-line rules.
///
/// Every rule runs on every line, in table order; a line can collect several
/// violations.
pub struct RuleEngine {
    rules: Vec<Box<dyn LineRule>>,
}

impl RuleEngine {
    /// Build the standard rule table for a configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut rules: Vec<Box<dyn LineRule>> = vec![
            Box::new(ClassCommentRule),
            Box::new(VariableCommentRule::new()),
            Box::new(ConstantCaseRule::new()),
            Box::new(LineLengthRule::new(config.max_line_length)),
            Box::new(TabIndentRule),
        ];
        if config.check_magic_numbers {
            rules.push(Box::new(MagicNumberRule::new()));
        }
        Self::with_rules(rules)
    }

    /// Build an engine from an explicit rule list, evaluated in the given order.
    #[must_use]
    pub fn with_rules(rules: Vec<Box<dyn LineRule>>) -> Self {
        Self { rules }
    }

    /// Kinds of the active rules, in evaluation order.
    pub fn kinds(&self) -> impl Iterator<Item = RuleKind> + '_ {
        self.rules.iter().map(|rule| rule.kind())
    }

    /// Run every rule on `line`, appending violations to `out` in table order.
    pub fn evaluate(&self, line: &LineContext<'_>, out: &mut Vec<Violation>) {
        out.extend(self.rules.iter().filter_map(|rule| rule.check(line)));
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.kinds()).finish()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
