use regex::Regex;

use super::{LineContext, RuleKind, Violation, is_comment_line};

/// A single per-line style rule.
///
/// Rules are independent: each sees the line (and its predecessor) and
/// reports at most one violation.
pub trait LineRule: Send + Sync {
    /// Kind of violation this rule reports.
    fn kind(&self) -> RuleKind;

    /// Evaluate the rule against one line.
    fn check(&self, line: &LineContext<'_>) -> Option<Violation>;
}

/// A line mentioning `class` must be commented, either on the line itself
/// or on the line just above it.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClassCommentRule;

impl LineRule for ClassCommentRule {
    fn kind(&self) -> RuleKind {
        RuleKind::ClassComment
    }

    fn check(&self, line: &LineContext<'_>) -> Option<Violation> {
        let commented = is_comment_line(line.text) || line.previous.is_some_and(is_comment_line);
        (line.text.contains("class") && !commented)
            .then(|| Violation::on_line(self.kind(), line.number, line.text))
    }
}

/// Declarations with an initializer need a trailing `//` comment.
/// Single-letter counters `i`, `j` and `k` are exempt.
pub struct VariableCommentRule {
    declaration: Regex,
}

impl Default for VariableCommentRule {
    fn default() -> Self {
        Self::new()
    }
}

impl VariableCommentRule {
    #[must_use]
    pub fn new() -> Self {
        Self {
            declaration: Regex::new(r"^\s*(?:\w+\s+)+([a-hl-zA-Z0-9_]|\w{2,})\s*=\s*.*?;")
                .expect("Invalid regex"),
        }
    }
}

impl LineRule for VariableCommentRule {
    fn kind(&self) -> RuleKind {
        RuleKind::VariableComment
    }

    fn check(&self, line: &LineContext<'_>) -> Option<Violation> {
        (self.declaration.is_match(line.text) && !line.text.contains("//"))
            .then(|| Violation::on_line(self.kind(), line.number, line.text))
    }
}

/// `final` declarations are constants and must be named in upper case.
pub struct ConstantCaseRule {
    lowercase_constant: Regex,
}

impl Default for ConstantCaseRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstantCaseRule {
    #[must_use]
    pub fn new() -> Self {
        Self {
            lowercase_constant: Regex::new(
                r"^\s*(?:\w+\s+)*(?:final\s+)+(?:\w+\s+)*(\w*[a-z]+\w*)\s*=\s*.*?;",
            )
            .expect("Invalid regex"),
        }
    }
}

impl LineRule for ConstantCaseRule {
    fn kind(&self) -> RuleKind {
        RuleKind::ConstantCase
    }

    fn check(&self, line: &LineContext<'_>) -> Option<Violation> {
        self.lowercase_constant
            .is_match(line.text)
            .then(|| Violation::on_line(self.kind(), line.number, line.text))
    }
}

/// Lines may not exceed `max` characters.
#[derive(Debug, Clone, Copy)]
pub struct LineLengthRule {
    max: usize,
}

impl LineLengthRule {
    #[must_use]
    pub const fn new(max: usize) -> Self {
        Self { max }
    }
}

impl LineRule for LineLengthRule {
    fn kind(&self) -> RuleKind {
        RuleKind::LineLength
    }

    fn check(&self, line: &LineContext<'_>) -> Option<Violation> {
        let length = line.text.chars().count();
        (length > self.max).then(|| {
            Violation::measured(self.kind(), line.number, line.text, length, self.max)
        })
    }
}

/// No tab characters, anywhere on the line.
#[derive(Debug, Default, Clone, Copy)]
pub struct TabIndentRule;

impl LineRule for TabIndentRule {
    fn kind(&self) -> RuleKind {
        RuleKind::TabIndent
    }

    fn check(&self, line: &LineContext<'_>) -> Option<Violation> {
        line.text
            .contains('\t')
            .then(|| Violation::on_line(self.kind(), line.number, line.text))
    }
}

/// Numeric literals other than 0 and 1 outside of `final` declarations
/// and comment lines.
pub struct MagicNumberRule {
    literal: Regex,
    final_word: Regex,
}

impl Default for MagicNumberRule {
    fn default() -> Self {
        Self::new()
    }
}

impl MagicNumberRule {
    #[must_use]
    pub fn new() -> Self {
        Self {
            // Leading group keeps digits that are part of an identifier out.
            literal: Regex::new(r"(?:^|[^\w.])(\d+(?:\.\d+)?)[fFdDlL]?\b").expect("Invalid regex"),
            final_word: Regex::new(r"\bfinal\b").expect("Invalid regex"),
        }
    }

    fn has_magic_literal(&self, text: &str) -> bool {
        self.literal
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .any(|m| !matches!(m.as_str(), "0" | "1" | "0.0" | "1.0"))
    }
}

impl LineRule for MagicNumberRule {
    fn kind(&self) -> RuleKind {
        RuleKind::MagicNumber
    }

    fn check(&self, line: &LineContext<'_>) -> Option<Violation> {
        let trimmed = line.text.trim_start();
        if ["//", "/*", "*"].iter().any(|marker| trimmed.starts_with(marker))
            || self.final_word.is_match(line.text)
        {
            return None;
        }
        // Only the code before a trailing `//` note counts.
        let code = line.text.split_once("//").map_or(line.text, |(code, _)| code);
        self.has_magic_literal(code)
            .then(|| Violation::on_line(self.kind(), line.number, line.text))
    }
}

#[cfg(test)]
#[path = "line_rules_tests.rs"]
mod tests;
