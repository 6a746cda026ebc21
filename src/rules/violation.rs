use super::RuleKind;

/// Measured value and the limit it was compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    pub actual: usize,
    pub limit: usize,
}

/// A single reported style violation.
///
/// Built once by the rule or tracker that detected it and never changed
/// afterwards; fields are only reachable through accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    kind: RuleKind,
    line: Option<usize>,
    line_text: Option<String>,
    method_name: Option<String>,
    measurement: Option<Measurement>,
}

impl Violation {
    /// Violation tied to a line, reporting that line's text.
    #[must_use]
    pub fn on_line(kind: RuleKind, line: usize, text: &str) -> Self {
        Self {
            kind,
            line: Some(line),
            line_text: Some(text.to_string()),
            method_name: None,
            measurement: None,
        }
    }

    /// Line violation that also carries a measured value (e.g. line length).
    #[must_use]
    pub fn measured(kind: RuleKind, line: usize, text: &str, actual: usize, limit: usize) -> Self {
        Self {
            measurement: Some(Measurement { actual, limit }),
            ..Self::on_line(kind, line, text)
        }
    }

    /// Method body too long. `start_line` is the line the body opened on.
    #[must_use]
    pub fn method_too_long(name: &str, start_line: usize, actual: usize, limit: usize) -> Self {
        Self {
            kind: RuleKind::MethodLength,
            line: Some(start_line),
            line_text: None,
            method_name: Some(name.to_string()),
            measurement: Some(Measurement { actual, limit }),
        }
    }

    /// File-level violation with no line attached.
    #[must_use]
    pub const fn whole_file(kind: RuleKind) -> Self {
        Self {
            kind,
            line: None,
            line_text: None,
            method_name: None,
            measurement: None,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> RuleKind {
        self.kind
    }

    #[must_use]
    pub const fn code(&self) -> u32 {
        self.kind.code()
    }

    #[must_use]
    pub const fn commandment(&self) -> u32 {
        self.kind.commandment()
    }

    /// 1-based line number, `None` for end-of-file verdicts.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        self.line
    }

    #[must_use]
    pub fn line_text(&self) -> Option<&str> {
        self.line_text.as_deref()
    }

    #[must_use]
    pub fn method_name(&self) -> Option<&str> {
        self.method_name.as_deref()
    }

    #[must_use]
    pub const fn measurement(&self) -> Option<Measurement> {
        self.measurement
    }

    /// Human-readable description of the broken rule.
    #[must_use]
    pub fn description(&self) -> String {
        let (actual, limit) = self
            .measurement
            .map_or((0, 0), |m| (m.actual, m.limit));

        match self.kind {
            RuleKind::ClassComment => "The class or variable doesn't have any comment.".to_string(),
            RuleKind::MethodLength => {
                format!("The method is longer than {limit} lines ({actual}).")
            }
            RuleKind::VariableComment => "The variable is not commented.".to_string(),
            RuleKind::TabIndent => "There is a tab at this line.".to_string(),
            RuleKind::MagicNumber => {
                "This value isn't a constant, it may be a magic number.".to_string()
            }
            RuleKind::ConstantCase => {
                "This constant has one or more lowercase character in it.".to_string()
            }
            RuleKind::LineLength => {
                format!("Line is longer than {limit} characters ({actual}).")
            }
            RuleKind::HeaderMarker => {
                "The file doesn't start with the required header marker.".to_string()
            }
            RuleKind::LogMarker => "The file doesn't contain the required log marker.".to_string(),
        }
    }
}

#[cfg(test)]
#[path = "violation_tests.rs"]
mod tests;
