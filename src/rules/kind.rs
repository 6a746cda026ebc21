use serde::Serialize;

/// Category of a style violation.
///
/// Every kind carries a stable numeric code. The number shown to the user is
/// the "commandment", `code % 10`, so related kinds share a commandment
/// (the three comment/method kinds all map to 3, both marker kinds to 8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// `class` declaration with no comment on it or on the line above.
    ClassComment,
    /// Method body longer than the configured maximum.
    MethodLength,
    /// Variable declared with an initializer and no trailing comment.
    VariableComment,
    /// Tab character anywhere on the line.
    TabIndent,
    /// Numeric literal used directly instead of a named constant.
    MagicNumber,
    /// `final` declaration whose name is not upper-case.
    ConstantCase,
    /// Line longer than the configured maximum.
    LineLength,
    /// First line lacks the header marker.
    HeaderMarker,
    /// No log marker anywhere in the file.
    LogMarker,
}

impl RuleKind {
    pub const ALL: [Self; 9] = [
        Self::ClassComment,
        Self::MethodLength,
        Self::VariableComment,
        Self::TabIndent,
        Self::MagicNumber,
        Self::ConstantCase,
        Self::LineLength,
        Self::HeaderMarker,
        Self::LogMarker,
    ];

    #[must_use]
    pub const fn code(self) -> u32 {
        match self {
            Self::ClassComment => 13,
            Self::MethodLength => 23,
            Self::VariableComment => 33,
            Self::TabIndent => 4,
            Self::MagicNumber => 5,
            Self::ConstantCase => 6,
            Self::LineLength => 7,
            Self::HeaderMarker => 8,
            Self::LogMarker => 18,
        }
    }

    /// User-facing rule number.
    #[must_use]
    pub const fn commandment(self) -> u32 {
        self.code() % 10
    }

    /// Whether a report shows the offending line text. Method-length reports
    /// show the method name instead, log-marker reports have no line at all.
    #[must_use]
    pub const fn shows_line_text(self) -> bool {
        !matches!(self, Self::MethodLength | Self::LogMarker)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ClassComment => "class_comment",
            Self::MethodLength => "method_length",
            Self::VariableComment => "variable_comment",
            Self::TabIndent => "tab_indent",
            Self::MagicNumber => "magic_number",
            Self::ConstantCase => "constant_case",
            Self::LineLength => "line_length",
            Self::HeaderMarker => "header_marker",
            Self::LogMarker => "log_marker",
        }
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "kind_tests.rs"]
mod tests;
