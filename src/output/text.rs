use std::io::Write;

use crate::error::Result;
use crate::rules::{RuleKind, Violation};
use crate::scanner::FileReport;

use super::{ColorMode, OutputFormatter, ansi, count_by_commandment, is_no_color_set};

const SEPARATOR: &str =
    "========================================================================";

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                !is_no_color_set() && std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn format_violation(&self, violation: &Violation, output: &mut Vec<u8>) {
        let heading = self.colorize(&format!("COMMANDMENT {}", violation.commandment()), ansi::RED);
        writeln!(output, "{heading} : {}", violation.description()).ok();

        if violation.kind() == RuleKind::MethodLength
            && let Some(name) = violation.method_name()
        {
            writeln!(output, "In method '{name}'").ok();
        }

        if let Some(line) = violation.line() {
            writeln!(output, "At line {line}").ok();
        }

        if violation.kind().shows_line_text()
            && let Some(text) = violation.line_text()
        {
            writeln!(output, "· {text}").ok();
        }

        writeln!(output, "{}", self.colorize("You will be punished.", ansi::YELLOW)).ok();
    }

    fn format_summary(&self, reports: &[FileReport]) -> String {
        let files = reports.len();
        let file_word = if files == 1 { "file" } else { "files" };
        let counts = count_by_commandment(reports);
        let total: usize = counts.values().sum();

        if total == 0 {
            return format!("Summary: {files} {file_word} checked, no violations");
        }

        let violation_word = if total == 1 { "violation" } else { "violations" };
        let breakdown = counts
            .iter()
            .map(|(commandment, count)| format!("commandment {commandment}: {count}"))
            .collect::<Vec<_>>()
            .join(", ");
        let total_str = self.colorize(&total.to_string(), ansi::RED);

        format!(
            "Summary: {files} {file_word} checked, {total_str} {violation_word} ({breakdown})"
        )
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, reports: &[FileReport]) -> Result<String> {
        let mut output = Vec::new();
        let show_paths = reports.len() > 1;
        // The separator goes between violations, never before the first one.
        let mut first_violation = true;

        for report in reports {
            if report.is_clean() {
                if self.verbose >= 1 {
                    writeln!(output, "✓ {}: no violations", report.path.display()).ok();
                }
                continue;
            }

            if !first_violation {
                writeln!(output, "{SEPARATOR}").ok();
            }
            if show_paths {
                writeln!(output, "==> {} <==", report.path.display()).ok();
            }

            for (index, violation) in report.violations.iter().enumerate() {
                if index > 0 {
                    writeln!(output, "{SEPARATOR}").ok();
                }
                self.format_violation(violation, &mut output);
            }
            first_violation = false;
        }

        if !first_violation {
            writeln!(output).ok();
        }
        writeln!(output, "{}", self.format_summary(reports)).ok();

        Ok(String::from_utf8_lossy(&output).into_owned())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
