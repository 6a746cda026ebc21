use serde::Serialize;

use crate::error::Result;
use crate::rules::Violation;
use crate::scanner::FileReport;

use super::{OutputFormatter, count_by_commandment};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    summary: Summary,
    files: Vec<FileResult>,
}

#[derive(Serialize)]
struct Summary {
    files: usize,
    violations: usize,
    by_commandment: Vec<CommandmentCount>,
}

#[derive(Serialize)]
struct CommandmentCount {
    commandment: u32,
    count: usize,
}

#[derive(Serialize)]
struct FileResult {
    path: String,
    lines: usize,
    violations: Vec<ViolationEntry>,
}

#[derive(Serialize)]
struct ViolationEntry {
    code: u32,
    commandment: u32,
    rule: &'static str,
    description: String,
    line: Option<usize>,
    line_text: Option<String>,
    method: Option<String>,
    measured: Option<usize>,
    limit: Option<usize>,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, reports: &[FileReport]) -> Result<String> {
        let by_commandment: Vec<CommandmentCount> = count_by_commandment(reports)
            .into_iter()
            .map(|(commandment, count)| CommandmentCount { commandment, count })
            .collect();

        let output = JsonOutput {
            summary: Summary {
                files: reports.len(),
                violations: by_commandment.iter().map(|c| c.count).sum(),
                by_commandment,
            },
            files: reports.iter().map(convert_report).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_report(report: &FileReport) -> FileResult {
    FileResult {
        path: report.path.display().to_string(),
        lines: report.line_count,
        violations: report.violations.iter().map(convert_violation).collect(),
    }
}

fn convert_violation(violation: &Violation) -> ViolationEntry {
    let measurement = violation.measurement();
    ViolationEntry {
        code: violation.code(),
        commandment: violation.commandment(),
        rule: violation.kind().as_str(),
        description: violation.description(),
        line: violation.line(),
        line_text: violation.line_text().map(str::to_string),
        method: violation.method_name().map(str::to_string),
        measured: measurement.map(|m| m.actual),
        limit: measurement.map(|m| m.limit),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
