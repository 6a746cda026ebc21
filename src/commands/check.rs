use std::error::Error as _;
use std::path::Path;

use rayon::prelude::*;

use crate::cli::Cli;
use crate::config::{Config, validate_config_semantics};
use crate::error::{CommandmentError, Result};
use crate::output::{
    ColorMode, ErrorOutput, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter,
};
use crate::scanner::{FileReport, Scanner, split_lines};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_VIOLATIONS_FOUND};

use super::context::{SourceFile, load_config, read_sources, write_output};

#[must_use]
pub fn run_check(cli: &Cli) -> i32 {
    match run_check_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            let detail = e.source().map(ToString::to_string);
            ErrorOutput::new(cli.color.into()).print_error(
                e.error_type(),
                &e.to_string(),
                detail.as_deref(),
                e.suggestion(),
            );
            EXIT_CONFIG_ERROR
        }
    }
}

/// Run a full check and return the process exit code.
///
/// # Errors
/// Returns an error when no file is given, a file or the configuration
/// cannot be read, or the report cannot be written.
pub fn run_check_impl(cli: &Cli) -> Result<i32> {
    if cli.files.is_empty() {
        return Err(CommandmentError::MissingInput);
    }

    let mut config = load_config(cli.config.as_deref(), cli.no_config)?;
    apply_cli_overrides(&mut config, cli);
    validate_config_semantics(&config)?;

    let sources = read_sources(&cli.files)?;
    let scanner = Scanner::new(&config)?;
    let reports = scan_sources(&scanner, &sources);

    let stderr = ErrorOutput::new(cli.color.into());
    if cli.verbose > 0 {
        for report in &reports {
            stderr.print_note(&format!(
                "scanned {} ({} lines, {} violations)",
                report.path.display(),
                report.line_count,
                report.violations.len()
            ));
        }
    }

    let report_colors = report_color_mode(cli.color.into(), cli.output.as_deref());
    let output = format_output(cli.format, &reports, report_colors, cli.verbose)?;
    write_output(cli.output.as_deref(), &output, cli.quiet)?;

    let exit_code = determine_exit_code(&reports, cli.warn_only);
    if cli.warn_only && reports.iter().any(|r| !r.is_clean()) {
        stderr.print_warning("violations found, exiting with success because of --warn-only");
    }
    Ok(exit_code)
}

pub(crate) fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if let Some(max) = cli.max_line_length {
        config.max_line_length = max;
    }
    if let Some(max) = cli.max_method_length {
        config.max_method_length = max;
    }
    if cli.require_header {
        config.require_header_marker = true;
    }
    if cli.require_log {
        config.require_log_marker = true;
    }
    if cli.magic_numbers {
        config.check_magic_numbers = true;
    }
}

/// Scan every source in parallel. Reports keep the input order.
pub(crate) fn scan_sources(scanner: &Scanner, sources: &[SourceFile]) -> Vec<FileReport> {
    sources
        .par_iter()
        .map(|source| {
            let lines = split_lines(&source.content);
            let violations = scanner.scan(&lines);
            FileReport::new(source.path.clone(), lines.len(), violations)
        })
        .collect()
}

/// A report written to a file is never auto-colored.
pub(crate) const fn report_color_mode(mode: ColorMode, output: Option<&Path>) -> ColorMode {
    match (mode, output) {
        (ColorMode::Auto, Some(_)) => ColorMode::Never,
        _ => mode,
    }
}

pub(crate) fn format_output(
    format: OutputFormat,
    reports: &[FileReport],
    color_mode: ColorMode,
    verbose: u8,
) -> Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose).format(reports),
        OutputFormat::Json => JsonFormatter.format(reports),
    }
}

#[must_use]
pub(crate) fn determine_exit_code(reports: &[FileReport], warn_only: bool) -> i32 {
    if warn_only || reports.iter().all(FileReport::is_clean) {
        EXIT_SUCCESS
    } else {
        EXIT_VIOLATIONS_FOUND
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
