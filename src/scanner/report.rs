use std::path::PathBuf;

use crate::rules::Violation;

/// Violations found in one file, in scan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    /// Number of lines scanned.
    pub line_count: usize,
    pub violations: Vec<Violation>,
}

impl FileReport {
    #[must_use]
    pub const fn new(path: PathBuf, line_count: usize, violations: Vec<Violation>) -> Self {
        Self {
            path,
            line_count,
            violations,
        }
    }

    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}
