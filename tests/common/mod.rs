#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the commandments binary.
#[macro_export]
macro_rules! commandments {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("commandments"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content and returns its path.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a local `.commandments.toml`.
    pub fn create_config(&self, content: &str) -> PathBuf {
        self.create_file(".commandments.toml", content)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A small, fully commented class with no violations under default settings.
pub const CLEAN_SOURCE: &str = "\
// Greets people.
public class Greeter {
    // Says hello three times.
    public void greet() {
        hello();
        hello();
        hello();
    }
}
";

/// One tab-indented, commented declaration: a single commandment 4 violation.
pub const TAB_SOURCE: &str = "\tint x = 1; // counter\n";

/// Three undocumented problems: class comment, variable comment, constant case.
pub const NOISY_SOURCE: &str = "\
public class Sloppy {
    final int maxSize = 10;
}
";
