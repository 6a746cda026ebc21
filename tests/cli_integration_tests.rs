//! Integration tests for argument handling.

mod common;

use common::{TAB_SOURCE, TestFixture};
use predicates::prelude::*;

#[test]
fn no_file_is_usage_error() {
    commandments!()
        .args(["--no-config", "--color", "never"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No file to check was given"))
        .stderr(predicate::str::contains("help:"));
}

#[test]
fn missing_file_is_reported_with_path() {
    let fixture = TestFixture::new();
    let missing = fixture.path().join("Ghost.java");

    commandments!()
        .args(["--no-config", "--color", "never"])
        .arg(&missing)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("FileRead"))
        .stderr(predicate::str::contains("Ghost.java"));
}

#[test]
fn config_and_no_config_conflict() {
    let fixture = TestFixture::new();
    let file = fixture.create_file("Tabbed.java", TAB_SOURCE);

    commandments!()
        .args(["--config", "x.toml", "--no-config"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn unknown_format_is_rejected() {
    let fixture = TestFixture::new();
    let file = fixture.create_file("Tabbed.java", TAB_SOURCE);

    commandments!()
        .args(["--no-config", "--format", "xml"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown output format"));
}

#[test]
fn help_lists_exit_codes() {
    commandments!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exit codes"));
}

#[test]
fn always_color_emits_ansi() {
    let fixture = TestFixture::new();
    let file = fixture.create_file("Tabbed.java", TAB_SOURCE);

    commandments!()
        .args(["--no-config", "--color", "always"])
        .arg(&file)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\x1b[31m"));
}
