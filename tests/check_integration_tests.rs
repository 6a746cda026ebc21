//! Integration tests for checking source files.

mod common;

use common::{CLEAN_SOURCE, NOISY_SOURCE, TAB_SOURCE, TestFixture};
use predicates::prelude::*;

// =============================================================================
// Exit Codes
// =============================================================================

#[test]
fn clean_file_exits_success() {
    let fixture = TestFixture::new();
    let file = fixture.create_file("Greeter.java", CLEAN_SOURCE);

    commandments!()
        .args(["--no-config", "--color", "never"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary: 1 file checked, no violations"))
        .stdout(predicate::str::contains("COMMANDMENT").not());
}

#[test]
fn violations_exit_with_one() {
    let fixture = TestFixture::new();
    let file = fixture.create_file("Tabbed.java", TAB_SOURCE);

    commandments!()
        .args(["--no-config", "--color", "never"])
        .arg(&file)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("COMMANDMENT 4 : There is a tab at this line."))
        .stdout(predicate::str::contains("At line 1"))
        .stdout(predicate::str::contains("You will be punished."));
}

#[test]
fn warn_only_exits_success_with_report() {
    let fixture = TestFixture::new();
    let file = fixture.create_file("Tabbed.java", TAB_SOURCE);

    commandments!()
        .args(["--no-config", "--color", "never", "--warn-only"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("COMMANDMENT 4"))
        .stderr(predicate::str::contains("Warning"));
}

#[test]
fn summary_groups_counts_by_commandment() {
    let fixture = TestFixture::new();
    let file = fixture.create_file("Sloppy.java", NOISY_SOURCE);

    commandments!()
        .args(["--no-config", "--color", "never"])
        .arg(&file)
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "3 violations (commandment 3: 2, commandment 6: 1)",
        ));
}

// =============================================================================
// Individual Commandments
// =============================================================================

#[test]
fn long_method_is_reported_with_its_name() {
    let fixture = TestFixture::new();
    let file = fixture.create_file("Greeter.java", CLEAN_SOURCE);

    commandments!()
        .args(["--no-config", "--color", "never", "--max-method-length", "2"])
        .arg(&file)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("The method is longer than 2 lines (3)."))
        .stdout(predicate::str::contains("In method 'greet()'"))
        .stdout(predicate::str::contains("At line 4"));
}

#[test]
fn long_line_is_reported_with_measurement() {
    let fixture = TestFixture::new();
    let file = fixture.create_file("Wide.java", "// a comment that runs well past twenty\n");

    commandments!()
        .args(["--no-config", "--color", "never", "--max-line-length", "20"])
        .arg(&file)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("COMMANDMENT 7 : Line is longer than 20 characters (39)."));
}

#[test]
fn magic_numbers_are_opt_in() {
    let fixture = TestFixture::new();
    let file = fixture.create_file("Magic.java", "return total * 42;\n");

    commandments!()
        .args(["--no-config", "--color", "never"])
        .arg(&file)
        .assert()
        .success();

    commandments!()
        .args(["--no-config", "--color", "never", "--magic-numbers"])
        .arg(&file)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("COMMANDMENT 5"));
}

#[test]
fn header_marker_is_required_on_first_line() {
    let fixture = TestFixture::new();
    let missing = fixture.create_file("NoHeader.java", "// plain\n");
    let present = fixture.create_file("Header.java", "// $Id: Header.java,v 1.2 $\n");

    commandments!()
        .args(["--no-config", "--color", "never", "--require-header"])
        .arg(&missing)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("required header marker"));

    commandments!()
        .args(["--no-config", "--color", "never", "--require-header"])
        .arg(&present)
        .assert()
        .success();
}

#[test]
fn log_marker_is_reported_once_per_file() {
    let fixture = TestFixture::new();
    let file = fixture.create_file("NoLog.java", "// one\n// two\n");

    commandments!()
        .args(["--no-config", "--color", "never", "--require-log"])
        .arg(&file)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("required log marker").count(1))
        .stdout(predicate::str::contains("At line").not());
}

// =============================================================================
// Multiple Files
// =============================================================================

#[test]
fn multiple_files_are_reported_in_argument_order() {
    let fixture = TestFixture::new();
    let tabbed = fixture.create_file("Tabbed.java", TAB_SOURCE);
    let sloppy = fixture.create_file("Sloppy.java", NOISY_SOURCE);
    let clean = fixture.create_file("Greeter.java", CLEAN_SOURCE);

    let output = commandments!()
        .args(["--no-config", "--color", "never"])
        .arg(&tabbed)
        .arg(&sloppy)
        .arg(&clean)
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    let tabbed_at = stdout.find("Tabbed.java <==").unwrap();
    let sloppy_at = stdout.find("Sloppy.java <==").unwrap();
    assert!(tabbed_at < sloppy_at);
    assert!(!stdout.contains("Greeter.java <=="));
    assert!(stdout.contains("Summary: 3 files checked, 4 violations"));
}

#[test]
fn unreadable_file_aborts_before_any_report() {
    let fixture = TestFixture::new();
    let tabbed = fixture.create_file("Tabbed.java", TAB_SOURCE);
    let missing = fixture.path().join("Missing.java");

    commandments!()
        .args(["--no-config", "--color", "never"])
        .arg(&tabbed)
        .arg(&missing)
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to read file"));
}

// =============================================================================
// Output
// =============================================================================

#[test]
fn json_output_is_machine_readable() {
    let fixture = TestFixture::new();
    let file = fixture.create_file("Sloppy.java", NOISY_SOURCE);

    let output = commandments!()
        .args(["--no-config", "--format", "json"])
        .arg(&file)
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(json["summary"]["files"], 1);
    assert_eq!(json["summary"]["violations"], 3);
    let violations = json["files"][0]["violations"].as_array().unwrap();
    assert_eq!(violations[0]["rule"], "class_comment");
    assert_eq!(violations[0]["commandment"], 3);
    assert_eq!(violations[2]["rule"], "constant_case");
    assert_eq!(violations[2]["line"], 2);
}

#[test]
fn output_file_receives_report() {
    let fixture = TestFixture::new();
    let file = fixture.create_file("Tabbed.java", TAB_SOURCE);
    let report = fixture.path().join("reports/style.txt");

    commandments!()
        .args(["--no-config", "--color", "auto", "--output"])
        .arg(&report)
        .arg(&file)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());

    let written = std::fs::read_to_string(&report).unwrap();
    assert!(written.contains("COMMANDMENT 4"));
    assert!(!written.contains('\x1b'));
}

#[test]
fn quiet_suppresses_report_but_keeps_exit_code() {
    let fixture = TestFixture::new();
    let file = fixture.create_file("Tabbed.java", TAB_SOURCE);

    commandments!()
        .args(["--no-config", "--quiet"])
        .arg(&file)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn verbose_notes_go_to_stderr() {
    let fixture = TestFixture::new();
    let file = fixture.create_file("Greeter.java", CLEAN_SOURCE);

    commandments!()
        .args(["--no-config", "--color", "never", "-v"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("no violations"))
        .stderr(predicate::str::contains("scanned"))
        .stderr(predicate::str::contains("(10 lines, 0 violations)"));
}
