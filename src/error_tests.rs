use std::path::PathBuf;

use super::*;

#[test]
fn error_display_missing_input() {
    let err = CommandmentError::MissingInput;
    assert_eq!(err.to_string(), "No file to check was given");
}

#[test]
fn error_display_config() {
    let err = CommandmentError::Config("max_line_length must be greater than 0".to_string());
    assert_eq!(
        err.to_string(),
        "Configuration error: max_line_length must be greater than 0"
    );
}

#[test]
fn error_display_file_read() {
    let err = CommandmentError::FileRead {
        path: PathBuf::from("Main.java"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    assert!(err.to_string().contains("Main.java"));
}

#[test]
fn error_display_invalid_pattern() {
    let source = regex::Regex::new("(").unwrap_err();
    let err = CommandmentError::InvalidPattern {
        field: "header_pattern",
        pattern: "(".to_string(),
        source,
    };
    assert_eq!(err.to_string(), "Invalid pattern for header_pattern: (");
}

#[test]
fn error_type_returns_correct_type() {
    assert_eq!(CommandmentError::MissingInput.error_type(), "Usage");
    assert_eq!(
        CommandmentError::FileRead {
            path: PathBuf::from("Main.java"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        }
        .error_type(),
        "FileRead"
    );
    assert_eq!(
        CommandmentError::Config("test".to_string()).error_type(),
        "Config"
    );
    assert_eq!(
        CommandmentError::Io(std::io::Error::other("test")).error_type(),
        "IO"
    );
}

#[test]
fn usage_error_has_suggestion() {
    assert!(CommandmentError::MissingInput.suggestion().is_some());
    assert!(
        CommandmentError::Io(std::io::Error::other("test"))
            .suggestion()
            .is_none()
    );
}

#[test]
fn file_read_error_exposes_source() {
    use std::error::Error as _;

    let err = CommandmentError::FileRead {
        path: PathBuf::from("Main.java"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert!(err.source().is_some());
}
