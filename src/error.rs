use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommandmentError {
    #[error("No file to check was given")]
    MissingInput,

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid pattern for {field}: {pattern}")]
    InvalidPattern {
        field: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl CommandmentError {
    /// Short category label shown in front of the message on stderr.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::MissingInput => "Usage",
            Self::FileRead { .. } => "FileRead",
            Self::Config(_) | Self::InvalidPattern { .. } | Self::TomlParse(_) => "Config",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Output",
        }
    }

    /// Optional hint printed under the error.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::MissingInput => Some("pass the path of the file to check, e.g. `commandments Main.java`"),
            Self::FileRead { .. } => Some("check that the file exists and is valid UTF-8"),
            Self::InvalidPattern { .. } => Some("patterns use Rust regex syntax"),
            Self::TomlParse(_) => Some("see `.commandments.toml` keys in the README"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CommandmentError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
