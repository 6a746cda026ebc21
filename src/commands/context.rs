use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::{CommandmentError, Result};

/// A source file read fully into memory before scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub content: String,
}

pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Read every input up front so an unreadable file aborts before any scan.
pub(crate) fn read_sources(paths: &[PathBuf]) -> Result<Vec<SourceFile>> {
    paths
        .iter()
        .map(|path| {
            fs::read_to_string(path)
                .map(|content| SourceFile {
                    path: path.clone(),
                    content,
                })
                .map_err(|source| CommandmentError::FileRead {
                    path: path.clone(),
                    source,
                })
        })
        .collect()
}

pub(crate) fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
