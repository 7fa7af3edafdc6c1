//! Line loading for text files
//!
//! The loader turns a file into an ordered list of right-trimmed, non-empty
//! lines. The extension is checked before any content is read.

use std::path::{Path, PathBuf};
use std::{fs, io};

use log::debug;
use thiserror::Error;

use crate::config::GlobalConfig;

/// Errors that can occur while loading a file
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file does not carry a recognized text extension
    #[error("Error: not supported file format!")]
    UnsupportedFormat(PathBuf),

    /// The file is missing or unreadable
    #[error("Error: can not read the file: {0}")]
    Io(#[from] io::Error),
}

/// Read a text file into right-trimmed, non-empty lines, preserving order.
pub fn read_lines(path: &Path, config: &GlobalConfig) -> Result<Vec<String>, LoadError> {
    debug!("current file path: {}", path.display());

    if !config.is_supported(path) {
        return Err(LoadError::UnsupportedFormat(path.to_path_buf()));
    }

    let text = fs::read_to_string(path)?;
    let lines = text
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    Ok(lines)
}
