//! Single-file pipeline
//!
//! Composes the loader and the transposer for one file, with a unified
//! error type covering every failure that terminates that file's processing.

use std::path::Path;

use log::debug;
use thiserror::Error;

use crate::config::GlobalConfig;
use crate::loader::{self, LoadError};
use crate::transposer::{self, Outcome, TransposeError};

/// Any failure that terminates one file's processing
#[derive(Debug, Error)]
pub enum FileError {
    /// Loading the file failed
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Analyzing the lines failed
    #[error(transparent)]
    Transpose(#[from] TransposeError),
}

/// Run the full loader -> transposer pipeline for one file.
pub fn process(path: &Path, config: &GlobalConfig) -> Result<Outcome, FileError> {
    debug!("working with the words from '{}'", path.display());
    let lines = loader::read_lines(path, config)?;
    let outcome = transposer::transpose(&lines)?;
    Ok(outcome)
}
