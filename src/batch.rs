//! Batch runner: recursive discovery plus parallel fan-out
//!
//! Given a directory, discover every supported text file beneath it and run
//! the single-file pipeline for each one on a fixed-size worker pool. Files
//! are processed independently: one file's failure never aborts the others.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::thread;

use log::{debug, error, info};
use rayon::prelude::*;
use thiserror::Error;
use walkdir::WalkDir;

use crate::config::GlobalConfig;
use crate::output::{self, OutputMode, TransposeReport};
use crate::pipeline;

/// Errors that can occur before any file is processed
#[derive(Debug, Error)]
pub enum BatchError {
    /// The given path points at a file, not a directory
    #[error("Error: The path to file was sent! Change to folder path not file path.")]
    PathIsFile(PathBuf),

    /// The given directory does not exist
    #[error("Error: The directory does not exist")]
    DirectoryNotFound(PathBuf),

    /// Error walking the directory tree
    #[error("Error: can not walk the directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// The worker pool could not be built
    #[error("Error: can not start the worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

/// Aggregate outcome of one directory run
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchSummary {
    /// Files that produced a Result (a word or the sentinel)
    pub processed: usize,
    /// Files that failed with an error
    pub failed: usize,
}

/// Find every supported text file at any depth under `root`.
///
/// Fails before any discovery if `root` is a file or does not exist. Hidden
/// entries are skipped; the result is sorted for a deterministic schedule.
pub fn discover(root: &Path, config: &GlobalConfig) -> Result<Vec<PathBuf>, BatchError> {
    if root.is_file() {
        return Err(BatchError::PathIsFile(root.to_path_buf()));
    }
    if !root.exists() {
        return Err(BatchError::DirectoryNotFound(root.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(true).into_iter().filter_entry(|e| {
        // Don't filter the root directory itself
        if e.path() == root {
            return true;
        }
        !is_hidden(e)
    }) {
        let entry = entry?;
        if entry.file_type().is_file() && config.is_supported(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    debug!("discovered {} file(s) under {}", files.len(), root.display());
    Ok(files)
}

/// Process every discovered file on a fixed-size worker pool.
///
/// Each task runs the full pipeline to completion and renders its own
/// Result; output ordering across tasks is not guaranteed. Every task's
/// outcome is observed exactly once and counted into the summary.
pub fn run(
    files: &[PathBuf],
    config: &GlobalConfig,
    mode: OutputMode,
) -> Result<BatchSummary, BatchError> {
    if files.is_empty() {
        info!("no supported files found, nothing to do");
        return Ok(BatchSummary::default());
    }

    let workers = config.workers.unwrap_or_else(default_workers).clamp(1, files.len());
    let pool = rayon::ThreadPoolBuilder::new().num_threads(workers).build()?;
    debug!("processing {} file(s) on {} worker(s)", files.len(), workers);

    let outcomes: Vec<bool> = pool.install(|| {
        files
            .par_iter()
            .map(|file| match pipeline::process(file, config) {
                Ok(outcome) => {
                    TransposeReport::from(&outcome).render(mode);
                    true
                },
                Err(err) => {
                    error!("{}: {err}", file.display());
                    output::render_failure(&err.to_string(), mode);
                    false
                },
            })
            .collect()
    });

    let processed = outcomes.iter().filter(|ok| **ok).count();
    Ok(BatchSummary {
        processed,
        failed: outcomes.len() - processed,
    })
}

/// One worker per available processing unit
fn default_workers() -> usize {
    thread::available_parallelism().map_or(1, NonZeroUsize::get)
}

/// Check if an entry is hidden (starts with .)
fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|s| s.starts_with('.'))
}
