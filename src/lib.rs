//! transpose - a CLI tool that finds the longest word in text files and
//! prints it transposed
//!
//! This library provides the core pipeline: loading a file into lines,
//! cleaning each line down to word candidates, electing the longest word,
//! reversing it, and fanning the whole pipeline out over a directory tree.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod batch;
pub mod config;
pub mod loader;
pub mod output;
pub mod pipeline;
pub mod transposer;
