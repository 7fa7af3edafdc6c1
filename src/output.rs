//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON. Human rendering emits one
//! `println!` per report; concurrent batch tasks stay line-atomic.

use serde::Serialize;

use crate::transposer::Outcome;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of analyzing one file
#[derive(Debug, Serialize)]
pub struct TransposeReport {
    /// Whether any word survived cleaning
    pub found: bool,
    /// The longest word, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
    /// The longest word reversed, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transposed: Option<String>,
}

impl From<&Outcome> for TransposeReport {
    fn from(outcome: &Outcome) -> Self {
        match outcome {
            Outcome::Word { original, transposed } => Self {
                found: true,
                original: Some(original.clone()),
                transposed: Some(transposed.clone()),
            },
            Outcome::Empty => Self {
                found: false,
                original: None,
                transposed: None,
            },
        }
    }
}

impl TransposeReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if let (Some(original), Some(transposed)) = (&self.original, &self.transposed) {
            println!("Original: {original}\nTransposed: {transposed}\n");
        } else {
            println!("There is only empty strings. Try to use another file.\n");
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Failure report for one unit of work
#[derive(Debug, Serialize)]
pub struct FailureReport {
    /// Always false
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

/// Print a failure either as its bare message or as JSON.
pub fn render_failure(message: &str, mode: OutputMode) {
    match mode {
        OutputMode::Human => println!("{message}"),
        OutputMode::Json => {
            let report = FailureReport {
                success: false,
                message: message.to_string(),
            };
            println!("{}", serde_json::to_string_pretty(&report).unwrap_or_default());
        },
    }
}
