//! Longest-word selection and transposition
//!
//! Each line is cleaned down to word candidates, the longest candidate wins
//! (first seen on a tie), and the winner is paired with its
//! character-reversed copy.
//!
//! # Examples
//!
//! ```
//! use transpose::transposer::{transpose, Outcome};
//!
//! let lines = vec!["Sierra - Nevada".to_string()];
//! let outcome = transpose(&lines).unwrap();
//! assert_eq!(
//!     outcome,
//!     Outcome::Word {
//!         original: "Sierra".to_string(),
//!         transposed: "arreiS".to_string(),
//!     }
//! );
//! ```

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Runs of two or more hyphens act as separators, not word characters
static HYPHEN_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"-{2,}").unwrap());

/// Everything outside ASCII letters, hyphen, underscore and space
static DISALLOWED: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z\- _]+").unwrap());

/// Errors that can occur during analysis
#[derive(Debug, Clone, Copy, Error)]
pub enum TransposeError {
    /// The input sequence held no lines at all
    #[error("Error: the list of strings is empty!")]
    EmptyInput,
}

/// Outcome of analyzing one file's lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The longest word paired with its character-reversed copy
    Word {
        /// The winning word exactly as extracted
        original: String,
        /// The winning word reversed
        transposed: String,
    },

    /// No word survived cleaning
    Empty,
}

/// Strip a line down to word characters and spaces.
///
/// Hyphen runs collapse to a space first, then free-standing hyphens are
/// detached as three independent substring replacements, then every
/// disallowed character is dropped.
fn clean_line(line: &str) -> String {
    let collapsed = HYPHEN_RUNS.replace_all(line, " ");
    let detached = collapsed.replace(" - ", " ").replace("- ", " ").replace(" -", " ");
    DISALLOWED.replace_all(&detached, "").into_owned()
}

/// Find the longest word across all lines and reverse it.
///
/// Candidates are compared by length only, in line order then within-line
/// split order; on a tie the first one seen keeps the crown. An empty line
/// sequence is an error, while a sequence that yields no candidate at all is
/// the [`Outcome::Empty`] sentinel.
pub fn transpose(lines: &[String]) -> Result<Outcome, TransposeError> {
    debug!("got {} line(s) for analysis", lines.len());

    if lines.is_empty() {
        return Err(TransposeError::EmptyInput);
    }

    let mut longest = String::new();
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let cleaned = clean_line(line);
        for word in cleaned.split(' ') {
            if word.len() > longest.len() {
                longest = word.to_string();
            }
        }
    }

    if longest.is_empty() {
        return Ok(Outcome::Empty);
    }

    let transposed = longest.chars().rev().collect();
    Ok(Outcome::Word {
        original: longest,
        transposed,
    })
}
