//! Integration tests for the transpose CLI
//!
//! These tests run the real binary against real files on disk, covering
//! single-file mode end to end. Directory mode lives in `batch_test`.


use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper function to create a transpose command
fn transpose() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("transpose"))
}

/// Helper to write a fixture file and return its path
fn write_file(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(&path, content).unwrap();
    path
}

/// Mixed word-list fixture: blanks, digits and every hyphen/underscore variant
const RAW_DATA: &[&str] = &[
    "a",
    "ab",
    "",
    " ",
    "abc",
    "33",
    "False",
    "abcd",
    "abcde",
    "YGKNkfdfs",
    "Sierra_Nevada",
    "Sierra-Nevada",
    "Sierra - Nevada",
    "SierraNevada",
    "Sierra Nevada",
];

// =============================================================================
// SINGLE-FILE MODE
// =============================================================================

#[test]
fn e2e_longest_word_is_transposed() {
    let temp = TempDir::new().unwrap();
    let path = write_file(temp.path(), "word_list.txt", RAW_DATA);

    transpose()
        .args(["-f", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout("Original: Sierra_Nevada\nTransposed: adaveN_arreiS\n\n");
}

#[test]
fn e2e_single_word_file() {
    let temp = TempDir::new().unwrap();
    let path = write_file(temp.path(), "one.txt", &["cool"]);

    transpose()
        .args(["-f", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout("Original: cool\nTransposed: looc\n\n");
}

#[test]
fn e2e_punctuation_is_stripped() {
    let temp = TempDir::new().unwrap();
    let path = write_file(temp.path(), "noisy.txt", &["cool@#$!*"]);

    transpose()
        .args(["-f", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout("Original: cool\nTransposed: looc\n\n");
}

#[test]
fn e2e_no_word_prints_the_sentinel() {
    let temp = TempDir::new().unwrap();
    let path = write_file(temp.path(), "digits.txt", &["33", "@#$!*"]);

    transpose()
        .args(["-f", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout("There is only empty strings. Try to use another file.\n\n");
}

#[test]
fn e2e_empty_file_fails() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("empty.txt");
    fs::write(&path, "").unwrap();

    transpose()
        .args(["-f", path.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("the list of strings is empty"));
}

#[test]
fn e2e_wrong_extension_fails() {
    let temp = TempDir::new().unwrap();
    let path = write_file(temp.path(), "word_list.doc", &["words"]);

    transpose()
        .args(["-f", path.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Error: not supported file format!"));
}

#[test]
fn e2e_missing_file_fails() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.txt");

    transpose()
        .args(["-f", path.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("can not read the file"));
}

#[test]
fn e2e_json_mode_reports_both_forms() {
    let temp = TempDir::new().unwrap();
    let path = write_file(temp.path(), "one.txt", &["cool"]);

    transpose()
        .args(["-f", path.to_str().unwrap(), "--json"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"found\": true")
                .and(predicate::str::contains("\"original\": \"cool\""))
                .and(predicate::str::contains("\"transposed\": \"looc\"")),
        );
}

#[test]
fn e2e_debug_flag_logs_to_stderr_only() {
    let temp = TempDir::new().unwrap();
    let path = write_file(temp.path(), "one.txt", &["cool"]);

    transpose()
        .args(["-f", path.to_str().unwrap(), "-d"])
        .assert()
        .success()
        .stdout("Original: cool\nTransposed: looc\n\n")
        .stderr(predicate::str::contains("current file path"));
}

// =============================================================================
// USAGE ERRORS
// =============================================================================

#[test]
fn no_input_is_a_usage_error() {
    transpose().assert().failure().code(2);
}

#[test]
fn file_and_path_are_mutually_exclusive() {
    transpose().args(["-f", "a.txt", "-p", "dir"]).assert().failure().code(2);
}

#[test]
fn debug_and_silent_are_mutually_exclusive() {
    transpose().args(["-f", "a.txt", "-d", "-s"]).assert().failure().code(2);
}
