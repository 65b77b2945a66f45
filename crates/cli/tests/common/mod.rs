// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared helpers for grading integration tests.

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// Directory of a fixture project under `tests/fixtures`
pub fn fixture_dir(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Path of a file inside a fixture project
pub fn fixture(name: &str, file: &str) -> PathBuf {
    fixture_dir(name).join(file)
}

/// Write a document to a temp file, choosing the extension from its content
pub fn write_document(content: &str) -> NamedTempFile {
    let is_json = content.trim().starts_with('{') || content.trim().starts_with('[');
    let suffix = if is_json { ".json" } else { ".toml" };

    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Read and parse a report written by the grader
pub fn read_report(path: &std::path::Path) -> serde_json::Value {
    let text = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read report {:?}: {}", path, e));
    serde_json::from_str(&text).unwrap()
}

/// Names of the report's entries in order
pub fn entry_names(report: &serde_json::Value) -> Vec<String> {
    report["tests"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap().to_string())
        .collect()
}
