// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scored grading report.

mod log;

pub use log::ReportLog;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Outcome of one scored check
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Passed,
    Failed,
}

/// One scored entry in the report
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    pub name: String,
    /// Points awarded; negative for penalties
    pub score: i32,
    pub status: Status,
    /// Diagnostic text shown to the student
    #[serde(default)]
    pub output: String,
}

impl TestResult {
    pub fn passed(name: impl Into<String>, score: i32) -> Self {
        Self {
            name: name.into(),
            score,
            status: Status::Passed,
            output: String::new(),
        }
    }

    pub fn failed(name: impl Into<String>, score: i32, output: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score,
            status: Status::Failed,
            output: output.into(),
        }
    }
}

/// Final report for one grading run
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Sum of all entry scores. Never clamped.
    pub score: i64,
    /// Summary text
    pub output: String,
    pub tests: Vec<TestResult>,
}

impl Report {
    /// Build from entries in the order they were produced
    pub fn from_results(tests: Vec<TestResult>) -> Self {
        let score = total(&tests);
        Self {
            score,
            output: summary_line(score),
            tests,
        }
    }

    /// Plain-text summary: `TOTAL: <score>`
    pub fn summary(&self) -> String {
        summary_line(self.score)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write the pretty JSON document followed by a newline
    pub fn write(&self, path: &Path) -> std::io::Result<()> {
        let mut json = self.to_json_pretty().map_err(std::io::Error::other)?;
        json.push('\n');
        std::fs::write(path, json)
    }
}

pub(crate) fn total(tests: &[TestResult]) -> i64 {
    tests.iter().map(|t| i64::from(t.score)).sum()
}

fn summary_line(score: i64) -> String {
    format!("TOTAL: {}", score)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
