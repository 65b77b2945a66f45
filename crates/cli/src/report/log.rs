// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only accumulator for report entries.

use super::{total, Report, TestResult};
use parking_lot::Mutex;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

/// Accumulates entries for one grading run.
///
/// Clones share the same entries, so checks running elsewhere can append
/// through their own handle. Appends are serialized.
pub struct ReportLog {
    results: Arc<Mutex<Vec<TestResult>>>,
    file_writer: Option<Arc<Mutex<BufWriter<File>>>>,
}

impl ReportLog {
    /// Create a new in-memory log
    pub fn new() -> Self {
        Self {
            results: Arc::new(Mutex::new(Vec::new())),
            file_writer: None,
        }
    }

    /// Create a log that also streams each entry to a file (JSONL format)
    pub fn with_file(path: &Path) -> std::io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            results: Arc::new(Mutex::new(Vec::new())),
            file_writer: Some(Arc::new(Mutex::new(BufWriter::new(file)))),
        })
    }

    /// Append an entry
    pub fn record(&self, result: TestResult) {
        let mut results = self.results.lock();

        // Streamed while holding the entries lock so the file order matches
        if let Some(ref writer) = self.file_writer {
            let mut w = writer.lock();
            if let Ok(json) = serde_json::to_string(&result) {
                let _ = writeln!(w, "{}", json);
                let _ = w.flush();
            }
        }

        results.push(result);
    }

    /// Append several entries in order
    pub fn extend(&self, results: impl IntoIterator<Item = TestResult>) {
        for result in results {
            self.record(result);
        }
    }

    /// Snapshot of the entries so far
    pub fn results(&self) -> Vec<TestResult> {
        self.results.lock().clone()
    }

    /// Running total
    pub fn total(&self) -> i64 {
        total(&self.results.lock())
    }

    pub fn len(&self) -> usize {
        self.results.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.lock().is_empty()
    }

    /// Build the final report from the entries recorded so far
    pub fn finish(&self) -> Report {
        Report::from_results(self.results())
    }
}

impl Default for ReportLog {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ReportLog {
    fn clone(&self) -> Self {
        Self {
            results: Arc::clone(&self.results),
            file_writer: self.file_writer.as_ref().map(Arc::clone),
        }
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
