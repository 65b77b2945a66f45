// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::report::Status;
use proptest::prelude::*;
use std::thread;
use tempfile::NamedTempFile;

#[test]
fn records_in_order() {
    let log = ReportLog::new();
    log.record(TestResult::passed("a", 10));
    log.record(TestResult::failed("b", 0, "boom"));

    let results = log.results();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].name, "a");
    assert_eq!(results[1].status, Status::Failed);
}

#[test]
fn clones_share_entries() {
    let log = ReportLog::new();
    let handle = log.clone();
    handle.record(TestResult::passed("a", 1));
    assert_eq!(log.len(), 1);
    assert!(!log.is_empty());
}

#[test]
fn concurrent_appends_are_all_kept() {
    let log = ReportLog::new();
    let workers: Vec<_> = (0..4)
        .map(|w| {
            let log = log.clone();
            thread::spawn(move || {
                for i in 0..25 {
                    log.record(TestResult::passed(format!("{}-{}", w, i), 1));
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    assert_eq!(log.len(), 100);
    assert_eq!(log.total(), 100);
}

#[test]
fn streams_jsonl() {
    let file = NamedTempFile::new().unwrap();
    let log = ReportLog::with_file(file.path()).unwrap();
    log.record(TestResult::passed("a", 5));
    log.record(TestResult::failed("b", -2, "penalty"));

    let content = std::fs::read_to_string(file.path()).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    let second: TestResult = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(second.score, -2);
}

#[test]
fn finish_builds_report() {
    let log = ReportLog::new();
    log.extend([TestResult::passed("a", 10), TestResult::failed("b", -3, "")]);
    let report = log.finish();
    assert_eq!(report.score, 7);
    assert_eq!(report.tests.len(), 2);
}

proptest! {
    #[test]
    fn total_is_plain_sum(scores in prop::collection::vec(-20i32..20, 0..30)) {
        let log = ReportLog::new();
        for (i, score) in scores.iter().enumerate() {
            log.record(TestResult::passed(format!("t{}", i), *score));
        }
        let expected: i64 = scores.iter().map(|s| i64::from(*s)).sum();
        prop_assert_eq!(log.total(), expected);
        prop_assert_eq!(log.finish().score, expected);
    }
}
