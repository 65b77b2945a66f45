// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Integration tests for the `specgrade` binary.
//!
//! The stock binary has no test suites registered, so any unit tester named
//! by a specification stops the run with an `Interface Tests` entry.

#![allow(deprecated)] // Command::cargo_bin is deprecated but still functional

mod common;

use assert_cmd::Command;
use common::{entry_names, fixture, read_report, write_document};
use predicates::prelude::*;

fn specgrade() -> Command {
    Command::cargo_bin("specgrade").unwrap()
}

#[test]
fn test_writes_report_and_prints_total() {
    let dir = tempfile::tempdir().unwrap();
    let report_path = dir.path().join("results.json");

    specgrade()
        .arg("--spec")
        .arg(fixture("shapes", "spec.json"))
        .arg("--program")
        .arg(fixture("shapes", "program.json"))
        .arg("--report")
        .arg(&report_path)
        .assert()
        .success()
        .stderr(predicate::str::contains("TOTAL: 0"));

    let report = read_report(&report_path);
    assert_eq!(
        entry_names(&report),
        vec!["shapes.Circle: Interface Tests", "Interface Tests"]
    );
    assert_eq!(report["score"], 0);
    assert_eq!(report["output"], "TOTAL: 0");
    assert!(report["tests"][0]["output"]
        .as_str()
        .unwrap()
        .starts_with("I found the wrong return type for area() in class shapes.Circle."));
    assert!(report["tests"][1]["output"]
        .as_str()
        .unwrap()
        .contains("\"shapes.SquareTest\""));
}

#[test]
fn test_source_root_enables_source_checks() {
    let dir = tempfile::tempdir().unwrap();
    let report_path = dir.path().join("results.json");

    specgrade()
        .arg("--spec")
        .arg(fixture("shapes", "spec.json"))
        .arg("--program")
        .arg(fixture("shapes", "program.json"))
        .arg("--source-root")
        .arg(fixture("shapes", "src"))
        .arg("--config")
        .arg(fixture("shapes", "grader.toml"))
        .arg("--report")
        .arg(&report_path)
        .assert()
        .success()
        .stderr(predicate::str::contains("TOTAL: -2"));

    let report = read_report(&report_path);
    assert_eq!(
        entry_names(&report),
        vec![
            "shapes.Circle: Interface Tests",
            "shapes.Circle -> Source Checks",
            "Interface Tests"
        ]
    );
    assert_eq!(report["tests"][1]["score"], -2);
    assert_eq!(report["tests"][1]["status"], "failed");
}

#[test]
fn test_report_goes_to_stdout_without_report_flag() {
    let output = specgrade()
        .arg("--spec")
        .arg(fixture("shapes", "spec.json"))
        .arg("--program")
        .arg(fixture("shapes", "program.json"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["score"], 0);
}

#[test]
fn test_jsonl_streams_entries() {
    let dir = tempfile::tempdir().unwrap();
    let jsonl = dir.path().join("entries.jsonl");

    specgrade()
        .arg("--spec")
        .arg(fixture("shapes", "spec.json"))
        .arg("--program")
        .arg(fixture("shapes", "program.json"))
        .arg("--report")
        .arg(dir.path().join("results.json"))
        .arg("--jsonl")
        .arg(&jsonl)
        .assert()
        .success();

    let lines: Vec<serde_json::Value> = std::fs::read_to_string(&jsonl)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1]["name"], "Interface Tests");
}

#[test]
fn test_unresolved_class_stops_run() {
    let spec = write_document(r#"{"tag": "hw1", "classes": [{"name": "hw1.Nope"}]}"#);
    let program = write_document(r#"{"types": []}"#);
    let dir = tempfile::tempdir().unwrap();
    let report_path = dir.path().join("results.json");

    specgrade()
        .arg("--spec")
        .arg(spec.path())
        .arg("--program")
        .arg(program.path())
        .arg("--report")
        .arg(&report_path)
        .assert()
        .success();

    let report = read_report(&report_path);
    assert_eq!(entry_names(&report), vec!["Interface Tests"]);
    assert!(report["tests"][0]["output"]
        .as_str()
        .unwrap()
        .contains("I couldn't find a class by the name of \"hw1.Nope\"."));
}

#[test]
fn test_toml_specification_is_accepted() {
    let spec = write_document(
        r#"
        tag = "hw1"
        [[classes]]
        name = "hw1.Empty"
        modifiers = 1
        "#,
    );
    let program = write_document(r#"{"types": [{"name": "hw1.Empty", "modifiers": 1}]}"#);

    specgrade()
        .arg("--spec")
        .arg(spec.path())
        .arg("--program")
        .arg(program.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("TOTAL: 0"));
}

#[test]
fn test_missing_spec_fails() {
    specgrade()
        .args(["--spec", "/nonexistent/spec.json", "--program", "p.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to load specification"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = write_document("[harness]\ndefault_timeout_ms = 0\n");

    specgrade()
        .arg("--spec")
        .arg(fixture("shapes", "spec.json"))
        .arg("--program")
        .arg(fixture("shapes", "program.json"))
        .arg("--config")
        .arg(config.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("default_timeout_ms"));
}

#[test]
fn test_unknown_config_field_is_rejected() {
    let config = write_document("[harness]\ntimeout = 5\n");

    specgrade()
        .arg("--spec")
        .arg(fixture("shapes", "spec.json"))
        .arg("--program")
        .arg(fixture("shapes", "program.json"))
        .arg("--config")
        .arg(config.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown field"));
}
