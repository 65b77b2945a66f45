// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

struct Published(Option<u32>);

impl VersionSource for Published {
    fn published_version(&self, query: &VersionQuery<'_>) -> Result<u32, VersionError> {
        self.0
            .ok_or_else(|| VersionError::Unregistered(query.tag.to_string()))
    }
}

fn project(version: u32) -> ProjectSpecification {
    ProjectSpecification {
        tag: "hw1".to_string(),
        course: Some("cs1".to_string()),
        semester: Some("fall2026".to_string()),
        version,
        ..ProjectSpecification::default()
    }
}

#[test]
fn matching_version_passes() {
    assert_eq!(check_version(&Published(Some(3)), &project(3)), None);
}

#[test]
fn outdated_version_is_a_violation() {
    let violation = check_version(&Published(Some(4)), &project(3)).unwrap();
    assert!(violation.message().contains("out of date"));
}

#[test]
fn unregistered_homework_is_only_a_warning() {
    assert_eq!(check_version(&Published(None), &project(3)), None);
}

#[test]
fn missing_metadata_skips_the_check() {
    let mut p = project(3);
    p.semester = None;
    assert_eq!(check_version(&Published(Some(9)), &p), None);
    assert_eq!(check_version(&Published(Some(9)), &project(0)), None);
}

#[test]
fn no_version_check_never_fails() {
    assert_eq!(check_version(&NoVersionCheck, &project(3)), None);
}

#[test]
fn template_placeholders_are_expanded() {
    let query = VersionQuery {
        course: "cs1",
        semester: "fall2026",
        tag: "hw1",
    };
    assert_eq!(
        expand_template("https://example.org/{course}/{semester}/{tag}/version", &query),
        "https://example.org/cs1/fall2026/hw1/version"
    );
}

#[parameterized(
    plain = { "3", Some(3) },
    trailing_newline = { "12\n", Some(12) },
    leading_space = { "  7 extra", Some(7) },
    empty = { "", None },
    not_a_number = { "<html>", None },
)]
fn parses_version_body(body: &str, expected: Option<u32>) {
    assert_eq!(parse_version(body), expected);
}
