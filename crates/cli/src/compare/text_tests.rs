// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::confirm::AutoReject;
use proptest::prelude::*;
use yare::parameterized;

struct AlwaysAccept;

impl Confirm for AlwaysAccept {
    fn confirm(&self, _prompt: &str, _artifacts: &Artifacts<'_>) -> Decision {
        Decision::Accept
    }
}

#[parameterized(
    empty = { "", &[] },
    no_terminator = { "a", &["a"] },
    single_line = { "a\n", &["a\n"] },
    keeps_blank_lines = { "a\n\nb", &["a\n", "\n", "b"] },
    crlf = { "a\r\nb\r\n", &["a\r\n", "b\r\n"] },
)]
fn splits_after_line_feeds(text: &str, lines: &[&str]) {
    assert_eq!(split_lines(text), lines);
}

#[test]
fn equal_text_passes() {
    assert!(assert_text_eq("Output", "one\ntwo\n", "one\ntwo\n").is_ok());
}

#[test]
fn marker_points_at_differing_column() {
    let err = assert_text_eq("Output", "hello world\n", "hello_world\n").unwrap_err();
    let lines: Vec<&str> = err.message().lines().collect();
    assert_eq!(lines[0], "Output");
    assert_eq!(lines[1], "  Expected line 1: \"hello world\\n\"");
    assert_eq!(lines[2], "    Actual line 1: \"hello_world\\n\"");

    let prefix = "  Expected line 1: \"".len();
    let marker = &lines[3][prefix..];
    assert_eq!(marker.find('^'), Some(5));
    assert_eq!(marker.matches('^').count(), 1);
}

#[test]
fn marker_extends_past_shorter_line() {
    assert_eq!(diff_marker("abc", "abcde"), "   ^^");
    assert_eq!(diff_marker("abXd", "abcd"), "  ^ ");
}

#[test]
fn missing_line_reported_specially() {
    let err = assert_text_eq("Output", "a\nb\n", "a\n").unwrap_err();
    assert_eq!(
        err.message(),
        "Output\n  Expected line 2: \"b\\n\"\n  But I didn't get line 2 from you at all."
    );
}

#[test]
fn extra_line_reported_specially() {
    let err = assert_text_eq("Output", "a\n", "a\nb\n").unwrap_err();
    assert_eq!(
        err.message(),
        "Output\n  I didn't expect a line 2 at all, but you had \"b\\n\"."
    );
}

#[test]
fn missing_trailing_newline_is_a_line_difference() {
    let err = assert_text_eq("Output", "a\n", "a").unwrap_err();
    assert!(err.message().contains("Expected line 1: \"a\\n\""));
    assert!(err.message().contains("Actual line 1: \"a\""));
}

#[test]
fn carriage_returns_are_escaped() {
    let err = assert_text_eq("Output", "a\n", "a\r\n").unwrap_err();
    assert!(err.message().contains("\"a\\r\\n\""));
}

#[test]
fn confirmation_can_accept_a_mismatch() {
    assert!(assert_text_eq_confirmed("Output", "a", "b", &AlwaysAccept).is_ok());
    assert!(assert_text_eq_confirmed("Output", "a", "b", &AutoReject).is_err());
}

proptest! {
    #[test]
    fn single_character_divergence_marks_its_column(
        line in "[a-z]{1,30}",
        column in 0usize..30,
    ) {
        let column = column % line.len();
        let mut changed: Vec<char> = line.chars().collect();
        changed[column] = 'Z';
        let changed: String = changed.into_iter().collect();

        let marker = diff_marker(&line, &changed);
        prop_assert_eq!(marker.find('^'), Some(column));
        prop_assert_eq!(marker.matches('^').count(), 1);
    }
}
