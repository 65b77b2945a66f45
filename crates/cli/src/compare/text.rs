// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line-oriented text comparison.

use crate::confirm::{Artifacts, Confirm, Decision};
use crate::violation::Violation;

/// Split text after each line feed, keeping terminators.
///
/// A trailing empty fragment is not a line, so `"a\n"` is one line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}

/// Marker string with `^` where two lines differ and a space where they agree.
///
/// The marker is as long as the longer line; positions past the end of the
/// shorter line are differences.
pub fn diff_marker(expected: &str, actual: &str) -> String {
    let e: Vec<char> = expected.chars().collect();
    let a: Vec<char> = actual.chars().collect();
    (0..e.len().max(a.len()))
        .map(|i| match (e.get(i), a.get(i)) {
            (Some(x), Some(y)) if x == y => ' ',
            _ => '^',
        })
        .collect()
}

fn escape(line: &str) -> String {
    line.replace('\n', "\\n").replace('\r', "\\r")
}

/// Compare two texts line by line, reporting the first difference
pub fn assert_text_eq(message: &str, expected: &str, actual: &str) -> Result<(), Violation> {
    if expected == actual {
        return Ok(());
    }

    let expecteds = split_lines(expected);
    let actuals = split_lines(actual);

    for i in 0..expecteds.len().max(actuals.len()) {
        let n = i + 1;
        match (expecteds.get(i), actuals.get(i)) {
            (Some(e), None) => {
                return Err(Violation::new(format!(
                    "{}\n  Expected line {}: \"{}\"\n  But I didn't get line {} from you at all.",
                    message,
                    n,
                    escape(e),
                    n
                )));
            }
            (None, Some(a)) => {
                return Err(Violation::new(format!(
                    "{}\n  I didn't expect a line {} at all, but you had \"{}\".",
                    message,
                    n,
                    escape(a)
                )));
            }
            (Some(e), Some(a)) => {
                let (e, a) = (escape(e), escape(a));
                if e != a {
                    return Err(line_difference(message, n, &e, &a));
                }
            }
            (None, None) => {}
        }
    }

    Ok(())
}

/// Like [`assert_text_eq`], but a mismatch is first shown to an operator
/// who may accept it
pub fn assert_text_eq_confirmed(
    message: &str,
    expected: &str,
    actual: &str,
    confirm: &dyn Confirm,
) -> Result<(), Violation> {
    let Err(violation) = assert_text_eq(message, expected, actual) else {
        return Ok(());
    };
    match confirm.confirm(violation.message(), &Artifacts::Text { expected, actual }) {
        Decision::Accept => Ok(()),
        Decision::Reject => Err(violation),
    }
}

fn line_difference(message: &str, n: usize, expected: &str, actual: &str) -> Violation {
    let expected_label = format!("  Expected line {}: \"", n);
    let width = expected_label.chars().count();
    let actual_label = format!("{:>width$}", format!("Actual line {}: \"", n));
    let marker_label = format!("{:>width$}", "Differences: ");

    Violation::new(format!(
        "{}\n{}{}\"\n{}{}\"\n{}{}",
        message,
        expected_label,
        expected,
        actual_label,
        actual,
        marker_label,
        diff_marker(expected, actual)
    ))
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
