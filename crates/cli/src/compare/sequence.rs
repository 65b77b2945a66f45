// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sequence comparison.

use super::mismatch;
use crate::violation::Violation;
use std::fmt::Debug;

/// Compare two sequences.
///
/// The overlapping prefix is checked element by element first. Only when it
/// matches is the length compared, so a sequence that is merely too long or
/// too short is reported as such.
pub fn assert_seq_eq<T: PartialEq + Debug>(
    message: &str,
    expected: &[T],
    actual: &[T],
) -> Result<(), Violation> {
    for (i, (e, a)) in expected.iter().zip(actual).enumerate() {
        if e != a {
            return Err(mismatch(
                &format!("{} But element {} wasn't what I expected.", message, i),
                format_args!("{:?}", e),
                format_args!("{:?}", a),
            ));
        }
    }

    if expected.len() != actual.len() {
        return Err(Violation::new(format!(
            "{} But the array had a different length than I expected.\n  Expected length: {}\n    Actual length: {}\n  Expected: {:?}\n    Actual: {:?}",
            message,
            expected.len(),
            actual.len(),
            expected,
            actual
        )));
    }

    Ok(())
}

#[cfg(test)]
#[path = "sequence_tests.rs"]
mod tests;
