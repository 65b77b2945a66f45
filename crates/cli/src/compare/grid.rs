// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Two-dimensional boolean grid comparison.

use super::mismatch;
use crate::violation::Violation;

/// Compare two grids: outer length, then every row length, then cells in
/// row-major order
pub fn assert_grid_eq<R: AsRef<[bool]>>(
    message: &str,
    expected: &[R],
    actual: &[R],
) -> Result<(), Violation> {
    if expected.len() != actual.len() {
        return Err(mismatch(
            &format!(
                "{} But the outer array had a different length than I expected.",
                message
            ),
            expected.len(),
            actual.len(),
        ));
    }

    for (r, (e, a)) in expected.iter().zip(actual).enumerate() {
        let (e, a) = (e.as_ref(), a.as_ref());
        if e.len() != a.len() {
            return Err(mismatch(
                &format!(
                    "{} But inner array {} had a different length than I expected.",
                    message, r
                ),
                e.len(),
                a.len(),
            ));
        }
    }

    for (r, (e, a)) in expected.iter().zip(actual).enumerate() {
        for (c, (x, y)) in e.as_ref().iter().zip(a.as_ref()).enumerate() {
            if x != y {
                return Err(mismatch(
                    &format!(
                        "{} But element [{}][{}] wasn't what I expected.",
                        message, r, c
                    ),
                    x,
                    y,
                ));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "grid_tests.rs"]
mod tests;
