// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Value comparison with diagnostics aimed at students.
//!
//! Every assertion returns `Result<(), Violation>` so that test routines can
//! propagate failures with `?`. Messages start with the caller's context
//! sentence and then explain what differed.

mod color;
mod grid;
mod independence;
mod raster;
mod sequence;
mod text;

pub use color::{assert_color_eq, assert_color_near, Rgba};
pub use grid::assert_grid_eq;
pub use independence::assert_independent;
pub use raster::{assert_raster_near, Raster};
pub use sequence::assert_seq_eq;
pub use text::{assert_text_eq, assert_text_eq_confirmed, diff_marker, split_lines};

use crate::violation::Violation;
use regex::Regex;
use std::fmt::Display;

/// Build the standard expected/actual violation
pub fn mismatch(message: &str, expected: impl Display, actual: impl Display) -> Violation {
    Violation::new(format!(
        "{}\n  Expected: {}\n    Actual: {}",
        message, expected, actual
    ))
}

/// Exact equality for scalars and displayable objects
pub fn assert_equals<T: PartialEq + Display + ?Sized>(
    message: &str,
    expected: &T,
    actual: &T,
) -> Result<(), Violation> {
    if expected == actual {
        Ok(())
    } else {
        Err(mismatch(message, expected, actual))
    }
}

/// Floating-point equality within an absolute tolerance
pub fn assert_close(
    message: &str,
    expected: f64,
    actual: f64,
    epsilon: f64,
) -> Result<(), Violation> {
    // NaN never compares within tolerance, so it always fails here.
    if (actual - expected).abs() <= epsilon {
        Ok(())
    } else {
        Err(mismatch(
            message,
            format_args!("{:.6}", expected),
            format_args!("{:.6}", actual),
        ))
    }
}

/// Fail unless a value is present
pub fn assert_some<T>(message: &str, value: Option<&T>) -> Result<(), Violation> {
    match value {
        Some(_) => Ok(()),
        None => Err(Violation::new(message)),
    }
}

/// Fail if the pattern matches anywhere in the text
pub fn assert_no_match(message: &str, pattern: &Regex, text: &str) -> Result<(), Violation> {
    if pattern.is_match(text) {
        Err(Violation::new(message))
    } else {
        Ok(())
    }
}

/// Unconditional failure
pub fn fail(message: impl Into<String>) -> Result<(), Violation> {
    Err(Violation::new(message))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
