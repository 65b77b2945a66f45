// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Four-channel color comparison.

use crate::violation::Violation;
use std::fmt;

/// An 8-bit RGBA color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Rgba {
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub const fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, 255)
    }

    /// Unpack from `0xAARRGGBB`
    pub const fn from_argb(argb: u32) -> Self {
        Self::new(
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            argb as u8,
            (argb >> 24) as u8,
        )
    }

    fn channels(self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// Every channel within `tolerance` of the other color's
    pub fn near(self, other: Rgba, tolerance: u8) -> bool {
        self.channels()
            .iter()
            .zip(other.channels())
            .all(|(a, b)| a.abs_diff(b) <= tolerance)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:3}, {:3}, {:3}, {:3})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

fn color_mismatch(message: &str, expected: Rgba, actual: Rgba) -> Violation {
    Violation::new(format!(
        "{}\n  Expected RGBA: {}\n    Actual RGBA: {}",
        message, expected, actual
    ))
}

/// Exact color equality
pub fn assert_color_eq(message: &str, expected: Rgba, actual: Rgba) -> Result<(), Violation> {
    if expected == actual {
        Ok(())
    } else {
        Err(color_mismatch(message, expected, actual))
    }
}

/// Color equality with a per-channel tolerance.
///
/// A channel differing by exactly `tolerance` is accepted.
pub fn assert_color_near(
    message: &str,
    expected: Rgba,
    actual: Rgba,
    tolerance: u8,
) -> Result<(), Violation> {
    if expected.near(actual, tolerance) {
        Ok(())
    } else {
        Err(color_mismatch(message, expected, actual))
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
