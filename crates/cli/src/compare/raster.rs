// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Raster image comparison.

use super::color::{assert_color_eq, Rgba};
use super::mismatch;
use crate::confirm::{Artifacts, Confirm, Decision};
use crate::violation::Violation;

/// A row-major RGBA image
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

impl Raster {
    /// Image of the given size filled with one color. `None` if the pixel
    /// count overflows.
    pub fn filled(width: usize, height: usize, color: Rgba) -> Option<Self> {
        let count = width.checked_mul(height)?;
        Some(Self {
            width,
            height,
            pixels: vec![color; count],
        })
    }

    /// Image from row-major pixels. Returns `None` if the count is wrong.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Rgba>) -> Option<Self> {
        width
            .checked_mul(height)
            .filter(|&count| count == pixels.len())
            .map(|_| Self {
                width,
                height,
                pixels,
            })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> Option<Rgba> {
        if x < self.width && y < self.height {
            self.pixels.get(y * self.width + x).copied()
        } else {
            None
        }
    }

    /// Set the pixel at column `x`, row `y`. Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: usize, y: usize, color: Rgba) {
        if x < self.width && y < self.height {
            if let Some(p) = self.pixels.get_mut(y * self.width + x) {
                *p = color;
            }
        }
    }

    /// Number of pixels that differ exactly, over the overlapping area
    pub fn count_differences(&self, other: &Raster) -> usize {
        let mut count = 0;
        for y in 0..self.height.min(other.height) {
            for x in 0..self.width.min(other.width) {
                if self.get(x, y) != other.get(x, y) {
                    count += 1;
                }
            }
        }
        count
    }

    /// First pixel (column, row) whose channels differ by more than `tolerance`
    fn first_difference(&self, other: &Raster, tolerance: u8) -> Option<(usize, usize, Rgba, Rgba)> {
        for y in 0..self.height {
            for x in 0..self.width {
                let (Some(e), Some(a)) = (self.get(x, y), other.get(x, y)) else {
                    continue;
                };
                if !e.near(a, tolerance) {
                    return Some((x, y, e, a));
                }
            }
        }
        None
    }
}

/// Compare two images with a per-channel tolerance.
///
/// Width and height are checked before any pixel. The first mismatching
/// pixel in row-major order is offered to `confirm`; unless the operator
/// accepts, it becomes the violation.
pub fn assert_raster_near(
    message: &str,
    expected: &Raster,
    actual: &Raster,
    tolerance: u8,
    confirm: &dyn Confirm,
) -> Result<(), Violation> {
    if expected.width != actual.width {
        return Err(mismatch(
            &format!("{} But the image's width was different than I expected.", message),
            expected.width,
            actual.width,
        ));
    }
    if expected.height != actual.height {
        return Err(mismatch(
            &format!("{} But the image's height was different than I expected.", message),
            expected.height,
            actual.height,
        ));
    }

    let Some((x, y, e, a)) = expected.first_difference(actual, tolerance) else {
        return Ok(());
    };

    let pixel_message = format!(
        "{} But pixel ({}, {}) wasn't the color I expected.",
        message, x, y
    );
    match confirm.confirm(&pixel_message, &Artifacts::Raster { expected, actual }) {
        Decision::Accept => Ok(()),
        Decision::Reject => assert_color_eq(&pixel_message, e, a),
    }
}

#[cfg(test)]
#[path = "raster_tests.rs"]
mod tests;
