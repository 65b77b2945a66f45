// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::confirm::AutoReject;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Accepts everything and counts how often it was asked
#[derive(Default)]
struct CountingAccept(AtomicUsize);

impl Confirm for CountingAccept {
    fn confirm(&self, _prompt: &str, _artifacts: &Artifacts<'_>) -> Decision {
        self.0.fetch_add(1, Ordering::SeqCst);
        Decision::Accept
    }
}

fn gray(width: usize, height: usize, level: u8) -> Raster {
    Raster::filled(width, height, Rgba::opaque(level, level, level)).unwrap()
}

#[test]
fn from_pixels_checks_count() {
    assert!(Raster::from_pixels(2, 2, vec![Rgba::default(); 4]).is_some());
    assert!(Raster::from_pixels(2, 2, vec![Rgba::default(); 3]).is_none());
}

#[test]
fn overflowing_dimensions_are_rejected() {
    assert!(Raster::filled(usize::MAX, 2, Rgba::default()).is_none());
    assert!(Raster::from_pixels(usize::MAX, 2, Vec::new()).is_none());
    // Wrapped product would be 0 and match an empty pixel list
    assert!(Raster::from_pixels(usize::MAX / 2 + 1, 2, Vec::new()).is_none());
}

#[test]
fn width_checked_before_height() {
    let err = assert_raster_near("Blur", &gray(3, 2, 0), &gray(4, 5, 0), 0, &AutoReject).unwrap_err();
    assert_eq!(
        err.message(),
        "Blur But the image's width was different than I expected.\n  Expected: 3\n    Actual: 4"
    );

    let err = assert_raster_near("Blur", &gray(3, 2, 0), &gray(3, 5, 0), 0, &AutoReject).unwrap_err();
    assert!(err.message().contains("height was different"));
}

#[test]
fn pixels_within_tolerance_pass() {
    assert!(assert_raster_near("Blur", &gray(2, 2, 100), &gray(2, 2, 102), 2, &AutoReject).is_ok());
}

#[test]
fn first_mismatch_names_column_then_row() {
    let expected = gray(3, 3, 0);
    let mut actual = expected.clone();
    actual.set(2, 1, Rgba::opaque(9, 0, 0));
    actual.set(0, 2, Rgba::opaque(9, 0, 0));

    let err = assert_raster_near("Blur", &expected, &actual, 1, &AutoReject).unwrap_err();
    assert!(err.message().starts_with("Blur But pixel (2, 1) wasn't the color I expected."));
    assert!(err.message().contains("Actual RGBA: (  9,   0,   0, 255)"));
}

#[test]
fn operator_may_accept_a_near_miss() {
    let expected = gray(2, 2, 0);
    let mut actual = expected.clone();
    actual.set(1, 1, Rgba::opaque(50, 50, 50));
    let confirm = CountingAccept::default();

    assert!(assert_raster_near("Blur", &expected, &actual, 0, &confirm).is_ok());
    assert_eq!(confirm.0.load(Ordering::SeqCst), 1);
}

#[test]
fn operator_not_asked_when_sizes_differ() {
    let confirm = CountingAccept::default();
    assert!(assert_raster_near("Blur", &gray(1, 1, 0), &gray(2, 1, 0), 0, &confirm).is_err());
    assert_eq!(confirm.0.load(Ordering::SeqCst), 0);
}
