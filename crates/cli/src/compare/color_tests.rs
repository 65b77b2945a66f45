// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use proptest::prelude::*;

#[test]
fn exact_equality() {
    let c = Rgba::new(10, 20, 30, 40);
    assert!(assert_color_eq("Fill", c, c).is_ok());
    assert!(assert_color_eq("Fill", c, Rgba::new(10, 20, 31, 40)).is_err());
}

#[test]
fn mismatch_message_shows_padded_channels() {
    let err = assert_color_eq("Fill", Rgba::opaque(1, 2, 3), Rgba::opaque(4, 5, 6)).unwrap_err();
    assert_eq!(
        err.message(),
        "Fill\n  Expected RGBA: (  1,   2,   3, 255)\n    Actual RGBA: (  4,   5,   6, 255)"
    );
}

#[test]
fn unpacks_argb() {
    assert_eq!(Rgba::from_argb(0x80FF_4020), Rgba::new(0xFF, 0x40, 0x20, 0x80));
}

#[test]
fn alpha_is_checked_too() {
    let expected = Rgba::new(0, 0, 0, 100);
    assert!(assert_color_near("Fill", expected, Rgba::new(0, 0, 0, 103), 3).is_ok());
    assert!(assert_color_near("Fill", expected, Rgba::new(0, 0, 0, 104), 3).is_err());
}

proptest! {
    #[test]
    fn tolerance_boundary_is_inclusive(
        base in prop::array::uniform4(0u8..=200),
        tolerance in 0u8..=50,
        channel in 0usize..4,
    ) {
        let expected = Rgba::new(base[0], base[1], base[2], base[3]);

        let mut at = base;
        at[channel] += tolerance;
        let at = Rgba::new(at[0], at[1], at[2], at[3]);
        prop_assert!(assert_color_near("Fill", expected, at, tolerance).is_ok());

        let mut past = base;
        past[channel] += tolerance + 1;
        let past = Rgba::new(past[0], past[1], past[2], past[3]);
        prop_assert!(assert_color_near("Fill", expected, past, tolerance).is_err());
    }
}
