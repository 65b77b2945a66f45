// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

fn grid(rows: &[&str]) -> Vec<Vec<bool>> {
    rows.iter()
        .map(|row| row.chars().map(|c| c == '#').collect())
        .collect()
}

#[test]
fn equal_grids_pass() {
    let g = grid(&["#.", ".#"]);
    assert!(assert_grid_eq("Life", &g, &g.clone()).is_ok());
}

#[test]
fn outer_length_checked_first() {
    let err = assert_grid_eq("Life", &grid(&["#", "."]), &grid(&["."])).unwrap_err();
    assert_eq!(
        err.message(),
        "Life But the outer array had a different length than I expected.\n  Expected: 2\n    Actual: 1"
    );
}

#[test]
fn row_lengths_checked_before_any_cell() {
    // Row 0 has a differing cell, but row 1 has the wrong length.
    let err = assert_grid_eq("Life", &grid(&["#.", ".."]), &grid(&[".#", "..."])).unwrap_err();
    assert!(err.message().contains("inner array 1 had a different length"));
    assert!(err.message().ends_with("Expected: 2\n    Actual: 3"));
}

#[test]
fn first_cell_in_row_major_order() {
    let err = assert_grid_eq("Life", &grid(&["..", ".#"]), &grid(&["..", "#."])).unwrap_err();
    assert_eq!(
        err.message(),
        "Life But element [1][0] wasn't what I expected.\n  Expected: false\n    Actual: true"
    );
}

#[test]
fn accepts_array_rows() {
    let expected = [[true, false], [false, true]];
    let actual = [[true, false], [false, false]];
    assert!(assert_grid_eq("Life", &expected, &actual).is_err());
}
