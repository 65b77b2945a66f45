// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use std::rc::Rc;

#[test]
fn deep_copy_is_independent() {
    let original = vec![vec![true, false], vec![false]];
    let copy = original.clone();
    assert!(assert_independent("Copy", &original, &copy).is_ok());
}

#[test]
fn same_outer_reference_fails() {
    let original = vec![vec![true]];
    let err = assert_independent("Copy", &original, &original).unwrap_err();
    assert!(err.message().contains("the array I got back is not independent"));
}

#[test]
fn shared_inner_row_fails() {
    let shared: Rc<[bool]> = Rc::from(vec![true, true]);
    let original = vec![Rc::from(vec![false]), Rc::clone(&shared)];
    let shallow = vec![Rc::from(vec![false]), shared];

    let err = assert_independent("Copy", &original, &shallow).unwrap_err();
    assert!(err.message().contains("inner array at index 1"));
}

#[test]
fn empty_rows_never_alias() {
    let original: Vec<Vec<bool>> = vec![vec![], vec![]];
    let copy = original.clone();
    assert!(assert_independent("Copy", &original, &copy).is_ok());
}

#[test]
fn same_empty_outer_is_not_flagged() {
    let original: Vec<Vec<bool>> = Vec::new();
    assert!(assert_independent("Copy", &original, &original).is_ok());
}

#[test]
fn shared_empty_row_is_not_flagged() {
    let shared: Rc<[bool]> = Rc::from(Vec::new());
    let original = vec![Rc::clone(&shared)];
    let shallow = vec![shared];
    assert!(assert_independent("Copy", &original, &shallow).is_ok());
}
