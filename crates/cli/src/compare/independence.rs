// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Aliasing checks for copy operations.

use crate::violation::Violation;

/// Fail if `copy` shares storage with `original`.
///
/// Checks the outer container and then each nested container at the same
/// index. Identity is judged by storage address, and empty containers own
/// no storage, so they are never reported. That includes passing the very
/// same empty slice as both `original` and `copy`, and a shallow copy whose
/// shared rows are all empty. Callers that must reject those cases need to
/// track identity themselves.
pub fn assert_independent<R: AsRef<[U]>, U>(
    message: &str,
    original: &[R],
    copy: &[R],
) -> Result<(), Violation> {
    if shares_storage(original, copy) {
        return Err(Violation::new(format!(
            "{} But the array I got back is not independent of the source array. You need to make a brand new array.",
            message
        )));
    }

    for (i, (o, c)) in original.iter().zip(copy).enumerate() {
        if shares_storage(o.as_ref(), c.as_ref()) {
            return Err(Violation::new(format!(
                "{} But the inner array at index {} is not independent of the source array. You need to make a brand new array.",
                message, i
            )));
        }
    }

    Ok(())
}

fn shares_storage<T>(a: &[T], b: &[T]) -> bool {
    !a.is_empty() && !b.is_empty() && std::ptr::eq(a.as_ptr(), b.as_ptr())
}

#[cfg(test)]
#[path = "independence_tests.rs"]
mod tests;
