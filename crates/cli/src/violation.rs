// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnosed mismatches between what was expected and what was found.

use specgrade_model::ResolutionFailure;
use thiserror::Error;

/// A single human-facing diagnostic.
///
/// Raised by structural verification and by comparator assertions inside
/// test routines. The message is shown to the student verbatim.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct Violation {
    message: String,
}

impl Violation {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Outcome of verifying one class that did not pass
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CheckError {
    /// The class does not match its specification; stops only this class
    #[error(transparent)]
    Violation(#[from] Violation),

    /// A referenced name could not be resolved; stops the whole run
    #[error(transparent)]
    Resolution(#[from] ResolutionFailure),
}
