// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Human confirmation of near-miss comparisons.
//!
//! Some outputs (rendered images, formatted text) are easier to judge by eye.
//! When running interactively, a comparator may show both artifacts to an
//! operator before finalizing a failure. Automated grading uses
//! [`AutoReject`], which never blocks.

use crate::compare::Raster;
use parking_lot::Mutex;
use std::io::{self, BufRead, BufReader, Stderr, Stdin, Write};

/// Operator's verdict
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// The actual artifact is acceptable despite the mismatch
    Accept,
    /// The mismatch stands
    Reject,
}

/// Artifacts shown alongside a confirmation prompt
#[derive(Clone, Copy, Debug)]
pub enum Artifacts<'a> {
    Text { expected: &'a str, actual: &'a str },
    Raster { expected: &'a Raster, actual: &'a Raster },
}

/// Blocking confirmation capability
pub trait Confirm: Send + Sync {
    /// Ask for a decision. Blocks until one is made.
    fn confirm(&self, prompt: &str, artifacts: &Artifacts<'_>) -> Decision;
}

/// Non-interactive stand-in that rejects every mismatch
#[derive(Clone, Copy, Debug, Default)]
pub struct AutoReject;

impl Confirm for AutoReject {
    fn confirm(&self, _prompt: &str, _artifacts: &Artifacts<'_>) -> Decision {
        Decision::Reject
    }
}

/// Line-oriented confirmation on a terminal.
///
/// Prints the prompt and both artifacts, then waits for a `y`/`n` answer.
/// There is no timeout. End of input counts as a rejection.
pub struct TerminalConfirm<R, W> {
    input: Mutex<R>,
    output: Mutex<W>,
}

impl TerminalConfirm<BufReader<Stdin>, Stderr> {
    /// Confirm on the process's stdin/stderr
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stderr())
    }
}

impl<R: BufRead + Send, W: Write + Send> TerminalConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: Mutex::new(input),
            output: Mutex::new(output),
        }
    }

    fn show(&self, prompt: &str, artifacts: &Artifacts<'_>) -> io::Result<()> {
        let mut out = self.output.lock();
        writeln!(out, "{}", prompt)?;
        match artifacts {
            Artifacts::Text { expected, actual } => {
                writeln!(out, "--- expected ---\n{}", expected)?;
                writeln!(out, "--- actual ---\n{}", actual)?;
            }
            Artifacts::Raster { expected, actual } => {
                writeln!(
                    out,
                    "Expected image: {}x{}, actual image: {}x{}",
                    expected.width(),
                    expected.height(),
                    actual.width(),
                    actual.height()
                )?;
                writeln!(
                    out,
                    "Differing pixels: {}",
                    expected.count_differences(actual)
                )?;
            }
        }
        write!(out, "Do these look the same? [y/N] ")?;
        out.flush()
    }
}

impl<R: BufRead + Send, W: Write + Send> Confirm for TerminalConfirm<R, W> {
    fn confirm(&self, prompt: &str, artifacts: &Artifacts<'_>) -> Decision {
        if self.show(prompt, artifacts).is_err() {
            return Decision::Reject;
        }

        let mut answer = String::new();
        match self.input.lock().read_line(&mut answer) {
            Ok(n) if n > 0 => match answer.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" => Decision::Accept,
                _ => Decision::Reject,
            },
            _ => Decision::Reject,
        }
    }
}

#[cfg(test)]
#[path = "confirm_tests.rs"]
mod tests;
