// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic output for the person running the grader.
//!
//! Everything here goes to stderr so that stdout stays free for the report.
//! ANSI color is used only when stderr is a terminal.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

const RED: &str = "31";
const YELLOW: &str = "33";
const BOLD: &str = "1";

/// Print an error message to stderr.
pub fn print_error(msg: impl Display) {
    let is_tty = io::stderr().is_terminal();
    write_error(&mut io::stderr(), msg, is_tty);
}

/// Print a warning message to stderr.
///
/// Used for best-effort steps such as the version check and missing sources,
/// which never change the grade.
pub fn print_warning(msg: impl Display) {
    let is_tty = io::stderr().is_terminal();
    write_warning(&mut io::stderr(), msg, is_tty);
}

/// Print the `TOTAL: <n>` summary line to stderr.
pub fn print_summary(summary: impl Display) {
    let is_tty = io::stderr().is_terminal();
    write_summary(&mut io::stderr(), summary, is_tty);
}

fn write_error<W: Write>(writer: &mut W, msg: impl Display, is_terminal: bool) {
    write_styled(writer, format_args!("Error: {}", msg), RED, is_terminal);
}

fn write_warning<W: Write>(writer: &mut W, msg: impl Display, is_terminal: bool) {
    write_styled(writer, format_args!("Warning: {}", msg), YELLOW, is_terminal);
}

fn write_summary<W: Write>(writer: &mut W, summary: impl Display, is_terminal: bool) {
    write_styled(writer, summary, BOLD, is_terminal);
}

fn write_styled<W: Write>(writer: &mut W, text: impl Display, sgr: &str, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[{}m{}\x1b[0m", sgr, text);
    } else {
        let _ = writeln!(writer, "{}", text);
    }
}

#[cfg(test)]
#[path = "output_diagnostic_tests.rs"]
mod tests;
