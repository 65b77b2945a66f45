// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Panic capture for test routines.
//!
//! A process-wide panic hook is installed once. While a routine runs, its
//! thread is marked as capturing; panics on that thread record their location
//! and a backtrace instead of printing. Panics anywhere else go to the
//! previously installed hook.

use std::any::Any;
use std::backtrace::Backtrace;
use std::cell::{Cell, RefCell};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;

/// Frames from these modules are runtime plumbing, not the student's code
const PLUMBING_PREFIXES: &[&str] = &[
    "std::",
    "core::",
    "alloc::",
    "<std::",
    "<core::",
    "<alloc::",
    "rust_begin_unwind",
    "__rust",
    "anyhow::",
    "<anyhow::",
    "specgrade::harness::",
];

static HOOK: Once = Once::new();

thread_local! {
    static CAPTURING: Cell<bool> = const { Cell::new(false) };
    static CAPTURED: RefCell<Option<Captured>> = const { RefCell::new(None) };
}

struct Captured {
    location: Option<String>,
    frames: Vec<String>,
}

/// A panic caught while running a routine
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaughtPanic {
    pub message: Option<String>,
    pub location: Option<String>,
    pub frames: Vec<String>,
}

fn install_hook() {
    HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if CAPTURING.get() {
                let location = info
                    .location()
                    .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()));
                let frames = frames(&Backtrace::force_capture().to_string());
                CAPTURED.set(Some(Captured { location, frames }));
            } else {
                previous(info);
            }
        }));
    });
}

/// Run `f`, converting a panic into a [`CaughtPanic`]
pub fn catch<R>(f: impl FnOnce() -> R) -> Result<R, CaughtPanic> {
    install_hook();
    CAPTURING.set(true);
    let outcome = panic::catch_unwind(AssertUnwindSafe(f));
    CAPTURING.set(false);

    outcome.map_err(|payload| {
        let captured = CAPTURED.take();
        CaughtPanic {
            message: payload_message(payload.as_ref()),
            location: captured.as_ref().and_then(|c| c.location.clone()),
            frames: captured.map(|c| c.frames).unwrap_or_default(),
        }
    })
}

fn payload_message(payload: &(dyn Any + Send)) -> Option<String> {
    if let Some(s) = payload.downcast_ref::<&str>() {
        Some((*s).to_string())
    } else {
        payload.downcast_ref::<String>().cloned()
    }
}

/// Extract non-plumbing frames from a rendered backtrace.
///
/// Each frame is rendered as `symbol (file:line:col)` when a source location
/// follows the symbol line.
pub fn frames(rendered: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let mut keep_current = false;

    for line in rendered.lines() {
        let line = line.trim();
        if let Some(symbol) = frame_symbol(line) {
            keep_current = !PLUMBING_PREFIXES.iter().any(|p| symbol.starts_with(p));
            if keep_current {
                out.push(symbol.to_string());
            }
        } else if let Some(at) = line.strip_prefix("at ") {
            if keep_current {
                if let Some(last) = out.last_mut() {
                    last.push_str(&format!(" ({})", at));
                }
                keep_current = false;
            }
        }
    }

    out
}

/// `"12: crate::module::function"` -> `"crate::module::function"`
fn frame_symbol(line: &str) -> Option<&str> {
    let (index, symbol) = line.split_once(": ")?;
    if !index.is_empty() && index.chars().all(|c| c.is_ascii_digit()) {
        Some(symbol)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "trace_tests.rs"]
mod tests;
