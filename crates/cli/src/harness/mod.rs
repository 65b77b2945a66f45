// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Unit test harness.
//!
//! Runs the routines of a suite in ascending order and turns each into
//! exactly one scored [`TestResult`]. A failing routine never stops the
//! routines after it.

mod deadline;
mod suite;
pub mod trace;

pub use suite::{RoutineBody, TestContext, TestRoutine, TestSuite, TesterRegistry};
pub use trace::CaughtPanic;

use crate::config::{HarnessConfig, TimeoutPolicy};
use crate::report::TestResult;
use crate::violation::Violation;
use deadline::{Deadline, PausingConfirm};
use std::backtrace::BacktraceStatus;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use thiserror::Error;

/// Why a routine did not pass
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TestFailure {
    /// A comparator or explicit assertion failed
    #[error(transparent)]
    Violation(Violation),

    /// The routine returned some other error
    #[error("{message}")]
    Error {
        /// Type of the error as far as it can be named
        kind: String,
        message: String,
        /// Messages of the underlying causes, outermost first
        causes: Vec<String>,
        /// Call chain where the error was created, when one was captured
        frames: Vec<String>,
    },

    /// The routine panicked
    #[error("panic: {}", .0.message.as_deref().unwrap_or("(no message)"))]
    Panic(CaughtPanic),

    /// The routine missed its deadline
    #[error("timed out after {0:?}")]
    Timeout(Duration),
}

impl TestFailure {
    /// Classify an error returned by a routine
    pub fn from_error(err: anyhow::Error) -> Self {
        if let Some(violation) = err.downcast_ref::<Violation>() {
            return TestFailure::Violation(violation.clone());
        }
        let backtrace = err.backtrace();
        let frames = match backtrace.status() {
            BacktraceStatus::Captured => trace::frames(&backtrace.to_string()),
            _ => Vec::new(),
        };
        TestFailure::Error {
            kind: error_kind(&err).to_string(),
            message: err.to_string(),
            causes: err.chain().skip(1).map(|c| c.to_string()).collect(),
            frames,
        }
    }

    /// Text shown to the student, with at most `max_frames` trace lines
    pub fn diagnostic(&self, max_frames: usize) -> String {
        match self {
            TestFailure::Violation(v) => v.message().to_string(),
            TestFailure::Error {
                kind,
                message,
                causes,
                frames,
            } => {
                let mut out = format!(
                    "I hit {} while running your code. This was its message: \"{}\".",
                    kind, message
                );
                append_trace(&mut out, "And these were its causes:", causes, max_frames);
                append_trace(&mut out, "And this is where it happened:", frames, max_frames);
                out
            }
            TestFailure::Panic(panic) => {
                let mut out = String::from("I hit a panic while running your code.");
                if let Some(ref message) = panic.message {
                    out.push_str(&format!(" This was its message: \"{}\".", message));
                }
                let mut trace = Vec::new();
                if let Some(ref location) = panic.location {
                    trace.push(format!("at {}", location));
                }
                trace.extend(panic.frames.iter().cloned());
                append_trace(&mut out, "And this is where it happened:", &trace, max_frames);
                out
            }
            TestFailure::Timeout(limit) => format!(
                "Your code didn't finish within {} ms. Is there an infinite loop or a very slow algorithm?",
                limit.as_millis()
            ),
        }
    }
}

/// Name the innermost error type we recognize, for the student's benefit
fn error_kind(err: &anyhow::Error) -> &'static str {
    let root = err.root_cause();
    if let Some(io) = root.downcast_ref::<std::io::Error>() {
        return match io.kind() {
            std::io::ErrorKind::NotFound => "a file-not-found error",
            std::io::ErrorKind::PermissionDenied => "a permission error",
            std::io::ErrorKind::InvalidData | std::io::ErrorKind::UnexpectedEof => {
                "an invalid-data error"
            }
            _ => "an I/O error",
        };
    }
    if root.is::<std::num::ParseIntError>() || root.is::<std::num::ParseFloatError>() {
        return "a number-format error";
    }
    if root.is::<std::fmt::Error>() {
        return "a formatting error";
    }
    if root.is::<std::str::Utf8Error>() || root.is::<std::string::FromUtf8Error>() {
        return "a text-encoding error";
    }
    "an error"
}

fn append_trace(out: &mut String, heading: &str, lines: &[String], max_frames: usize) {
    if lines.is_empty() || max_frames == 0 {
        return;
    }
    out.push(' ');
    out.push_str(heading);
    out.push('\n');
    for line in lines.iter().take(max_frames) {
        out.push_str(&format!("\n  {}", line));
    }
    if lines.len() > max_frames {
        out.push_str(&format!("\n  ... {} more", lines.len() - max_frames));
    }
}

/// How often a stopped deadline is rechecked while an operator decides
const CONFIRM_POLL: Duration = Duration::from_millis(25);

/// Executes suites against one shared context
pub struct Harness {
    config: HarnessConfig,
    context: TestContext,
}

impl Harness {
    pub fn new(config: HarnessConfig, context: TestContext) -> Self {
        Self { config, context }
    }

    /// Run every routine of a suite, naming results `"<label>: <routine>"`
    pub fn run_suite(&self, label: &str, suite: &TestSuite) -> Vec<TestResult> {
        suite
            .ordered()
            .into_iter()
            .map(|routine| self.run_routine(label, routine))
            .collect()
    }

    /// Run one routine and score it
    pub fn run_routine(&self, label: &str, routine: &TestRoutine) -> TestResult {
        let name = format!("{}: {}", label, routine.name);
        tracing::debug!(test = %name, points = routine.points, "running test routine");

        match self.execute(routine) {
            Ok(()) => TestResult::passed(name, routine.points),
            Err(failure) => {
                tracing::debug!(test = %name, %failure, "test routine failed");
                TestResult::failed(name, 0, failure.diagnostic(self.config.trace_frames))
            }
        }
    }

    fn execute(&self, routine: &TestRoutine) -> Result<(), TestFailure> {
        match self.config.timeout_policy {
            TimeoutPolicy::Advisory => invoke(&routine.body, &self.context),
            TimeoutPolicy::Enforce => self.execute_with_deadline(routine),
        }
    }

    fn execute_with_deadline(&self, routine: &TestRoutine) -> Result<(), TestFailure> {
        let limit = routine
            .timeout
            .unwrap_or_else(|| self.config.default_timeout());
        let deadline = Arc::new(Deadline::start(limit));
        let (tx, rx) = mpsc::channel();
        let body = Arc::clone(&routine.body);
        let context = TestContext {
            program: Arc::clone(&self.context.program),
            confirm: Arc::new(PausingConfirm::new(
                Arc::clone(&self.context.confirm),
                Arc::clone(&deadline),
            )),
        };

        let spawned = thread::Builder::new()
            .name(format!("test:{}", routine.name))
            .spawn(move || {
                let _ = tx.send(invoke(&body, &context));
            });
        if let Err(e) = spawned {
            return Err(TestFailure::Error {
                kind: "an error".to_string(),
                message: format!("could not start a thread for the test: {}", e),
                causes: Vec::new(),
                frames: Vec::new(),
            });
        }

        // A routine that misses its deadline keeps its thread; it is detached.
        loop {
            let wait = deadline.remaining().unwrap_or(CONFIRM_POLL);
            match rx.recv_timeout(wait) {
                Ok(outcome) => return outcome,
                Err(RecvTimeoutError::Timeout) => {
                    if deadline.try_abandon() {
                        return Err(TestFailure::Timeout(deadline.limit()));
                    }
                }
                Err(RecvTimeoutError::Disconnected) => {
                    return Err(TestFailure::Panic(CaughtPanic {
                        message: Some("the test thread stopped without reporting".to_string()),
                        location: None,
                        frames: Vec::new(),
                    }))
                }
            }
        }
    }
}

fn invoke(body: &RoutineBody, context: &TestContext) -> Result<(), TestFailure> {
    match trace::catch(|| body(context)) {
        Ok(Ok(())) => Ok(()),
        Ok(Err(err)) => Err(TestFailure::from_error(err)),
        Err(panic) => Err(TestFailure::Panic(panic)),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
