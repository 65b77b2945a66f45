// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Deadline clock that stops while an operator confirmation is pending.

use crate::confirm::{Artifacts, Confirm, Decision};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Time budget of one routine. Only time spent outside confirmations counts.
#[derive(Debug)]
pub(super) struct Deadline {
    limit: Duration,
    state: Mutex<ClockState>,
}

#[derive(Debug)]
struct ClockState {
    started: Instant,
    paused_at: Option<Instant>,
    paused_total: Duration,
    pending: usize,
    abandoned: bool,
}

impl Deadline {
    pub(super) fn start(limit: Duration) -> Self {
        Self {
            limit,
            state: Mutex::new(ClockState {
                started: Instant::now(),
                paused_at: None,
                paused_total: Duration::ZERO,
                pending: 0,
                abandoned: false,
            }),
        }
    }

    pub(super) fn limit(&self) -> Duration {
        self.limit
    }

    /// Budget left, or `None` while the clock is stopped
    pub(super) fn remaining(&self) -> Option<Duration> {
        let state = self.state.lock();
        if state.pending > 0 {
            return None;
        }
        Some(self.limit.saturating_sub(state.active(Instant::now())))
    }

    /// Give up on the routine if its budget is spent and nothing is pending.
    /// Once abandoned, later confirmations are rejected without prompting.
    pub(super) fn try_abandon(&self) -> bool {
        let mut state = self.state.lock();
        if state.pending == 0 && state.active(Instant::now()) >= self.limit {
            state.abandoned = true;
        }
        state.abandoned
    }

    /// Stop the clock. Returns false if the routine was already abandoned.
    fn pause(&self) -> bool {
        let mut state = self.state.lock();
        if state.abandoned {
            return false;
        }
        if state.pending == 0 {
            state.paused_at = Some(Instant::now());
        }
        state.pending += 1;
        true
    }

    fn resume(&self) {
        let mut state = self.state.lock();
        state.pending = state.pending.saturating_sub(1);
        if state.pending == 0 {
            if let Some(at) = state.paused_at.take() {
                state.paused_total += at.elapsed();
            }
        }
    }
}

impl ClockState {
    fn active(&self, now: Instant) -> Duration {
        let paused = self.paused_total
            + self
                .paused_at
                .map_or(Duration::ZERO, |at| now.saturating_duration_since(at));
        now.saturating_duration_since(self.started)
            .saturating_sub(paused)
    }
}

/// Confirmation seen by a routine running under a [`Deadline`]
pub(super) struct PausingConfirm {
    inner: Arc<dyn Confirm>,
    deadline: Arc<Deadline>,
}

impl PausingConfirm {
    pub(super) fn new(inner: Arc<dyn Confirm>, deadline: Arc<Deadline>) -> Self {
        Self { inner, deadline }
    }
}

impl Confirm for PausingConfirm {
    fn confirm(&self, prompt: &str, artifacts: &Artifacts<'_>) -> Decision {
        if !self.deadline.pause() {
            tracing::debug!("routine already timed out; rejecting without prompting");
            return Decision::Reject;
        }
        let _resume = Resume(&self.deadline);
        self.inner.confirm(prompt, artifacts)
    }
}

struct Resume<'a>(&'a Deadline);

impl Drop for Resume<'_> {
    fn drop(&mut self) {
        self.0.resume();
    }
}

#[cfg(test)]
#[path = "deadline_tests.rs"]
mod tests;
