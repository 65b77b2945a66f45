// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test routines, suites and the registry that names them.

use crate::confirm::{AutoReject, Confirm};
use specgrade_model::{ProgramModel, ResolutionFailure, StaticProgram};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Shared capabilities handed to every routine
#[derive(Clone)]
pub struct TestContext {
    /// Structure of the program under test
    pub program: Arc<dyn ProgramModel>,
    /// Confirmation capability for visual comparisons
    pub confirm: Arc<dyn Confirm>,
}

impl TestContext {
    pub fn new(program: Arc<dyn ProgramModel>, confirm: Arc<dyn Confirm>) -> Self {
        Self { program, confirm }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new(Arc::new(StaticProgram::new()), Arc::new(AutoReject))
    }
}

impl fmt::Debug for TestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestContext").finish_non_exhaustive()
    }
}

/// Body of a routine. Violations propagate through `anyhow` unchanged.
pub type RoutineBody = Arc<dyn Fn(&TestContext) -> anyhow::Result<()> + Send + Sync>;

/// One scored test routine
#[derive(Clone)]
pub struct TestRoutine {
    pub name: String,
    /// Execution order within the suite, ascending
    pub order: i32,
    /// Points awarded when the routine returns cleanly
    pub points: i32,
    /// Deadline; the harness default applies when unset
    pub timeout: Option<Duration>,
    pub(crate) body: RoutineBody,
}

impl TestRoutine {
    pub fn new<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&TestContext) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            order: 0,
            points: 0,
            timeout: None,
            body: Arc::new(body),
        }
    }

    pub fn order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    pub fn points(mut self, points: i32) -> Self {
        self.points = points;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl fmt::Debug for TestRoutine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestRoutine")
            .field("name", &self.name)
            .field("order", &self.order)
            .field("points", &self.points)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Named collection of routines
#[derive(Clone, Debug, Default)]
pub struct TestSuite {
    pub name: String,
    routines: Vec<TestRoutine>,
}

impl TestSuite {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            routines: Vec::new(),
        }
    }

    /// Add a routine
    pub fn routine(mut self, routine: TestRoutine) -> Self {
        self.routines.push(routine);
        self
    }

    /// Routines by ascending order. Ties keep declaration order.
    pub fn ordered(&self) -> Vec<&TestRoutine> {
        let mut routines: Vec<&TestRoutine> = self.routines.iter().collect();
        routines.sort_by_key(|r| r.order);
        routines
    }

    pub fn len(&self) -> usize {
        self.routines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routines.is_empty()
    }
}

/// Suites addressable by the names specifications use
#[derive(Clone, Debug, Default)]
pub struct TesterRegistry {
    suites: BTreeMap<String, TestSuite>,
}

impl TesterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a suite under its own name
    pub fn register(&mut self, suite: TestSuite) {
        self.suites.insert(suite.name.clone(), suite);
    }

    /// Builder form of [`register`](Self::register)
    pub fn with(mut self, suite: TestSuite) -> Self {
        self.register(suite);
        self
    }

    /// Look up a suite by name
    pub fn suite(&self, name: &str) -> Result<&TestSuite, ResolutionFailure> {
        self.suites
            .get(name)
            .ok_or_else(|| ResolutionFailure::new(name))
    }

    pub fn len(&self) -> usize {
        self.suites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suites.is_empty()
    }
}
