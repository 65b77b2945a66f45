// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! One grading run from specification to report.
//!
//! Phases run in a fixed order: version check, structural verification of
//! every class, source checks, then every unit tester of every class. Entries
//! are appended to the [`ReportLog`] in exactly that order.

use crate::config::GraderConfig;
use crate::confirm::{AutoReject, Confirm};
use crate::harness::{Harness, TestContext, TesterRegistry};
use crate::output_diagnostic::print_warning;
use crate::report::{Report, ReportLog, TestResult};
use crate::source_checks::{SourceChecker, SourceProvider};
use crate::verifier::Verifier;
use crate::version::{check_version, VersionSource};
use crate::violation::CheckError;
use specgrade_model::{ProgramModel, ProjectSpecification, ResolutionFailure};
use std::sync::Arc;

/// Entry name for a failed version check
pub const VERSION_CHECK: &str = "Version Check";
/// Entry name for a run stopped by an unresolvable name
pub const INTERFACE_TESTS: &str = "Interface Tests";

/// Grades projects against one program
pub struct Grader {
    program: Arc<dyn ProgramModel>,
    registry: TesterRegistry,
    config: GraderConfig,
    sources: Option<Box<dyn SourceProvider>>,
    version_source: Option<Box<dyn VersionSource>>,
    confirm: Arc<dyn Confirm>,
}

impl Grader {
    pub fn new(program: Arc<dyn ProgramModel>) -> Self {
        Self {
            program,
            registry: TesterRegistry::new(),
            config: GraderConfig::default(),
            sources: None,
            version_source: None,
            confirm: Arc::new(AutoReject),
        }
    }

    pub fn with_registry(mut self, registry: TesterRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_config(mut self, config: GraderConfig) -> Self {
        self.config = config;
        self
    }

    /// Enable source checks against these sources
    pub fn with_sources(mut self, sources: impl SourceProvider + 'static) -> Self {
        self.sources = Some(Box::new(sources));
        self
    }

    /// Enable the published-version check
    pub fn with_version_source(mut self, source: impl VersionSource + 'static) -> Self {
        self.version_source = Some(Box::new(source));
        self
    }

    pub fn with_confirm(mut self, confirm: Arc<dyn Confirm>) -> Self {
        self.confirm = confirm;
        self
    }

    /// Grade into a fresh in-memory log
    pub fn run(&self, project: &ProjectSpecification) -> Report {
        let log = ReportLog::new();
        self.run_into(project, &log);
        log.finish()
    }

    /// Grade, appending every entry to `log`
    pub fn run_into(&self, project: &ProjectSpecification, log: &ReportLog) {
        tracing::info!(tag = %project.tag, classes = project.classes.len(), "grading project");

        if let Some(ref source) = self.version_source {
            if let Some(violation) = check_version(source.as_ref(), project) {
                log.record(TestResult::failed(VERSION_CHECK, 0, violation.message()));
            }
        }

        if let Err(failure) = self.verify_structure(project, log) {
            tracing::info!(name = %failure.name, "stopping run on unresolved name");
            log.record(TestResult::failed(INTERFACE_TESTS, 0, failure.to_string()));
            return;
        }

        self.check_sources(project, log);

        if let Err(failure) = self.run_testers(project, log) {
            tracing::info!(name = %failure.name, "stopping run on unknown tester");
            log.record(TestResult::failed(INTERFACE_TESTS, 0, failure.to_string()));
        }
    }

    fn verify_structure(
        &self,
        project: &ProjectSpecification,
        log: &ReportLog,
    ) -> Result<(), ResolutionFailure> {
        let verifier = Verifier::new(self.program.as_ref());
        for class in &project.classes {
            match verifier.verify_class(class) {
                Ok(()) => {}
                Err(CheckError::Violation(violation)) => log.record(TestResult::failed(
                    format!("{}: {}", class.name, INTERFACE_TESTS),
                    self.config.structural.penalty,
                    violation.message(),
                )),
                Err(CheckError::Resolution(failure)) => return Err(failure),
            }
        }
        Ok(())
    }

    fn check_sources(&self, project: &ProjectSpecification, log: &ReportLog) {
        let enabled = self
            .config
            .source_checks
            .enabled
            .unwrap_or(project.style_checked);
        let Some(ref sources) = self.sources else {
            return;
        };
        if !enabled {
            return;
        }

        let checker = SourceChecker::new(&project.tag, &self.config.source_checks.allowed_imports);
        for class in &project.classes {
            let text = match sources.source(&class.name) {
                Ok(Some(text)) => text,
                Ok(None) => {
                    print_warning(format_args!("No source found for {}", class.name));
                    continue;
                }
                Err(e) => {
                    print_warning(format_args!("Could not read source for {}: {}", class.name, e));
                    continue;
                }
            };
            if let Err(violation) = checker.check(&class.name, &text) {
                log.record(TestResult::failed(
                    format!("{} -> Source Checks", class.name),
                    self.config.source_checks.penalty,
                    violation.message(),
                ));
            }
        }
    }

    fn run_testers(
        &self,
        project: &ProjectSpecification,
        log: &ReportLog,
    ) -> Result<(), ResolutionFailure> {
        let context = TestContext::new(Arc::clone(&self.program), Arc::clone(&self.confirm));
        let harness = Harness::new(self.config.harness.clone(), context);
        for class in &project.classes {
            for tester in &class.unit_testers {
                let suite = self.registry.suite(tester)?;
                log.extend(harness.run_suite(&class.name, suite));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "grader_tests.rs"]
mod tests;
