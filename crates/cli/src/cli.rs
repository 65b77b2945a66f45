// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command line interface.
//!
//! The stock binary grades structure and sources only. Assignment binaries
//! supply their own test suites through [`run_with_registry`].

use crate::config::{ConfigError, GraderConfig, TimeoutPolicy};
use crate::confirm::TerminalConfirm;
use crate::grader::Grader;
use crate::harness::TesterRegistry;
use crate::output_diagnostic::{print_error, print_summary, print_warning};
use crate::report::{Report, ReportLog};
use crate::source_checks::DirectorySources;
use crate::version::{HttpVersionSource, VersionError, VersionSource};
use clap::{Parser, ValueEnum};
use specgrade_model::{LoadError, ProjectSpecification, StaticProgram};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use thiserror::Error;

/// Grade a program against its structural specification
#[derive(Parser, Debug, Clone)]
#[command(name = "specgrade", version, about = "Grade a program against its specification")]
pub struct Cli {
    /// Specification document (JSON, or TOML by extension)
    #[arg(long, value_name = "FILE")]
    pub spec: PathBuf,

    /// Program manifest describing the submitted types
    #[arg(long, value_name = "FILE")]
    pub program: PathBuf,

    /// Where to write the JSON report; stdout when omitted
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Also stream each report entry to this file as JSON lines
    #[arg(long, value_name = "FILE")]
    pub jsonl: Option<PathBuf>,

    /// Grader configuration (TOML)
    #[arg(long, value_name = "FILE", env = "SPECGRADE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Root of the submitted sources; enables source checks
    #[arg(long, value_name = "DIR")]
    pub source_root: Option<PathBuf>,

    /// Override the specification's course
    #[arg(long)]
    pub course: Option<String>,

    /// Override the specification's semester
    #[arg(long)]
    pub semester: Option<String>,

    /// Override the specification's tag
    #[arg(long)]
    pub tag: Option<String>,

    /// Check the specification against the published version
    #[arg(long)]
    pub check_version: bool,

    /// Version URL template; overrides the configured one
    #[arg(long, value_name = "URL", env = "SPECGRADE_VERSION_URL")]
    pub version_url: Option<String>,

    /// Deadline handling for test routines
    #[arg(long, value_enum)]
    pub timeout_policy: Option<TimeoutPolicyArg>,

    /// Ask on the terminal before failing a near-miss visual comparison
    #[arg(long)]
    pub interactive: bool,
}

/// Command line spelling of [`TimeoutPolicy`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TimeoutPolicyArg {
    Enforce,
    Advisory,
}

impl From<TimeoutPolicyArg> for TimeoutPolicy {
    fn from(arg: TimeoutPolicyArg) -> Self {
        match arg {
            TimeoutPolicyArg::Enforce => TimeoutPolicy::Enforce,
            TimeoutPolicyArg::Advisory => TimeoutPolicy::Advisory,
        }
    }
}

/// Errors that prevent a report from being produced
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Failed to load specification: {0}")]
    Spec(#[source] LoadError),

    #[error("Failed to load program manifest: {0}")]
    Program(#[source] LoadError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("--check-version needs a version URL (config `version.url` or --version-url)")]
    MissingVersionUrl,

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Cli {
    /// Load the configuration file and apply command line overrides
    pub fn grader_config(&self) -> Result<GraderConfig, ConfigError> {
        let mut config = match self.config {
            Some(ref path) => GraderConfig::load(path)?,
            None => GraderConfig::default(),
        };
        if let Some(policy) = self.timeout_policy {
            config.harness.timeout_policy = policy.into();
        }
        if let Some(ref url) = self.version_url {
            config.version.url = Some(url.clone());
        }
        if self.interactive {
            config.interactive = true;
        }
        Ok(config)
    }

    /// Load the specification and apply metadata overrides
    pub fn project(&self) -> Result<ProjectSpecification, RunError> {
        let mut project = ProjectSpecification::load(&self.spec).map_err(RunError::Spec)?;
        if let Some(ref course) = self.course {
            project.course = Some(course.clone());
        }
        if let Some(ref semester) = self.semester {
            project.semester = Some(semester.clone());
        }
        if let Some(ref tag) = self.tag {
            project.tag = tag.clone();
        }
        Ok(project)
    }
}

/// Grade once and write the report
pub fn run_with_registry(cli: &Cli, registry: TesterRegistry) -> Result<Report, RunError> {
    let config = cli.grader_config()?;
    let project = cli.project()?;
    let program = StaticProgram::load(&cli.program).map_err(RunError::Program)?;
    tracing::debug!(types = program.len(), "loaded program manifest");

    let mut grader = Grader::new(Arc::new(program)).with_registry(registry);

    if let Some(ref root) = cli.source_root {
        let mut sources = DirectorySources::new(root);
        if let Some(ref ext) = config.source_checks.extension {
            sources = sources.with_extension(ext.clone());
        }
        grader = grader.with_sources(sources);
    }

    if cli.check_version {
        let url = config
            .version
            .url
            .clone()
            .ok_or(RunError::MissingVersionUrl)?;
        grader = with_version_check(grader, HttpVersionSource::new(url));
    }

    if config.interactive {
        grader = grader.with_confirm(Arc::new(TerminalConfirm::stdio()));
    }

    let grader = grader.with_config(config);
    let log = match cli.jsonl {
        Some(ref path) => ReportLog::with_file(path).map_err(|source| RunError::Write {
            path: path.clone(),
            source,
        })?,
        None => ReportLog::new(),
    };
    grader.run_into(&project, &log);
    let report = log.finish();

    match cli.report {
        Some(ref path) => report.write(path).map_err(|source| RunError::Write {
            path: path.clone(),
            source,
        })?,
        None => println!("{}", report.to_json_pretty()?),
    }
    Ok(report)
}

/// Install a version source if it could be built. The check is best effort,
/// so a source that fails to build is skipped with a warning.
fn with_version_check<S>(grader: Grader, source: Result<S, VersionError>) -> Grader
where
    S: VersionSource + 'static,
{
    match source {
        Ok(source) => grader.with_version_source(source),
        Err(e) => {
            tracing::debug!(error = %e, "version source unavailable");
            print_warning(format_args!("Skipping version check: {}", e));
            grader
        }
    }
}

/// Parse arguments, grade, and map the outcome to an exit code
pub fn main_with_registry(registry: TesterRegistry) -> ExitCode {
    let cli = Cli::parse();
    match run_with_registry(&cli, registry) {
        Ok(report) => {
            print_summary(report.summary());
            ExitCode::SUCCESS
        }
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
