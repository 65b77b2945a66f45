// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Grader configuration loaded from TOML.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Default per-routine deadline when a routine declares none
pub const DEFAULT_TIMEOUT_MS: u64 = 1000;
/// Default number of trace lines kept in a failure diagnostic
pub const DEFAULT_TRACE_FRAMES: usize = 5;
/// Default score for a failed source check
pub const DEFAULT_SOURCE_PENALTY: i32 = -2;

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Top-level grader configuration
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GraderConfig {
    #[serde(default)]
    pub harness: HarnessConfig,

    #[serde(default)]
    pub structural: StructuralConfig,

    #[serde(default)]
    pub source_checks: SourceCheckConfig,

    #[serde(default)]
    pub version: VersionConfig,

    /// Offer manual visual confirmation for near-miss comparisons.
    /// Must stay off for automated grading.
    #[serde(default)]
    pub interactive: bool,
}

impl GraderConfig {
    /// Load from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: GraderConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.harness.default_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "harness.default_timeout_ms must be greater than zero".to_string(),
            ));
        }
        if let Some(ref url) = self.version.url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::Validation(format!(
                    "Invalid version.url '{}': must be an http(s) URL",
                    url
                )));
            }
        }
        Ok(())
    }
}

/// Whether routine deadlines are enforced
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeoutPolicy {
    /// Run each routine on its own thread and fail it at its deadline
    #[default]
    Enforce,
    /// Run in place; deadlines are informational only
    Advisory,
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_trace_frames() -> usize {
    DEFAULT_TRACE_FRAMES
}

/// Unit test harness settings
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HarnessConfig {
    #[serde(default)]
    pub timeout_policy: TimeoutPolicy,

    /// Deadline for routines that declare none
    #[serde(default = "default_timeout_ms")]
    pub default_timeout_ms: u64,

    /// Trace lines kept in a synthesized failure diagnostic
    #[serde(default = "default_trace_frames")]
    pub trace_frames: usize,
}

impl HarnessConfig {
    pub fn default_timeout(&self) -> Duration {
        Duration::from_millis(self.default_timeout_ms)
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            timeout_policy: TimeoutPolicy::default(),
            default_timeout_ms: DEFAULT_TIMEOUT_MS,
            trace_frames: DEFAULT_TRACE_FRAMES,
        }
    }
}

/// Structural verification settings
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StructuralConfig {
    /// Score recorded for a class that fails verification
    #[serde(default)]
    pub penalty: i32,
}

fn default_source_penalty() -> i32 {
    DEFAULT_SOURCE_PENALTY
}

/// Source check settings
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SourceCheckConfig {
    /// Force source checks on or off; by default the specification decides
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Score recorded for a class whose source fails a check
    #[serde(default = "default_source_penalty")]
    pub penalty: i32,

    /// Import prefixes allowed in addition to the standard ones
    #[serde(default)]
    pub allowed_imports: Vec<String>,

    /// Source file extension
    #[serde(default)]
    pub extension: Option<String>,
}

impl Default for SourceCheckConfig {
    fn default() -> Self {
        Self {
            enabled: None,
            penalty: DEFAULT_SOURCE_PENALTY,
            allowed_imports: Vec::new(),
            extension: None,
        }
    }
}

/// Published-version check settings
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct VersionConfig {
    /// URL template with `{course}`, `{semester}` and `{tag}` placeholders
    #[serde(default)]
    pub url: Option<String>,
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
