// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check that the specification being graded is the published one.
//!
//! The check is best effort. Only a confirmed mismatch produces a
//! [`Violation`]; every other problem is logged and ignored.

use crate::output_diagnostic::print_warning;
use crate::violation::Violation;
use specgrade_model::ProjectSpecification;
use std::time::Duration;
use thiserror::Error;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors that keep the version check from reaching a verdict
#[derive(Debug, Error)]
pub enum VersionError {
    #[error("No meta data provided. Unable to validate the specification version.")]
    MissingMetadata,

    #[error("Homework {0} was not registered with the server. Unable to validate the specification version.")]
    Unregistered(String),

    #[error("Version server was inaccessible: {0}. Unable to validate the specification version.")]
    Http(#[from] reqwest::Error),
}

/// Identifies one published specification
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VersionQuery<'a> {
    pub course: &'a str,
    pub semester: &'a str,
    pub tag: &'a str,
}

/// Source of the currently published version
pub trait VersionSource: Send + Sync {
    fn published_version(&self, query: &VersionQuery<'_>) -> Result<u32, VersionError>;
}

/// Skips the check entirely
#[derive(Clone, Copy, Debug, Default)]
pub struct NoVersionCheck;

impl VersionSource for NoVersionCheck {
    fn published_version(&self, _query: &VersionQuery<'_>) -> Result<u32, VersionError> {
        Err(VersionError::MissingMetadata)
    }
}

/// Fetches the published version as plain text over HTTP
pub struct HttpVersionSource {
    client: reqwest::blocking::Client,
    template: String,
}

impl HttpVersionSource {
    /// `template` may use `{course}`, `{semester}` and `{tag}`
    pub fn new(template: impl Into<String>) -> Result<Self, VersionError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            template: template.into(),
        })
    }

    pub fn url_for(&self, query: &VersionQuery<'_>) -> String {
        expand_template(&self.template, query)
    }
}

impl VersionSource for HttpVersionSource {
    fn published_version(&self, query: &VersionQuery<'_>) -> Result<u32, VersionError> {
        let url = self.url_for(query);
        tracing::debug!(%url, "fetching published version");
        let body = self
            .client
            .get(&url)
            .send()?
            .error_for_status()?
            .text()?;
        parse_version(&body).ok_or_else(|| VersionError::Unregistered(query.tag.to_string()))
    }
}

/// Fill in the URL placeholders
pub fn expand_template(template: &str, query: &VersionQuery<'_>) -> String {
    template
        .replace("{course}", query.course)
        .replace("{semester}", query.semester)
        .replace("{tag}", query.tag)
}

/// First whitespace-separated token of the response, as a version number
pub fn parse_version(body: &str) -> Option<u32> {
    body.split_whitespace().next()?.parse().ok()
}

/// Compare the project's version with the published one.
///
/// Returns a violation only when the published version is known and differs.
pub fn check_version(
    source: &dyn VersionSource,
    project: &ProjectSpecification,
) -> Option<Violation> {
    let query = match (&project.course, &project.semester) {
        (Some(course), Some(semester)) if !project.tag.is_empty() && project.version != 0 => {
            VersionQuery {
                course,
                semester,
                tag: &project.tag,
            }
        }
        _ => {
            print_warning(VersionError::MissingMetadata);
            return None;
        }
    };

    match source.published_version(&query) {
        Ok(published) if published != project.version => {
            tracing::info!(published, actual = project.version, "specification is outdated");
            Some(Violation::new(
                "You are running a specification that is out of date. \
                 Please pull down the latest version from the template remote.",
            ))
        }
        Ok(_) => None,
        Err(e) => {
            print_warning(&e);
            None
        }
    }
}

#[cfg(test)]
#[path = "version_tests.rs"]
mod tests;
