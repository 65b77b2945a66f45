// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Loading of JSON and TOML documents.

use serde::de::DeserializeOwned;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading a document
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Serialization format of a document
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Toml,
}

impl DocumentFormat {
    /// Pick the format from a file extension. Anything but `.toml` is JSON.
    pub fn from_path(path: &Path) -> Self {
        if path.extension().is_some_and(|e| e == "toml") {
            DocumentFormat::Toml
        } else {
            DocumentFormat::Json
        }
    }
}

/// Parse a document from a string in the given format
pub fn parse_document<T: DeserializeOwned>(
    content: &str,
    format: DocumentFormat,
) -> Result<T, LoadError> {
    match format {
        DocumentFormat::Json => Ok(serde_json::from_str(content)?),
        DocumentFormat::Toml => Ok(toml::from_str(content)?),
    }
}

/// Read and parse a document, choosing the format by extension
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_document(&content, DocumentFormat::from_path(path))
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
