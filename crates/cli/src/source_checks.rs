// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lightweight checks on submitted source text.

use crate::violation::Violation;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Source extension used when none is configured
pub const DEFAULT_EXTENSION: &str = "java";

/// Import prefixes every project may use
const STANDARD_IMPORTS: &[&str] = &["java.", "javax.", "javafx.", "org.junit."];

static IMPORT_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*import\s+(?:static\s+)?([A-Za-z_][\w.]*(?:\.\*)?)\s*;").ok()
});

static BOOLEAN_COMPARISON_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"\b(?:false|true)\s*(?:==|!=)|(?:==|!=)\s*(?:false|true)\b").ok()
});

static CARRIAGE_RETURN_REGEX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\\r").ok());

static LINE_FEED_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\\n").ok());

/// Access to the source text of a class
pub trait SourceProvider: Send + Sync {
    /// Source of the named class. `Ok(None)` means there is no source file.
    fn source(&self, class_name: &str) -> std::io::Result<Option<String>>;
}

/// Sources laid out by package under a root directory
#[derive(Clone, Debug)]
pub struct DirectorySources {
    root: PathBuf,
    extension: String,
}

impl DirectorySources {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// `<root>/a/b/C.<ext>` for class `a.b.C`
    pub fn path_for(&self, class_name: &str) -> PathBuf {
        let mut path = self.root.clone();
        for part in class_name.split('.') {
            path.push(part);
        }
        path.set_extension(&self.extension);
        path
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl SourceProvider for DirectorySources {
    fn source(&self, class_name: &str) -> std::io::Result<Option<String>> {
        match std::fs::read_to_string(self.path_for(class_name)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Runs the source checks for one project
#[derive(Clone, Debug)]
pub struct SourceChecker {
    allowed_imports: Vec<String>,
}

impl SourceChecker {
    /// Allow the project's own package, the standard prefixes and `extra`
    pub fn new(tag: &str, extra: &[String]) -> Self {
        let mut allowed_imports: Vec<String> =
            STANDARD_IMPORTS.iter().map(|p| p.to_string()).collect();
        if !tag.is_empty() {
            allowed_imports.push(format!("{}.", tag));
        }
        allowed_imports.extend(extra.iter().cloned());
        Self { allowed_imports }
    }

    /// Check a class's source, reporting the first finding
    pub fn check(&self, class_name: &str, source: &str) -> Result<(), Violation> {
        if let Some(import) = self.foreign_import(source) {
            return Err(Violation::new(format!(
                "Class {} imports {}. You may only import classes from standard packages \
                 (those whose fully-qualified names match \"java.*\"). \
                 Not every machine supports the non-standard packages.",
                class_name, import
            )));
        }

        if let Some(found) = first_match(&BOOLEAN_COMPARISON_REGEX, source) {
            return Err(Violation::new(format!(
                "Class {} contains the comparison \"{}\". Simplify your code; you never need \
                 compare to a boolean literal. Eliminate \"== true\" and \"!= false\" altogether. \
                 Rewrite \"== false\" and \"!= true\" to use the ! operator. With meaningful \
                 variable names, your code will be much more readable without these comparisons \
                 to boolean literals.",
                class_name, found
            )));
        }

        if first_match(&CARRIAGE_RETURN_REGEX, source).is_some() {
            return Err(Violation::new(format!(
                "Class {} contains a carriage return character (\\r). Carriage returns are only \
                 valid on the Windows operating system. Please use a cross-platform way of \
                 generating linebreaks, such as println, %n in format strings, or \
                 System.lineSeparator().",
                class_name
            )));
        }

        if first_match(&LINE_FEED_REGEX, source).is_some() {
            return Err(Violation::new(format!(
                "Class {} contains a linefeed character (\\n). Linefeeds are not valid on all \
                 operating systems. Please use a cross-platform way of generating linebreaks, \
                 such as println, %n in format strings, or System.lineSeparator().",
                class_name
            )));
        }

        Ok(())
    }

    fn foreign_import<'s>(&self, source: &'s str) -> Option<&'s str> {
        let re = IMPORT_REGEX.as_ref()?;
        re.captures_iter(source)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
            .find(|name| !self.allowed_imports.iter().any(|p| name.starts_with(p.as_str())))
    }
}

fn first_match<'s>(re: &LazyLock<Option<Regex>>, text: &'s str) -> Option<&'s str> {
    re.as_ref()?.find(text).map(|m| m.as_str())
}

#[cfg(test)]
#[path = "source_checks_tests.rs"]
mod tests;
