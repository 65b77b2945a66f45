// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specification model: the expected structure of a submission.
//!
//! Documents are produced offline (typically by a generator run against a
//! reference solution) and deserialized once per grading run. Field names
//! are camelCase to match those generators.

use crate::document::{load_document, parse_document, DocumentFormat, LoadError};
use crate::modifiers::Modifiers;
use crate::program::{ConstructorDescriptor, FieldDescriptor, MethodDescriptor};
use crate::type_name;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level specification document for one assignment
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSpecification {
    /// Run identifier, usually the assignment's package name
    #[serde(default)]
    pub tag: String,

    #[serde(default)]
    pub course: Option<String>,

    #[serde(default)]
    pub semester: Option<String>,

    /// Version of this specification, compared against the published one
    #[serde(default)]
    pub version: u32,

    /// Whether source style checks apply to this assignment
    #[serde(default, alias = "isStyleChecked")]
    pub style_checked: bool,

    #[serde(default)]
    pub classes: Vec<ClassSpecification>,
}

impl ProjectSpecification {
    /// Load from a JSON or TOML file
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        load_document(path)
    }

    /// Parse a JSON document
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        parse_document(json, DocumentFormat::Json)
    }
}

/// Expected structure of one class
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSpecification {
    /// Qualified name
    pub name: String,

    #[serde(default)]
    pub modifiers: Modifiers,

    /// Upper bound on non-static fields; absent or negative means unbounded
    #[serde(default)]
    pub max_instance_variables: Option<i64>,

    #[serde(default)]
    pub superclass: Option<String>,

    #[serde(default)]
    pub interfaces: Vec<String>,

    #[serde(default)]
    pub allow_unspecified: bool,

    #[serde(default)]
    pub allow_unspecified_default_ctor: bool,

    #[serde(default)]
    pub allow_unspecified_constants: bool,

    #[serde(default)]
    pub constructors: Vec<ConstructorSpecification>,

    #[serde(default)]
    pub methods: Vec<MethodSpecification>,

    #[serde(default)]
    pub fields: Vec<FieldSpecification>,

    /// Names of the test suites exercising this class
    #[serde(default)]
    pub unit_testers: Vec<String>,
}

impl ClassSpecification {
    /// Create a specification with nothing but a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Instance variable bound, if one applies
    pub fn instance_variable_bound(&self) -> Option<usize> {
        self.max_instance_variables
            .and_then(|max| usize::try_from(max).ok())
    }

    pub fn has_field(&self, field: &FieldDescriptor) -> bool {
        self.fields.iter().any(|f| f.name == field.name)
    }

    pub fn has_constructor(&self, ctor: &ConstructorDescriptor) -> bool {
        self.constructors
            .iter()
            .any(|c| type_name::same_parameters(&c.parameters, &ctor.parameters))
    }

    pub fn has_method(&self, method: &MethodDescriptor) -> bool {
        self.methods.iter().any(|m| {
            m.name == method.name && type_name::same_parameters(&m.parameters, &method.parameters)
        })
    }
}

/// Expected constructor
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstructorSpecification {
    /// Simple class name, used only in messages
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub modifiers: Modifiers,

    #[serde(default)]
    pub parameters: Vec<String>,

    /// Exceptions that must be declared
    #[serde(default, alias = "mustThrow")]
    pub must_exceptions: Vec<String>,

    /// Exceptions that must not be declared
    #[serde(default, alias = "mustNotThrow")]
    pub must_not_exceptions: Vec<String>,
}

impl ConstructorSpecification {
    pub fn signature(&self) -> String {
        format!(
            "{}({})",
            self.name,
            type_name::parameter_list(&self.parameters)
        )
    }
}

/// Expected method
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodSpecification {
    pub name: String,

    pub return_type: String,

    #[serde(default)]
    pub modifiers: Modifiers,

    #[serde(default)]
    pub parameters: Vec<String>,

    #[serde(default, alias = "mustThrow")]
    pub must_exceptions: Vec<String>,

    #[serde(default, alias = "mustNotThrow")]
    pub must_not_exceptions: Vec<String>,
}

impl MethodSpecification {
    pub fn signature(&self) -> String {
        format!(
            "{}({})",
            self.name,
            type_name::parameter_list(&self.parameters)
        )
    }
}

/// Expected field
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpecification {
    pub name: String,

    #[serde(rename = "type")]
    pub type_name: String,

    #[serde(default)]
    pub modifiers: Modifiers,
}

#[cfg(test)]
#[path = "spec_tests.rs"]
mod tests;
