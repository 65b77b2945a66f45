// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Program model: structural facts about the program under test.
//!
//! The verifier never inspects a program directly. It asks a [`ProgramModel`]
//! to resolve a type name and works from the returned [`TypeDescriptor`].
//! How those facts are gathered (reflection, a compiler plugin, a manifest
//! written by a build step) is up to the implementation.

use crate::document::{load_document, LoadError};
use crate::modifiers::Modifiers;
use crate::type_name;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// A referenced type name could not be resolved
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("I couldn't find a class by the name of \"{name}\". Check CamelCase, spelling, and that you created your class in the right package.")]
pub struct ResolutionFailure {
    pub name: String,
}

impl ResolutionFailure {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Read-only access to the structure of the program under test
pub trait ProgramModel: Send + Sync {
    /// Resolve a qualified type name
    fn resolve(&self, name: &str) -> Result<Arc<TypeDescriptor>, ResolutionFailure>;
}

/// A declared field
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub modifiers: Modifiers,
}

/// A declared constructor
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstructorDescriptor {
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub parameters: Vec<String>,
    #[serde(default)]
    pub exceptions: Vec<String>,
}

/// A declared method
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDescriptor {
    pub name: String,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub parameters: Vec<String>,
    pub return_type: String,
    #[serde(default)]
    pub exceptions: Vec<String>,
}

impl MethodDescriptor {
    /// `name(type, type)` with canonical type names
    pub fn signature(&self) -> String {
        format!(
            "{}({})",
            self.name,
            type_name::parameter_list(&self.parameters)
        )
    }

    /// Program entry point: static `main` taking a single `String[]`
    pub fn is_entry_point(&self) -> bool {
        self.name == "main"
            && self.modifiers.is_static()
            && self.parameters.len() == 1
            && type_name::same_type(&self.parameters[0], "String[]")
    }
}

/// Structural facts about one type
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescriptor {
    pub name: String,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub superclass: Option<String>,
    #[serde(default)]
    pub interfaces: Vec<String>,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
    #[serde(default)]
    pub constructors: Vec<ConstructorDescriptor>,
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
}

impl TypeDescriptor {
    /// Create an empty descriptor with the given name and modifiers
    pub fn new(name: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            name: name.into(),
            modifiers,
            superclass: None,
            interfaces: Vec::new(),
            fields: Vec::new(),
            constructors: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Canonical display name
    pub fn display_name(&self) -> String {
        type_name::normalize(&self.name)
    }

    /// Find a declared field by name
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Find a declared constructor by parameter list
    pub fn constructor<S: AsRef<str>>(&self, parameters: &[S]) -> Option<&ConstructorDescriptor> {
        self.constructors
            .iter()
            .find(|c| type_name::same_parameters(&c.parameters, parameters))
    }

    /// Find a declared method by name and parameter list
    pub fn method<S: AsRef<str>>(&self, name: &str, parameters: &[S]) -> Option<&MethodDescriptor> {
        self.methods
            .iter()
            .find(|m| m.name == name && type_name::same_parameters(&m.parameters, parameters))
    }

    /// Whether this type lists the interface among those it implements
    pub fn implements(&self, interface: &str) -> bool {
        self.interfaces
            .iter()
            .any(|i| type_name::same_type(i, interface))
    }

    /// Number of non-static declared fields
    pub fn instance_variable_count(&self) -> usize {
        self.fields
            .iter()
            .filter(|f| !f.modifiers.is_static())
            .count()
    }

    pub fn public_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| f.modifiers.is_public())
    }

    pub fn public_constructors(&self) -> impl Iterator<Item = &ConstructorDescriptor> {
        self.constructors.iter().filter(|c| c.modifiers.is_public())
    }

    pub fn public_methods(&self) -> impl Iterator<Item = &MethodDescriptor> {
        self.methods.iter().filter(|m| m.modifiers.is_public())
    }
}

/// On-disk form of a [`StaticProgram`]
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProgramManifest {
    #[serde(default)]
    pub types: Vec<TypeDescriptor>,
}

/// Program model backed by a fixed set of descriptors
#[derive(Clone, Debug, Default)]
pub struct StaticProgram {
    types: HashMap<String, Arc<TypeDescriptor>>,
}

impl StaticProgram {
    /// Create an empty program
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from descriptors
    pub fn from_types(types: impl IntoIterator<Item = TypeDescriptor>) -> Self {
        let mut program = Self::new();
        for ty in types {
            program.insert(ty);
        }
        program
    }

    /// Load a JSON or TOML manifest
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let manifest: ProgramManifest = load_document(path)?;
        Ok(Self::from_types(manifest.types))
    }

    /// Add or replace a descriptor
    pub fn insert(&mut self, ty: TypeDescriptor) {
        self.types
            .insert(type_name::normalize(&ty.name), Arc::new(ty));
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl ProgramModel for StaticProgram {
    fn resolve(&self, name: &str) -> Result<Arc<TypeDescriptor>, ResolutionFailure> {
        self.types
            .get(&type_name::normalize(name))
            .map(Arc::clone)
            .ok_or_else(|| ResolutionFailure::new(name))
    }
}

#[cfg(test)]
#[path = "program_tests.rs"]
mod tests;
