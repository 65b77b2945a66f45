// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specification and program models for structural verification.
//!
//! The specification side describes what a submitted program is expected to
//! look like. The program side is an injected, read-only view of what the
//! program actually declares.

mod document;
mod modifiers;
mod program;
mod spec;
pub mod type_name;

pub use document::{load_document, parse_document, DocumentFormat, LoadError};
pub use modifiers::Modifiers;
pub use program::{
    ConstructorDescriptor, FieldDescriptor, MethodDescriptor, ProgramManifest, ProgramModel,
    ResolutionFailure, StaticProgram, TypeDescriptor,
};
pub use spec::{
    ClassSpecification, ConstructorSpecification, FieldSpecification, MethodSpecification,
    ProjectSpecification,
};
