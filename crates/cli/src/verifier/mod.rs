// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Structural verification of a program against its specification.
//!
//! Each class is checked fail-fast in a fixed order: existence, modifiers,
//! instance variable bound, superclass, interfaces, constructors, methods,
//! fields and finally the scan for unspecified public surface. The first
//! mismatch becomes the class's [`Violation`]. A class that cannot be
//! resolved at all is a [`ResolutionFailure`] and aborts the whole run.

mod members;
mod surface;

use crate::compare::mismatch;
use crate::violation::{CheckError, Violation};
use specgrade_model::{type_name, ClassSpecification, ProgramModel, TypeDescriptor};

/// Superclass assumed when a descriptor declares none
const ROOT_CLASS: &str = "java.lang.Object";

/// Checks class specifications against a program model
pub struct Verifier<'a> {
    program: &'a dyn ProgramModel,
}

impl<'a> Verifier<'a> {
    pub fn new(program: &'a dyn ProgramModel) -> Self {
        Self { program }
    }

    /// Verify one class, stopping at the first mismatch
    pub fn verify_class(&self, spec: &ClassSpecification) -> Result<(), CheckError> {
        let ty = self.program.resolve(&spec.name)?;
        tracing::debug!(class = %spec.name, "verifying class");

        check_modifiers(spec, &ty)?;
        check_instance_variables(spec, &ty)?;
        check_superclass(spec, &ty)?;
        check_interfaces(spec, &ty)?;

        for ctor in &spec.constructors {
            members::verify_constructor(&ty, ctor)?;
        }
        for method in &spec.methods {
            members::verify_method(&ty, method)?;
        }
        for field in &spec.fields {
            members::verify_field(&ty, field)?;
        }

        if !spec.allow_unspecified {
            surface::scan(spec, &ty)?;
        }
        Ok(())
    }
}

fn check_modifiers(spec: &ClassSpecification, ty: &TypeDescriptor) -> Result<(), Violation> {
    if spec.modifiers.matches(ty.modifiers) {
        return Ok(());
    }
    Err(Violation::new(format!(
        "I didn't find the right modifiers for class {}. {}",
        spec.name,
        spec.modifiers.describe_difference(ty.modifiers)
    )))
}

fn check_instance_variables(
    spec: &ClassSpecification,
    ty: &TypeDescriptor,
) -> Result<(), Violation> {
    match spec.instance_variable_bound() {
        Some(max) if ty.instance_variable_count() > max => Err(Violation::new(format!(
            "I found a lot of instance variables in class {}. Too many. \
             Perhaps some of them should be local variables?",
            spec.name
        ))),
        _ => Ok(()),
    }
}

fn check_superclass(spec: &ClassSpecification, ty: &TypeDescriptor) -> Result<(), Violation> {
    let Some(ref expected) = spec.superclass else {
        return Ok(());
    };
    let actual = ty.superclass.as_deref().unwrap_or(ROOT_CLASS);
    if type_name::same_type(expected, actual) {
        return Ok(());
    }
    Err(mismatch(
        &format!("I didn't find the correct superclass for {}.", spec.name),
        type_name::normalize(expected),
        type_name::normalize(actual),
    ))
}

fn check_interfaces(spec: &ClassSpecification, ty: &TypeDescriptor) -> Result<(), Violation> {
    match spec.interfaces.iter().find(|i| !ty.implements(i)) {
        Some(missing) => Err(Violation::new(format!(
            "I expected class {} to implement interface {}, but it doesn't.",
            ty.display_name(),
            type_name::normalize(missing)
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
