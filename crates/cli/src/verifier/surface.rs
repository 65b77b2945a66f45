// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scan for public members the specification does not mention.

use crate::violation::Violation;
use specgrade_model::{type_name, ClassSpecification, TypeDescriptor};

pub(super) fn scan(spec: &ClassSpecification, ty: &TypeDescriptor) -> Result<(), Violation> {
    if !spec.allow_unspecified_constants {
        if let Some(field) = ty.public_fields().find(|f| !spec.has_field(f)) {
            return Err(Violation::new(format!(
                "I found an unspecified public field \"{}\" in class {}. \
                 Any fields you add should be private (or protected).",
                field.name,
                ty.display_name()
            )));
        }
    }

    let unexpected_ctor = ty
        .public_constructors()
        .find(|c| c.parameters.is_empty() && !spec.has_constructor(c));
    if let (false, Some(ctor)) = (spec.allow_unspecified_default_ctor, unexpected_ctor) {
        return Err(Violation::new(format!(
            "I found an unspecified public constructor with signature ({}) in class {}. \
             Any constructors you add should be private (or protected).",
            type_name::parameter_list(&ctor.parameters),
            ty.display_name()
        )));
    }

    let unexpected_method = ty
        .public_methods()
        .find(|m| !m.is_entry_point() && !spec.has_method(m));
    if let Some(method) = unexpected_method {
        return Err(Violation::new(format!(
            "I found an unspecified public method {} in class {}. \
             Any methods you add should be private (or protected).",
            method.signature(),
            ty.display_name()
        )));
    }
    Ok(())
}
