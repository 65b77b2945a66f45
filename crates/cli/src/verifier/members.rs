// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Constructor, method and field checks.

use crate::compare::mismatch;
use crate::violation::Violation;
use specgrade_model::{
    type_name, ConstructorSpecification, FieldSpecification, MethodSpecification, Modifiers,
    TypeDescriptor,
};

pub(super) fn verify_constructor(
    ty: &TypeDescriptor,
    spec: &ConstructorSpecification,
) -> Result<(), Violation> {
    let signature = constructor_signature(ty, spec);
    let Some(ctor) = ty.constructor(&spec.parameters) else {
        return Err(Violation::new(format!(
            "I couldn't find constructor {} in class {}. Have you written it? \
             Does it have the right parameters?",
            signature,
            ty.display_name()
        )));
    };

    check_subroutine(
        ty,
        &signature,
        Subroutine {
            expected: spec.modifiers,
            actual: ctor.modifiers,
            must: &spec.must_exceptions,
            must_not: &spec.must_not_exceptions,
            declared: &ctor.exceptions,
        },
    )
}

pub(super) fn verify_method(
    ty: &TypeDescriptor,
    spec: &MethodSpecification,
) -> Result<(), Violation> {
    let signature = spec.signature();
    let Some(method) = ty.method(&spec.name, &spec.parameters) else {
        return Err(Violation::new(format!(
            "I couldn't find method {} in class {}. Have you written it? \
             Does it have the right name? The right parameters?",
            signature,
            ty.display_name()
        )));
    };

    if !type_name::same_type(&spec.return_type, &method.return_type) {
        return Err(mismatch(
            &format!(
                "I found the wrong return type for {} in class {}.",
                signature,
                ty.display_name()
            ),
            type_name::normalize(&spec.return_type),
            type_name::normalize(&method.return_type),
        ));
    }

    check_subroutine(
        ty,
        &signature,
        Subroutine {
            expected: spec.modifiers,
            actual: method.modifiers,
            must: &spec.must_exceptions,
            must_not: &spec.must_not_exceptions,
            declared: &method.exceptions,
        },
    )
}

pub(super) fn verify_field(
    ty: &TypeDescriptor,
    spec: &FieldSpecification,
) -> Result<(), Violation> {
    let Some(field) = ty.field(&spec.name) else {
        return Err(Violation::new(format!(
            "I couldn't find field {} in class {}. Have you added it? \
             Does it have the right name?",
            spec.name,
            ty.display_name()
        )));
    };

    if !spec.modifiers.matches(field.modifiers) {
        return Err(Violation::new(format!(
            "I didn't find the right modifiers for field {} in {}. {}",
            spec.name,
            ty.display_name(),
            spec.modifiers.describe_difference(field.modifiers)
        )));
    }

    if !type_name::same_type(&spec.type_name, &field.type_name) {
        return Err(mismatch(
            &format!(
                "I found the wrong type for field {} in class {}.",
                spec.name,
                ty.display_name()
            ),
            type_name::normalize(&spec.type_name),
            type_name::normalize(&field.type_name),
        ));
    }
    Ok(())
}

/// What constructors and methods have in common
struct Subroutine<'s> {
    expected: Modifiers,
    actual: Modifiers,
    must: &'s [String],
    must_not: &'s [String],
    declared: &'s [String],
}

fn check_subroutine(
    ty: &TypeDescriptor,
    signature: &str,
    sub: Subroutine<'_>,
) -> Result<(), Violation> {
    if !sub.expected.matches(sub.actual) {
        return Err(Violation::new(format!(
            "I didn't find the right modifiers for {} in {}. {}",
            signature,
            ty.display_name(),
            sub.expected.describe_difference(sub.actual)
        )));
    }

    let declares = |exception: &str| {
        sub.declared
            .iter()
            .any(|d| type_name::same_type(d, exception))
    };

    if let Some(missing) = sub.must.iter().find(|e| !declares(e)) {
        return Err(Violation::new(format!(
            "I expected {} in {} to throw {} but it doesn't.",
            signature,
            ty.display_name(),
            type_name::normalize(missing)
        )));
    }

    if let Some(forbidden) = sub.must_not.iter().find(|e| declares(e)) {
        return Err(Violation::new(format!(
            "I expected {} in {} to not throw {} but it does.",
            signature,
            ty.display_name(),
            type_name::normalize(forbidden)
        )));
    }
    Ok(())
}

/// Constructor specs may omit the class name; fall back to the simple name
fn constructor_signature(ty: &TypeDescriptor, spec: &ConstructorSpecification) -> String {
    if !spec.name.is_empty() {
        return spec.signature();
    }
    let display = ty.display_name();
    let simple = display.rsplit('.').next().unwrap_or(&display);
    format!(
        "{}({})",
        simple,
        type_name::parameter_list(&spec.parameters)
    )
}
