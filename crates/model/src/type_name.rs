// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Type name normalization.
//!
//! Specification documents may carry binary names (`[I`, `[Ljava.lang.String;`,
//! `a.Outer$Inner`) while program manifests usually carry source names
//! (`int[]`, `String[]`, `a.Outer.Inner`). Both are reduced to one canonical
//! spelling before comparison.

const IMPLICIT_PACKAGE: &str = "java.lang.";

/// Canonical spelling of a type name
pub fn normalize(name: &str) -> String {
    let name = name.trim();
    let dims = name.chars().take_while(|&c| c == '[').count();
    if dims == 0 {
        return strip_implicit_package(&name.replace('$', "."));
    }

    let element = &name[dims..];
    let base = match element {
        "Z" => "boolean".to_string(),
        "B" => "byte".to_string(),
        "C" => "char".to_string(),
        "S" => "short".to_string(),
        "I" => "int".to_string(),
        "J" => "long".to_string(),
        "F" => "float".to_string(),
        "D" => "double".to_string(),
        other => {
            let class = other
                .strip_prefix('L')
                .and_then(|s| s.strip_suffix(';'))
                .unwrap_or(other);
            strip_implicit_package(&class.replace('$', "."))
        }
    };

    let mut out = base;
    for _ in 0..dims {
        out.push_str("[]");
    }
    out
}

/// Whether two names denote the same type
pub fn same_type(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

/// Whether two parameter lists denote the same types in the same order
pub fn same_parameters<A: AsRef<str>, B: AsRef<str>>(a: &[A], b: &[B]) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .zip(b)
            .all(|(x, y)| same_type(x.as_ref(), y.as_ref()))
}

/// Render a parameter list for messages: `int, String[]`
pub fn parameter_list<S: AsRef<str>>(parameters: &[S]) -> String {
    parameters
        .iter()
        .map(|p| normalize(p.as_ref()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn strip_implicit_package(name: &str) -> String {
    // Only top-level java.lang types; java.lang.reflect.Method keeps its package.
    match name.strip_prefix(IMPLICIT_PACKAGE) {
        Some(rest) if !rest.split("[]").next().unwrap_or(rest).contains('.') => rest.to_string(),
        _ => name.to_string(),
    }
}

#[cfg(test)]
#[path = "type_name_tests.rs"]
mod tests;
