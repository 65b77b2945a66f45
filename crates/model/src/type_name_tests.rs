// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use proptest::prelude::*;
use yare::parameterized;

#[parameterized(
    primitive = { "int", "int" },
    implicit_package = { "java.lang.String", "String" },
    nested_package_kept = { "java.lang.reflect.Method", "java.lang.reflect.Method" },
    user_type = { "shapes.Circle", "shapes.Circle" },
    int_array = { "[I", "int[]" },
    double_matrix = { "[[D", "double[][]" },
    string_array = { "[Ljava.lang.String;", "String[]" },
    source_array = { "java.lang.String[]", "String[]" },
    inner_class = { "shapes.Outer$Inner", "shapes.Outer.Inner" },
    object_array = { "[Lshapes.Circle;", "shapes.Circle[]" },
)]
fn normalizes(input: &str, expected: &str) {
    assert_eq!(normalize(input), expected);
}

#[test]
fn parameter_lists_compare_by_canonical_name() {
    let declared = ["java.lang.String", "[I"];
    let actual = vec!["String".to_string(), "int[]".to_string()];
    assert!(same_parameters(&declared, &actual));
    assert!(!same_parameters(&declared, &actual[..1]));
}

#[test]
fn parameter_list_renders_canonical_names() {
    assert_eq!(
        parameter_list(&["java.lang.String", "double"]),
        "String, double"
    );
    assert_eq!(parameter_list::<&str>(&[]), "");
}

proptest! {
    #[test]
    fn normalize_is_idempotent(name in "[a-z]{1,6}(\\.[A-Z][a-z]{0,5}){0,3}(\\[\\]){0,2}") {
        let once = normalize(&name);
        prop_assert_eq!(normalize(&once), once);
    }
}
