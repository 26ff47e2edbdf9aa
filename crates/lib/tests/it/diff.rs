//! Diff engine tests covering its documented properties.

use docdelta::diff::{diff, diff_value, numerically_equivalent};
use docdelta::doc::{Doc, List, Value};

// ===== REFLEXIVITY =====

#[test]
fn test_identical_documents_produce_empty_changeset() {
    let doc = crate::helpers::user_doc();
    let changed = diff(&doc, &doc.clone());
    assert!(changed.is_empty());
}

#[test]
fn test_empty_documents_produce_empty_changeset() {
    assert!(diff(&Doc::new(), &Doc::new()).is_empty());
}

// ===== ADDITION DETECTION =====

#[test]
fn test_added_field_reported_with_full_value() {
    let baseline = Doc::new();
    let current = Doc::new().with("a", 1);

    let changed = diff(&current, &baseline);
    assert_eq!(changed.len(), 1);
    assert_eq!(changed.get_as::<i64>("a"), Some(1));
}

#[test]
fn test_added_nested_document_reported_whole() {
    let baseline = Doc::new().with("name", "Alice");
    let current = baseline
        .clone()
        .with_doc("profile", Doc::new().with("bio", "hello"));

    let changed = diff(&current, &baseline);
    assert_eq!(changed.len(), 1);
    assert_eq!(changed.get_as::<&str>("profile.bio"), Some("hello"));
}

// ===== NO-DELETION PROPERTY =====

#[test]
fn test_removed_field_is_not_reported() {
    let baseline = Doc::new().with("a", 1).with("b", 2);
    let current = Doc::new().with("a", 1);

    // Removal of "b" is invisible to the asymmetric diff.
    let changed = diff(&current, &baseline);
    assert!(changed.is_empty());
}

#[test]
fn test_truncated_list_tail_is_not_reported() {
    let baseline = Doc::new().with_list("tags", ["a", "b", "c"].into_iter().collect::<List>());
    let current = Doc::new().with_list("tags", ["a", "b"].into_iter().collect::<List>());

    assert!(diff(&current, &baseline).is_empty());
}

// ===== NESTED-CHANGE PROPAGATION =====

#[test]
fn test_nested_change_reported_under_parent_key() {
    let baseline = Doc::new().with_doc("a", Doc::new().with("x", 1).with("y", 2));
    let current = Doc::new().with_doc("a", Doc::new().with("x", 1).with("y", 3));

    let changed = diff(&current, &baseline);
    assert_eq!(changed.len(), 1);

    // Only the changed leaf appears, nested under its parent key.
    let nested = changed.get_doc("a").unwrap();
    assert_eq!(nested.len(), 1);
    assert_eq!(nested.get_as::<i64>("y"), Some(3));
}

#[test]
fn test_deeply_nested_change_keeps_shape() {
    let baseline = Doc::new().with("user.profile.name", "Alice").with("user.profile.age", 30);
    let mut current = baseline.clone();
    current.set("user.profile.name", "Bob");

    let changed = diff(&current, &baseline);
    assert_eq!(changed.get_as::<&str>("user.profile.name"), Some("Bob"));
    assert!(changed.get("user.profile.age").is_none());
}

#[test]
fn test_unchanged_nested_document_not_reported() {
    let baseline = Doc::new()
        .with_doc("profile", Doc::new().with("bio", "hello"))
        .with("name", "Alice");
    let mut current = baseline.clone();
    current.set("name", "Bob");

    let changed = diff(&current, &baseline);
    assert_eq!(changed.len(), 1);
    assert!(changed.get("profile").is_none());
}

// ===== LIST DIFFING =====

#[test]
fn test_changed_list_element_reported_by_index() {
    let baseline = Doc::new().with_list("tags", ["a", "b", "c"].into_iter().collect::<List>());
    let current = Doc::new().with_list("tags", ["a", "x", "c"].into_iter().collect::<List>());

    let changed = diff(&current, &baseline);
    let positions = changed.get_doc("tags").unwrap();
    assert_eq!(positions.len(), 1);
    assert_eq!(positions.get_as::<&str>("1"), Some("x"));
}

#[test]
fn test_appended_list_element_reported_by_index() {
    let baseline = Doc::new().with_list("tags", ["a"].into_iter().collect::<List>());
    let current = Doc::new().with_list("tags", ["a", "b"].into_iter().collect::<List>());

    let changed = diff(&current, &baseline);
    let positions = changed.get_doc("tags").unwrap();
    assert_eq!(positions.get_as::<&str>("1"), Some("b"));
    assert!(positions.get("0").is_none());
}

#[test]
fn test_nested_document_inside_list_diffs_recursively() {
    let baseline = Doc::new().with_list(
        "items",
        [Value::Doc(Doc::new().with("qty", 1).with("sku", "a"))]
            .into_iter()
            .collect::<List>(),
    );
    let current = Doc::new().with_list(
        "items",
        [Value::Doc(Doc::new().with("qty", 2).with("sku", "a"))]
            .into_iter()
            .collect::<List>(),
    );

    let changed = diff(&current, &baseline);
    let element = changed.get_doc("items").unwrap().get_doc("0").unwrap();
    assert_eq!(element.len(), 1);
    assert_eq!(element.get_as::<i64>("qty"), Some(2));
}

// ===== NUMERIC-EQUIVALENCE CARVE-OUT =====

#[test]
fn test_int_to_double_representation_change_is_clean() {
    let baseline = Doc::new().with("n", 1);
    let current = Doc::new().with("n", 1.0);

    assert!(diff(&current, &baseline).is_empty());
    // And in the other direction.
    assert!(diff(&baseline, &current).is_empty());
}

#[test]
fn test_numerically_different_values_still_dirty() {
    let baseline = Doc::new().with("n", 1);
    let current = Doc::new().with("n", 1.5);

    let changed = diff(&current, &baseline);
    assert_eq!(changed.get_as::<f64>("n"), Some(1.5));
}

#[test]
fn test_numeric_equivalence_helper() {
    assert!(numerically_equivalent(&Value::Int(1), &Value::Double(1.0)));
    assert!(numerically_equivalent(&Value::Double(1.0), &Value::Int(1)));
    assert!(!numerically_equivalent(&Value::Int(1), &Value::Double(1.5)));
    assert!(!numerically_equivalent(&Value::Int(1), &Value::Text("1".into())));
    assert!(!numerically_equivalent(&Value::Int(1), &Value::Int(1)));
}

// ===== SCALAR CHANGES AND KIND MISMATCHES =====

#[test]
fn test_scalar_change_reported() {
    let baseline = Doc::new().with("name", "Alice");
    let current = Doc::new().with("name", "Bob");

    let changed = diff(&current, &baseline);
    assert_eq!(changed.get_as::<&str>("name"), Some("Bob"));
}

#[test]
fn test_kind_mismatch_reports_current_value_whole() {
    // Document replaced by a scalar: no recursion, the new value wins.
    let baseline = Doc::new().with_doc("a", Doc::new().with("x", 1));
    let current = Doc::new().with("a", 5);

    let changed = diff(&current, &baseline);
    assert_eq!(changed.get_as::<i64>("a"), Some(5));
}

#[test]
fn test_scalar_replaced_by_document_reports_whole_document() {
    let baseline = Doc::new().with("a", 5);
    let current = Doc::new().with_doc("a", Doc::new().with("x", 1).with("y", 2));

    let changed = diff(&current, &baseline);
    let nested = changed.get_doc("a").unwrap();
    // The whole new document, not a sub-diff.
    assert_eq!(nested.len(), 2);
}

#[test]
fn test_list_replaced_by_document_reports_whole() {
    let baseline = Doc::new().with_list("a", ["x"].into_iter().collect::<List>());
    let current = Doc::new().with_doc("a", Doc::new().with("k", "v"));

    let changed = diff(&current, &baseline);
    assert_eq!(changed.get_as::<&str>("a.k"), Some("v"));
}

#[test]
fn test_null_transitions_are_changes() {
    let baseline = Doc::new().with("a", Value::Null);
    let current = Doc::new().with("a", 1);

    assert_eq!(diff(&current, &baseline).get_as::<i64>("a"), Some(1));
    assert_eq!(diff(&baseline, &current).get("a"), Some(&Value::Null));
}

// ===== VALUE-LEVEL ENTRY POINT =====

#[test]
fn test_diff_value_on_equal_values() {
    assert!(diff_value(&Value::Int(1), &Value::Int(1)).is_none());
    assert!(diff_value(&Value::Int(1), &Value::Double(1.0)).is_none());
    assert_eq!(
        diff_value(&Value::Int(2), &Value::Int(1)),
        Some(Value::Int(2))
    );
}
