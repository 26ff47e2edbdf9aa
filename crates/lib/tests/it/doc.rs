//! Document model tests: basic operations, paths, and JSON interop.

use docdelta::doc::{Doc, List, Value};
use docdelta::path;

// ===== BASIC OPERATIONS =====

#[test]
fn test_doc_basic_operations() {
    let mut doc = Doc::new();

    assert!(doc.is_empty());
    assert_eq!(doc.len(), 0);

    let old_val = doc.set("name", "Alice");
    assert!(old_val.is_none());
    assert_eq!(doc.len(), 1);

    doc.set("age", 30);
    assert_eq!(doc.len(), 2);

    assert!(doc.contains_key("name"));
    assert!(!doc.contains_key("nonexistent"));

    assert_eq!(doc.get_as::<String>("name"), Some("Alice".to_string()));
    assert_eq!(doc.get_as::<i64>("age"), Some(30));
    assert!(doc.get("nonexistent").is_none());
}

#[test]
fn test_doc_overwrite_returns_old_value() {
    let mut doc = Doc::new();

    doc.set("key", "original");
    let old_val = doc.set("key", "modified");

    assert_eq!(old_val.as_ref().and_then(|v| v.as_text()), Some("original"));
    assert_eq!(doc.get_as::<String>("key"), Some("modified".to_string()));
    assert_eq!(doc.len(), 1);
}

#[test]
fn test_doc_preserves_insertion_order() {
    let mut doc = Doc::new();
    doc.set("zebra", 1);
    doc.set("apple", 2);
    doc.set("mango", 3);

    let keys: Vec<&String> = doc.keys().collect();
    assert_eq!(keys, vec!["zebra", "apple", "mango"]);

    // Overwriting keeps the original position.
    doc.set("zebra", 10);
    let keys: Vec<&String> = doc.keys().collect();
    assert_eq!(keys, vec!["zebra", "apple", "mango"]);
}

#[test]
fn test_doc_remove() {
    let mut doc = crate::helpers::user_doc();

    let removed = doc.remove("age");
    assert_eq!(removed.as_ref().and_then(|v| v.as_int()), Some(30));
    assert!(!doc.contains_key("age"));

    assert!(doc.remove("nonexistent").is_none());
}

#[test]
fn test_doc_remove_nested_path() {
    let mut doc = crate::helpers::user_doc();

    let removed = doc.remove("profile.city");
    assert_eq!(removed.as_ref().and_then(|v| v.as_text()), Some("Berlin"));
    assert!(doc.contains_key("profile.bio"));
    assert!(!doc.contains_key("profile.city"));
}

// ===== PATH OPERATIONS =====

#[test]
fn test_set_path_creates_intermediate_documents() {
    let mut doc = Doc::new();
    doc.set_path(path!("user.profile.name"), "Alice").unwrap();

    assert_eq!(doc.get_as::<&str>("user.profile.name"), Some("Alice"));
    assert!(doc.get_doc("user").is_some());
    assert!(doc.get_doc("user.profile").is_some());
}

#[test]
fn test_set_path_through_scalar_replaces_it() {
    let mut doc = Doc::new().with("user", 5);
    doc.set_path("user.name", "Alice").unwrap();

    assert_eq!(doc.get_as::<&str>("user.name"), Some("Alice"));
}

#[test]
fn test_set_empty_path_is_error() {
    let mut doc = Doc::new();
    assert!(doc.set_path(path!(), "x").is_err());
}

#[test]
fn test_get_navigates_list_indices() {
    let doc = crate::helpers::user_doc();

    assert_eq!(doc.get_as::<&str>("tags.0"), Some("admin"));
    assert_eq!(doc.get_as::<&str>(path!("tags", "1")), Some("staff"));
    assert!(doc.get("tags.7").is_none());
    assert!(doc.get("tags.notanumber").is_none());
}

#[test]
fn test_get_through_scalar_returns_none() {
    let doc = Doc::new().with("name", "Alice");
    assert!(doc.get("name.anything").is_none());
}

#[test]
fn test_get_mut_in_place_update() {
    let mut doc = crate::helpers::user_doc();

    if let Some(Value::Int(age)) = doc.get_mut("age") {
        *age += 1;
    }
    assert_eq!(doc.get_as::<i64>("age"), Some(31));
}

// ===== VALUE CONVERSIONS =====

#[test]
fn test_get_as_type_mismatch_returns_none() {
    let doc = Doc::new().with("name", "Alice");
    assert_eq!(doc.get_as::<i64>("name"), None);
    assert_eq!(doc.get_as::<bool>("name"), None);
}

#[test]
fn test_value_primitive_comparisons() {
    let doc = Doc::new().with("name", "Alice").with("age", 30).with("score", 0.5);

    assert_eq!(doc.get("name").unwrap(), "Alice");
    assert_eq!(doc.get("age").unwrap(), &Value::Int(30));
    assert_eq!(doc.get("score").unwrap(), &Value::Double(0.5));
    assert!(*doc.get("age").unwrap() == 30i64);
}

// ===== JSON INTEROP =====

#[test]
fn test_from_json_str_round_trip() {
    let input = r#"{"name":"Alice","age":30,"profile":{"bio":"dev"},"tags":["a","b"],"ratio":0.5,"ok":true,"gone":null}"#;
    let doc = Doc::from_json_str(input).unwrap();

    assert_eq!(doc.get_as::<&str>("name"), Some("Alice"));
    assert_eq!(doc.get_as::<i64>("age"), Some(30));
    assert_eq!(doc.get_as::<f64>("ratio"), Some(0.5));
    assert_eq!(doc.get_as::<&str>("profile.bio"), Some("dev"));
    assert_eq!(doc.get_list("tags").unwrap().len(), 2);
    assert_eq!(doc.get("gone"), Some(&Value::Null));

    assert_eq!(doc.to_json_string(), input);
}

#[test]
fn test_from_json_rejects_non_objects() {
    assert!(Doc::from_json_str("[1,2,3]").is_err());
    assert!(Doc::from_json_str("42").is_err());
}

#[test]
fn test_json_export_renders_ids_as_hex() {
    let id: docdelta::ObjectId = crate::helpers::SAMPLE_ID.parse().unwrap();
    let doc = Doc::new().with("_id", id);
    assert_eq!(
        doc.to_json_string(),
        format!("{{\"_id\":\"{}\"}}", crate::helpers::SAMPLE_ID)
    );
}

// ===== LISTS =====

#[test]
fn test_list_operations_through_doc() {
    let mut doc = Doc::new().with_list("tags", List::new());
    let tags = doc.get_list_mut("tags").unwrap();

    tags.push("a");
    tags.push("b");
    tags.insert(1, "between").unwrap();

    assert_eq!(doc.get_as::<&str>("tags.1"), Some("between"));
    assert_eq!(doc.get_list("tags").unwrap().len(), 3);
}

#[test]
fn test_display_formatting() {
    let doc = Doc::new().with("a", 1).with_list("xs", [2i64].into_iter().collect::<List>());
    assert_eq!(format!("{doc}"), "{a: 1, xs: [2]}");
}
