//! Integration tests for the Value payload type
//!
//! Exercises construction, accessors, conversions, and display through
//! the public facade.

use storylint::Value;

// =============================================================================
// Construction and Accessors
// =============================================================================

#[test]
fn null_is_only_null() {
    assert!(Value::Null.is_null());
    assert!(!Value::Bool(false).is_null());
    assert!(!Value::Str(String::new()).is_null());
}

#[test]
fn accessors_reject_other_variants() {
    let hp = Value::Number(80.0);
    assert_eq!(hp.as_number(), Some(80.0));
    assert_eq!(hp.as_str(), None);
    assert_eq!(hp.as_bool(), None);
    assert_eq!(hp.as_list(), None);
    assert_eq!(hp.as_map(), None);
}

#[test]
fn from_impls_cover_the_literal_shapes() {
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from(50i64), Value::Number(50.0));
    assert_eq!(Value::from(0.5), Value::Number(0.5));
    assert_eq!(Value::from("体力"), Value::Str("体力".to_string()));
    assert_eq!(
        Value::from(vec!["a", "b"]),
        Value::List(vec![Value::from("a"), Value::from("b")])
    );
}

// =============================================================================
// JSON Conversion
// =============================================================================

#[test]
fn json_objects_keep_document_order() {
    let json: serde_json::Value =
        serde_json::from_str(r#"{"金币": 50, "体力": 100, "心情": "calm"}"#).unwrap();
    let value = Value::from_json(json);
    let keys: Vec<&str> = value
        .as_map()
        .unwrap()
        .iter()
        .map(|(k, _)| k.as_str())
        .collect();
    assert_eq!(keys, vec!["金币", "体力", "心情"]);
}

#[test]
fn json_nesting_converts_recursively() {
    let json: serde_json::Value =
        serde_json::from_str(r#"{"inventory": [{"name": "sword", "count": 1}, null]}"#).unwrap();
    let value = Value::from_json(json);
    let list = value.as_map().unwrap()[0].1.as_list().unwrap();
    assert!(list[1].is_null());
    let sword = list[0].as_map().unwrap();
    assert_eq!(sword[0].1, Value::from("sword"));
    assert_eq!(sword[1].1, Value::Number(1.0));
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn display_is_compact_and_unquoted() {
    let value = Value::List(vec![Value::Number(1.0), Value::from("two"), Value::Null]);
    assert_eq!(format!("{value}"), "[1, two, null]");
}
