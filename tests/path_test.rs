//! Integration tests for path expressions.

use poi::path::{display_key, is_identifier};
use poi::{array, boolean, object, record, unknown, validate, Expression, DEFAULT_EXPRESSION};
use serde_json::json;

#[test]
fn test_expression_construction_and_display() {
    assert_eq!(Expression::root().to_string(), DEFAULT_EXPRESSION);

    let path = Expression::root()
        .push_key("users")
        .push_index(0)
        .push_key("address")
        .push_key("zip code");
    assert_eq!(path.to_string(), r#"value.users[0].address["zip code"]"#);
}

#[test]
fn test_expression_conversions() {
    let from_str: Expression = "body".into();
    let from_string: Expression = String::from("body").into();
    assert_eq!(from_str, from_string);
    assert_eq!(from_str.into_string(), "body");
}

#[test]
fn test_identifier_rules() {
    for key in ["a", "A1", "_", "$", "$_$", "camelCase"] {
        assert!(is_identifier(key), "{key}");
        assert_eq!(display_key(key), key);
    }
    for key in ["", "1", "a-b", "a.b", " a", "ü"] {
        assert!(!is_identifier(key), "{key}");
        assert_eq!(display_key(key), serde_json::to_string(key).unwrap());
    }
}

#[test]
fn test_paths_reported_by_validators() {
    let row = object([("id", unknown()), ("ok", boolean())]);
    let validator = object([("rows", array(record(array(row))))]);
    let value = json!({"rows": [{"a-b": [{"ok": true}, {"ok": 1}]}]});

    let error = validate(&value, &validator).unwrap_err();
    assert_eq!(
        error.leaves()[0].expression,
        r#"value.rows[0]["a-b"][1].ok"#
    );
}
