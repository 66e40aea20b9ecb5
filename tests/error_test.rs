//! Integration tests for ValidationError and ParseError.

use poi::{number, parse_json, ParseError, ValidationError};

#[test]
fn test_validation_error_fields() {
    let error = ValidationError::with_sub_errors(
        "value.items",
        "string[]",
        vec![ValidationError::new("value.items[2]", "string")],
    );

    assert_eq!(error.expression, "value.items");
    assert_eq!(error.expected_type, "string[]");
    assert_eq!(error.sub_errors.len(), 1);
    assert!(!error.is_leaf());
    assert!(error.sub_errors[0].is_leaf());
}

#[test]
fn test_validation_error_equality() {
    let a = ValidationError::new("value", "number");
    let b = ValidationError::new("value", "number");
    let c = ValidationError::new("value", "string");

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.clone(), a);
}

#[test]
fn test_leaves_follow_rendering_order() {
    let error = ValidationError::with_sub_errors(
        "value",
        "A | B",
        vec![
            ValidationError::with_sub_errors(
                "value",
                "A",
                vec![ValidationError::new("value.a", "number")],
            ),
            ValidationError::new("value", "B"),
        ],
    );

    let leaves: Vec<&str> = error
        .leaves()
        .iter()
        .map(|e| e.expected_type.as_str())
        .collect();
    assert_eq!(leaves, vec!["number", "B"]);
    assert_eq!(error.depth(), 3);
}

#[test]
fn test_parse_error_display() {
    let error = parse_json("\"x\"", &number()).unwrap_err();
    assert_eq!(error.to_string(), "'value' is not of type 'number'");

    let error = parse_json("{", &number()).unwrap_err();
    assert!(error.to_string().starts_with("invalid JSON: "));
}

#[test]
fn test_parse_error_source_chain() {
    use std::error::Error;

    let error = parse_json("nope", &number()).unwrap_err();
    assert!(matches!(error, ParseError::Syntax(_)));
    assert!(error.source().is_some());
}

#[test]
fn test_validation_error_converts_into_parse_error() {
    let error: ParseError = ValidationError::new("value", "number").into();
    assert_eq!(
        error.as_validation(),
        Some(&ValidationError::new("value", "number"))
    );
}
