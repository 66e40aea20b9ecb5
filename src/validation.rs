//! Validation entry points.
//!
//! This module provides the drivers that run a [`Validator`] against a whole
//! value:
//! - [`validate`] / [`validate_with_expression`]: return the error tree
//! - [`try_validate`]: answer yes or no
//! - [`parse_json`] / [`parse_json_with_expression`]: parse JSON text, then validate
//! - [`try_parse_json`]: parse and validate, discarding any failure
//! - [`parse_json_as`]: parse, validate, then deserialize into a typed value

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ParseError, ValidationError};
use crate::path::{Expression, DEFAULT_EXPRESSION};
use crate::validator::Validator;

/// Validates `value`, reporting failures under the root expression `value`.
///
/// # Errors
///
/// Returns the [`ValidationError`] tree describing the first violation.
///
/// # Example
///
/// ```rust
/// use poi::{number, object, string, validate};
/// use serde_json::json;
///
/// let validator = object([("foo", number()), ("bar", string())]);
///
/// assert!(validate(&json!({ "foo": 42, "bar": "str" }), &validator).is_ok());
///
/// let error = validate(&json!({ "foo": "42", "bar": "str" }), &validator).unwrap_err();
/// assert_eq!(
///     error.to_string(),
///     "'value' is not of type '{ foo: number; bar: string; }'\n  \
///      'value.foo' is not of type 'number'"
/// );
/// ```
pub fn validate(value: &Value, validator: &Validator) -> Result<(), ValidationError> {
    validate_with_expression(value, validator, DEFAULT_EXPRESSION)
}

/// Validates `value`, reporting failures under a custom root expression.
///
/// # Errors
///
/// Returns the [`ValidationError`] tree describing the first violation.
pub fn validate_with_expression(
    value: &Value,
    validator: &Validator,
    expression: impl Into<Expression>,
) -> Result<(), ValidationError> {
    let expression = expression.into();
    let result = validator.check(Some(value), &expression).into_result();
    if let Err(error) = &result {
        tracing::debug!(
            expression = %error.expression,
            expected = %error.expected_type,
            "value failed validation"
        );
    }
    result
}

/// Returns whether `value` matches `validator`.
///
/// No error detail survives; use [`validate`] when the reason matters.
pub fn try_validate(value: &Value, validator: &Validator) -> bool {
    validator
        .check(Some(value), &Expression::root())
        .is_success()
}

/// Parses `json` and validates the document under the root expression `value`.
///
/// # Errors
///
/// Returns [`ParseError::Syntax`] for malformed JSON and
/// [`ParseError::Validation`] when the document does not match.
///
/// # Example
///
/// ```rust
/// use poi::{number, object, parse_json, string};
/// use serde_json::json;
///
/// let validator = object([("foo", number()), ("bar", string())]);
///
/// let value = parse_json(r#"{ "foo": 42, "bar": "str" }"#, &validator).unwrap();
/// assert_eq!(value, json!({ "foo": 42, "bar": "str" }));
///
/// assert!(parse_json("{ foo: 42, bar: 'str' }", &validator)
///     .unwrap_err()
///     .is_syntax());
/// ```
pub fn parse_json(json: &str, validator: &Validator) -> Result<Value, ParseError> {
    parse_json_with_expression(json, validator, DEFAULT_EXPRESSION)
}

/// Parses `json` and validates the document under a custom root expression.
///
/// # Errors
///
/// Returns [`ParseError::Syntax`] for malformed JSON and
/// [`ParseError::Validation`] when the document does not match.
pub fn parse_json_with_expression(
    json: &str,
    validator: &Validator,
    expression: impl Into<Expression>,
) -> Result<Value, ParseError> {
    let value: Value = serde_json::from_str(json).map_err(|error| {
        tracing::debug!(%error, "rejected malformed JSON");
        ParseError::Syntax(error)
    })?;
    validate_with_expression(&value, validator, expression)?;
    Ok(value)
}

/// Parses and validates `json`, yielding `None` on any failure.
pub fn try_parse_json(json: &str, validator: &Validator) -> Option<Value> {
    match serde_json::from_str::<Value>(json) {
        Ok(value) if try_validate(&value, validator) => Some(value),
        Ok(_) => {
            tracing::trace!(expected = %validator.type_name(), "discarding mismatched JSON");
            None
        }
        Err(error) => {
            tracing::trace!(%error, "discarding malformed JSON");
            None
        }
    }
}

/// Parses and validates `json`, then deserializes the approved document.
///
/// The validator decides what is accepted; `T` only gives the result a
/// static type.
///
/// # Errors
///
/// Besides the errors of [`parse_json`], returns [`ParseError::Deserialize`]
/// if the approved document does not fit `T`.
///
/// # Example
///
/// ```rust
/// use poi::{array, number, parse_json_as, tuple};
///
/// let points: Vec<(f64, f64)> =
///     parse_json_as("[[0, 1], [2.5, 3]]", &array(tuple([number(), number()]))).unwrap();
/// assert_eq!(points, vec![(0.0, 1.0), (2.5, 3.0)]);
/// ```
pub fn parse_json_as<T>(json: &str, validator: &Validator) -> Result<T, ParseError>
where
    T: DeserializeOwned,
{
    let value = parse_json(json, validator)?;
    serde_json::from_value(value).map_err(ParseError::Deserialize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::{number, object, string};
    use serde_json::json;

    #[test]
    fn test_validate_uses_default_expression() {
        let error = validate(&json!("x"), &number()).unwrap_err();
        assert_eq!(error.expression, "value");
    }

    #[test]
    fn test_validate_with_expression() {
        let error =
            validate_with_expression(&json!({"foo": "x"}), &object([("foo", number())]), "body")
                .unwrap_err();
        assert_eq!(error.expression, "body");
        assert_eq!(error.sub_errors[0].expression, "body.foo");
    }

    #[test]
    fn test_try_validate() {
        assert!(try_validate(&json!("x"), &string()));
        assert!(!try_validate(&json!(1), &string()));
    }

    #[test]
    fn test_parse_json_errors() {
        let error = parse_json("[1,]", &number()).unwrap_err();
        assert!(error.is_syntax());
        assert!(error.as_validation().is_none());

        let error = parse_json("\"1\"", &number()).unwrap_err();
        assert!(!error.is_syntax());
        assert_eq!(error.as_validation().unwrap().expected_type, "number");
    }

    #[test]
    fn test_try_parse_json() {
        assert_eq!(try_parse_json("1", &number()), Some(json!(1)));
        assert_eq!(try_parse_json("\"1\"", &number()), None);
        assert_eq!(try_parse_json("// 1\n1", &number()), None);
    }
}
