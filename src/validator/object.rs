//! Associative validators.
//!
//! [`object`] checks a fixed set of declared fields and ignores any others;
//! [`record`] applies one validator to every field of an object of arbitrary
//! width. Both stop at the first failing field.

use indexmap::IndexMap;
use serde_json::Value;
use stillwater::Validation;

use crate::path::display_key;

use super::{mismatch, nested, Validator};

/// Matches an object whose declared fields match their validators.
///
/// Fields are checked in declaration order, which is also the order they
/// appear in the display name. Keys not declared here are ignored. A field
/// built with [`optional`](crate::optional) may be absent and is rendered as
/// `key?: T`; any other validator receives the missing value and decides for
/// itself (only [`unknown`](crate::unknown) accepts it).
///
/// Declaring the same key twice keeps the first position and the last
/// validator.
///
/// # Example
///
/// ```rust
/// use poi::{number, object, optional, string, validate};
/// use serde_json::json;
///
/// let validator = object([("foo", number()), ("bar", optional(string()))]);
/// assert_eq!(validator.type_name(), "{ foo: number; bar?: string; }");
///
/// assert!(validate(&json!({ "foo": 42 }), &validator).is_ok());
/// assert!(validate(&json!({ "foo": 42, "extra": true }), &validator).is_ok());
///
/// let error = validate(&json!({ "foo": "42" }), &validator).unwrap_err();
/// assert_eq!(error.sub_errors[0].expression, "value.foo");
/// ```
pub fn object<I, K>(fields: I) -> Validator
where
    I: IntoIterator<Item = (K, Validator)>,
    K: Into<String>,
{
    let fields: IndexMap<String, Validator> = fields
        .into_iter()
        .map(|(key, validator)| (key.into(), validator))
        .collect();
    let type_name = object_type_name(&fields);
    let expected = type_name.clone();

    Validator::new(type_name, None, move |value, expression| {
        let Some(Value::Object(map)) = value else {
            return mismatch(expression, &expected);
        };
        for (key, validator) in &fields {
            if let Validation::Failure(sub_error) =
                validator.check(map.get(key), &expression.push_key(key))
            {
                return nested(expression, &expected, vec![sub_error]);
            }
        }
        Validation::Success(())
    })
}

fn object_type_name(fields: &IndexMap<String, Validator>) -> String {
    if fields.is_empty() {
        return "{}".to_string();
    }
    let entries: Vec<String> = fields
        .iter()
        .map(|(key, validator)| {
            format!(
                "{}{}: {};",
                display_key(key),
                if validator.is_optional() { "?" } else { "" },
                validator.type_name()
            )
        })
        .collect();
    format!("{{ {} }}", entries.join(" "))
}

/// Matches an object whose every field value matches `value`.
///
/// Fields are checked in document order.
///
/// # Example
///
/// ```rust
/// use poi::{number, record, validate};
/// use serde_json::json;
///
/// let validator = record(number());
/// assert_eq!(validator.type_name(), "{ [key: string]: number; }");
///
/// let error = validate(&json!({ "a": 1, "b c": "2" }), &validator).unwrap_err();
/// assert_eq!(error.sub_errors[0].expression, r#"value["b c"]"#);
/// ```
pub fn record(value: Validator) -> Validator {
    let type_name = format!("{{ [key: string]: {}; }}", value.type_name());
    let expected = type_name.clone();

    Validator::new(type_name, None, move |candidate, expression| {
        let Some(Value::Object(map)) = candidate else {
            return mismatch(expression, &expected);
        };
        for (key, item) in map {
            if let Validation::Failure(sub_error) =
                value.check(Some(item), &expression.push_key(key))
            {
                return nested(expression, &expected, vec![sub_error]);
            }
        }
        Validation::Success(())
    })
}
