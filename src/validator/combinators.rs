//! Validator combinators.
//!
//! - `optional`: the value may be missing
//! - `union`: the value must match at least one alternative

use stillwater::Validation;

use super::{nested, Kind, Validator};

/// Accepts a missing value, otherwise delegates to `inner`.
///
/// Only a missing value is accepted unconditionally; an explicit `null` is
/// still checked by `inner`. The display name is the inner one, the
/// optionality shows up in the enclosing [`object`](crate::object).
pub fn optional(inner: Validator) -> Validator {
    let type_name = inner.type_name().to_string();
    Validator::new(
        type_name,
        Some(Kind::Optional),
        move |value, expression| match value {
            None => Validation::Success(()),
            Some(_) => inner.check(value, expression),
        },
    )
}

/// Matches a value that matches any of `alternatives`.
///
/// Alternatives are tried in order and the first match wins. When all of
/// them fail the error carries one sub-error per alternative, all at the
/// current expression.
///
/// A union of no alternatives matches nothing.
///
/// # Example
///
/// ```rust
/// use poi::{number, string, union, validate};
/// use serde_json::json;
///
/// let validator = union([number(), string()]);
/// assert!(validate(&json!("str"), &validator).is_ok());
///
/// let error = validate(&json!(null), &validator).unwrap_err();
/// assert_eq!(
///     error.to_string(),
///     "'value' is not of type 'number | string'\n  \
///      'value' is not of type 'number'\n  \
///      'value' is not of type 'string'"
/// );
/// ```
pub fn union<I>(alternatives: I) -> Validator
where
    I: IntoIterator<Item = Validator>,
{
    let alternatives: Vec<Validator> = alternatives.into_iter().collect();
    let type_name = alternatives
        .iter()
        .map(Validator::type_name)
        .collect::<Vec<_>>()
        .join(" | ");
    let expected = type_name.clone();

    Validator::new(type_name, Some(Kind::Union), move |value, expression| {
        let mut sub_errors = Vec::with_capacity(alternatives.len());
        for alternative in &alternatives {
            match alternative.check(value, expression) {
                Validation::Success(()) => return Validation::Success(()),
                Validation::Failure(error) => sub_errors.push(error),
            }
        }
        nested(expression, &expected, sub_errors)
    })
}
