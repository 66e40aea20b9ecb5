//! Sequence validators.
//!
//! [`array`] validates a homogeneous list, [`tuple`] a fixed-length list with
//! one validator per position. Both stop at the first failing element.

use serde_json::Value;
use stillwater::Validation;

use super::{mismatch, nested, Validator};

/// Matches an array whose every element matches `element`.
///
/// Elements are checked in index order and the first failure is reported as
/// the single sub-error, addressed as `expression[index]`. A union element
/// type is parenthesized in the display name: `(A | B)[]`.
///
/// # Example
///
/// ```rust
/// use poi::{array, number, validate};
/// use serde_json::json;
///
/// let validator = array(number());
/// assert!(validate(&json!([23, 42]), &validator).is_ok());
///
/// let error = validate(&json!([23, "str"]), &validator).unwrap_err();
/// assert_eq!(error.expected_type, "number[]");
/// assert_eq!(error.sub_errors[0].expression, "value[1]");
/// ```
pub fn array(element: Validator) -> Validator {
    let type_name = if element.is_union() {
        format!("({})[]", element.type_name())
    } else {
        format!("{}[]", element.type_name())
    };
    let expected = type_name.clone();

    Validator::new(type_name, None, move |value, expression| {
        let Some(Value::Array(items)) = value else {
            return mismatch(expression, &expected);
        };
        for (index, item) in items.iter().enumerate() {
            if let Validation::Failure(sub_error) =
                element.check(Some(item), &expression.push_index(index))
            {
                return nested(expression, &expected, vec![sub_error]);
            }
        }
        Validation::Success(())
    })
}

/// Matches an array with exactly one element per validator.
///
/// A length mismatch fails without sub-errors; otherwise positions are
/// checked in order and the first failure is reported. `tuple` of no
/// validators matches only the empty array.
///
/// # Example
///
/// ```rust
/// use poi::{number, string, try_validate, tuple};
/// use serde_json::json;
///
/// let validator = tuple([number(), string()]);
/// assert_eq!(validator.type_name(), "[number, string]");
///
/// assert!(try_validate(&json!([42, "str"]), &validator));
/// assert!(!try_validate(&json!([42, "str", true]), &validator));
/// ```
pub fn tuple<I>(validators: I) -> Validator
where
    I: IntoIterator<Item = Validator>,
{
    let validators: Vec<Validator> = validators.into_iter().collect();
    let type_name = format!(
        "[{}]",
        validators
            .iter()
            .map(Validator::type_name)
            .collect::<Vec<_>>()
            .join(", ")
    );
    let expected = type_name.clone();

    Validator::new(type_name, None, move |value, expression| {
        let items = match value {
            Some(Value::Array(items)) if items.len() == validators.len() => items,
            _ => return mismatch(expression, &expected),
        };
        for (index, (validator, item)) in validators.iter().zip(items).enumerate() {
            if let Validation::Failure(sub_error) =
                validator.check(Some(item), &expression.push_index(index))
            {
                return nested(expression, &expected, vec![sub_error]);
            }
        }
        Validation::Success(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Expression;
    use crate::validator::{null_, number, optional, string, union};
    use serde_json::json;

    #[test]
    fn test_array_type_names() {
        assert_eq!(array(number()).type_name(), "number[]");
        assert_eq!(array(array(string())).type_name(), "string[][]");
        assert_eq!(
            array(union([number(), null_()])).type_name(),
            "(number | null)[]"
        );
        // Only the union tag triggers parentheses.
        assert_eq!(
            array(optional(union([number(), null_()]))).type_name(),
            "number | null[]"
        );
    }

    #[test]
    fn test_array_stops_at_first_failure() {
        let error = array(number())
            .check(Some(&json!([1, "a", "b"])), &Expression::root())
            .into_result()
            .unwrap_err();

        assert_eq!(error.sub_errors.len(), 1);
        assert_eq!(error.sub_errors[0].expression, "value[1]");
    }

    #[test]
    fn test_array_rejects_missing_value() {
        assert!(array(number()).check(None, &Expression::root()).is_failure());
    }

    #[test]
    fn test_empty_tuple() {
        let validator = tuple(Vec::<Validator>::new());
        assert_eq!(validator.type_name(), "[]");
        assert!(validator
            .check(Some(&json!([])), &Expression::root())
            .is_success());
        assert!(validator
            .check(Some(&json!([1])), &Expression::root())
            .is_failure());
    }

    #[test]
    fn test_tuple_position_failure() {
        let error = tuple([number(), string()])
            .check(Some(&json!([42, null])), &Expression::root())
            .into_result()
            .unwrap_err();

        assert_eq!(error.expected_type, "[number, string]");
        assert_eq!(error.sub_errors.len(), 1);
        assert_eq!(error.sub_errors[0].expression, "value[1]");
        assert_eq!(error.sub_errors[0].expected_type, "string");
    }
}
