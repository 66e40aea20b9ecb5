//! Primitive validators.
//!
//! Leaf validators perform a single type test and never attach sub-errors.

use std::fmt::{self, Display};

use serde_json::Value;
use stillwater::Validation;

use super::{mismatch, Validator};

fn primitive(type_name: &'static str, accepts: fn(&Value) -> bool) -> Validator {
    Validator::new(type_name, None, move |value, expression| match value {
        Some(value) if accepts(value) => Validation::Success(()),
        _ => mismatch(expression, type_name),
    })
}

/// Matches only `null`.
pub fn null_() -> Validator {
    primitive("null", Value::is_null)
}

/// Matches `true` and `false`.
pub fn boolean() -> Validator {
    primitive("boolean", Value::is_boolean)
}

/// Matches any JSON number, integer or floating point.
pub fn number() -> Validator {
    primitive("number", Value::is_number)
}

/// Matches any string.
pub fn string() -> Validator {
    primitive("string", Value::is_string)
}

/// Matches everything, including a missing value.
///
/// Useful for fields that must be declared but not constrained.
pub fn unknown() -> Validator {
    Validator::new("unknown", None, |_, _| Validation::Success(()))
}

/// Matches exactly one primitive value.
///
/// # Example
///
/// ```rust
/// use poi::{literal, try_validate};
/// use serde_json::json;
///
/// assert_eq!(literal("str").type_name(), r#""str""#);
/// assert_eq!(literal(true).type_name(), "true");
///
/// assert!(try_validate(&json!(42), &literal(42)));
/// assert!(!try_validate(&json!(43), &literal(42)));
/// assert!(!try_validate(&json!("42"), &literal(42)));
/// ```
pub fn literal(value: impl Into<Literal>) -> Validator {
    let literal: Literal = value.into();
    let type_name = literal.to_string();
    let expected = type_name.clone();
    Validator::new(type_name, None, move |value, expression| match value {
        Some(value) if literal.matches(value) => Validation::Success(()),
        _ => mismatch(expression, &expected),
    })
}

/// A primitive value accepted by [`literal`].
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Matches only the same boolean.
    Bool(bool),
    /// Numbers compare by value, so `42` matches both `42` and `42.0`.
    Number(f64),
    /// Matches only an identical string.
    String(String),
}

impl Literal {
    /// Returns true if `value` is strictly equal to this literal.
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (Literal::Bool(expected), Value::Bool(actual)) => expected == actual,
            (Literal::Number(expected), Value::Number(actual)) => {
                actual.as_f64() == Some(*expected)
            }
            (Literal::String(expected), Value::String(actual)) => expected == actual,
            _ => false,
        }
    }
}

/// Renders the literal as JSON.
impl Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Bool(b) => write!(f, "{}", b),
            Literal::Number(n) => write_number(f, *n),
            Literal::String(s) => match serde_json::to_string(s) {
                Ok(quoted) => f.write_str(&quoted),
                Err(_) => Err(fmt::Error),
            },
        }
    }
}

/// Writes `n` the way JavaScript prints numbers: the shortest digits that
/// round-trip, switching to exponent form when the decimal exponent is at
/// least 21 or at most -7.
fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if !n.is_finite() {
        return f.write_str("null");
    }
    if n == 0.0 {
        return f.write_str("0");
    }

    // `{:e}` yields the shortest round-trip digits, e.g. `1.5e-10` or `1e21`.
    let scientific = format!("{:e}", n.abs());
    let (mantissa, exponent) = scientific.split_once('e').ok_or(fmt::Error)?;
    let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let len = digits.len() as i32;
    // Position of the decimal point relative to the start of `digits`.
    let point = exponent + 1;

    if n < 0.0 {
        f.write_str("-")?;
    }
    if len <= point && point <= 21 {
        write!(f, "{}{}", digits, "0".repeat((point - len) as usize))
    } else if 0 < point && point <= 21 {
        let (whole, fraction) = digits.split_at(point as usize);
        write!(f, "{}.{}", whole, fraction)
    } else if -6 < point && point <= 0 {
        write!(f, "0.{}{}", "0".repeat(-point as usize), digits)
    } else {
        let (first, rest) = digits.split_at(1);
        f.write_str(first)?;
        if !rest.is_empty() {
            write!(f, ".{}", rest)?;
        }
        let sign = if exponent > 0 { '+' } else { '-' };
        write!(f, "e{}{}", sign, exponent.abs())
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Literal::Bool(b)
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::String(s.to_string())
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::String(s)
    }
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Literal {
                fn from(n: $t) -> Self {
                    Literal::Number(n as f64)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
