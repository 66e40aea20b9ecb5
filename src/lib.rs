//! # Poi
//!
//! Runtime validation of untyped values against declared shapes, with a
//! precise, human-readable description of the first violation found.
//!
//! ## Overview
//!
//! A [`Validator`] is built from small constructors (`number()`,
//! `array(string())`, `object([...])`, `union([...])`, ...) and checked
//! against a `serde_json::Value`. Composite validators delegate to their
//! children and wrap the first failure, so the resulting
//! [`ValidationError`] is a tree that pinpoints where the value went wrong:
//!
//! ```text
//! 'value' is not of type '{ code: number; details: string[]; }'
//!   'value.details' is not of type 'string[]'
//!     'value.details[0]' is not of type 'string'
//! ```
//!
//! ## Core Types
//!
//! - [`Validator`]: an immutable, shareable shape description
//! - [`ValidationError`]: a failed check with its nested causes
//! - [`ParseError`]: failure of the JSON-parsing entry points
//! - [`Expression`]: the path of a value inside the input (e.g. `value.items[2]`)
//!
//! ## Example
//!
//! ```rust
//! use poi::{array, literal, number, object, optional, string, union, validate};
//! use serde_json::json;
//!
//! let validator = object([
//!     ("code", number()),
//!     ("description", optional(string())),
//!     (
//!         "details",
//!         union([
//!             object([("type", literal("a"))]),
//!             object([("type", literal("b")), ("values", array(string()))]),
//!         ]),
//!     ),
//! ]);
//!
//! let value = json!({ "code": 42, "details": { "type": "b", "values": ["foo"] } });
//! assert!(validate(&value, &validator).is_ok());
//!
//! let value = json!({ "code": 42, "details": { "type": "b", "values": [null] } });
//! let error = validate(&value, &validator).unwrap_err();
//! assert_eq!(error.leaves()[1].expression, "value.details.values[0]");
//! ```

pub mod error;
pub mod path;
pub mod validation;
pub mod validator;

pub use error::{ParseError, ValidationError};
pub use path::{Expression, DEFAULT_EXPRESSION};
pub use validation::{
    parse_json, parse_json_as, parse_json_with_expression, try_parse_json, try_validate,
    validate, validate_with_expression,
};
pub use validator::{
    array, boolean, literal, null_, number, object, optional, record, string, tuple, union,
    unknown, Kind, Literal, Validator,
};

/// Type alias for the result of a single validator check.
pub type ValidationResult<T = ()> = stillwater::Validation<T, ValidationError>;
