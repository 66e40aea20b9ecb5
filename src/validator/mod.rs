//! Validator definitions.
//!
//! Every shape kind, primitive or composite, is a [`Validator`]: a display
//! name, an optional [`Kind`] tag and a check closure. Composite validators
//! capture their children at construction time and delegate to them, so a
//! validator tree is immutable and can be shared freely between threads.
//!
//! # Example
//!
//! ```rust
//! use poi::{array, number, object, optional, string, union, Expression};
//! use serde_json::json;
//!
//! let validator = object([
//!     ("id", union([number(), string()])),
//!     ("tags", optional(array(string()))),
//! ]);
//!
//! assert_eq!(
//!     validator.type_name(),
//!     "{ id: number | string; tags?: string[]; }"
//! );
//!
//! let value = json!({ "id": 7, "tags": ["a", "b"] });
//! assert!(validator.check(Some(&value), &Expression::root()).is_success());
//! ```

mod array;
mod combinators;
mod object;
mod primitive;

use std::fmt::{self, Display};
use std::sync::Arc;

use serde_json::Value;
use stillwater::Validation;

use crate::error::ValidationError;
use crate::path::Expression;
use crate::ValidationResult;

pub use array::{array, tuple};
pub use combinators::{optional, union};
pub use object::{object, record};
pub use primitive::{boolean, literal, null_, number, string, unknown, Literal};

/// Type alias for the check closure stored in every validator.
///
/// `None` stands for a missing value (an absent object field), which is
/// distinct from an explicit JSON `null`.
pub(crate) type CheckFn =
    Arc<dyn Fn(Option<&Value>, &Expression) -> ValidationResult + Send + Sync>;

/// Discriminator tag consulted by composing validators to adjust formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Built by [`optional`]; rendered as `key?: T` inside an object.
    Optional,
    /// Built by [`union`]; parenthesized when used as an array element.
    Union,
}

/// An immutable description of an expected value shape.
///
/// Validators are cheap to clone (the check closure is reference counted)
/// and are `Send + Sync`, so one instance can validate many values
/// concurrently.
#[derive(Clone)]
pub struct Validator {
    type_name: String,
    kind: Option<Kind>,
    check: CheckFn,
}

impl Validator {
    pub(crate) fn new<F>(type_name: impl Into<String>, kind: Option<Kind>, check: F) -> Self
    where
        F: Fn(Option<&Value>, &Expression) -> ValidationResult + Send + Sync + 'static,
    {
        Self {
            type_name: type_name.into(),
            kind,
            check: Arc::new(check),
        }
    }

    /// Returns the display name of the expected shape.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns the discriminator tag, if any.
    pub fn kind(&self) -> Option<Kind> {
        self.kind
    }

    /// Returns true if this validator was built by [`optional`].
    pub fn is_optional(&self) -> bool {
        self.kind == Some(Kind::Optional)
    }

    /// Returns true if this validator was built by [`union`].
    pub fn is_union(&self) -> bool {
        self.kind == Some(Kind::Union)
    }

    /// Checks a candidate value located at `expression`.
    ///
    /// Pass `None` for a missing value. Most callers want the drivers
    /// ([`validate`](crate::validate), [`try_validate`](crate::try_validate))
    /// instead; this is the protocol composite validators use to delegate.
    pub fn check(&self, value: Option<&Value>, expression: &Expression) -> ValidationResult {
        (self.check)(value, expression)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("type_name", &self.type_name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl Display for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.type_name)
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Validator>();
    assert_sync::<Validator>();
};

/// Failure with no nested cause.
pub(crate) fn mismatch(expression: &Expression, type_name: &str) -> ValidationResult {
    Validation::Failure(ValidationError::new(expression.as_str(), type_name))
}

/// Failure of a composite caused by `sub_errors`.
pub(crate) fn nested(
    expression: &Expression,
    type_name: &str,
    sub_errors: Vec<ValidationError>,
) -> ValidationResult {
    Validation::Failure(ValidationError::with_sub_errors(
        expression.as_str(),
        type_name,
        sub_errors,
    ))
}
