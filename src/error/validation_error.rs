//! Shape mismatch errors.
//!
//! This module provides [`ValidationError`], a single failed check together
//! with the nested failures that caused it.

use std::fmt::{self, Display};

/// A failed check against a validator.
///
/// `ValidationError` captures where the failure happened and what was
/// expected there:
/// - **expression**: the path expression of the rejected value
/// - **expected_type**: the display name of the validator that rejected it
/// - **sub_errors**: the failures that caused a composite validator to fail
///
/// Leaf validators never attach sub-errors. `array`, `tuple`, `object` and
/// `record` attach exactly the one failure that stopped them; `union` attaches
/// one failure per alternative.
///
/// The rendered message is a tree: one line for this error followed by every
/// sub-error indented by two spaces, recursively.
///
/// # Example
///
/// ```rust
/// use poi::ValidationError;
///
/// let error = ValidationError::with_sub_errors(
///     "value",
///     "number[]",
///     vec![ValidationError::new("value[1]", "number")],
/// );
///
/// assert_eq!(
///     error.to_string(),
///     "'value' is not of type 'number[]'\n  'value[1]' is not of type 'number'"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Path expression of the value that failed validation.
    pub expression: String,
    /// Display name of the expected shape.
    pub expected_type: String,
    /// Nested failures, in the order they were found.
    pub sub_errors: Vec<ValidationError>,
}

impl ValidationError {
    /// Creates an error with no sub-errors.
    pub fn new(expression: impl Into<String>, expected_type: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            expected_type: expected_type.into(),
            sub_errors: Vec::new(),
        }
    }

    /// Creates an error caused by the given sub-errors.
    pub fn with_sub_errors(
        expression: impl Into<String>,
        expected_type: impl Into<String>,
        sub_errors: Vec<ValidationError>,
    ) -> Self {
        Self {
            expression: expression.into(),
            expected_type: expected_type.into(),
            sub_errors,
        }
    }

    /// Returns true if no nested failure is attached.
    pub fn is_leaf(&self) -> bool {
        self.sub_errors.is_empty()
    }

    /// Returns the number of levels in the error tree, counting this one.
    pub fn depth(&self) -> usize {
        1 + self
            .sub_errors
            .iter()
            .map(ValidationError::depth)
            .max()
            .unwrap_or(0)
    }

    /// Returns the innermost failures, in rendering order.
    pub fn leaves(&self) -> Vec<&ValidationError> {
        if self.is_leaf() {
            return vec![self];
        }
        self.sub_errors.iter().flat_map(|e| e.leaves()).collect()
    }

    fn render(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let line = format!(
            "'{}' is not of type '{}'",
            self.expression, self.expected_type
        );
        // Every physical line is indented, including ones that come from a
        // multi-line root expression.
        for (i, part) in line.split('\n').enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{:indent$}{}", "", part, indent = indent)?;
        }
        for sub_error in &self.sub_errors {
            writeln!(f)?;
            sub_error.render(f, indent + 2)?;
        }
        Ok(())
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, 0)
    }
}

impl std::error::Error for ValidationError {}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationError>();
    assert_sync::<ValidationError>();
};
