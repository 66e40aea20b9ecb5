//! Errors raised by the JSON-parsing entry points.

use super::ValidationError;

/// Failure of [`parse_json`](crate::parse_json) and its variants.
///
/// A syntax error is reported before any validator runs; a shape mismatch
/// carries the full [`ValidationError`] tree.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The input text is not a valid JSON document.
    #[error("invalid JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    /// The document parsed but does not match the validator.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The approved value could not be deserialized into the requested type.
    #[error("validated value cannot be deserialized: {0}")]
    Deserialize(#[source] serde_json::Error),
}

impl ParseError {
    /// Returns the shape mismatch, if that is what this error is.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            ParseError::Validation(error) => Some(error),
            _ => None,
        }
    }

    /// Returns true if the input text was not valid JSON.
    pub fn is_syntax(&self) -> bool {
        matches!(self, ParseError::Syntax(_))
    }
}
