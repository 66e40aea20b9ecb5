//! Error types for validation failures.
//!
//! This module provides [`ValidationError`] for shape mismatches and
//! [`ParseError`] for the entry points that also parse JSON text.

mod parse_error;
mod validation_error;

pub use parse_error::ParseError;
pub use validation_error::ValidationError;
