//! Path expressions for locating values in nested structures.
//!
//! This module provides [`Expression`], the textual location of a value that
//! validation reports in its errors (e.g. `value.items[2].name`). Expressions
//! are built incrementally while validation descends into arrays and objects,
//! starting from a caller-supplied root.

use std::fmt::{self, Display};
use std::sync::LazyLock;

use regex::Regex;

/// Root expression used when the caller does not supply one.
pub const DEFAULT_EXPRESSION: &str = "value";

static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[$A-Za-z_][$0-9A-Za-z_]*$").expect("identifier pattern compiles")
});

/// Returns true if `key` can be written as a bare `.key` accessor.
pub fn is_identifier(key: &str) -> bool {
    IDENTIFIER.is_match(key)
}

/// Renders a key the way it appears in type names: bare when it is an
/// identifier, JSON-quoted otherwise.
pub fn display_key(key: &str) -> String {
    if is_identifier(key) {
        key.to_string()
    } else {
        quote(key)
    }
}

fn quote(key: &str) -> String {
    // Serializing a str cannot fail.
    serde_json::to_string(key).unwrap_or_else(|_| format!("\"{}\"", key))
}

/// A path expression pointing at a value inside the validated input.
///
/// Expressions are immutable; `push_index` and `push_key` return a new
/// expression and leave the original untouched, so sibling elements can be
/// addressed from the same parent.
///
/// # Example
///
/// ```rust
/// use poi::Expression;
///
/// let path = Expression::root()
///     .push_key("items")
///     .push_index(2)
///     .push_key("display name");
///
/// assert_eq!(path.to_string(), r#"value.items[2]["display name"]"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Expression(String);

impl Expression {
    /// Creates the default root expression, `value`.
    pub fn root() -> Self {
        Self(DEFAULT_EXPRESSION.to_string())
    }

    /// Creates a root expression with custom text.
    ///
    /// The text is used verbatim; it does not need to be an identifier.
    pub fn new(root: impl Into<String>) -> Self {
        Self(root.into())
    }

    /// Returns a new expression addressing element `index` of this one.
    pub fn push_index(&self, index: usize) -> Self {
        Self(format!("{}[{}]", self.0, index))
    }

    /// Returns a new expression addressing field `key` of this one.
    ///
    /// Identifier keys use dot notation, anything else is JSON-quoted in
    /// brackets.
    pub fn push_key(&self, key: &str) -> Self {
        if is_identifier(key) {
            Self(format!("{}.{}", self.0, key))
        } else {
            Self(format!("{}[{}]", self.0, quote(key)))
        }
    }

    /// Returns the expression text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the expression and returns its text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Default for Expression {
    fn default() -> Self {
        Self::root()
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Expression {
    fn from(root: &str) -> Self {
        Self::new(root)
    }
}

impl From<String> for Expression {
    fn from(root: String) -> Self {
        Self(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_expression() {
        assert_eq!(Expression::root().as_str(), "value");
        assert_eq!(Expression::default(), Expression::root());
    }

    #[test]
    fn test_custom_root() {
        let path = Expression::new(r#"{"foo":"42"}"#).push_key("foo");
        assert_eq!(path.to_string(), r#"{"foo":"42"}.foo"#);
    }

    #[test]
    fn test_index() {
        assert_eq!(Expression::root().push_index(0).as_str(), "value[0]");
    }

    #[test]
    fn test_identifier_keys() {
        assert_eq!(Expression::root().push_key("foo").as_str(), "value.foo");
        assert_eq!(Expression::root().push_key("$ref").as_str(), "value.$ref");
        assert_eq!(Expression::root().push_key("_a1").as_str(), "value._a1");
    }

    #[test]
    fn test_quoted_keys() {
        assert_eq!(
            Expression::root().push_key(".foo").as_str(),
            r#"value[".foo"]"#
        );
        assert_eq!(Expression::root().push_key("1a").as_str(), r#"value["1a"]"#);
        assert_eq!(Expression::root().push_key("").as_str(), r#"value[""]"#);
        assert_eq!(
            Expression::root().push_key("say \"hi\"").as_str(),
            r#"value["say \"hi\""]"#
        );
    }

    #[test]
    fn test_nested() {
        let path = Expression::root()
            .push_key("details")
            .push_key("values")
            .push_index(0);
        assert_eq!(path.as_str(), "value.details.values[0]");
    }

    #[test]
    fn test_immutability() {
        let base = Expression::root().push_key("items");
        let first = base.push_index(0);
        let second = base.push_index(1);

        assert_eq!(base.as_str(), "value.items");
        assert_eq!(first.as_str(), "value.items[0]");
        assert_eq!(second.as_str(), "value.items[1]");
    }

    #[test]
    fn test_display_key() {
        assert_eq!(display_key("foo"), "foo");
        assert_eq!(display_key(".foo"), r#"".foo""#);
        assert_eq!(display_key("a-b"), r#""a-b""#);
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("foo"));
        assert!(is_identifier("$"));
        assert!(!is_identifier("0"));
        assert!(!is_identifier("foo bar"));
        assert!(!is_identifier("é"));
    }
}
