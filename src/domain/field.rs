//! FieldValue: the plain textual value shared by contact fields.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A textual field value with no validation of its own.
///
/// Equality and string conversion go through the underlying value. The
/// validated field types wrap one of these once their checks pass.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValue(String);

impl FieldValue {
    /// Wrap a value as-is.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_keeps_text_verbatim() {
        let value = FieldValue::new("  spaced out ");
        assert_eq!(value.as_str(), "  spaced out ");
        assert_eq!(value.to_string(), "  spaced out ");
    }

    #[test]
    fn test_field_value_equality_by_value() {
        assert_eq!(FieldValue::from("abc"), FieldValue::new("abc".to_string()));
        assert_ne!(FieldValue::from("abc"), FieldValue::from("abd"));
    }

    #[test]
    fn test_field_value_serializes_as_string() {
        let json = serde_json::to_string(&FieldValue::from("John")).unwrap();
        assert_eq!(json, "\"John\"");
    }
}
