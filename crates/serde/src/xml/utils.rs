//! Utility functions and constants for XML serialization.

use serde_json::Value;

use crate::error::{Result, SerdeError};
use crate::value::{is_numeric_key, number_text};

/// The declaration written at the top of every document.
pub const XML_DECLARATION: &str = "<?xml version=\"1.0\"?>\n";

/// Prefix applied to numeric-looking keys so they remain valid element names.
pub const NUMERIC_KEY_PREFIX: char = '_';

/// Checks that `name` can be used as an XML element or attribute name.
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    (first.is_alphabetic() || first == '_' || first == ':')
        && chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | ':' | '-' | '.'))
}

/// Returns `name` if valid, or an [`SerdeError::InvalidElementName`].
pub fn checked_name(name: &str) -> Result<&str> {
    if is_valid_name(name) {
        Ok(name)
    } else {
        Err(SerdeError::InvalidElementName(name.to_string()))
    }
}

/// Maps a key onto an element name, prefixing numeric-looking keys.
pub fn element_name(key: &str) -> String {
    if is_numeric_key(key) {
        format!("{}{}", NUMERIC_KEY_PREFIX, key)
    } else {
        key.to_string()
    }
}

/// XML spelling of a boolean.
pub fn bool_to_string(b: bool) -> &'static str {
    if b { "1" } else { "0" }
}

/// Text content for a scalar: booleans as `1`/`0`, `null` as nothing.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::Bool(b) => bool_to_string(*b).to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}
