//! Classification helpers for generic data values.
//!
//! Values are `serde_json::Value`s with insertion-ordered objects. The
//! serializers treat objects as ordered mappings and arrays as sequences whose
//! keys are their indices.

use std::borrow::Cow;
use std::fmt;

use serde_json::{Number, Value};

/// The structural kind of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// `null`
    Null,
    /// Boolean, number or string.
    Scalar,
    /// Array.
    Sequence,
    /// Object.
    Mapping,
}

impl ValueKind {
    /// Classifies `value`.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) | Value::Number(_) | Value::String(_) => ValueKind::Scalar,
            Value::Array(_) => ValueKind::Sequence,
            Value::Object(_) => ValueKind::Mapping,
        }
    }

    /// Returns the kind's name as used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Scalar => "scalar",
            ValueKind::Sequence => "sequence",
            ValueKind::Mapping => "mapping",
        }
    }

    /// Returns true for mappings and sequences.
    pub fn is_container(&self) -> bool {
        matches!(self, ValueKind::Sequence | ValueKind::Mapping)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the `(key, value)` entries of a container, sequence indices as keys.
///
/// Scalars and `null` have no entries.
pub fn entries(value: &Value) -> Vec<(Cow<'_, str>, &Value)> {
    match value {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| (Cow::Owned(index.to_string()), item))
            .collect(),
        Value::Object(map) => map
            .iter()
            .map(|(key, item)| (Cow::Borrowed(key.as_str()), item))
            .collect(),
        _ => Vec::new(),
    }
}

/// Number of entries in a container, zero for anything else.
pub fn entry_count(value: &Value) -> usize {
    match value {
        Value::Array(items) => items.len(),
        Value::Object(map) => map.len(),
        _ => 0,
    }
}

/// Text form of a number as written into XML and HTML.
///
/// Whole-valued floats drop their fraction (`1.0` becomes `1`); other numbers
/// keep their shortest round-trip form.
pub fn number_text(number: &Number) -> String {
    match number.as_f64() {
        Some(float)
            if number.is_f64() && float.fract() == 0.0 && float.abs() < WHOLE_FLOAT_LIMIT =>
        {
            format!("{:.0}", float)
        }
        _ => number.to_string(),
    }
}

/// Whole floats at or above this magnitude keep their float spelling.
const WHOLE_FLOAT_LIMIT: f64 = 1e15;

/// Returns true if `key` reads as a number (`3`, `-1.5`, `.5`, `2e10`).
///
/// Such keys cannot start an XML element name.
pub fn is_numeric_key(key: &str) -> bool {
    const WHITESPACE: [char; 6] = [' ', '\t', '\n', '\r', '\x0b', '\x0c'];

    let s = key.trim_start_matches(WHITESPACE).trim_end_matches(WHITESPACE);
    let s = s.strip_prefix(['+', '-']).unwrap_or(s);

    let (mantissa, exponent) = match s.find(['e', 'E']) {
        Some(index) => (&s[..index], Some(&s[index + 1..])),
        None => (s, None),
    };
    let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if (integer.is_empty() && fraction.is_empty()) || !all_digits(integer) || !all_digits(fraction) {
        return false;
    }

    match exponent {
        None => true,
        Some(exponent) => {
            let exponent = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
            !exponent.is_empty() && all_digits(exponent)
        }
    }
}
