//! JSON serialization.
//!
//! Thin wrappers around `serde_json`. Compact output escapes forward slashes
//! (`"\/foo"`); pretty output indents by four spaces and leaves slashes alone.
//! Both write characters outside ASCII as `\uXXXX` escapes (UTF-16 surrogate
//! pairs above the BMP) and decode back to the same value.
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::ser::{Formatter, PrettyFormatter};
use std::io;

/// Compact formatter that writes `/` as `\/` inside strings.
struct EscapedSlashFormatter;

impl Formatter for EscapedSlashFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut rest = fragment;
        while let Some(index) = rest.find('/') {
            writer.write_all(rest[..index].as_bytes())?;
            writer.write_all(b"\\/")?;
            rest = &rest[index + 1..];
        }
        writer.write_all(rest.as_bytes())
    }
}

/// Rewrites every non-ASCII character as a lowercase `\uXXXX` escape.
///
/// Serialized JSON only carries non-ASCII characters inside strings, so the
/// rewrite never touches structure.
fn escape_non_ascii(json: String) -> String {
    if json.is_ascii() {
        return json;
    }

    let mut escaped = String::with_capacity(json.len() + 16);
    let mut units = [0u16; 2];
    for c in json.chars() {
        if c.is_ascii() {
            escaped.push(c);
        } else {
            for unit in c.encode_utf16(&mut units) {
                escaped.push_str(&format!("\\u{:04x}", unit));
            }
        }
    }
    escaped
}

/// Serialize a value to a minified JSON string.
///
/// # Examples
///
/// ```
/// use rendition_serde::json::to_json_string;
/// use serde_json::json;
///
/// let json = to_json_string(&json!({"href": "/foo", "n": 1})).unwrap();
/// assert_eq!(json, r#"{"href":"\/foo","n":1}"#);
/// ```
pub fn to_json_string<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    let mut buffer = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, EscapedSlashFormatter);
    value.serialize(&mut serializer)?;
    Ok(escape_non_ascii(String::from_utf8(buffer)?))
}

/// Serialize a value to a pretty-printed JSON string.
///
/// # Examples
///
/// ```
/// use rendition_serde::json::to_json_string_pretty;
/// use serde_json::json;
///
/// let json = to_json_string_pretty(&json!({"href": "/foo"})).unwrap();
/// assert_eq!(json, "{\n    \"href\": \"/foo\"\n}");
/// ```
pub fn to_json_string_pretty<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;
    Ok(escape_non_ascii(String::from_utf8(buffer)?))
}

/// Serialize a value, pretty-printed or minified.
pub fn to_json<T>(value: &T, pretty: bool) -> Result<String>
where
    T: Serialize + ?Sized,
{
    if pretty {
        to_json_string_pretty(value)
    } else {
        to_json_string(value)
    }
}

/// Convert any serializable type into its `serde_json::Value` form.
pub fn to_json_value<T>(value: &T) -> Result<serde_json::Value>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_value(value)?)
}

/// Deserialize a value from a JSON string.
pub fn from_json_str<'a, T>(s: &'a str) -> Result<T>
where
    T: Deserialize<'a>,
{
    Ok(serde_json::from_str(s)?)
}
