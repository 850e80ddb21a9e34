//! # Rendition Serialization Module
//!
//! This crate turns generic data values into the three body formats served by
//! the Rendition renderers.
//!
//! ## Features
//!
//! - **JSON Support**: Thin wrappers around `serde_json`. Compact output escapes
//!   `/` as `\/`; pretty output indents by four spaces.
//! - **XML Support**: A small element tree written with `quick-xml`, with
//!   key-to-element mapping rules for mappings and sequences.
//! - **HTML Support**: Nested `<ul>`/`<li>` lists with escaped values and
//!   clickable `http(s)://` links, optionally wrapped in a document shell.
//!
//! Values are `serde_json::Value`s with `preserve_order`, so mapping entries are
//! rendered in insertion order in every format.
//!
//! ## Examples
//!
//! ```
//! use rendition_serde::{to_html_fragment, to_json_string, to_xml_string};
//! use serde_json::json;
//!
//! let value = json!({"name": "Alex", "site": "https://example.com"});
//!
//! assert_eq!(
//!     to_json_string(&value).unwrap(),
//!     r#"{"name":"Alex","site":"https:\/\/example.com"}"#
//! );
//! assert_eq!(
//!     to_xml_string(&value, "root", false).unwrap(),
//!     "<?xml version=\"1.0\"?>\n<root><name>Alex</name><site>https://example.com</site></root>\n"
//! );
//! assert!(to_html_fragment(&value).contains("<a href=\"https://example.com\">"));
//! ```

pub mod error;
pub mod html;
pub mod json;
pub mod value;
pub mod xml;

// Re-export common types and functions
pub use error::{Result, SerdeError};
pub use value::ValueKind;

pub use html::{DEFAULT_HTML_POSTFIX, DEFAULT_HTML_PREFIX, to_html_document, to_html_fragment};
pub use json::{from_json_str, to_json, to_json_string, to_json_string_pretty, to_json_value};
pub use xml::{Element, to_xml_string, write_document};
