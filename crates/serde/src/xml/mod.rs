//! XML serialization for generic data values.
//!
//! ## Mapping
//!
//! | Value | XML |
//! |-------|-----|
//! | `{"name": "Alex"}` | `<name>Alex</name>` |
//! | `{"is_admin": true}` | `<is_admin>1</is_admin>` |
//! | `{"none": null}` | `<none/>` |
//! | `["a", "b"]` | `<_0>a</_0><_1>b</_1>` |
//! | `{"items": [{"n": 1}, {"n": 2}]}` | `<items><n>1</n></items><items><n>2</n></items>` |
//!
//! Keys that read as numbers are prefixed with `_` so they stay valid element
//! names. Documents always begin with `<?xml version="1.0"?>` and end with a
//! newline.
//!
//! ## Examples
//!
//! ```
//! use rendition_serde::xml::to_xml_string;
//! use serde_json::json;
//!
//! let value = json!({"items": [{"name": "Alex"}, {"name": "Robin"}]});
//! let xml = to_xml_string(&value, "root", true).unwrap();
//! assert!(xml.contains("  <items>\n    <name>Robin</name>\n  </items>\n"));
//! ```

pub mod element;
pub mod ser;
pub mod utils;

pub use element::{Element, write_document};
pub use ser::{append_entries, to_xml_string, value_to_element};
