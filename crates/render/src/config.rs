//! Renderer configuration.
//!
//! A [`RenderConfig`] is built once and handed to a renderer, which keeps it
//! for its whole lifetime.
//!
//! | Field | Default | Description |
//! |-------|---------|-------------|
//! | `pretty_print` | `true` | Indent JSON and XML output |
//! | `default_media_type` | none | Media type used when the Accept header matches nothing |
//! | `xml_root_element_name` | `root` | Root element for plain XML output |
//! | `html_prefix` | document head | Written before HTML output |
//! | `html_postfix` | `</body></html>` | Written after HTML output |
//!
//! # Example
//!
//! ```rust
//! use rendition::RenderConfig;
//!
//! let config = RenderConfig {
//!     pretty_print: false,
//!     xml_root_element_name: "users".to_string(),
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//!
//! // Or with the builder methods
//! let config = RenderConfig::default()
//!     .with_default_media_type("text/html")
//!     .with_html_prefix("")
//!     .with_html_postfix("");
//! assert_eq!(config.default_media_type.as_deref(), Some("text/html"));
//! ```

use rendition_negotiation::Format;
use rendition_serde::xml::utils::is_valid_name;
use rendition_serde::{DEFAULT_HTML_POSTFIX, DEFAULT_HTML_PREFIX};
use serde::{Deserialize, Serialize};

/// Configuration shared by all renderer variants.
///
/// Deserializes from any serde format; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Pretty print JSON and XML output.
    pub pretty_print: bool,

    /// Media type used when negotiation finds no match. Falls back to the
    /// renderer's own default when unset.
    pub default_media_type: Option<String>,

    /// Name of the root element for plain XML output.
    pub xml_root_element_name: String,

    /// Text written before the HTML list.
    pub html_prefix: String,

    /// Text written after the HTML list.
    pub html_postfix: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            pretty_print: true,
            default_media_type: None,
            xml_root_element_name: "root".to_string(),
            html_prefix: DEFAULT_HTML_PREFIX.to_string(),
            html_postfix: DEFAULT_HTML_POSTFIX.to_string(),
        }
    }
}

impl RenderConfig {
    /// Sets whether output is pretty printed.
    pub fn with_pretty_print(mut self, pretty_print: bool) -> Self {
        self.pretty_print = pretty_print;
        self
    }

    /// Sets the media type used when negotiation finds no match.
    pub fn with_default_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.default_media_type = Some(media_type.into());
        self
    }

    /// Sets the root element name for plain XML output.
    pub fn with_xml_root_element_name(mut self, name: impl Into<String>) -> Self {
        self.xml_root_element_name = name.into();
        self
    }

    /// Sets the text written before HTML output.
    pub fn with_html_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.html_prefix = prefix.into();
        self
    }

    /// Sets the text written after HTML output.
    pub fn with_html_postfix(mut self, postfix: impl Into<String>) -> Self {
        self.html_postfix = postfix.into();
        self
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !is_valid_name(&self.xml_root_element_name) {
            errors.push(format!(
                "XML root element name \"{}\" is not a valid element name",
                self.xml_root_element_name
            ));
        }

        if let Some(media_type) = &self.default_media_type {
            match media_type.parse::<mime::Mime>() {
                Ok(parsed) => {
                    if Format::from_media_type(parsed.essence_str()).is_err() {
                        errors.push(format!(
                            "Default media type \"{}\" does not name a json, xml or html format",
                            media_type
                        ));
                    }
                }
                Err(e) => {
                    errors.push(format!(
                        "Default media type \"{}\" is not a media type: {}",
                        media_type, e
                    ));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a compact configuration for testing.
    pub fn for_testing() -> Self {
        Self {
            pretty_print: false,
            ..Default::default()
        }
    }
}
