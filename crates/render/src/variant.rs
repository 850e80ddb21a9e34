//! Per-renderer negotiation and serialization policy.
//!
//! A [`Renderer`](crate::Renderer) runs one pipeline. Its [`Variant`] decides
//! what the pipeline accepts and produces:
//!
//! | | [`PlainVariant`] | [`HalVariant`] | [`ProblemVariant`] |
//! |---|---|---|---|
//! | Input | `serde_json::Value` | [`Hal`] | [`ApiProblem`] |
//! | Known media types | json, xml, text/xml, html | hal+json, hal+xml | problem+json, problem+xml |
//! | Default media type | `application/json` | none | none |
//! | Fallback formats | json, xml, html | json, xml, html | json, xml |
//! | Content-Type | negotiated type | `application/hal+<fmt>` | `application/problem+<fmt>` |
//! | Status | unchanged | unchanged | problem status |

use rendition_negotiation::Format;
use rendition_serde::value::ValueKind;
use rendition_serde::{to_html_document, to_json, to_xml_string, write_document};
use serde_json::Value;

use crate::config::RenderConfig;
use crate::error::{RenderError, Result};
use crate::responses::{ApiProblem, Hal};

/// The policy half of a renderer.
pub trait Variant {
    /// The type being rendered.
    type Input: ?Sized;

    /// Media types matched against the Accept header, in priority order.
    fn known_media_types(&self) -> &[&'static str];

    /// Media type used when nothing is negotiated and none is configured.
    fn default_media_type(&self) -> Option<&'static str> {
        None
    }

    /// Formats tried by subtype when no media type was negotiated.
    fn fallback_formats(&self) -> &[Format] {
        &Format::ALL
    }

    /// Resolves the format of a negotiated media type.
    fn format_for_media_type(&self, media_type: &str) -> Result<Format> {
        Ok(Format::from_media_type(media_type)?)
    }

    /// The Content-Type written for `format`.
    fn content_type(&self, format: Format, media_type: Option<&str>) -> String;

    /// Checks that `input` can be written as `format`.
    fn validate(&self, _format: Format, _media_type: &str, _input: &Self::Input) -> Result<()> {
        Ok(())
    }

    /// Serializes `input` as `format`.
    fn serialize(&self, format: Format, input: &Self::Input, config: &RenderConfig)
    -> Result<String>;

    /// Status code to set on the response, if any.
    fn status(&self, _input: &Self::Input) -> Option<u16> {
        None
    }
}

/// Renders generic values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlainVariant;

impl PlainVariant {
    /// Value kinds each format accepts.
    pub fn allowed_kinds(format: Format) -> &'static [ValueKind] {
        match format {
            Format::Xml => &[ValueKind::Mapping, ValueKind::Sequence],
            Format::Json | Format::Html => {
                &[ValueKind::Scalar, ValueKind::Mapping, ValueKind::Sequence]
            }
        }
    }
}

impl Variant for PlainVariant {
    type Input = Value;

    fn known_media_types(&self) -> &[&'static str] {
        &["application/json", "application/xml", "text/xml", "text/html"]
    }

    fn default_media_type(&self) -> Option<&'static str> {
        Some("application/json")
    }

    fn content_type(&self, format: Format, media_type: Option<&str>) -> String {
        media_type
            .unwrap_or_else(|| format.canonical_media_type())
            .to_string()
    }

    fn validate(&self, format: Format, media_type: &str, input: &Value) -> Result<()> {
        let allowed = Self::allowed_kinds(format);
        if allowed.contains(&ValueKind::of(input)) {
            return Ok(());
        }

        Err(RenderError::InvalidInputShape {
            media_type: media_type.to_string(),
            allowed: allowed.iter().map(ValueKind::as_str).collect(),
        })
    }

    fn serialize(&self, format: Format, input: &Value, config: &RenderConfig) -> Result<String> {
        let output = match format {
            Format::Json => to_json(input, config.pretty_print)?,
            Format::Xml => to_xml_string(
                input,
                &config.xml_root_element_name,
                config.pretty_print,
            )?,
            Format::Html => to_html_document(input, &config.html_prefix, &config.html_postfix),
        };
        Ok(output)
    }
}

/// Renders [`Hal`] resources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HalVariant;

impl Variant for HalVariant {
    type Input = Hal;

    fn known_media_types(&self) -> &[&'static str] {
        &["application/hal+json", "application/hal+xml"]
    }

    fn content_type(&self, format: Format, _media_type: Option<&str>) -> String {
        match format {
            Format::Html => "text/html".to_string(),
            format => format!("application/hal+{}", format),
        }
    }

    fn serialize(&self, format: Format, input: &Hal, config: &RenderConfig) -> Result<String> {
        let output = match format {
            Format::Json => to_json(&input.to_value(), config.pretty_print)?,
            Format::Xml => write_document(&input.to_xml_element()?, config.pretty_print)?,
            Format::Html => {
                to_html_document(&input.to_value(), &config.html_prefix, &config.html_postfix)
            }
        };
        Ok(output)
    }
}

/// Renders [`ApiProblem`] documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProblemVariant;

impl Variant for ProblemVariant {
    type Input = ApiProblem;

    fn known_media_types(&self) -> &[&'static str] {
        &["application/problem+json", "application/problem+xml"]
    }

    fn fallback_formats(&self) -> &[Format] {
        &[Format::Json, Format::Xml]
    }

    fn content_type(&self, format: Format, _media_type: Option<&str>) -> String {
        match format {
            Format::Html => "text/html".to_string(),
            format => format!("application/problem+{}", format),
        }
    }

    fn serialize(
        &self,
        format: Format,
        input: &ApiProblem,
        config: &RenderConfig,
    ) -> Result<String> {
        let output = match format {
            Format::Json => to_json(&input.to_value(), config.pretty_print)?,
            Format::Xml => write_document(&input.to_xml_element()?, config.pretty_print)?,
            Format::Html => {
                to_html_document(&input.to_value(), &config.html_prefix, &config.html_postfix)
            }
        };
        Ok(output)
    }

    fn status(&self, input: &ApiProblem) -> Option<u16> {
        input.status().filter(|status| *status >= 100)
    }
}
