//! The render pipeline.
//!
//! Each [`Renderer::render`] call:
//!
//! 1. Reads the request's `Accept` header.
//! 2. Negotiates a media type against the variant's known types, falling back
//!    to the configured default, the variant's default and finally a format
//!    picked by subtype.
//! 3. Checks that the input fits the negotiated format.
//! 4. Serializes the input.
//! 5. Writes the output into the response body, replacing a body that cannot
//!    take it with an in-memory one.
//! 6. Sets `Content-Type` (and, for problems, the status).
//!
//! The response is left untouched when any step before the write fails.

use std::io::Write;

use http::StatusCode;
use http::header::{CONTENT_TYPE, HeaderValue};
use rendition_negotiation::{Format, Negotiator, select_format};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::RenderConfig;
use crate::error::{RenderError, Result};
use crate::exchange::{AcceptSource, ResponseTarget};
use crate::stream::{Body, MemoryStream, OutputStream};
use crate::variant::{HalVariant, PlainVariant, ProblemVariant, Variant};

/// Renders values as JSON, XML or HTML, whichever the client prefers.
///
/// # Example
///
/// ```
/// use http::{Request, Response};
/// use rendition::{Body, RenderConfig, Renderer};
/// use serde_json::json;
///
/// let renderer = Renderer::new(RenderConfig::for_testing());
///
/// let request = Request::builder()
///     .header("Accept", "text/xml")
///     .body(())
///     .unwrap();
/// let mut response = Response::new(Body::memory());
///
/// renderer
///     .render(&request, &mut response, &json!({"name": "Alex"}))
///     .unwrap();
///
/// assert_eq!(response.headers()["content-type"], "text/xml");
/// assert_eq!(
///     response.body().as_str().unwrap(),
///     "<?xml version=\"1.0\"?>\n<root><name>Alex</name></root>\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Renderer<V: Variant = PlainVariant> {
    variant: V,
    config: RenderConfig,
}

/// Renders [`Hal`](crate::Hal) resources.
pub type HalRenderer = Renderer<HalVariant>;

/// Renders [`ApiProblem`](crate::ApiProblem) documents.
pub type ApiProblemRenderer = Renderer<ProblemVariant>;

/// The outcome of negotiation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Negotiated {
    /// The serializer to use.
    pub format: Format,
    /// The negotiated or default media type, if any.
    pub media_type: Option<String>,
    /// The Content-Type to write.
    pub content_type: String,
}

impl Renderer {
    /// Creates a renderer for generic values.
    pub fn new(config: RenderConfig) -> Self {
        Self::with_variant(PlainVariant, config)
    }

    /// Renders any serializable type through its value form.
    pub fn render_serialize<Q, R, T>(&self, request: &Q, response: &mut R, input: &T) -> Result<()>
    where
        Q: AcceptSource + ?Sized,
        R: ResponseTarget + ?Sized,
        T: Serialize + ?Sized,
    {
        let value: Value = rendition_serde::to_json_value(input)?;
        self.render(request, response, &value)
    }
}

impl<V: Variant> Renderer<V> {
    /// Creates a renderer with an explicit variant.
    pub fn with_variant(variant: V, config: RenderConfig) -> Self {
        Self { variant, config }
    }

    /// Creates a renderer with the variant's default value.
    pub fn with_config(config: RenderConfig) -> Self
    where
        V: Default,
    {
        Self::with_variant(V::default(), config)
    }

    /// The renderer configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// The renderer variant.
    pub fn variant(&self) -> &V {
        &self.variant
    }

    /// Works out format, media type and Content-Type for an `Accept` header.
    pub fn negotiate(&self, accept: &str) -> Result<Negotiated> {
        let media_type = self.determine_media_type(accept);

        let format = match &media_type {
            Some(media_type) => self.variant.format_for_media_type(media_type)?,
            None => select_format(accept, self.variant.fallback_formats(), Format::Json),
        };
        let content_type = self.variant.content_type(format, media_type.as_deref());

        debug!(
            accept = %accept,
            format = %format,
            content_type = %content_type,
            "Negotiated response format"
        );

        Ok(Negotiated {
            format,
            media_type,
            content_type,
        })
    }

    /// Works out which of `allowed` formats the client prefers.
    pub fn preferred_format(&self, accept: &str, allowed: &[Format], default: Format) -> Format {
        select_format(accept, allowed, default)
    }

    /// Renders `input` into `response` in the format `request` asks for.
    pub fn render<Q, R>(&self, request: &Q, response: &mut R, input: &V::Input) -> Result<()>
    where
        Q: AcceptSource + ?Sized,
        R: ResponseTarget + ?Sized,
    {
        let accept = request.accept_header();
        let negotiated = self.negotiate(&accept)?;

        self.variant
            .validate(negotiated.format, &negotiated.content_type, input)?;
        let output = self
            .variant
            .serialize(negotiated.format, input, &self.config)?;
        let content_type = HeaderValue::from_str(&negotiated.content_type)?;
        let status = self.variant.status(input).and_then(|code| {
            StatusCode::from_u16(code)
                .inspect_err(|e| warn!(status = code, error = %e, "Skipping unrepresentable status"))
                .ok()
        });

        write_body(response, output.as_bytes())?;
        response.set_header(CONTENT_TYPE, content_type);
        if let Some(status) = status {
            response.set_status(status);
        }

        debug!(
            content_type = %negotiated.content_type,
            bytes = output.len(),
            "Rendered response"
        );
        Ok(())
    }

    fn determine_media_type(&self, accept: &str) -> Option<String> {
        if !accept.is_empty() {
            match Negotiator::new().best(accept, self.variant.known_media_types()) {
                Ok(Some(element)) => return Some(element.value().to_string()),
                Ok(None) => {}
                Err(e) => debug!(error = %e, "Unparsable Accept header, using default media type"),
            }
        }

        self.config
            .default_media_type
            .clone()
            .or_else(|| self.variant.default_media_type().map(str::to_string))
    }
}

impl<V: Variant + Default> Default for Renderer<V> {
    fn default() -> Self {
        Self::with_config(RenderConfig::default())
    }
}

/// Writes `output` from the start of the response body.
///
/// A body that is not writable, cannot be reset or fails the write is replaced
/// by a fresh in-memory body holding the whole output.
fn write_body<R: ResponseTarget + ?Sized>(response: &mut R, output: &[u8]) -> Result<()> {
    let body = response.body_mut();

    if !body.is_writable() {
        debug!("Response body is not writable, using a memory stream");
    } else if let Err(e) = body.reset() {
        debug!(error = %e, "Response body cannot be reset, using a memory stream");
    } else {
        match body.write_all(output).and_then(|()| body.flush()) {
            Ok(()) => return Ok(()),
            Err(e) => warn!(error = %e, "Response body rejected the output, using a memory stream"),
        }
    }

    let mut stream = MemoryStream::new();
    stream
        .write_all(output)
        .map_err(RenderError::SinkUnavailable)?;
    response.replace_body(Body::Memory(stream));
    Ok(())
}
