//! # rendition - Content-Negotiated Response Rendering
//!
//! This crate renders in-memory data into an HTTP response in whichever format
//! the client's `Accept` header prefers: JSON, XML or HTML. It writes the body
//! and sets a matching `Content-Type`.
//!
//! ## Features
//!
//! - **Content Negotiation**: Quality-ordered `Accept` parsing with wildcard
//!   and vendor-suffix (`+json`, `+xml`) support
//! - **Three Renderers**: [`Renderer`] for generic values, [`HalRenderer`] for
//!   HAL resources and [`ApiProblemRenderer`] for Problem Details
//! - **Configurable Output**: Pretty printing, default media type, XML root name
//!   and HTML document shell via [`RenderConfig`]
//! - **Safe Writes**: Bodies that cannot be reset or written are replaced by an
//!   in-memory body, so a response never carries partial output
//!
//! ## Renderers
//!
//! | Renderer | Input | Content-Types |
//! |----------|-------|---------------|
//! | [`Renderer`] | `serde_json::Value` | `application/json`, `application/xml`, `text/xml`, `text/html` |
//! | [`HalRenderer`] | [`Hal`] | `application/hal+json`, `application/hal+xml`, `text/html` |
//! | [`ApiProblemRenderer`] | [`ApiProblem`] | `application/problem+json`, `application/problem+xml` |
//!
//! ## Quick Start
//!
//! ```rust
//! use http::{Request, Response, StatusCode};
//! use rendition::{ApiProblem, ApiProblemRenderer, Body, RenderConfig};
//!
//! let renderer = ApiProblemRenderer::with_config(RenderConfig::for_testing());
//!
//! let request = Request::builder()
//!     .header("Accept", "application/problem+xml")
//!     .body(())
//!     .unwrap();
//! let mut response = Response::new(Body::memory());
//!
//! let problem = ApiProblem::new("foo").with_status(400);
//! renderer.render(&request, &mut response, &problem).unwrap();
//!
//! assert_eq!(response.status(), StatusCode::BAD_REQUEST);
//! assert_eq!(response.headers()["content-type"], "application/problem+xml");
//! assert_eq!(
//!     response.body().as_str().unwrap(),
//!     "<?xml version=\"1.0\"?>\n<problem><title>foo</title><type>about:blank</type><status>400</status></problem>\n"
//! );
//! ```
//!
//! ## Logging
//!
//! Negotiation decisions and render outcomes are logged with `tracing` at
//! `debug` level; body substitution after a failed write is logged at `warn`.
//! No subscriber is installed.

pub mod config;
pub mod error;
pub mod exchange;
pub mod renderer;
pub mod responses;
pub mod stream;
pub mod variant;

pub use config::RenderConfig;
pub use error::{RenderError, Result};
pub use exchange::{AcceptSource, ResponseTarget};
pub use renderer::{ApiProblemRenderer, HalRenderer, Negotiated, Renderer};
pub use responses::{ApiProblem, Hal, HalLink};
pub use stream::{Body, MemoryStream, OutputStream};
pub use variant::{HalVariant, PlainVariant, ProblemVariant, Variant};

// Re-export negotiation types used in the public API
pub use rendition_negotiation::{AcceptElement, Format, NegotiationError, Negotiator};
