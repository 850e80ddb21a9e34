//! Error types for response rendering.
//!
//! Errors from the lower layers convert into [`RenderError`] with `?`:
//!
//! | Source | Variant |
//! |--------|---------|
//! | `rendition_negotiation::NegotiationError` | `Negotiation` |
//! | `rendition_serde::SerdeError` | `Serialization` |
//! | `http::header::InvalidHeaderValue` | `InvalidHeaderValue` |

use std::io;

use rendition_negotiation::NegotiationError;
use rendition_serde::SerdeError;
use thiserror::Error;

/// The error type for render operations.
///
/// A failed render leaves the response untouched: its body, headers and status
/// are only changed once the output has been produced.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The negotiated media type could not be resolved to a format.
    #[error("Negotiation failed: {0}")]
    Negotiation(#[from] NegotiationError),

    /// The input value cannot be represented in the negotiated format.
    #[error("Data for media type {media_type} must be {}", .allowed.join(" or "))]
    InvalidInputShape {
        /// The negotiated media type.
        media_type: String,
        /// Names of the accepted value kinds.
        allowed: Vec<&'static str>,
    },

    /// The serializer rejected the input.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] SerdeError),

    /// The Content-Type could not be encoded as a header value.
    #[error("Invalid Content-Type header value: {0}")]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),

    /// Not even a fresh in-memory body accepted the output.
    #[error("No writable response body: {0}")]
    SinkUnavailable(#[source] io::Error),
}

/// Result type alias for render operations.
pub type Result<T> = std::result::Result<T, RenderError>;
