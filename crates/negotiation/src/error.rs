//! Error types for Accept header negotiation.

use thiserror::Error;

/// Errors raised while parsing an Accept header or resolving a format.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NegotiationError {
    /// The header string was empty.
    #[error("The header string should not be empty.")]
    InvalidArgument,

    /// The header (or a single element of it) is not a media type.
    #[error("Invalid media type: \"{value}\"")]
    InvalidMediaType {
        /// The offending header or element.
        value: String,
    },

    /// A format token matched none of the serializer backends.
    #[error("Unknown format \"{token}\"")]
    UnknownFormat {
        /// The token that could not be resolved.
        token: String,
    },
}

impl NegotiationError {
    pub(crate) fn invalid_media_type(value: impl Into<String>) -> Self {
        NegotiationError::InvalidMediaType {
            value: value.into(),
        }
    }
}

/// Result type alias for negotiation operations.
pub type Result<T> = std::result::Result<T, NegotiationError>;
