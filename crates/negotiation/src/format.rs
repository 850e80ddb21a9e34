//! Output format selection.
//!
//! Maps negotiated media types onto the short format tokens understood by the
//! serializers (`json`, `xml`, `html`).

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{NegotiationError, Result};
use crate::negotiator::Negotiator;

/// Output formats with a serializer backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// JSON text.
    Json,
    /// XML document.
    Xml,
    /// HTML document with a nested list.
    Html,
}

impl Format {
    /// All formats, in default preference order.
    pub const ALL: [Format; 3] = [Format::Json, Format::Xml, Format::Html];

    /// Returns the format token.
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Xml => "xml",
            Format::Html => "html",
        }
    }

    /// Returns the media type used when a format was chosen without one.
    pub fn canonical_media_type(&self) -> &'static str {
        match self {
            Format::Json => "application/json",
            Format::Xml => "application/xml",
            Format::Html => "text/html",
        }
    }

    /// Resolves the format of a concrete media type.
    ///
    /// Suffixed subtypes resolve to the token after the last `+`
    /// (`application/hal+xml` is XML); other subtypes resolve to themselves.
    ///
    /// ```
    /// use rendition_negotiation::Format;
    ///
    /// assert_eq!(Format::from_media_type("text/xml").unwrap(), Format::Xml);
    /// assert_eq!(Format::from_media_type("application/problem+json").unwrap(), Format::Json);
    /// assert!(Format::from_media_type("text/csv").is_err());
    /// ```
    pub fn from_media_type(media_type: &str) -> Result<Self> {
        let essence = media_type.split(';').next().unwrap_or_default().trim();
        let subtype = essence
            .split_once('/')
            .map(|(_, subtype)| subtype)
            .ok_or_else(|| NegotiationError::invalid_media_type(media_type))?;
        let token = subtype.rsplit('+').next().unwrap_or(subtype);
        token.parse()
    }
}

impl FromStr for Format {
    type Err = NegotiationError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "xml" => Ok(Format::Xml),
            "html" => Ok(Format::Html),
            other => Err(NegotiationError::UnknownFormat {
                token: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Works out which of `allowed` formats the client prefers.
///
/// Walks the ordered Accept elements and returns the first allowed format whose
/// token appears (case-insensitively) in the element's subtype, so vendor types
/// such as `vnd.foo+json` select JSON. Elements with `q=0` are skipped. Falls
/// back to `default` for an empty or unparsable header, or when nothing matches.
///
/// ```
/// use rendition_negotiation::{Format, select_format};
///
/// let allowed = [Format::Json, Format::Xml];
/// assert_eq!(select_format("application/vnd.foo+xml", &allowed, Format::Json), Format::Xml);
/// assert_eq!(select_format("text/csv", &allowed, Format::Json), Format::Json);
/// ```
pub fn select_format(accept_header: &str, allowed: &[Format], default: Format) -> Format {
    if accept_header.is_empty() {
        return default;
    }

    let elements = match Negotiator::new().ordered_elements(accept_header) {
        Ok(elements) => elements,
        Err(e) => {
            debug!(error = %e, "Unparsable Accept header, using default format");
            return default;
        }
    };

    for element in elements.iter().filter(|element| !element.is_refused()) {
        let subtype = element.subtype().to_ascii_lowercase();
        if let Some(format) = allowed.iter().find(|f| subtype.contains(f.as_str())) {
            return *format;
        }
    }

    default
}
