//! Accept header element parsing.
//!
//! An Accept header is a comma separated list of media ranges, each optionally
//! followed by `;key=value` parameters. The `q` parameter carries the client's
//! preference weight and is lifted out of the parameter list.
//!
//! ```text
//! text/html;level=1, application/json;q=0.8, */*;q=0.1
//! ```

use crate::error::{NegotiationError, Result};

/// A single parsed media range from an Accept header.
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptElement {
    value: String,
    media_type: String,
    base: String,
    subtype: String,
    parameters: Vec<(String, String)>,
    quality: f32,
    position: usize,
}

impl AcceptElement {
    /// Parses one header token.
    ///
    /// `position` is the token's index within the header and is used to break
    /// quality ties.
    ///
    /// # Examples
    ///
    /// ```
    /// use rendition_negotiation::AcceptElement;
    ///
    /// let element = AcceptElement::parse("text/html;level=2;q=0.4", 3).unwrap();
    /// assert_eq!(element.media_type(), "text/html");
    /// assert_eq!(element.quality(), 0.4);
    /// assert_eq!(element.parameter("level"), Some("2"));
    /// assert_eq!(element.position(), 3);
    ///
    /// assert!(AcceptElement::parse("/qwer", 0).is_err());
    /// ```
    pub fn parse(token: &str, position: usize) -> Result<Self> {
        let value = token.trim();
        let mut parts = split_unquoted(value, ';').into_iter();

        let media_type = parts.next().unwrap_or_default().trim().to_ascii_lowercase();
        let (base, subtype) = match media_type.split_once('/') {
            Some((base, subtype)) => (base.trim(), subtype.trim()),
            None => return Err(NegotiationError::invalid_media_type(value)),
        };
        if base.is_empty() || subtype.is_empty() || subtype.contains('/') {
            return Err(NegotiationError::invalid_media_type(value));
        }

        let mut quality = 1.0;
        let mut parameters = Vec::new();
        for part in parts {
            let Some((key, param_value)) = part.split_once('=') else {
                continue;
            };
            let key = key.trim().to_ascii_lowercase();
            let param_value = param_value.trim_matches(|c| c == ' ' || c == '"');

            if key == "q" {
                quality = parse_quality(param_value)
                    .ok_or_else(|| NegotiationError::invalid_media_type(value))?;
            } else {
                parameters.push((key, param_value.to_string()));
            }
        }

        Ok(Self {
            value: value.to_string(),
            media_type: format!("{}/{}", base, subtype),
            base: base.to_string(),
            subtype: subtype.to_string(),
            parameters,
            quality,
            position,
        })
    }

    /// The token as it appeared in the header (trimmed).
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The lowercased `type/subtype` without parameters.
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// The part before the `/`.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The part after the `/`, including any `+suffix`.
    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    /// Parameters other than `q`, in header order.
    pub fn parameters(&self) -> &[(String, String)] {
        &self.parameters
    }

    /// Looks up a parameter by (lowercase) name.
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// The quality weight, `1.0` when the header did not declare one.
    pub fn quality(&self) -> f32 {
        self.quality
    }

    /// Index of the element within the original header.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns true if the client declared this range not acceptable (`q=0`).
    pub fn is_refused(&self) -> bool {
        self.quality == 0.0
    }

    /// How narrowly this range matches: `0` for `*/*`, `1` for `type/*` and
    /// `2` for a concrete media type.
    pub fn specificity(&self) -> u8 {
        match (self.base.as_str(), self.subtype.as_str()) {
            ("*", _) => 0,
            (_, "*") => 1,
            _ => 2,
        }
    }

    /// Returns true if this (possibly wildcarded) range covers `candidate`.
    ///
    /// `*/*` covers everything and `type/*` covers every subtype of `type`.
    /// Parameters are not compared.
    pub fn matches(&self, candidate: &AcceptElement) -> bool {
        (self.base == "*" || self.base == candidate.base)
            && (self.subtype == "*" || self.subtype == candidate.subtype)
    }

    /// Returns a copy carrying the quality and position of the header element
    /// that selected it.
    pub(crate) fn selected_by(&self, accepted: &AcceptElement) -> Self {
        Self {
            quality: accepted.quality,
            position: accepted.position,
            ..self.clone()
        }
    }
}

fn parse_quality(value: &str) -> Option<f32> {
    value
        .parse::<f32>()
        .ok()
        .filter(|quality| (0.0..=1.0).contains(quality))
}

/// Splits `input` on `separator`, ignoring separators inside double quotes.
pub(crate) fn split_unquoted(input: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;

    for (index, c) in input.char_indices() {
        if c == '"' {
            in_quotes = !in_quotes;
        } else if c == separator && !in_quotes {
            parts.push(&input[start..index]);
            start = index + c.len_utf8();
        }
    }
    parts.push(&input[start..]);

    parts
}
