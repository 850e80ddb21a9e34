//! Quality-ordered media type negotiation.

use tracing::trace;

use crate::accept::{AcceptElement, split_unquoted};
use crate::error::{NegotiationError, Result};

/// Orders Accept header elements and matches them against known media types.
///
/// # Example
///
/// ```
/// use rendition_negotiation::Negotiator;
///
/// let negotiator = Negotiator::new();
/// let best = negotiator
///     .best("text/csv, application/*;q=0.5", &["text/html", "application/json"])
///     .unwrap()
///     .unwrap();
/// assert_eq!(best.value(), "application/json");
/// assert_eq!(best.quality(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Negotiator;

impl Negotiator {
    /// Creates a new negotiator.
    pub fn new() -> Self {
        Self
    }

    /// Parses `header` into elements ordered by quality, then by position.
    ///
    /// Elements that fail to parse are skipped. Fails with
    /// [`NegotiationError::InvalidArgument`] for an empty header and with
    /// [`NegotiationError::InvalidMediaType`] when no element parses.
    pub fn ordered_elements(&self, header: &str) -> Result<Vec<AcceptElement>> {
        if header.is_empty() {
            return Err(NegotiationError::InvalidArgument);
        }

        let mut elements: Vec<AcceptElement> = split_unquoted(header, ',')
            .into_iter()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .enumerate()
            .filter_map(|(position, token)| match AcceptElement::parse(token, position) {
                Ok(element) => Some(element),
                Err(e) => {
                    trace!(token = %token, error = %e, "Skipping invalid Accept element");
                    None
                }
            })
            .collect();

        if elements.is_empty() {
            return Err(NegotiationError::invalid_media_type(header));
        }

        elements.sort_by(|a, b| {
            b.quality()
                .total_cmp(&a.quality())
                .then_with(|| a.position().cmp(&b.position()))
        });

        Ok(elements)
    }

    /// Finds the known media type preferred by `header`.
    ///
    /// Header elements are visited in order; the first known type (in the
    /// order given) covered by an element wins. The returned element describes
    /// the known type and carries the quality and position of the header
    /// element that selected it.
    ///
    /// Elements with `q=0` never select anything. A known type whose most
    /// specific covering element has `q=0` is refused, so
    /// `*/*, application/json;q=0` does not select `application/json`.
    pub fn best(&self, header: &str, known_types: &[&str]) -> Result<Option<AcceptElement>> {
        let elements = self.ordered_elements(header)?;

        let known: Vec<AcceptElement> = known_types
            .iter()
            .enumerate()
            .filter_map(|(position, media_type)| AcceptElement::parse(media_type, position).ok())
            .filter(|candidate| {
                let refused =
                    most_specific(&elements, candidate).is_some_and(AcceptElement::is_refused);
                if refused {
                    trace!(
                        media_type = %candidate.media_type(),
                        "Media type refused by Accept header"
                    );
                }
                !refused
            })
            .collect();

        for accepted in elements.iter().filter(|element| !element.is_refused()) {
            if let Some(candidate) = known.iter().find(|candidate| accepted.matches(candidate)) {
                return Ok(Some(candidate.selected_by(accepted)));
            }
        }

        Ok(None)
    }
}

/// The narrowest element covering `candidate`; among equally narrow elements
/// the first in quality order wins.
fn most_specific<'a>(
    elements: &'a [AcceptElement],
    candidate: &AcceptElement,
) -> Option<&'a AcceptElement> {
    elements
        .iter()
        .filter(|element| element.matches(candidate))
        .reduce(|best, element| {
            if element.specificity() > best.specificity() {
                element
            } else {
                best
            }
        })
}
