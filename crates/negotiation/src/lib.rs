//! # Rendition Negotiation
//!
//! HTTP `Accept` header parsing and quality-based content-type negotiation.
//!
//! - [`Negotiator`] orders the elements of an Accept header by quality (then by
//!   their position in the header) and matches them against the media types a
//!   renderer knows about, honoring `*/*` and `type/*` wildcards.
//! - [`select_format`] maps a header onto one of the [`Format`] tokens using a
//!   loose subtype match, for clients that send vendor or suffixed types.
//!
//! Single malformed elements never fail a negotiation; they are skipped.
//!
//! ## Example
//!
//! ```
//! use rendition_negotiation::{Format, Negotiator, select_format};
//!
//! let negotiator = Negotiator::new();
//! let elements = negotiator.ordered_elements("text/html;q=0.3, text/html;q=0.7").unwrap();
//! assert_eq!(elements[0].value(), "text/html;q=0.7");
//!
//! let format = select_format("application/vnd.api+json", &Format::ALL, Format::Html);
//! assert_eq!(format, Format::Json);
//! ```

pub mod accept;
pub mod error;
pub mod format;
pub mod negotiator;

pub use accept::AcceptElement;
pub use error::{NegotiationError, Result};
pub use format::{Format, select_format};
pub use negotiator::Negotiator;
