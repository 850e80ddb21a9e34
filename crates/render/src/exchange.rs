//! The request and response seams of a render call.
//!
//! Renderers read the `Accept` header through [`AcceptSource`] and write
//! through [`ResponseTarget`], so they work with `http` types directly or with
//! any request/response pair that implements the two traits.

use http::header::{ACCEPT, HeaderName, HeaderValue};
use http::{HeaderMap, Request, Response, StatusCode};

use crate::stream::Body;

/// Anything that carries an `Accept` header.
pub trait AcceptSource {
    /// The raw header value, or an empty string when absent.
    fn accept_header(&self) -> String;
}

impl AcceptSource for str {
    fn accept_header(&self) -> String {
        self.to_string()
    }
}

impl AcceptSource for String {
    fn accept_header(&self) -> String {
        self.clone()
    }
}

/// Multiple `Accept` lines are joined with `", "`. Values that are not visible
/// ASCII are skipped.
impl AcceptSource for HeaderMap {
    fn accept_header(&self) -> String {
        self.get_all(ACCEPT)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl<B> AcceptSource for Request<B> {
    fn accept_header(&self) -> String {
        self.headers().accept_header()
    }
}

/// A response a renderer can write into.
pub trait ResponseTarget {
    /// The current body.
    fn body_mut(&mut self) -> &mut Body;

    /// Replaces the body, returning the previous one.
    fn replace_body(&mut self, body: Body) -> Body;

    /// Sets a header, replacing any existing values.
    fn set_header(&mut self, name: HeaderName, value: HeaderValue);

    /// Sets the status code.
    fn set_status(&mut self, status: StatusCode);
}

impl ResponseTarget for Response<Body> {
    fn body_mut(&mut self) -> &mut Body {
        Response::body_mut(self)
    }

    fn replace_body(&mut self, body: Body) -> Body {
        std::mem::replace(Response::body_mut(self), body)
    }

    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers_mut().insert(name, value);
    }

    fn set_status(&mut self, status: StatusCode) {
        *self.status_mut() = status;
    }
}
