//! Common test utilities for renderer testing.
//!
//! Provides request/response builders, the users fixture shared by the
//! renderer suites and the expected document shell.

#![allow(dead_code)]

use http::header::{ACCEPT, CONTENT_TYPE};
use http::{Request, Response};
use rendition::Body;
use serde_json::{Value, json};

/// The HTML written before every default document.
pub const HTML_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title></title>
    <meta http-equiv="Content-Type" content="text/html; charset=UTF-8" />
    <style>
    body {
        font-family: Helvetica, Arial, sans-serif;
        font-size: 14px;
        color: #000;
        padding: 5px;
    }

    ul {
        padding-bottom: 15px;
        padding-left: 20px;
    }
    a {
        color: #2368AF;
    }
    </style>
</head>
<body>"#;

/// The HTML written after every default document.
pub const HTML_TAIL: &str = "</body>\n</html>\n";

/// Creates a request with the given Accept header.
pub fn request(accept: &str) -> Request<()> {
    Request::builder()
        .uri("http://example.com")
        .header(ACCEPT, accept)
        .body(())
        .unwrap()
}

/// Creates a response with an empty in-memory body.
pub fn response() -> Response<Body> {
    Response::new(Body::memory())
}

/// The Content-Type of a response, or an empty string.
pub fn content_type(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

/// The body of a response with an in-memory body.
pub fn body(response: &Response<Body>) -> &str {
    response
        .body()
        .as_str()
        .expect("response body should be in memory")
}

/// Two users, one of them with a link.
pub fn users() -> Value {
    json!({
        "items": [
            {"name": "Alex", "is_admin": true},
            {"name": "Robin", "is_admin": false, "link": "http://example.com"}
        ]
    })
}

/// Two users without links.
pub fn users_without_links() -> Value {
    json!({
        "items": [
            {"name": "Alex", "is_admin": true},
            {"name": "Robin", "is_admin": false}
        ]
    })
}

/// Wraps `fragment` in the default document shell.
pub fn html_document(fragment: &str) -> String {
    format!("{}{}{}", HTML_HEAD, fragment, HTML_TAIL)
}
