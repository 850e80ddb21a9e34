//! HTML rendering of generic data values.
//!
//! Containers render as nested unordered lists, one `<li>` per entry:
//!
//! ```text
//! <ul>
//! <li><strong>name:</strong> Alex</li>
//! <li><strong>site:</strong> <a href="https://example.com">https://example.com</a></li>
//! </ul>
//! ```

use html_escape::{encode_double_quoted_attribute, encode_text};
use serde_json::Value;

use crate::value::{ValueKind, entries, number_text};

/// Document shell written before the rendered list.
pub const DEFAULT_HTML_PREFIX: &str = r#"<!DOCTYPE html>
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

/// Document shell written after the rendered list.
pub const DEFAULT_HTML_POSTFIX: &str = "</body>\n</html>\n";

/// Renders `value` wrapped in `prefix` and `postfix`.
pub fn to_html_document(value: &Value, prefix: &str, postfix: &str) -> String {
    let mut html = String::from(prefix);
    html.push_str(&to_html_fragment(value));
    html.push_str(postfix);
    html
}

/// Renders `value` as a nested list, or as a single value for scalars.
///
/// # Examples
///
/// ```
/// use rendition_serde::html::to_html_fragment;
/// use serde_json::json;
///
/// let html = to_html_fragment(&json!({"is_admin": true, "note": "a < b"}));
/// assert_eq!(
///     html,
///     "<ul>\n<li><strong>is_admin:</strong> true</li>\n<li><strong>note:</strong> a &lt; b</li>\n</ul>\n"
/// );
/// ```
pub fn to_html_fragment(value: &Value) -> String {
    if ValueKind::of(value).is_container() {
        let mut html = String::new();
        write_list(value, &mut html);
        html
    } else {
        scalar_html(value)
    }
}

fn write_list(value: &Value, html: &mut String) {
    html.push_str("<ul>\n");
    for (key, item) in entries(value) {
        html.push_str("<li><strong>");
        html.push_str(&encode_text(&key));
        html.push_str(":</strong> ");
        if ValueKind::of(item).is_container() {
            write_list(item, html);
        } else {
            html.push_str(&scalar_html(item));
        }
        html.push_str("</li>\n");
    }
    html.push_str("</ul>\n");
}

fn scalar_html(value: &Value) -> String {
    let text = match value {
        Value::Bool(true) => "true".to_string(),
        Value::Bool(false) => "false".to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    };

    let escaped = encode_double_quoted_attribute(&text);
    if escaped.starts_with("http://") || escaped.starts_with("https://") {
        format!("<a href=\"{0}\">{0}</a>", escaped)
    } else {
        escaped.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_list() {
        let value = json!({
            "items": [
                {"name": "Alex", "is_admin": true},
                {"name": "Robin", "is_admin": false, "link": "http://example.com"}
            ]
        });
        let expected = "<ul>
<li><strong>items:</strong> <ul>
<li><strong>0:</strong> <ul>
<li><strong>name:</strong> Alex</li>
<li><strong>is_admin:</strong> true</li>
</ul>
</li>
<li><strong>1:</strong> <ul>
<li><strong>name:</strong> Robin</li>
<li><strong>is_admin:</strong> false</li>
<li><strong>link:</strong> <a href=\"http://example.com\">http://example.com</a></li>
</ul>
</li>
</ul>
</li>
</ul>
";
        assert_eq!(to_html_fragment(&value), expected);
    }

    #[test]
    fn test_links() {
        assert_eq!(
            to_html_fragment(&json!("http://example.com")),
            "<a href=\"http://example.com\">http://example.com</a>"
        );
        assert_eq!(
            to_html_fragment(&json!("https://example.com/?a=1&b=2")),
            "<a href=\"https://example.com/?a=1&amp;b=2\">https://example.com/?a=1&amp;b=2</a>"
        );
        assert_eq!(to_html_fragment(&json!("ftp://example.com")), "ftp://example.com");
        assert_eq!(
            to_html_fragment(&json!("see http://example.com")),
            "see http://example.com"
        );
    }

    #[test]
    fn test_escaping() {
        assert_eq!(
            to_html_fragment(&json!("<script>\"x\" & 'y'</script>")),
            "&lt;script&gt;&quot;x&quot; &amp; 'y'&lt;/script&gt;"
        );
    }

    #[test]
    fn test_scalars() {
        assert_eq!(to_html_fragment(&json!("Hello World")), "Hello World");
        assert_eq!(to_html_fragment(&json!(false)), "false");
        assert_eq!(to_html_fragment(&json!(3.5)), "3.5");
        assert_eq!(to_html_fragment(&json!(2.0)), "2");
        assert_eq!(to_html_fragment(&json!(null)), "");
    }

    #[test]
    fn test_empty_container() {
        assert_eq!(to_html_fragment(&json!({})), "<ul>\n</ul>\n");
    }

    #[test]
    fn test_document() {
        let html = to_html_document(&json!("Hello World"), DEFAULT_HTML_PREFIX, DEFAULT_HTML_POSTFIX);
        assert!(html.starts_with("<!DOCTYPE html>\n<html>\n<head>\n"));
        assert!(html.ends_with("<body>Hello World</body>\n</html>\n"));

        let html = to_html_document(&json!({"a": 1}), "", "");
        assert_eq!(html, "<ul>\n<li><strong>a:</strong> 1</li>\n</ul>\n");
    }
}
