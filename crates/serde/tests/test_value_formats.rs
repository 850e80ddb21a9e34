use rendition_serde::{
    DEFAULT_HTML_POSTFIX, DEFAULT_HTML_PREFIX, Result, SerdeError, to_html_document, to_json,
    to_xml_string,
};
use serde_json::{Value, json};

fn users() -> Value {
    json!({
        "items": [
            {"name": "Alex", "is_admin": true},
            {"name": "Robin", "is_admin": false, "link": "http://example.com"}
        ]
    })
}

#[test]
fn test_json_pretty_and_compact() -> Result<()> {
    let pretty = to_json(&users(), true)?;
    let expected = r#"{
    "items": [
        {
            "name": "Alex",
            "is_admin": true
        },
        {
            "name": "Robin",
            "is_admin": false,
            "link": "http://example.com"
        }
    ]
}"#;
    assert_eq!(pretty, expected);

    let compact = to_json(&users(), false)?;
    assert_eq!(
        compact,
        r#"{"items":[{"name":"Alex","is_admin":true},{"name":"Robin","is_admin":false,"link":"http:\/\/example.com"}]}"#
    );
    Ok(())
}

#[test]
fn test_json_scalars() -> Result<()> {
    assert_eq!(to_json(&json!("Hello World"), false)?, "\"Hello World\"");
    assert_eq!(to_json(&json!(42), true)?, "42");
    Ok(())
}

#[test]
fn test_xml_custom_root_pretty() -> Result<()> {
    let xml = to_xml_string(&users(), "users", true)?;
    let expected = "<?xml version=\"1.0\"?>
<users>
  <items>
    <name>Alex</name>
    <is_admin>1</is_admin>
  </items>
  <items>
    <name>Robin</name>
    <is_admin>0</is_admin>
    <link>http://example.com</link>
  </items>
</users>
";
    assert_eq!(xml, expected);
    Ok(())
}

#[test]
fn test_xml_whole_floats_drop_fraction() -> Result<()> {
    let xml = to_xml_string(&json!({"ratio": 1.0, "share": 0.5, "count": 3}), "root", false)?;
    assert_eq!(
        xml,
        "<?xml version=\"1.0\"?>\n<root><ratio>1</ratio><share>0.5</share><count>3</count></root>\n"
    );
    Ok(())
}

#[test]
fn test_json_escapes_non_ascii() -> Result<()> {
    assert_eq!(to_json(&json!({"name": "Zo\u{eb}"}), false)?, r#"{"name":"Zo\u00eb"}"#);
    Ok(())
}

#[test]
fn test_xml_rejects_scalar_root() {
    let err = to_xml_string(&json!(true), "root", false).unwrap_err();
    assert!(matches!(err, SerdeError::NotAContainer(_)));
    assert_eq!(
        err.to_string(),
        "XML root must be a mapping or sequence, got scalar"
    );
}

#[test]
fn test_html_document_with_default_shell() {
    let html = to_html_document(&users(), DEFAULT_HTML_PREFIX, DEFAULT_HTML_POSTFIX);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("</style>\n</head>\n<body><ul>\n<li><strong>items:</strong> <ul>\n"));
    assert!(html.contains(
        "<li><strong>link:</strong> <a href=\"http://example.com\">http://example.com</a></li>\n"
    ));
    assert!(html.ends_with("</ul>\n</li>\n</ul>\n</body>\n</html>\n"));
}

#[test]
fn test_html_custom_shell() {
    let html = to_html_document(&json!({"a": "b"}), "<html><body>", "</body></html>");
    assert_eq!(
        html,
        "<html><body><ul>\n<li><strong>a:</strong> b</li>\n</ul>\n</body></html>"
    );
}
