//! Rendering of HAL resources.

mod common;

use common::{body, content_type, html_document, request, response, users_without_links};
use rendition::{Hal, HalRenderer, RenderConfig};
use serde_json::Value;

const COMPACT_JSON: &str = r#"{"items":[{"name":"Alex","is_admin":true},{"name":"Robin","is_admin":false}],"_links":{"self":{"href":"\/foo"}}}"#;

const PRETTY_JSON: &str = r#"{
    "items": [
        {
            "name": "Alex",
            "is_admin": true
        },
        {
            "name": "Robin",
            "is_admin": false
        }
    ],
    "_links": {
        "self": {
            "href": "/foo"
        }
    }
}"#;

const COMPACT_XML: &str = "<?xml version=\"1.0\"?>\n<resource href=\"/foo\"><items><name>Alex</name><is_admin>1</is_admin></items><items><name>Robin</name><is_admin>0</is_admin></items></resource>\n";

const HAL_HTML: &str = "<ul>
<li><strong>items:</strong> <ul>
<li><strong>0:</strong> <ul>
<li><strong>name:</strong> Alex</li>
<li><strong>is_admin:</strong> true</li>
</ul>
</li>
<li><strong>1:</strong> <ul>
<li><strong>name:</strong> Robin</li>
<li><strong>is_admin:</strong> false</li>
</ul>
</li>
</ul>
</li>
<li><strong>_links:</strong> <ul>
<li><strong>self:</strong> <ul>
<li><strong>href:</strong> /foo</li>
</ul>
</li>
</ul>
</li>
</ul>
";

fn resource() -> Hal {
    let Value::Object(data) = users_without_links() else {
        panic!("fixture should be a mapping");
    };
    Hal::new("/foo").with_data(data)
}

fn render(config: RenderConfig, accept: &str) -> http::Response<rendition::Body> {
    let renderer = HalRenderer::with_config(config);
    let mut response = response();
    renderer
        .render(&request(accept), &mut response, &resource())
        .unwrap();
    response
}

#[test]
fn test_render_json() {
    for accept in [
        "application/hal+json",
        "application/anything+json",
        "application/json",
    ] {
        let response = render(RenderConfig::for_testing(), accept);
        assert_eq!(content_type(&response), "application/hal+json", "Accept: {}", accept);
        assert_eq!(body(&response), COMPACT_JSON, "Accept: {}", accept);
    }
}

#[test]
fn test_render_pretty_json() {
    let response = render(RenderConfig::default(), "application/json");
    assert_eq!(content_type(&response), "application/hal+json");
    assert_eq!(body(&response), PRETTY_JSON);
}

#[test]
fn test_render_xml() {
    for accept in [
        "application/hal+xml",
        "application/anything+xml",
        "application/xml",
        "text/xml",
    ] {
        let response = render(RenderConfig::for_testing(), accept);
        assert_eq!(content_type(&response), "application/hal+xml", "Accept: {}", accept);
        assert_eq!(body(&response), COMPACT_XML, "Accept: {}", accept);
    }
}

#[test]
fn test_render_html() {
    let response = render(RenderConfig::for_testing(), "text/html");
    assert_eq!(content_type(&response), "text/html");
    assert_eq!(body(&response), html_document(HAL_HTML));
}

#[test]
fn test_specific_media_type_wins() {
    let response = render(
        RenderConfig::for_testing(),
        "application/xml,application/hal+json",
    );
    assert_eq!(content_type(&response), "application/hal+json");
    assert_eq!(body(&response), COMPACT_JSON);
}

#[test]
fn test_unknown_accept_falls_back_to_json() {
    let response = render(RenderConfig::for_testing(), "text/csv");
    assert_eq!(content_type(&response), "application/hal+json");
    assert_eq!(body(&response), COMPACT_JSON);
}

#[test]
fn test_links_and_embedded_resources() {
    let mut owner = Hal::new("/users/alex");
    owner.set("name", "Alex");

    let mut order = Hal::new("/orders/1");
    order
        .set("total", 30)
        .add_link("next", "/orders/2")
        .add_resource("owner", owner);

    let renderer = HalRenderer::with_config(RenderConfig::for_testing());

    let mut json_response = response();
    renderer
        .render(&request("application/hal+json"), &mut json_response, &order)
        .unwrap();
    assert_eq!(
        body(&json_response),
        r#"{"total":30,"_links":{"self":{"href":"\/orders\/1"},"next":{"href":"\/orders\/2"}},"_embedded":{"owner":{"name":"Alex","_links":{"self":{"href":"\/users\/alex"}}}}}"#
    );

    let mut xml_response = response();
    renderer
        .render(&request("application/hal+xml"), &mut xml_response, &order)
        .unwrap();
    assert_eq!(
        body(&xml_response),
        "<?xml version=\"1.0\"?>\n<resource href=\"/orders/1\"><link rel=\"next\" href=\"/orders/2\"/><total>30</total><resource rel=\"owner\" href=\"/users/alex\"><name>Alex</name></resource></resource>\n"
    );
}
