//! Rendering of Problem Details documents.

mod common;

use common::{body, content_type, request, response};
use http::StatusCode;
use rendition::{ApiProblem, ApiProblemRenderer, RenderConfig};

const COMPACT_JSON: &str = r#"{"title":"foo","type":"about:blank"}"#;

const PRETTY_JSON: &str = r#"{
    "title": "foo",
    "type": "about:blank"
}"#;

const COMPACT_XML: &str =
    "<?xml version=\"1.0\"?>\n<problem><title>foo</title><type>about:blank</type></problem>\n";

fn render(config: RenderConfig, accept: &str, problem: &ApiProblem) -> http::Response<rendition::Body> {
    let renderer = ApiProblemRenderer::with_config(config);
    let mut response = response();
    renderer
        .render(&request(accept), &mut response, problem)
        .unwrap();
    response
}

#[test]
fn test_render_json() {
    for accept in [
        "application/hal+json",
        "application/json",
        "vnd.foo/anything+json",
        "text/html",
    ] {
        let response = render(RenderConfig::for_testing(), accept, &ApiProblem::new("foo"));
        assert_eq!(content_type(&response), "application/problem+json", "Accept: {}", accept);
        assert_eq!(body(&response), COMPACT_JSON, "Accept: {}", accept);
        assert_eq!(response.status(), StatusCode::OK);
    }
}

#[test]
fn test_render_pretty_json() {
    let response = render(RenderConfig::default(), "application/json", &ApiProblem::new("foo"));
    assert_eq!(content_type(&response), "application/problem+json");
    assert_eq!(body(&response), PRETTY_JSON);
}

#[test]
fn test_render_xml() {
    for accept in [
        "application/hal+xml",
        "application/xml",
        "text/xml",
        "vnd.foo/anything+xml",
    ] {
        let response = render(RenderConfig::for_testing(), accept, &ApiProblem::new("foo"));
        assert_eq!(content_type(&response), "application/problem+xml", "Accept: {}", accept);
        assert_eq!(body(&response), COMPACT_XML, "Accept: {}", accept);
    }
}

#[test]
fn test_status_is_copied() {
    let problem = ApiProblem::new("foo").with_status(400);
    let response = render(RenderConfig::for_testing(), "application/problem+xml", &problem);

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(content_type(&response), "application/problem+xml");
    assert_eq!(
        body(&response),
        "<?xml version=\"1.0\"?>\n<problem><title>foo</title><type>about:blank</type><status>400</status></problem>\n"
    );
}

#[test]
fn test_status_below_100_is_ignored() {
    let problem = ApiProblem::new("foo").with_status(42);
    let response = render(RenderConfig::for_testing(), "application/problem+json", &problem);

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body(&response),
        r#"{"title":"foo","type":"about:blank","status":42}"#
    );
}

#[test]
fn test_full_problem_pretty_xml() {
    let problem = ApiProblem::new("You do not have enough credit.")
        .with_type("https://example.com/probs/out-of-credit")
        .with_status(403)
        .with_detail("Your current balance is 30, but that costs 50.")
        .with_instance("/account/12345/msgs/abc")
        .with_extension("balance", 30);

    let response = render(RenderConfig::default(), "application/problem+xml", &problem);

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        body(&response),
        "<?xml version=\"1.0\"?>
<problem>
  <title>You do not have enough credit.</title>
  <type>https://example.com/probs/out-of-credit</type>
  <status>403</status>
  <detail>Your current balance is 30, but that costs 50.</detail>
  <instance>/account/12345/msgs/abc</instance>
  <balance>30</balance>
</problem>
"
    );
}
