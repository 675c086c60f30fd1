//! Tests for content-type sniffing.

use super::{BodyView, JsonFallback, Response, inspect_body};

fn response(content_type: Option<&'static str>, body: &'static str) -> Response {
    let mut headers = http::HeaderMap::new();
    if let Some(value) = content_type {
        headers.insert(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static(value),
        );
    }
    Response::new(http::StatusCode::OK, headers, body)
}

#[test]
fn json_body_is_parsed() {
    let resp = response(Some("application/json"), r#"{"success": true}"#);

    assert_eq!(
        inspect_body(&resp, JsonFallback::Text),
        Some(BodyView::Json(serde_json::json!({ "success": true })))
    );
}

#[test]
fn json_with_charset_parameter_is_parsed() {
    let resp = response(Some("application/json; charset=utf-8"), "[1, 2]");

    assert_eq!(
        inspect_body(&resp, JsonFallback::Text),
        Some(BodyView::Json(serde_json::json!([1, 2])))
    );
}

#[test]
fn content_type_match_ignores_case() {
    let resp = response(Some("Application/JSON"), "{}");

    assert_eq!(
        inspect_body(&resp, JsonFallback::Text),
        Some(BodyView::Json(serde_json::json!({})))
    );
}

#[test]
fn invalid_json_falls_back_to_text() {
    let resp = response(Some("application/json"), "<html>oops</html>");

    assert_eq!(
        inspect_body(&resp, JsonFallback::Text),
        Some(BodyView::Text("<html>oops</html>".into()))
    );
}

#[test]
fn invalid_json_is_omitted_when_configured() {
    let resp = response(Some("application/json"), "<html>oops</html>");

    assert_eq!(
        inspect_body(&resp, JsonFallback::Omit),
        Some(BodyView::InvalidJson)
    );
}

#[test]
fn empty_json_body_uses_fallback() {
    let resp = response(Some("application/json"), "");

    assert_eq!(
        inspect_body(&resp, JsonFallback::Omit),
        Some(BodyView::InvalidJson)
    );
}

#[test]
fn plain_text_body_is_decoded() {
    let resp = response(Some("text/plain; charset=utf-8"), "hello");

    assert_eq!(
        inspect_body(&resp, JsonFallback::Text),
        Some(BodyView::Text("hello".into()))
    );
}

#[test]
fn other_content_types_are_not_inspected() {
    for content_type in ["text/html", "application/octet-stream", "image/png"] {
        let resp = response(Some(content_type), "data");
        assert_eq!(
            inspect_body(&resp, JsonFallback::Text),
            None,
            "{content_type} should not be inspected"
        );
    }
}

#[test]
fn missing_content_type_is_not_inspected() {
    let resp = response(None, r#"{"success": true}"#);

    assert_eq!(inspect_body(&resp, JsonFallback::Text), None);
}

#[test]
fn inspection_leaves_body_readable() {
    let resp = response(Some("application/json"), r#"{"n": 1}"#);

    let _ = inspect_body(&resp, JsonFallback::Text);

    let value: serde_json::Value = resp.json().unwrap();
    assert_eq!(value["n"], 1);
}
