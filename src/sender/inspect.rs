//! Content-type sniffing and body logging.

use std::borrow::Cow;

use super::{JsonFallback, Response};

const JSON_MEDIA_TYPE: &str = "application/json";
const TEXT_MEDIA_TYPE: &str = "text/plain";

/// What body logging extracted from a response.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyView<'a> {
    /// Body parsed as JSON.
    Json(serde_json::Value),
    /// Body decoded as text (plain text, or the JSON fallback).
    Text(Cow<'a, str>),
    /// Declared JSON, failed to parse, and the fallback is [`JsonFallback::Omit`].
    InvalidJson,
}

/// Inspects the response body according to its `content-type`.
///
/// Returns `None` when the content type is neither JSON nor plain text.
/// The body is borrowed, never consumed.
#[must_use]
pub fn inspect_body(response: &Response, fallback: JsonFallback) -> Option<BodyView<'_>> {
    let content_type = response.content_type()?.to_ascii_lowercase();

    if content_type.contains(JSON_MEDIA_TYPE) {
        let view = match serde_json::from_slice(response.body()) {
            Ok(value) => BodyView::Json(value),
            Err(_) => match fallback {
                JsonFallback::Text => BodyView::Text(String::from_utf8_lossy(response.body())),
                JsonFallback::Omit => BodyView::InvalidJson,
            },
        };
        return Some(view);
    }

    if content_type.contains(TEXT_MEDIA_TYPE) {
        return Some(BodyView::Text(String::from_utf8_lossy(response.body())));
    }

    None
}

/// Emits a debug event describing the response body, if it is inspectable.
pub(crate) fn log_body(response: &Response, fallback: JsonFallback) {
    match inspect_body(response, fallback) {
        Some(BodyView::Json(value)) => {
            let pretty =
                serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string());
            tracing::debug!("Received response body: {pretty}");
        }
        Some(BodyView::Text(text)) => tracing::debug!("Received response body: {text}"),
        Some(BodyView::InvalidJson) => {
            tracing::debug!("Received response body is not valid JSON");
        }
        None => {}
    }
}
