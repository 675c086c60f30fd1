//! Tests for the diagnostics emitted while sending.

use std::io;
use std::sync::{Arc, Mutex};

use super::{
    HttpRequestSender, JsonFallback, Request, RequestOptions, RequestSender, Response,
    SendExtras, SenderSettings, Transport, TransportError,
};

/// Log sink shared between the subscriber and the test.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

struct CannedTransport(fn() -> Result<Response, TransportError>);

impl Transport for CannedTransport {
    async fn fetch(&self, _req: Request) -> Result<Response, TransportError> {
        (self.0)()
    }
}

fn with_content_type(content_type: &'static str, body: &'static str) -> Response {
    let mut headers = http::HeaderMap::new();
    headers.insert(
        http::header::CONTENT_TYPE,
        http::HeaderValue::from_static(content_type),
    );
    Response::new(http::StatusCode::OK, headers, body)
}

fn json_ok() -> Result<Response, TransportError> {
    Ok(with_content_type("application/json", r#"{"success": true}"#))
}

fn text_ok() -> Result<Response, TransportError> {
    Ok(with_content_type("text/plain", "plain greeting"))
}

fn broken_json() -> Result<Response, TransportError> {
    Ok(with_content_type("application/json", "<html>oops</html>"))
}

fn html_ok() -> Result<Response, TransportError> {
    Ok(with_content_type("text/html", "<p>hidden</p>"))
}

fn network_error() -> Result<Response, TransportError> {
    Err(TransportError::connection("Network Error"))
}

/// Sends one request through a sender over `outcome` and returns everything logged.
async fn logs_for(
    outcome: fn() -> Result<Response, TransportError>,
    settings: SenderSettings,
    options: &RequestOptions,
) -> String {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .without_time()
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let sender = HttpRequestSender::new(CannedTransport(outcome)).with_settings(settings);
    sender
        .send("https://example.com/api", options, SendExtras::default())
        .await;

    logs.contents()
}

#[tokio::test]
async fn logs_url_and_options_before_dispatch() {
    let options = RequestOptions::post()
        .with_header(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("application/json"),
        )
        .with_body(r#"{"name":"demo"}"#);

    let logs = logs_for(json_ok, SenderSettings::new(), &options).await;

    assert!(logs.contains("Sending request to URL: https://example.com/api"));
    assert!(logs.contains("Request options:"));
    assert!(logs.contains(r#""method": "POST""#));
    assert!(logs.contains(r#""content-type": "application/json""#));
}

#[tokio::test]
async fn logs_status_and_json_body() {
    let logs = logs_for(json_ok, SenderSettings::new(), &RequestOptions::get()).await;

    assert!(logs.contains("Received response status: 200"));
    assert!(logs.contains("Received response body:"));
    assert!(logs.contains(r#""success": true"#));
}

#[tokio::test]
async fn logs_plain_text_body() {
    let logs = logs_for(text_ok, SenderSettings::new(), &RequestOptions::get()).await;

    assert!(logs.contains("Received response body: plain greeting"));
}

#[tokio::test]
async fn logs_raw_text_for_unparseable_json_by_default() {
    let logs = logs_for(broken_json, SenderSettings::new(), &RequestOptions::get()).await;

    assert!(logs.contains("Received response body: <html>oops</html>"));
}

#[tokio::test]
async fn omits_unparseable_json_when_configured() {
    let settings = SenderSettings::new().with_json_fallback(JsonFallback::Omit);

    let logs = logs_for(broken_json, settings, &RequestOptions::get()).await;

    assert!(logs.contains("Received response body is not valid JSON"));
    assert!(!logs.contains("<html>oops</html>"));
}

#[tokio::test]
async fn does_not_log_other_content_types() {
    let logs = logs_for(html_ok, SenderSettings::new(), &RequestOptions::get()).await;

    assert!(logs.contains("Received response status: 200"));
    assert!(!logs.contains("Received response body"));
}

#[tokio::test]
async fn does_not_log_body_when_disabled() {
    let settings = SenderSettings::new().with_log_bodies(false);

    let logs = logs_for(json_ok, settings, &RequestOptions::get()).await;

    assert!(logs.contains("Received response status: 200"));
    assert!(!logs.contains("Received response body"));
}

#[tokio::test]
async fn logs_error_and_synthetic_status_on_transport_failure() {
    let logs = logs_for(network_error, SenderSettings::new(), &RequestOptions::get()).await;

    assert!(logs.contains("ERROR"));
    assert!(logs.contains("Failed to send request"));
    assert!(logs.contains("Network Error"));
    assert!(logs.contains("Received response status: 500"));
}

#[tokio::test]
async fn request_id_is_recorded_on_span() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .without_time()
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let sender = HttpRequestSender::new(CannedTransport(json_ok));
    sender
        .send(
            "https://example.com/api",
            &RequestOptions::get(),
            SendExtras::with_request_id("req-42"),
        )
        .await;

    // fmt renders &str span fields in Debug form
    assert!(logs.contents().contains(r#"send{request_id="req-42"}"#));
}
