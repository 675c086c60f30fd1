//! Request/response types and the transport trait.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::ser::{Serialize, SerializeMap, SerializeStruct, Serializer};

use super::TransportError;

/// Options describing how a request is sent.
///
/// Passed to senders by shared reference. Senders hand the transport an
/// identical copy and never modify the caller's value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// HTTP method (GET, POST, PUT, DELETE, etc.)
    pub method: http::Method,
    /// HTTP headers to send
    pub headers: http::HeaderMap,
    /// Optional request body
    pub body: Option<Bytes>,
}

impl RequestOptions {
    /// Creates options for the given method with no headers and no body.
    #[must_use]
    pub fn new(method: http::Method) -> Self {
        Self {
            method,
            headers: http::HeaderMap::new(),
            body: None,
        }
    }

    /// Creates GET options.
    #[must_use]
    pub fn get() -> Self {
        Self::new(http::Method::GET)
    }

    /// Creates POST options.
    #[must_use]
    pub fn post() -> Self {
        Self::new(http::Method::POST)
    }

    /// Sets the request body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Adds a header.
    ///
    /// If the header name already exists, the value is appended
    /// (HTTP headers can have multiple values).
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Renders the options as pretty-printed JSON for diagnostics.
    #[must_use]
    pub fn to_log_json(&self) -> String {
        serde_json::to_string_pretty(self)
            .unwrap_or_else(|e| format!("<unserializable request options: {e}>"))
    }
}

/// Serializes options the way they are logged: method, headers (multiple
/// values joined with `", "`), and the body as lossy UTF-8 when present.
impl Serialize for RequestOptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let field_count = if self.body.is_some() { 3 } else { 2 };
        let mut state = serializer.serialize_struct("RequestOptions", field_count)?;
        state.serialize_field("method", self.method.as_str())?;
        state.serialize_field("headers", &LoggedHeaders(&self.headers))?;
        if let Some(body) = &self.body {
            state.serialize_field("body", &String::from_utf8_lossy(body))?;
        }
        state.end()
    }
}

struct LoggedHeaders<'a>(&'a http::HeaderMap);

impl Serialize for LoggedHeaders<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.keys_len()))?;
        for name in self.0.keys() {
            let joined = self
                .0
                .get_all(name)
                .iter()
                .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
                .collect::<Vec<_>>()
                .join(", ");
            map.serialize_entry(name.as_str(), &joined)?;
        }
        map.end()
    }
}

/// A request handed to a [`Transport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Fully resolved target URL
    pub url: url::Url,
    /// Options exactly as the caller supplied them
    pub options: RequestOptions,
}

impl Request {
    /// Creates a new request.
    #[must_use]
    pub const fn new(url: url::Url, options: RequestOptions) -> Self {
        Self { url, options }
    }
}

/// An HTTP response, either received from a server or synthesized locally.
///
/// The body is fully buffered. Reading it through [`text`](Self::text),
/// [`json`](Self::json) or [`bytes`](Self::bytes) consumes the response,
/// so a caller reads it at most once. Diagnostics borrow it instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// HTTP status code
    pub status: http::StatusCode,
    /// Reason phrase, or the failure message for synthetic responses
    pub status_text: String,
    /// Response headers
    pub headers: http::HeaderMap,
    body: Bytes,
}

impl Response {
    /// Creates a response whose status text is the canonical reason phrase.
    #[must_use]
    pub fn new(
        status: http::StatusCode,
        headers: http::HeaderMap,
        body: impl Into<Bytes>,
    ) -> Self {
        Self {
            status,
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            headers,
            body: body.into(),
        }
    }

    /// Synthesizes the response returned in place of a transport failure:
    /// status 500, the failure message as status text, no headers, empty body.
    #[must_use]
    pub fn transport_failure(error: &TransportError) -> Self {
        Self {
            status: http::StatusCode::INTERNAL_SERVER_ERROR,
            status_text: error.message(),
            headers: http::HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    /// Replaces the status text.
    #[must_use]
    pub fn with_status_text(mut self, status_text: impl Into<String>) -> Self {
        self.status_text = status_text.into();
        self
    }

    /// Returns true if the status code indicates success (2xx).
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns the `content-type` header, if present and valid ASCII.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(http::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
    }

    /// Borrows the buffered body without consuming it.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Consumes the response and returns the raw body.
    #[must_use]
    pub fn bytes(self) -> Bytes {
        self.body
    }

    /// Consumes the response and decodes the body as UTF-8.
    ///
    /// Invalid sequences are replaced with `U+FFFD`.
    #[must_use]
    pub fn text(self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Consumes the response and parses the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Trait for the outbound HTTP primitive.
///
/// # Design
///
/// Decouples senders from the HTTP library, enabling:
/// - Dependency injection for testing with mock transports
/// - Swapping HTTP libraries without changing calling code
///
/// # Example
///
/// ```ignore
/// use request_sender::sender::{Request, Response, Transport, TransportError};
///
/// struct CannedTransport {
///     response: Response,
/// }
///
/// impl Transport for CannedTransport {
///     async fn fetch(&self, _req: Request) -> Result<Response, TransportError> {
///         Ok(self.response.clone())
///     }
/// }
/// ```
pub trait Transport: Send + Sync {
    /// Sends a request and returns whatever HTTP response comes back.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when no HTTP response could be obtained.
    /// Non-2xx statuses are returned as `Ok`.
    fn fetch(
        &self,
        req: Request,
    ) -> impl std::future::Future<Output = Result<Response, TransportError>> + Send;
}
