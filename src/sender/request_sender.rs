//! Request sender trait and HTTP implementation.

use tracing::Instrument;

use super::inspect::log_body;
use super::{
    ReqwestTransport, Request, RequestOptions, Response, SenderSettings, Transport, TransportError,
};

/// Trait for sending a request and getting a response back, whatever happens
/// on the network.
///
/// # Implementation Notes
///
/// Implementations must not surface transport failures as errors; they are
/// converted into a response instead. This is why `send` has no error type.
///
/// Transport-specific parameters that the trait does not standardize are
/// carried by [`Extra`](Self::Extra), declared per implementation.
pub trait RequestSender: Send + Sync {
    /// Implementation-specific per-call parameters.
    type Extra: Default + Send;

    /// Sends a request to `url` with the given options.
    ///
    /// # Arguments
    ///
    /// * `url` - The endpoint URL, absolute or relative to a configured base
    /// * `options` - Method, headers and body; never modified
    /// * `extra` - Implementation-specific parameters
    fn send(
        &self,
        url: &str,
        options: &RequestOptions,
        extra: Self::Extra,
    ) -> impl std::future::Future<Output = Response> + Send;
}

/// Extra per-call parameters accepted by [`HttpRequestSender`].
///
/// None of these are sent on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendExtras {
    /// Correlation id recorded on the logging span.
    pub request_id: Option<String>,
}

impl SendExtras {
    /// Creates extras carrying a correlation id.
    #[must_use]
    pub fn with_request_id(request_id: impl Into<String>) -> Self {
        Self {
            request_id: Some(request_id.into()),
        }
    }
}

/// HTTP request sender with lifecycle logging.
///
/// Logs the URL and options before dispatch, the status after, and the body
/// for JSON and plain-text responses. Transport failures come back as a
/// synthetic `500` response whose status text is the failure message.
///
/// # Type Parameters
///
/// - `T`: The transport implementation (defaults to [`ReqwestTransport`])
///
/// # Example
///
/// ```
/// use request_sender::sender::{HttpRequestSender, ReqwestTransport};
///
/// let sender = HttpRequestSender::new(ReqwestTransport::new());
/// assert!(sender.settings().log_bodies);
/// ```
#[derive(Debug, Clone)]
pub struct HttpRequestSender<T = ReqwestTransport> {
    transport: T,
    settings: SenderSettings,
}

impl<T> HttpRequestSender<T> {
    /// Creates a sender with default settings.
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            settings: SenderSettings::default(),
        }
    }

    /// Replaces the sender settings.
    #[must_use]
    pub fn with_settings(mut self, settings: SenderSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Returns the sender settings.
    #[must_use]
    pub const fn settings(&self) -> &SenderSettings {
        &self.settings
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: Transport> HttpRequestSender<T> {
    /// Resolves the URL and hands the transport a copy of the options.
    async fn dispatch(
        &self,
        url: &str,
        options: &RequestOptions,
    ) -> Result<Response, TransportError> {
        let resolved = self
            .settings
            .resolve_url(url)
            .map_err(|e| TransportError::InvalidUrl(e.to_string()))?;

        self.transport
            .fetch(Request::new(resolved, options.clone()))
            .await
    }

    async fn send_logged(&self, url: &str, options: &RequestOptions) -> Response {
        tracing::info!("Sending request to URL: {url}");
        tracing::debug!("Request options: {}", options.to_log_json());

        let response = match self.dispatch(url, options).await {
            Ok(response) => response,
            Err(error) => {
                tracing::error!(error = ?error, "Failed to send request: {error}");
                Response::transport_failure(&error)
            }
        };

        tracing::info!("Received response status: {}", response.status.as_u16());

        if self.settings.log_bodies {
            log_body(&response, self.settings.json_fallback);
        }

        response
    }
}

impl<T: Transport> RequestSender for HttpRequestSender<T> {
    type Extra = SendExtras;

    async fn send(&self, url: &str, options: &RequestOptions, extra: SendExtras) -> Response {
        let span = match extra.request_id.as_deref() {
            Some(id) => tracing::info_span!("send", request_id = id),
            None => tracing::info_span!("send"),
        };

        self.send_logged(url, options).instrument(span).await
    }
}
