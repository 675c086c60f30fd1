//! Production transport implementation using reqwest.

use super::{Request, Response, Transport, TransportError};

/// Production transport using reqwest.
///
/// This is a thin wrapper around `reqwest::Client` that implements
/// the [`Transport`] trait. Method, headers and body are forwarded
/// verbatim and the whole response body is buffered.
///
/// # Example
///
/// ```no_run
/// use request_sender::sender::{ReqwestTransport, Request, RequestOptions, Transport};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let transport = ReqwestTransport::new();
/// let url = Url::parse("https://api.example.com/items")?;
/// let request = Request::new(url, RequestOptions::post().with_body("hello"));
/// let response = transport.fetch(request).await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    inner: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with reqwest's default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    /// Creates a transport from an existing reqwest client.
    ///
    /// Useful when you need custom configuration (TLS roots, proxies, etc.).
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for ReqwestTransport {
    async fn fetch(&self, req: Request) -> Result<Response, TransportError> {
        let Request { url, options } = req;

        let mut builder = self
            .inner
            .request(options.method, url.as_str())
            .headers(options.headers);

        if let Some(body) = options.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(map_send_error)?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(TransportError::connection)?;

        Ok(Response::new(status, headers, body))
    }
}

fn map_send_error(error: reqwest::Error) -> TransportError {
    if error.is_builder() {
        TransportError::InvalidRequest(error.to_string())
    } else {
        TransportError::connection(error)
    }
}
