//! Error types for transport operations.

use thiserror::Error;

/// Error type for transport operations.
///
/// Describes why no HTTP response could be obtained. HTTP error statuses
/// (4xx/5xx) are never represented here; they are ordinary responses.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and failures while reading the response body.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The target URL could not be parsed or resolved.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The transport refused to build the request (bad header, bad method, ...).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl TransportError {
    /// Creates a connection error from any error type.
    pub fn connection(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Connection(error.into())
    }

    /// Returns the bare failure message, without the variant prefix.
    ///
    /// This is the text a synthetic failure response carries as its status text.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Connection(source) => source.to_string(),
            Self::InvalidUrl(reason) | Self::InvalidRequest(reason) => reason.clone(),
        }
    }
}
