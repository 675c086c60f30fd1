//! Sender construction.

use super::{HttpRequestSender, ReqwestTransport, RequestSender, SenderSettings};

/// Trait for constructing senders without naming the concrete transport.
pub trait RequestSenderFactory: Send + Sync {
    /// The sender type produced.
    type Sender: RequestSender;

    /// Construction arguments accepted by this factory.
    type Args;

    /// Creates a new sender.
    fn create(&self, args: Self::Args) -> Self::Sender;
}

/// Factory for reqwest-backed [`HttpRequestSender`]s.
///
/// All senders created by one factory share a single `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct HttpRequestSenderFactory {
    transport: ReqwestTransport,
}

impl HttpRequestSenderFactory {
    /// Creates a factory with a default reqwest client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a factory whose senders use the given transport.
    #[must_use]
    pub const fn with_transport(transport: ReqwestTransport) -> Self {
        Self { transport }
    }
}

impl RequestSenderFactory for HttpRequestSenderFactory {
    type Sender = HttpRequestSender<ReqwestTransport>;
    type Args = SenderSettings;

    fn create(&self, settings: SenderSettings) -> Self::Sender {
        HttpRequestSender::new(self.transport.clone()).with_settings(settings)
    }
}
