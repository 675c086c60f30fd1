//! Tests for `ReqwestTransport`.
//!
//! Requests against a live server are covered by the mockito suite in
//! `tests/`; these tests focus on construction and local failure paths.

use super::{Request, RequestOptions, ReqwestTransport, Transport, TransportError};

mod reqwest_transport {
    use super::*;

    /// Returns a loopback URL whose port has nothing listening.
    fn closed_port_url() -> url::Url {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        url::Url::parse(&format!("http://127.0.0.1:{port}/")).unwrap()
    }

    #[test]
    fn new_creates_transport() {
        let transport = ReqwestTransport::new();
        let _ = format!("{transport:?}");
    }

    #[test]
    fn from_client_accepts_custom_client() {
        let custom = reqwest::Client::builder()
            .user_agent("request-sender-tests")
            .build()
            .unwrap();
        let transport = ReqwestTransport::from_client(custom);

        let _ = format!("{transport:?}");
    }

    #[test]
    fn debug_format_is_readable() {
        let debug = format!("{:?}", ReqwestTransport::default());

        assert!(debug.contains("ReqwestTransport"));
    }

    #[test]
    fn transport_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReqwestTransport>();
    }

    #[tokio::test]
    async fn refused_connection_returns_connection_error() {
        let transport = ReqwestTransport::new();
        let request = Request::new(closed_port_url(), RequestOptions::get());

        let result = transport.fetch(request).await;

        assert!(
            matches!(result, Err(TransportError::Connection(_))),
            "Expected connection error, got {result:?}"
        );
    }

    #[tokio::test]
    async fn refused_connection_message_is_non_empty() {
        let transport = ReqwestTransport::new();
        let request = Request::new(closed_port_url(), RequestOptions::get());

        let error = transport.fetch(request).await.unwrap_err();

        assert!(!error.message().is_empty());
    }
}
