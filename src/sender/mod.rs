//! Request sending with lifecycle logging.
//!
//! This module provides types and traits for:
//! - Describing requests ([`RequestOptions`], [`Request`])
//! - Buffered responses, real or synthetic ([`Response`])
//! - Abstracting the HTTP library ([`Transport`])
//! - Production transport implementation ([`ReqwestTransport`])
//! - Sending with logging and failure normalization ([`RequestSender`], [`HttpRequestSender`])
//! - Constructing senders ([`RequestSenderFactory`], [`HttpRequestSenderFactory`])

mod client;
mod error;
mod factory;
mod http;
mod inspect;
mod request_sender;
mod settings;

#[cfg(test)]
mod client_tests;
#[cfg(test)]
mod inspect_tests;
#[cfg(test)]
mod logging_tests;

pub use client::ReqwestTransport;
pub use error::TransportError;
pub use factory::{HttpRequestSenderFactory, RequestSenderFactory};
pub use http::{Request, RequestOptions, Response, Transport};
pub use inspect::{BodyView, inspect_body};
pub use request_sender::{HttpRequestSender, RequestSender, SendExtras};
pub use settings::{JsonFallback, SenderSettings};
