//! request-sender: HTTP requests with lifecycle logging
//!
//! A library for sending a single HTTP request through a pluggable
//! transport, logging the request and response along the way, and turning
//! transport failures into synthetic `500` responses.

pub mod config;
pub mod sender;
