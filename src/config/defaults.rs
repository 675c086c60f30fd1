//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

/// Default HTTP method.
pub const METHOD: &str = "GET";

/// Response bodies are logged unless disabled.
pub const LOG_BODIES: bool = true;

/// Default behavior for JSON bodies that fail to parse.
pub const JSON_FALLBACK: &str = "text";

/// Default output path for `init`.
pub const CONFIG_FILE: &str = "request-sender.toml";
