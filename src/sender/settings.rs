//! Sender settings.

use std::fmt;

/// What to log when a response declares `application/json` but its body
/// does not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFallback {
    /// Log the raw body as text instead.
    #[default]
    Text,
    /// Log only that the body could not be parsed.
    Omit,
}

impl fmt::Display for JsonFallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Omit => write!(f, "omit"),
        }
    }
}

/// Per-sender behavior switches.
///
/// # Defaults
///
/// - `base_url`: none (every URL must be absolute)
/// - `log_bodies`: true
/// - `json_fallback`: [`JsonFallback::Text`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderSettings {
    /// Base URL that relative request URLs are resolved against.
    pub base_url: Option<url::Url>,

    /// Whether JSON and plain-text response bodies are logged.
    pub log_bodies: bool,

    /// Behavior when a JSON body fails to parse.
    pub json_fallback: JsonFallback,
}

impl SenderSettings {
    /// Creates settings with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            base_url: None,
            log_bodies: true,
            json_fallback: JsonFallback::Text,
        }
    }

    /// Sets the base URL for relative request URLs.
    #[must_use]
    pub fn with_base_url(mut self, base_url: url::Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Enables or disables response body logging.
    #[must_use]
    pub const fn with_log_bodies(mut self, log_bodies: bool) -> Self {
        self.log_bodies = log_bodies;
        self
    }

    /// Sets the JSON parse-failure behavior.
    #[must_use]
    pub const fn with_json_fallback(mut self, json_fallback: JsonFallback) -> Self {
        self.json_fallback = json_fallback;
        self
    }

    /// Resolves `url` against the base URL, or parses it as absolute when no
    /// base is configured. Absolute URLs ignore the base.
    ///
    /// # Errors
    ///
    /// Returns the parse error when the URL is malformed, or relative with
    /// no base configured.
    pub fn resolve_url(&self, url: &str) -> Result<url::Url, url::ParseError> {
        match &self.base_url {
            Some(base) => base.join(url),
            None => url::Url::parse(url),
        }
    }
}

impl Default for SenderSettings {
    fn default() -> Self {
        Self::new()
    }
}
