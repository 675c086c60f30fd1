//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Sender behavior section
    #[serde(default)]
    pub sender: SenderSection,

    /// Request defaults section
    #[serde(default)]
    pub request: RequestSection,
}

/// Sender behavior section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SenderSection {
    /// Base URL for relative request URLs
    pub base_url: Option<String>,

    /// Log JSON and plain-text response bodies (default: true)
    pub log_bodies: Option<bool>,

    /// What to log when a JSON body fails to parse: "text" or "omit"
    pub json_fallback: Option<String>,
}

/// Request defaults section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RequestSection {
    /// Request URL, absolute or relative to `sender.base_url`
    pub url: Option<String>,

    /// HTTP method (default: GET)
    pub method: Option<String>,

    /// HTTP headers as key-value pairs
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// Request body
    pub body: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# request-sender configuration file

[sender]
# Base URL that relative request URLs are resolved against
# base_url = "https://api.example.com/v1/"

# Log JSON and plain-text response bodies at debug level (default: true)
# Disabled by the --no-body-log CLI flag
# log_bodies = true

# What to log when a response claims application/json but does not parse
# Accepted values: "text" (log the raw body) or "omit"
# json_fallback = "text"

[request]
# Request URL (overridden by the URL argument of `send`)
# url = "https://api.example.com/v1/status"

# HTTP method (default: GET, can be overridden by --method CLI flag)
# method = "GET"

# Request body
# body = '{"hello": "world"}'

# HTTP headers (CLI --header values override entries with the same name)
# [request.headers]
# Content-Type = "application/json"
"#
    .to_string()
}
