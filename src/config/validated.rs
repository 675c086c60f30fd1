//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use http::header::{HeaderName, HeaderValue};
use http::{HeaderMap, Method};
use url::Url;

use crate::sender::{JsonFallback, RequestOptions, SenderSettings};

use super::cli::SendArgs;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from `send` arguments and an
/// optional TOML config. CLI values win over TOML values, which win over
/// built-in defaults.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Request URL, resolved against the base URL when relative
    pub url: Url,

    /// Method, headers and body of the request
    pub options: RequestOptions,

    /// Sender behavior
    pub settings: SenderSettings,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base_url = self
            .settings
            .base_url
            .as_ref()
            .map_or_else(|| "none".to_string(), ToString::to_string);

        write!(
            f,
            "Config {{ url: {}, method: {}, headers: {}, body: {}B, base_url: {}, \
             log_bodies: {}, json_fallback: {} }}",
            self.url,
            self.options.method,
            self.options.headers.len(),
            self.options.body.as_ref().map_or(0, |b| b.len()),
            base_url,
            self.settings.log_bodies,
            self.settings.json_fallback,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from `send` arguments and optional TOML config.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The URL is missing or invalid
    /// - The base URL is invalid
    /// - The method is not a valid HTTP method
    /// - A header is malformed
    /// - The JSON fallback value is unknown
    pub fn from_raw(args: &SendArgs, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let settings = Self::build_settings(args, toml)?;
        let url = Self::resolve_url(args, toml, &settings)?;

        let options = RequestOptions {
            method: Self::resolve_method(args, toml)?,
            headers: Self::resolve_headers(args, toml)?,
            body: args
                .data
                .clone()
                .or_else(|| toml.and_then(|t| t.request.body.clone()))
                .map(Into::into),
        };

        Ok(Self {
            url,
            options,
            settings,
        })
    }

    /// Loads and merges configuration from `send` arguments and an optional config file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(config: Option<&Path>, args: &SendArgs) -> Result<Self, ConfigError> {
        let toml = config.map(TomlConfig::load).transpose()?;

        Self::from_raw(args, toml.as_ref())
    }

    fn build_settings(
        args: &SendArgs,
        toml: Option<&TomlConfig>,
    ) -> Result<SenderSettings, ConfigError> {
        let section = toml.map(|t| &t.sender);
        let mut settings = SenderSettings::new();

        let base_url = args
            .base_url
            .as_deref()
            .or_else(|| section.and_then(|s| s.base_url.as_deref()));
        if let Some(base) = base_url {
            settings = settings.with_base_url(parse_url(base)?);
        }

        // --no-body-log only disables; it cannot re-enable a TOML `false`
        let log_bodies = !args.no_body_log
            && section
                .and_then(|s| s.log_bodies)
                .unwrap_or(defaults::LOG_BODIES);

        let json_fallback = match args.json_fallback {
            Some(arg) => arg.into(),
            None => parse_json_fallback(
                section
                    .and_then(|s| s.json_fallback.as_deref())
                    .unwrap_or(defaults::JSON_FALLBACK),
            )?,
        };

        Ok(settings
            .with_log_bodies(log_bodies)
            .with_json_fallback(json_fallback))
    }

    fn resolve_url(
        args: &SendArgs,
        toml: Option<&TomlConfig>,
        settings: &SenderSettings,
    ) -> Result<Url, ConfigError> {
        // CLI takes precedence
        let url_str = args
            .url
            .as_deref()
            .or_else(|| toml.and_then(|t| t.request.url.as_deref()))
            .ok_or_else(|| {
                ConfigError::missing(
                    field::URL,
                    "Pass a URL to `send` or set request.url in config file",
                )
            })?;

        settings
            .resolve_url(url_str)
            .map_err(|e| ConfigError::InvalidUrl {
                url: url_str.to_string(),
                reason: e.to_string(),
            })
    }

    fn resolve_method(args: &SendArgs, toml: Option<&TomlConfig>) -> Result<Method, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let method_str = args
            .method
            .as_deref()
            .or_else(|| toml.and_then(|t| t.request.method.as_deref()))
            .unwrap_or(defaults::METHOD);

        method_str
            .to_ascii_uppercase()
            .parse::<Method>()
            .map_err(|_| ConfigError::InvalidMethod(method_str.to_string()))
    }

    fn resolve_headers(
        args: &SendArgs,
        toml: Option<&TomlConfig>,
    ) -> Result<HeaderMap, ConfigError> {
        let mut headers = HeaderMap::new();

        // Add TOML headers first (CLI can override)
        if let Some(toml) = toml {
            for (name, value) in &toml.request.headers {
                let header_name = parse_header_name(name)?;
                let header_value = parse_header_value(name, value)?;
                headers.insert(header_name, header_value);
            }
        }

        // Add CLI headers: the first CLI value for a name replaces TOML
        // entries, repeated CLI values are kept
        let mut from_cli = HashSet::new();
        for header_str in &args.headers {
            let (name, value) = parse_header_string(header_str)?;
            let header_name = parse_header_name(&name)?;
            let header_value = parse_header_value(&name, &value)?;
            if from_cli.insert(header_name.clone()) {
                headers.remove(&header_name);
            }
            headers.append(header_name, header_value);
        }

        Ok(headers)
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn parse_url(s: &str) -> Result<Url, ConfigError> {
    Url::parse(s).map_err(|e| ConfigError::InvalidUrl {
        url: s.to_string(),
        reason: e.to_string(),
    })
}

fn parse_json_fallback(s: &str) -> Result<JsonFallback, ConfigError> {
    match s.to_lowercase().as_str() {
        "text" => Ok(JsonFallback::Text),
        "omit" => Ok(JsonFallback::Omit),
        _ => Err(ConfigError::InvalidJsonFallback {
            value: s.to_string(),
        }),
    }
}

fn parse_header_string(s: &str) -> Result<(String, String), ConfigError> {
    // "Key=Value" or "Key: Value"; the first separator wins so values may contain either
    let Some(split) = s.find([':', '=']) else {
        return Err(ConfigError::InvalidHeader {
            value: s.to_string(),
        });
    };

    let (name, value) = (&s[..split], &s[split + 1..]);
    Ok((name.trim().to_string(), value.trim().to_string()))
}

fn parse_header_name(name: &str) -> Result<HeaderName, ConfigError> {
    name.parse::<HeaderName>()
        .map_err(|e| ConfigError::InvalidHeaderName {
            name: name.to_string(),
            reason: e.to_string(),
        })
}

fn parse_header_value(name: &str, value: &str) -> Result<HeaderValue, ConfigError> {
    HeaderValue::from_str(value).map_err(|e| ConfigError::InvalidHeaderValue {
        name: name.to_string(),
        reason: e.to_string(),
    })
}
