//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use super::defaults;

/// request-sender: send one HTTP request and log its lifecycle
///
/// Transport failures are reported as a synthetic 500 response rather
/// than an error.
#[derive(Debug, Parser)]
#[command(name = "request-sender")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (request options and response bodies)
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for request-sender
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Send a request and print the response
    Send(SendArgs),

    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },
}

/// Arguments of the `send` subcommand.
#[derive(Debug, Default, Args)]
pub struct SendArgs {
    /// Request URL, absolute or relative to the base URL
    pub url: Option<String>,

    /// HTTP method
    #[arg(long, short = 'X')]
    pub method: Option<String>,

    /// HTTP headers in 'Key=Value' or 'Key: Value' format (can be specified multiple times)
    #[arg(long = "header", short = 'H', value_name = "K=V")]
    pub headers: Vec<String>,

    /// Request body
    #[arg(long, short = 'd')]
    pub data: Option<String>,

    /// Base URL for relative request URLs
    #[arg(long = "base-url")]
    pub base_url: Option<String>,

    /// Do not log response bodies
    #[arg(long = "no-body-log")]
    pub no_body_log: bool,

    /// What to log when a JSON response body fails to parse
    #[arg(long = "json-fallback", value_enum)]
    pub json_fallback: Option<JsonFallbackArg>,
}

/// JSON fallback argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum JsonFallbackArg {
    /// Log the raw body as text
    #[value(name = "text")]
    Text,
    /// Log only that parsing failed
    #[value(name = "omit")]
    Omit,
}

impl From<JsonFallbackArg> for crate::sender::JsonFallback {
    fn from(arg: JsonFallbackArg) -> Self {
        match arg {
            JsonFallbackArg::Text => Self::Text,
            JsonFallbackArg::Omit => Self::Omit,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns the `send` arguments, if this is the send command.
    #[must_use]
    pub const fn send_args(&self) -> Option<&SendArgs> {
        match &self.command {
            Command::Send(args) => Some(args),
            Command::Init { .. } => None,
        }
    }
}
