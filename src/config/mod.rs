//! Configuration layer for the `request-sender` tool.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`], [`SendArgs`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments**
//! 2. **TOML config file**
//! 3. **Built-in defaults**
//!
//! Headers are merged: TOML headers first, then CLI headers replace entries
//! with the same name.
//!
//! `--no-body-log` only disables body logging. A TOML `log_bodies = false`
//! cannot be re-enabled from the command line.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;


pub use cli::{Cli, Command, JsonFallbackArg, SendArgs};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
