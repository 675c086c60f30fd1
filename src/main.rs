//! request-sender: HTTP requests with lifecycle logging
//!
//! Entry point for the request-sender application.

use request_sender::config::{Cli, Command, SendArgs, ValidatedConfig, write_default_config};
use std::process::ExitCode;

mod app;
mod run;

use app::{exit_code, print_config_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match &cli.command {
        Command::Init { output } => handle_init(output),
        Command::Send(args) => handle_send(&cli, args),
    }
}

/// Handles the `init` subcommand.
fn handle_init(output: &std::path::Path) -> ExitCode {
    match write_default_config(output) {
        Ok(()) => {
            println!("Configuration template written to: {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}

/// Handles the `send` subcommand.
#[cfg(not(tarpaulin_include))]
fn handle_send(cli: &Cli, args: &SendArgs) -> ExitCode {
    // Load and validate configuration
    let config = match ValidatedConfig::load(cli.config.as_deref(), args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    setup_tracing(cli.verbose);
    tracing::debug!("{config}");

    run_application(config)
}

/// Sends the request and prints the response.
///
/// Excluded from coverage - requires async runtime.
#[cfg(not(tarpaulin_include))]
fn run_application(config: ValidatedConfig) -> ExitCode {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to create Tokio runtime: {e}");
            return exit_code::unsuccessful_response();
        }
    };

    let response = runtime.block_on(run::execute(config));
    let success = response.is_success();

    if let Err(e) = run::print_response(response, &mut std::io::stdout().lock()) {
        tracing::error!("Failed to print response: {e}");
    }

    if success {
        exit_code::SUCCESS
    } else {
        exit_code::unsuccessful_response()
    }
}
