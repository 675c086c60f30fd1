//! Executes the `send` command.

use std::io::{self, Write};

use request_sender::config::ValidatedConfig;
use request_sender::sender::{
    HttpRequestSenderFactory, RequestSender, RequestSenderFactory, Response, SendExtras,
};

/// Sends the configured request and returns the response, real or synthetic.
pub async fn execute(config: ValidatedConfig) -> Response {
    let ValidatedConfig {
        url,
        options,
        settings,
    } = config;

    let sender = HttpRequestSenderFactory::new().create(settings);
    sender
        .send(url.as_str(), &options, SendExtras::default())
        .await
}

/// Writes the status line followed by the body to `out`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_response(response: Response, out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "{} {}",
        response.status.as_u16(),
        response.status_text
    )?;

    let body = response.bytes();
    if !body.is_empty() {
        out.write_all(&body)?;
        if !body.ends_with(b"\n") {
            writeln!(out)?;
        }
    }

    out.flush()
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
