/// Implementation of `cwl process`.
///
/// Plays the host's role for a single invocation: loads the event, runs
/// [`LogsHandler::handle`] with stdout as the report sink, and optionally
/// prints the returned response.
///
/// ```text
/// $ cwl process event.json --emit-response
/// Log Group: /app/test
/// ...
/// --------------------------------------------------
/// {"statusCode":200,"body":"\"Log processing completed successfully\""}
/// ```
///
/// A payload that fails to decode produces no stdout output at all; the
/// error is reported on stderr and the exit code is 1.
use std::io::{self, Write as _};

use anyhow::{Context, Result};
use cwl_driver::{DriverConfig, LogsHandler};
use tracing::debug;

use crate::ProcessArgs;
use crate::input::read_event;

/// Run the `cwl process` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read, the event is malformed,
/// the payload fails any decode stage, or stdout cannot be written.
pub fn run(args: &ProcessArgs) -> Result<()> {
    let event = read_event(&args.event, args.raw)?;

    let mut config = DriverConfig::default();
    if let Some(limit) = args.max_decompressed_size {
        config = config.with_max_decompressed_size(limit);
    }
    debug!(
        max_decompressed_size = config.decoder.max_decompressed_size,
        "handler configured"
    );
    let handler = LogsHandler::new(config);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let response = handler
        .handle(&event, &mut handle)
        .with_context(|| format!("failed to process {}", args.event.display()))?;

    if args.emit_response {
        let json = serde_json::to_string(&response).context("cannot serialize response")?;
        writeln!(handle, "{json}").context("cannot write to stdout")?;
    }
    Ok(())
}
