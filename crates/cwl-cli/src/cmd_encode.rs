/// Implementation of `cwl encode`.
///
/// Reads a log batch in its decoded JSON form, validates it with the same
/// schema check the decoder applies, and writes the invocation event a
/// subscription would deliver for it (JSON → gzip → base64, wrapped in
/// `{"awslogs": {"data": ...}}`).
///
/// Useful for building test events:
///
/// ```text
/// $ cwl encode batch.json -o event.json
/// $ cwl process event.json
/// ```
use std::fs;
use std::io::{self, Write as _};

use anyhow::{Context, Result};
use cwl_driver::InvocationEvent;
use cwl_encoder::LogBatchEncoder;
use cwl_types::LogBatch;
use serde_json::Value;
use tracing::debug;

use crate::EncodeArgs;
use crate::input::read_text;

/// Run the `cwl encode` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read, is not a valid log batch,
/// the compression level is out of range, or the output cannot be written.
pub fn run(args: &EncodeArgs) -> Result<()> {
    let text = read_text(&args.input)?;
    let document: Value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", args.input.display()))?;
    let batch = LogBatch::from_value(document)
        .with_context(|| format!("{} is not a log batch", args.input.display()))?;

    let events = batch.log_events.len();
    let data = LogBatchEncoder::from_batch(batch)
        .compression_level(args.level)
        .encode()
        .context("failed to encode log batch")?;
    debug!(events, level = args.level, payload_len = data.len(), "encoded log batch");

    let rendered = if args.raw {
        data
    } else {
        serde_json::to_string_pretty(&InvocationEvent::new(data))
            .context("cannot serialize invocation event")?
    };

    if let Some(path) = &args.output {
        fs::write(path, format!("{rendered}\n"))
            .with_context(|| format!("cannot write {}", path.display()))?;
    } else {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{rendered}").context("cannot write to stdout")?;
    }
    Ok(())
}
