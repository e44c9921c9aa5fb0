/// Implementation of `cwl validate`.
///
/// Runs the decode stages one at a time and prints a check line for each,
/// stopping at the first failure. The exit code is 0 when every stage
/// passes and 1 otherwise.
///
/// # Success output
///
/// ```text
/// ✓ Encoding: 248 base64 chars → 185 bytes
/// ✓ Decompression: gzip stream → 412 bytes
/// ✓ Parse: well-formed JSON
/// ✓ Schema: DATA_MESSAGE batch with 3 events
/// ```
///
/// # Failure output
///
/// ```text
/// ✓ Encoding: 16 base64 chars → 12 bytes
/// ✗ Decompression: gzip decompression failed: invalid gzip header
/// ```
use std::error::Error;

use anyhow::{Result, anyhow};
use cwl_decoder::decompression::decompress;
use cwl_decoder::text::decode_text;
use cwl_decoder::{DecodeError, DecoderConfig};
use cwl_types::LogBatch;
use serde_json::Value;

use crate::ValidateArgs;
use crate::input::read_event;

/// Run the `cwl validate` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read or any decode stage fails.
pub fn run(args: &ValidateArgs) -> Result<()> {
    let event = read_event(&args.event, args.raw)?;
    let data = &event.awslogs.data;

    let compressed = decode_text(data).map_err(fail)?;
    println!(
        "✓ Encoding: {} base64 chars → {} bytes",
        data.len(),
        compressed.len()
    );

    let raw = decompress(&compressed, DecoderConfig::default().max_decompressed_size)
        .map_err(fail)?;
    println!("✓ Decompression: gzip stream → {} bytes", raw.len());

    let document: Value = serde_json::from_slice(&raw)
        .map_err(DecodeError::Parse)
        .map_err(fail)?;
    println!("✓ Parse: well-formed JSON");

    let batch = LogBatch::from_value(document)
        .map_err(DecodeError::from)
        .map_err(fail)?;
    let count = batch.log_events.len();
    println!(
        "✓ Schema: {} batch with {count} event{}",
        batch.message_type,
        if count == 1 { "" } else { "s" }
    );
    Ok(())
}

/// Print the `✗` line for the failing stage and turn it into an error.
fn fail(e: DecodeError) -> anyhow::Error {
    println!("✗ {}: {}", stage_label(&e), describe(&e));
    anyhow!("validation failed at {} stage", e.kind().as_str())
}

/// The error message followed by each of its causes, `: `-separated.
fn describe(e: &dyn Error) -> String {
    let mut text = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}

fn stage_label(e: &DecodeError) -> &'static str {
    match e {
        DecodeError::InvalidEncoding(_) => "Encoding",
        DecodeError::DecompressFailed(_) | DecodeError::DecompressionBomb { .. } => {
            "Decompression"
        }
        DecodeError::Parse(_) => "Parse",
        DecodeError::Schema(_) => "Schema",
    }
}
