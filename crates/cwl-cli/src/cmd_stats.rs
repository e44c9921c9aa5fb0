/// Implementation of `cwl stats`.
///
/// Decodes the payload and prints a summary of its size at each stage,
/// the compression ratio, and the shape of the batch.
///
/// # Example output
///
/// ```text
/// Log Group:    /aws/lambda/orders
/// Log Stream:   2024/01/01/[$LATEST]abc
/// Message Type: DATA_MESSAGE
///
/// Payload:      248 base64 chars
/// Compressed:   185 bytes (gzip)
/// JSON:         412 bytes  (ratio 2.23x)
///
/// Events:       3
/// Filters:      1
/// Time span:    1700000000000 .. 1700000000250  (250 ms)
/// ```
use anyhow::{Context, Result};
use cwl_decoder::LogsDecoder;

use crate::StatsArgs;
use crate::input::read_event;

/// Run the `cwl stats` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read or the payload fails any
/// decode stage.
pub fn run(args: &StatsArgs) -> Result<()> {
    let event = read_event(&args.event, args.raw)?;
    let decoded = LogsDecoder::new()
        .decode(&event.awslogs.data)
        .with_context(|| format!("failed to decode {}", args.event.display()))?;
    let batch = &decoded.batch;

    let kind = if batch.is_control_message() {
        "  (control)"
    } else {
        ""
    };

    println!("Log Group:    {}", batch.log_group);
    println!("Log Stream:   {}", batch.log_stream);
    println!("Message Type: {}{kind}", batch.message_type);
    println!();
    println!("Payload:      {} base64 chars", event.awslogs.data.len());
    println!("Compressed:   {} bytes (gzip)", decoded.compressed_len);
    println!(
        "JSON:         {} bytes  (ratio {:.2}x)",
        decoded.decompressed_len,
        decoded.compression_ratio()
    );
    println!();
    println!("Events:       {}", batch.log_events.len());
    println!("Filters:      {}", batch.subscription_filters.len());
    match batch.time_range() {
        Some((first, last)) => println!(
            "Time span:    {first} .. {last}  ({} ms)",
            last.saturating_sub(first)
        ),
        None => println!("Time span:    -"),
    }
    Ok(())
}
