use std::io::Write;

use cwl_types::LogBatch;

use crate::error::DriverError;

/// Header line that separates batch metadata from the event blocks.
pub const EVENTS_HEADER: &str = "=== Log Events ===";

/// Width of the dashed line that closes each event block.
pub const EVENT_DELIMITER_WIDTH: usize = 50;

/// Renders a decoded batch to a text sink.
///
/// Implementations only read the batch. They are expected to be
/// stateless: the same batch always produces the same bytes.
pub trait BatchReporter {
    /// Write the report for `batch` to `out`.
    ///
    /// # Errors
    ///
    /// Returns `DriverError::Io` if the sink rejects the write.
    fn report(&self, batch: &LogBatch, out: &mut dyn Write) -> Result<(), DriverError>;
}

/// Plain-text reporter with a fixed, line-oriented layout.
///
/// Example output:
///
/// ```text
/// Log Group: /app/test
/// Log Stream: s1
/// Message Type: DATA_MESSAGE
/// Owner: 123456789012
/// Subscription Filters: ["f1"]
///
/// === Log Events ===
/// Timestamp: 1700000000000
/// Message: hello
/// ID: e1
/// --------------------------------------------------
/// ```
///
/// Subscription filters use Rust's default sequence rendering. Messages
/// are written verbatim, so a message containing newlines spans several
/// output lines.
pub struct TextReporter;

impl TextReporter {
    /// The report as individual lines, without terminators.
    #[must_use]
    pub fn lines(batch: &LogBatch) -> Vec<String> {
        let mut lines = Vec::with_capacity(7 + batch.log_events.len() * 4);
        lines.push(format!("Log Group: {}", batch.log_group));
        lines.push(format!("Log Stream: {}", batch.log_stream));
        lines.push(format!("Message Type: {}", batch.message_type));
        lines.push(format!("Owner: {}", batch.owner));
        lines.push(format!(
            "Subscription Filters: {:?}",
            batch.subscription_filters
        ));
        lines.push(String::new());
        lines.push(EVENTS_HEADER.to_string());

        let delimiter = "-".repeat(EVENT_DELIMITER_WIDTH);
        for event in &batch.log_events {
            lines.push(format!("Timestamp: {}", event.timestamp));
            lines.push(format!("Message: {}", event.message));
            lines.push(format!("ID: {}", event.id));
            lines.push(delimiter.clone());
        }
        lines
    }

    /// The full report, every line newline-terminated.
    #[must_use]
    pub fn render(batch: &LogBatch) -> String {
        let mut out = Self::lines(batch).join("\n");
        out.push('\n');
        out
    }
}

impl BatchReporter for TextReporter {
    /// Renders the whole report first, then hands it to the sink in a
    /// single write.
    fn report(&self, batch: &LogBatch, out: &mut dyn Write) -> Result<(), DriverError> {
        let rendered = Self::render(batch);
        out.write_all(rendered.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
