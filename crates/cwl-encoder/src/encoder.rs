use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use cwl_types::{CONTROL_MESSAGE, DATA_MESSAGE, LogBatch, LogEvent};

use crate::compression::{self, DEFAULT_COMPRESSION_LEVEL};
use crate::error::EncodeError;

/// Encode a batch the way the log service delivers it: JSON text, gzip,
/// then standard base64 with padding.
///
/// This is the exact inverse of `LogsDecoder::decode`.
///
/// # Errors
///
/// See [`compression::compress`]; serialization of a `LogBatch` itself
/// cannot fail in practice but is still surfaced as
/// [`EncodeError::Serialize`].
pub fn encode_batch(batch: &LogBatch, level: u32) -> Result<String, EncodeError> {
    let json = serde_json::to_vec(batch)?;
    let compressed = compression::compress(&json, level)?;
    Ok(STANDARD.encode(compressed))
}

/// Builder for subscription payloads.
///
/// Used to produce fixtures and test inputs: metadata is set up front,
/// events and filters are appended in order, and `.encode()` runs the
/// inverse pipeline.
///
/// ```rust
/// use cwl_encoder::LogBatchEncoder;
///
/// let payload = LogBatchEncoder::new("/aws/lambda/orders", "2024/01/01/[$LATEST]abc", "123456789012")
///     .add_subscription_filter("errors-to-kinesis")
///     .add_event(1_700_000_000_000, "START RequestId: 1", "e1")
///     .add_event(1_700_000_000_250, "END RequestId: 1", "e2")
///     .encode()
///     .unwrap();
///
/// assert!(payload.starts_with("H4sI"));
/// ```
///
/// The builder defaults to `DATA_MESSAGE`; call
/// [`control_message`](Self::control_message) to produce the
/// reachability check the service sends when a subscription is created.
pub struct LogBatchEncoder {
    batch: LogBatch,
    level: u32,
}

impl LogBatchEncoder {
    /// Start a `DATA_MESSAGE` batch with no filters and no events.
    #[must_use]
    pub fn new(log_group: &str, log_stream: &str, owner: &str) -> Self {
        Self {
            batch: LogBatch {
                log_group: log_group.to_string(),
                log_stream: log_stream.to_string(),
                message_type: DATA_MESSAGE.to_string(),
                owner: owner.to_string(),
                subscription_filters: Vec::new(),
                log_events: Vec::new(),
            },
            level: DEFAULT_COMPRESSION_LEVEL,
        }
    }

    /// Start from an existing batch, e.g. one read from a JSON file.
    #[must_use]
    pub fn from_batch(batch: LogBatch) -> Self {
        Self {
            batch,
            level: DEFAULT_COMPRESSION_LEVEL,
        }
    }

    pub fn message_type(&mut self, message_type: &str) -> &mut Self {
        self.batch.message_type = message_type.to_string();
        self
    }

    pub fn control_message(&mut self) -> &mut Self {
        self.message_type(CONTROL_MESSAGE)
    }

    pub fn add_subscription_filter(&mut self, name: &str) -> &mut Self {
        self.batch.subscription_filters.push(name.to_string());
        self
    }

    /// Append an event. Events are encoded in the order they are added.
    pub fn add_event(
        &mut self,
        timestamp: i64,
        message: impl Into<String>,
        id: impl Into<String>,
    ) -> &mut Self {
        self.batch
            .log_events
            .push(LogEvent::new(timestamp, message, id));
        self
    }

    /// Set the gzip level (0–9). Out-of-range values are reported by
    /// [`encode`](Self::encode).
    pub fn compression_level(&mut self, level: u32) -> &mut Self {
        self.level = level;
        self
    }

    /// The batch accumulated so far.
    #[must_use]
    pub fn build(&self) -> LogBatch {
        self.batch.clone()
    }

    /// Produce the base64 payload text.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::InvalidLevel`] if the configured level is
    /// above 9, or [`EncodeError::Io`] if compression fails.
    pub fn encode(&self) -> Result<String, EncodeError> {
        encode_batch(&self.batch, self.level)
    }
}
