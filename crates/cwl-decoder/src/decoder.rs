use cwl_types::LogBatch;
use tracing::debug;

use crate::config::DecoderConfig;
use crate::decompression;
use crate::error::DecodeError;
use crate::parse;
use crate::text;

/// The result of decoding a subscription payload.
///
/// Carries the validated batch plus the intermediate sizes, which the
/// CLI's `stats` command reports.
///
/// ```text
/// ┌───────────────────────────────────────────────────────┐
/// │ DecodedBatch                                          │
/// │   batch: LogBatch          ← metadata + ordered events│
/// │   compressed_len: usize    ← bytes after base64       │
/// │   decompressed_len: usize  ← bytes of JSON text       │
/// └───────────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedBatch {
    pub batch: LogBatch,
    pub compressed_len: usize,
    pub decompressed_len: usize,
}

impl DecodedBatch {
    /// Decompressed size divided by compressed size.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compression_ratio(&self) -> f64 {
        if self.compressed_len == 0 {
            return 0.0;
        }
        self.decompressed_len as f64 / self.compressed_len as f64
    }
}

/// Synchronous decoder for CloudWatch Logs subscription payloads.
///
/// Decoding is a fixed, straight-line sequence of three stages, each of
/// which must succeed completely before the next begins:
///
///   1. **Text**: reverse the base64 encoding ([`text::decode_text`]).
///   2. **Decompression**: inflate the full gzip stream
///      ([`decompression::decompress`]), bounded by
///      [`DecoderConfig::max_decompressed_size`].
///   3. **Parse**: parse JSON and validate the batch shape
///      ([`parse::parse_batch`]).
///
/// The decoder holds only its configuration; decoding the same payload
/// twice yields equal results.
///
/// # Example
///
/// ```rust
/// use cwl_decoder::LogsDecoder;
/// use cwl_encoder::LogBatchEncoder;
///
/// let payload = LogBatchEncoder::new("/app/test", "s1", "123456789012")
///     .add_subscription_filter("f1")
///     .add_event(1_700_000_000_000, "hello", "e1")
///     .encode()
///     .unwrap();
///
/// let decoded = LogsDecoder::new().decode(&payload).unwrap();
/// assert_eq!(decoded.batch.log_events.len(), 1);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct LogsDecoder {
    config: DecoderConfig,
}

impl LogsDecoder {
    /// Create a decoder with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode a base64 text payload into a validated [`LogBatch`].
    ///
    /// # Errors
    ///
    /// - [`DecodeError::InvalidEncoding`] if `payload` is not valid base64.
    /// - [`DecodeError::DecompressFailed`] if the decoded bytes are not a
    ///   complete gzip stream.
    /// - [`DecodeError::DecompressionBomb`] if the JSON text would exceed
    ///   the configured size limit.
    /// - [`DecodeError::Parse`] if the JSON is malformed.
    /// - [`DecodeError::Schema`] if a required field is missing or mistyped.
    pub fn decode(&self, payload: &str) -> Result<DecodedBatch, DecodeError> {
        let compressed = text::decode_text(payload)?;
        let raw = decompression::decompress(&compressed, self.config.max_decompressed_size)?;
        let batch = parse::parse_batch(&raw)?;

        debug!(
            log_group = %batch.log_group,
            log_stream = %batch.log_stream,
            events = batch.log_events.len(),
            "decoded log batch"
        );

        Ok(DecodedBatch {
            batch,
            compressed_len: compressed.len(),
            decompressed_len: raw.len(),
        })
    }
}
