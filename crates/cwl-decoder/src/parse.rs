use cwl_types::LogBatch;
use serde_json::Value;
use tracing::debug;

use crate::error::DecodeError;

/// Parse decompressed bytes into a [`LogBatch`].
///
/// Two steps, so the two failure classes stay distinct: the bytes are
/// first parsed as an untyped JSON document (syntax), then validated
/// against the batch shape by [`LogBatch::from_value`] (schema).
///
/// # Errors
///
/// - [`DecodeError::Parse`] if `raw` is not well-formed UTF-8 JSON.
/// - [`DecodeError::Schema`] if the document lacks a required field or a
///   field has the wrong type.
pub fn parse_batch(raw: &[u8]) -> Result<LogBatch, DecodeError> {
    let document: Value = serde_json::from_slice(raw).map_err(DecodeError::Parse)?;
    let batch = LogBatch::from_value(document)?;
    debug!(
        log_group = %batch.log_group,
        events = batch.log_events.len(),
        "json stage complete"
    );
    Ok(batch)
}
