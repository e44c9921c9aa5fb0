use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SchemaError;
use crate::event::LogEvent;
use crate::message_type::CONTROL_MESSAGE;

/// One delivered batch of log data: source metadata plus an ordered list
/// of events.
///
/// This is the decoded form of a CloudWatch Logs subscription payload.
/// Field names on the wire are camelCase:
///
/// ```text
/// ┌─────────────────────┬─────────────────────┬──────────────────────────┐
/// │ JSON key            │ Rust field          │ Type                     │
/// ├─────────────────────┼─────────────────────┼──────────────────────────┤
/// │ logGroup            │ log_group           │ String                   │
/// │ logStream           │ log_stream          │ String                   │
/// │ messageType         │ message_type        │ String                   │
/// │ owner               │ owner               │ String                   │
/// │ subscriptionFilters │ subscription_filters│ Vec<String>              │
/// │ logEvents           │ log_events          │ Vec<LogEvent>            │
/// └─────────────────────┴─────────────────────┴──────────────────────────┘
/// ```
///
/// Every field is required; there are no defaults. Keys not listed above
/// are ignored. `log_events` keeps the exact order of the source document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogBatch {
    pub log_group: String,
    pub log_stream: String,
    pub message_type: String,
    pub owner: String,
    pub subscription_filters: Vec<String>,
    pub log_events: Vec<LogEvent>,
}

impl LogBatch {
    /// Validate a parsed JSON document and convert it into a `LogBatch`.
    ///
    /// This is the only place where presence and type of the required
    /// fields are checked. The first problem found is reported; there is
    /// no partial result.
    ///
    /// # Errors
    ///
    /// - [`SchemaError::NotAnObject`] if `value` is not a JSON object.
    /// - [`SchemaError::Mismatch`] if any required field (including the
    ///   fields of each event) is missing or of the wrong type.
    pub fn from_value(value: Value) -> Result<Self, SchemaError> {
        let found = match &value {
            Value::Object(_) => return Ok(serde_json::from_value(value)?),
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Number(_) => "a number",
            Value::String(_) => "a string",
            Value::Array(_) => "an array",
        };
        Err(SchemaError::NotAnObject { found })
    }

    /// Whether this batch is a reachability check rather than log data.
    #[must_use]
    pub fn is_control_message(&self) -> bool {
        self.message_type == CONTROL_MESSAGE
    }

    /// Earliest and latest event timestamps, or `None` for an empty batch.
    ///
    /// Events are not assumed to be sorted.
    #[must_use]
    pub fn time_range(&self) -> Option<(i64, i64)> {
        let mut timestamps = self.log_events.iter().map(|e| e.timestamp);
        let first = timestamps.next()?;
        Some(timestamps.fold((first, first), |(lo, hi), ts| (lo.min(ts), hi.max(ts))))
    }
}
