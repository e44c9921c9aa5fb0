use serde::{Deserialize, Serialize};

/// One record within a [`LogBatch`](crate::LogBatch).
///
/// All three fields are required. `timestamp` must be a JSON integer; a
/// string or floating-point value is rejected as a schema mismatch rather
/// than coerced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEvent {
    /// Event time, milliseconds since the Unix epoch (not validated).
    pub timestamp: i64,
    /// Free-form message text. May contain newlines or any other text.
    pub message: String,
    /// Per-event identifier assigned by the log service.
    pub id: String,
}

impl LogEvent {
    pub fn new(timestamp: i64, message: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            timestamp,
            message: message.into(),
            id: id.into(),
        }
    }
}
