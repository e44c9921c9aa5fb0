use cwl_decoder::DecodeError;

/// Errors surfaced to the host by [`LogsHandler`](crate::LogsHandler).
///
/// ```text
/// ┌──────────────┬──────────────────────────────────────────────────┐
/// │ Variant      │ Cause                                            │
/// ├──────────────┼──────────────────────────────────────────────────┤
/// │ InvalidEvent │ Invocation JSON lacks `awslogs.data`             │
/// │ Decode       │ Any decoder stage failed (see `DecodeError`)     │
/// │ Io           │ The report sink refused a write                  │
/// └──────────────┴──────────────────────────────────────────────────┘
/// ```
///
/// None of these become a non-200 response. The handler returns them as
/// `Err` and the host decides how to report the failed invocation.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("invalid invocation event")]
    InvalidEvent(#[source] serde_json::Error),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("failed to write report")]
    Io(#[from] std::io::Error),
}
