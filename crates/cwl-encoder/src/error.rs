/// Errors that can occur while encoding a log batch into a payload.
///
/// ```text
///   EncodeError
///   ├── InvalidLevel         ← gzip level outside 0..=9
///   ├── Serialize            ← serde_json could not render the batch
///   └── Io(std::io::Error)   ← gzip writer failure
/// ```
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("gzip compression level {level} is out of range (0-9)")]
    InvalidLevel { level: u32 },

    #[error("failed to serialize log batch")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
