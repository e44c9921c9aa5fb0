use cwl_types::SchemaError;

/// Errors that can occur while decoding a subscription payload.
///
/// Each pipeline stage owns one or two variants. Every error is terminal
/// for the payload: there is no partial result and no retry.
///
/// Error hierarchy:
///
/// ```text
///   DecodeError
///   ├── InvalidEncoding     ← base64 alphabet, padding, or trailing bits wrong
///   ├── DecompressFailed    ← gzip magic, truncated stream, CRC/size mismatch
///   ├── DecompressionBomb   ← decompressed size exceeds the configured limit
///   ├── Parse               ← decompressed bytes are not well-formed JSON
///   └── Schema(SchemaError) ← valid JSON without the log batch shape
/// ```
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The payload text is not valid standard-alphabet base64.
    #[error("payload is not valid base64")]
    InvalidEncoding(#[from] base64::DecodeError),

    /// The decoded bytes are not a complete, valid gzip stream.
    ///
    /// Covers a wrong magic header, a stream that ends early, and a
    /// trailer whose CRC-32 or length does not match the data.
    #[error("gzip decompression failed")]
    DecompressFailed(#[source] std::io::Error),

    /// Decompressed output grew past the configured limit.
    #[error("decompressed size exceeds limit of {limit} bytes")]
    DecompressionBomb { limit: usize },

    /// The decompressed bytes are not well-formed JSON.
    #[error("decompressed payload is not well-formed JSON")]
    Parse(#[source] serde_json::Error),

    /// Well-formed JSON that is missing a required field or has a field
    /// of the wrong type.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Coarse classification of a [`DecodeError`] by pipeline stage.
///
/// ```text
/// ┌───────────────┬──────────────────────────────────────────┐
/// │ Kind          │ Variants                                 │
/// ├───────────────┼──────────────────────────────────────────┤
/// │ Encoding      │ InvalidEncoding                          │
/// │ Decompression │ DecompressFailed, DecompressionBomb      │
/// │ Parse         │ Parse                                    │
/// │ Schema        │ Schema                                   │
/// └───────────────┴──────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Encoding,
    Decompression,
    Parse,
    Schema,
}

impl ErrorKind {
    /// Short lowercase name of the stage, for diagnostics.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Encoding => "encoding",
            Self::Decompression => "decompression",
            Self::Parse => "parse",
            Self::Schema => "schema",
        }
    }
}

impl DecodeError {
    /// The pipeline stage that produced this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidEncoding(_) => ErrorKind::Encoding,
            Self::DecompressFailed(_) | Self::DecompressionBomb { .. } => ErrorKind::Decompression,
            Self::Parse(_) => ErrorKind::Parse,
            Self::Schema(_) => ErrorKind::Schema,
        }
    }
}
