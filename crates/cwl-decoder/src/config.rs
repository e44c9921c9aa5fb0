use crate::decompression::MAX_PAYLOAD_DECOMPRESSED_SIZE;

/// Configuration for [`LogsDecoder`](crate::LogsDecoder).
///
/// The only tunable is the decompression ceiling. Subscription payloads
/// are small (the service caps a delivery at roughly 1 MiB compressed),
/// so the default leaves generous headroom while still refusing a
/// crafted stream that would inflate without bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Largest decompressed document accepted, in bytes.
    pub max_decompressed_size: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_decompressed_size: MAX_PAYLOAD_DECOMPRESSED_SIZE,
        }
    }
}
