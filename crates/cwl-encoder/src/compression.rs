use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;

use crate::error::EncodeError;

/// Default gzip compression level (0–9 scale), matching `gzip -6`.
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 6;

/// Highest level flate2 accepts.
pub const MAX_COMPRESSION_LEVEL: u32 = 9;

/// Compress a byte slice into a single gzip member.
///
/// Unlike a block codec there is no "only if smaller" shortcut: the
/// subscription wire format is always gzip, so the output is produced
/// even when it is larger than the input.
///
/// # Errors
///
/// - [`EncodeError::InvalidLevel`] if `level` is above 9.
/// - [`EncodeError::Io`] if the gzip writer fails.
pub fn compress(data: &[u8], level: u32) -> Result<Vec<u8>, EncodeError> {
    if level > MAX_COMPRESSION_LEVEL {
        return Err(EncodeError::InvalidLevel { level });
    }
    let mut encoder = GzEncoder::new(Vec::with_capacity(data.len() / 4), Compression::new(level));
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}
