use std::io::{self, Read};

use flate2::bufread::GzDecoder;
use tracing::debug;

use crate::error::DecodeError;

/// Default ceiling on the decompressed document size (256 MiB).
pub const MAX_PAYLOAD_DECOMPRESSED_SIZE: usize = 256 * 1024 * 1024;

/// Decompress a complete gzip stream.
///
/// The whole input is consumed one member at a time: each member is
/// inflated and its CRC-32 and length trailer verified, so a stream that
/// is cut short or altered fails instead of yielding a prefix. Zero bytes
/// between or after members are padding and are skipped; any other
/// trailing bytes must start a valid member.
///
/// At most `limit + 1` bytes are inflated. If the output would exceed
/// `limit`, decompression stops and an error is returned.
///
/// # Errors
///
/// - [`DecodeError::DecompressFailed`] if the input is empty, does not
///   start with the gzip magic, is truncated, fails its trailer check, or
///   carries trailing bytes that are neither padding nor a gzip member.
/// - [`DecodeError::DecompressionBomb`] if the output exceeds `limit`.
pub fn decompress(data: &[u8], limit: usize) -> Result<Vec<u8>, DecodeError> {
    if data.is_empty() {
        return Err(DecodeError::DecompressFailed(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "empty gzip stream",
        )));
    }

    let mut decompressed = Vec::new();
    let mut remaining = data;
    let mut members = 0usize;
    while !remaining.is_empty() {
        let room = limit - decompressed.len();
        let ceiling = u64::try_from(room).unwrap_or(u64::MAX).saturating_add(1);

        let mut member = GzDecoder::new(remaining);
        member
            .by_ref()
            .take(ceiling)
            .read_to_end(&mut decompressed)
            .map_err(DecodeError::DecompressFailed)?;
        if decompressed.len() > limit {
            return Err(DecodeError::DecompressionBomb { limit });
        }
        members += 1;

        remaining = member.into_inner();
        let padding = remaining.iter().take_while(|&&b| b == 0).count();
        remaining = &remaining[padding..];
    }

    debug!(
        compressed_len = data.len(),
        decompressed_len = decompressed.len(),
        members,
        "gzip stage complete"
    );
    Ok(decompressed)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::Compression;
    use flate2::write::GzEncoder;

    use super::*;

    fn gzip(data: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn roundtrip() {
        let data = br#"{"logGroup":"/app/test"}"#;
        let decompressed = decompress(&gzip(data), 1024).unwrap();
        assert_eq!(decompressed, data);
    }

    #[test]
    fn concatenated_members_are_all_consumed() {
        let mut data = gzip(b"first,");
        data.extend_from_slice(&gzip(b"second"));
        assert_eq!(decompress(&data, 1024).unwrap(), b"first,second");
    }

    #[test]
    fn trailing_zero_padding_is_skipped() {
        let mut data = gzip(br#"{"owner":"o"}"#);
        data.extend_from_slice(&[0, 0, 0, 0]);
        assert_eq!(decompress(&data, 1024).unwrap(), br#"{"owner":"o"}"#);
    }

    #[test]
    fn padding_between_members_is_skipped() {
        let mut data = gzip(b"first,");
        data.extend_from_slice(&[0; 3]);
        data.extend_from_slice(&gzip(b"second"));
        data.push(0);
        assert_eq!(decompress(&data, 1024).unwrap(), b"first,second");
    }

    #[test]
    fn rejects_trailing_garbage() {
        let mut data = gzip(b"hello");
        data.extend_from_slice(b"junk");
        assert!(matches!(
            decompress(&data, 1024),
            Err(DecodeError::DecompressFailed(_))
        ));
    }

    #[test]
    fn rejects_zero_padding_alone() {
        assert!(matches!(
            decompress(&[0; 16], 1024),
            Err(DecodeError::DecompressFailed(_))
        ));
    }

    #[test]
    fn limit_spans_all_members() {
        let mut data = gzip(&[b'a'; 40]);
        data.extend_from_slice(&gzip(&[b'b'; 40]));
        assert!(matches!(
            decompress(&data, 64),
            Err(DecodeError::DecompressionBomb { limit: 64 })
        ));
        assert_eq!(decompress(&data, 80).unwrap().len(), 80);
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(
            decompress(&[], 1024),
            Err(DecodeError::DecompressFailed(_))
        ));
    }

    #[test]
    fn rejects_bad_magic() {
        let mut data = gzip(b"hello");
        data[0] = 0x00;
        assert!(matches!(
            decompress(&data, 1024),
            Err(DecodeError::DecompressFailed(_))
        ));
    }

    #[test]
    fn rejects_plain_text() {
        assert!(matches!(
            decompress(b"this is not gzip data", 1024),
            Err(DecodeError::DecompressFailed(_))
        ));
    }

    #[test]
    fn rejects_truncated_stream() {
        let data = gzip(&b"log line\n".repeat(100));
        let truncated = &data[..data.len() / 2];
        assert!(matches!(
            decompress(truncated, 1 << 20),
            Err(DecodeError::DecompressFailed(_))
        ));
    }

    #[test]
    fn rejects_missing_trailer() {
        let data = gzip(b"hello world");
        let truncated = &data[..data.len() - 4];
        assert!(matches!(
            decompress(truncated, 1024),
            Err(DecodeError::DecompressFailed(_))
        ));
    }

    #[test]
    fn rejects_checksum_mismatch() {
        let mut data = gzip(b"hello world");
        // The CRC-32 occupies the 8th-to-5th bytes from the end.
        let crc_offset = data.len() - 8;
        data[crc_offset] ^= 0xFF;
        assert!(matches!(
            decompress(&data, 1024),
            Err(DecodeError::DecompressFailed(_))
        ));
    }

    #[test]
    fn rejects_bomb() {
        let data = gzip(&vec![b'x'; 10_000]);
        assert!(matches!(
            decompress(&data, 100),
            Err(DecodeError::DecompressionBomb { limit: 100 })
        ));
    }

    #[test]
    fn output_exactly_at_limit_is_accepted() {
        let data = gzip(&[b'y'; 64]);
        assert_eq!(decompress(&data, 64).unwrap().len(), 64);
    }
}
