use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use tracing::debug;

use crate::error::DecodeError;

/// Reverse the text-safe encoding of a subscription payload.
///
/// Uses the standard base64 alphabet (`A-Z a-z 0-9 + /`) with canonical
/// `=` padding. Whitespace, URL-safe characters, missing padding and
/// non-zero trailing bits are all rejected; nothing is skipped silently.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidEncoding`] if `payload` is not valid
/// base64.
pub fn decode_text(payload: &str) -> Result<Vec<u8>, DecodeError> {
    let bytes = STANDARD.decode(payload)?;
    debug!(
        encoded_len = payload.len(),
        decoded_len = bytes.len(),
        "base64 stage complete"
    );
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_padded_input() {
        assert_eq!(decode_text("aGVsbG8=").unwrap(), b"hello");
    }

    #[test]
    fn empty_input_decodes_to_nothing() {
        assert!(decode_text("").unwrap().is_empty());
    }

    #[test]
    fn rejects_invalid_alphabet() {
        let result = decode_text("aGVs*G8=");
        assert!(matches!(result, Err(DecodeError::InvalidEncoding(_))));
    }

    #[test]
    fn rejects_missing_padding() {
        let result = decode_text("aGVsbG8");
        assert!(matches!(result, Err(DecodeError::InvalidEncoding(_))));
    }

    #[test]
    fn rejects_url_safe_alphabet() {
        // 0xFB 0xFF encodes to "-_8=" in the URL-safe alphabet.
        let result = decode_text("-_8=");
        assert!(matches!(result, Err(DecodeError::InvalidEncoding(_))));
    }

    #[test]
    fn rejects_embedded_newline() {
        let result = decode_text("aGVs\nbG8=");
        assert!(matches!(result, Err(DecodeError::InvalidEncoding(_))));
    }
}
