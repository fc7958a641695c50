//! # Hex Encoding/Decoding Utilities
//!
//! Thin wrappers over the `hex` crate used by the framing codec and the
//! test suite. The wire format mandates lowercase hex with no separators;
//! decoding accepts either case but nothing else.

use crate::error::FramingError;

/// Encode bytes to the lowercase hex form used on the wire.
pub fn encode_hex(data: &[u8]) -> String {
    hex::encode(data)
}

/// Decode a wire hex string to bytes.
///
/// Accepts both uppercase and lowercase digits. Odd-length or non-hex
/// input fails with [`FramingError::InvalidHex`].
pub fn decode_hex(hex_str: &str) -> Result<Vec<u8>, FramingError> {
    hex::decode(hex_str).map_err(|e| FramingError::InvalidHex(e.to_string()))
}

/// Helper for creating test data from hex strings.
///
/// Panics on invalid hex (intended for test code only).
pub fn hex_to_bytes(hex_str: &str) -> Vec<u8> {
    decode_hex(hex_str).expect("Invalid hex in test data")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_roundtrip() {
        let data = vec![0xAA, 0xCC, 0x33, 0x55, 0x01, 0x22];
        let encoded = encode_hex(&data);
        assert_eq!(encoded, "aacc33550122");
        assert_eq!(decode_hex(&encoded).unwrap(), data);
    }

    #[test]
    fn test_decode_uppercase() {
        assert_eq!(decode_hex("AACC").unwrap(), vec![0xAA, 0xCC]);
    }

    #[test]
    fn test_decode_errors() {
        assert!(matches!(decode_hex("a"), Err(FramingError::InvalidHex(_))));
        assert!(matches!(decode_hex("zz"), Err(FramingError::InvalidHex(_))));
    }

    #[test]
    fn test_hex_to_bytes() {
        assert_eq!(hex_to_bytes("0022"), vec![0x00, 0x22]);
    }
}
