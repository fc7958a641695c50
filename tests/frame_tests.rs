//! Unit tests for the frame codec: packing, unpacking, checksum
//! validation and the length-escape extension.

use ofen_rs::ofen::frame::{calc_checksum, decode_frame, encode_frame, pack_frame, unpack_frame};
use ofen_rs::util::hex::hex_to_bytes;
use ofen_rs::FramingError;

/// Tests that a small payload frames to the expected wire text.
#[test]
fn test_encode_read_state_command() {
    // read fireplace state: single 0x00 opcode byte
    assert_eq!(encode_frame(&[0x00]).unwrap(), "aacc335501000000");
    // read date/time: single 0x22 opcode byte
    assert_eq!(encode_frame(&[0x22]).unwrap(), "aacc335501222200");
}

/// Tests that encoding and decoding are inverse operations.
#[test]
fn test_round_trip() {
    let payload = hex_to_bytes("0013009632011e00000032");
    let encoded = encode_frame(&payload).unwrap();
    assert_eq!(decode_frame(&encoded).unwrap(), payload);
}

/// Tests the length-field escape at its documented boundaries.
#[test]
fn test_length_escape_boundary() {
    // 254 bytes: single length byte 0xFE
    let frame = pack_frame(&vec![0xAB; 254]).unwrap();
    assert_eq!(frame[4], 0xFE);
    assert_ne!(frame[5], 0xFF);
    assert_eq!(unpack_frame(&frame).unwrap().len(), 254);

    // 255 bytes: escape byte followed by 0x00
    let frame = pack_frame(&vec![0xAB; 255]).unwrap();
    assert_eq!(&frame[4..6], &[0xFF, 0x00]);
    assert_eq!(unpack_frame(&frame).unwrap().len(), 255);

    // 509 bytes: escape byte followed by 0xFE
    let frame = pack_frame(&vec![0xAB; 509]).unwrap();
    assert_eq!(&frame[4..6], &[0xFF, 0xFE]);
    assert_eq!(unpack_frame(&frame).unwrap().len(), 509);

    // 510 bytes exceed a single escape step
    assert_eq!(
        pack_frame(&vec![0xAB; 510]),
        Err(FramingError::PayloadTooLarge(510))
    );
}

/// Tests that a frame without the magic header is rejected.
#[test]
fn test_missing_header() {
    assert_eq!(
        decode_frame("bbcc335501000000"),
        Err(FramingError::MissingHeader)
    );
    assert_eq!(decode_frame(""), Err(FramingError::MissingHeader));
}

/// Tests that a declared/actual payload length disagreement is rejected.
#[test]
fn test_length_mismatch() {
    // header + length 3 + two payload bytes + checksum
    assert_eq!(
        decode_frame("aacc33550341420083"),
        Err(FramingError::LengthMismatch {
            declared: 3,
            actual: 2
        })
    );
}

/// Tests that a corrupted checksum is rejected with both values reported.
#[test]
fn test_checksum_mismatch() {
    // payload [0x01, 0x02], correct checksum would be 0x0003
    assert_eq!(
        decode_frame("aacc33550201020400"),
        Err(FramingError::ChecksumMismatch {
            calculated: 0x0003,
            claimed: 0x0004
        })
    );
}

/// Tests that non-hex wire text is rejected before frame parsing.
#[test]
fn test_invalid_hex() {
    assert!(matches!(
        decode_frame("zzcc335501000000"),
        Err(FramingError::InvalidHex(_))
    ));
    assert!(matches!(
        decode_frame("aacc3355010000000"),
        Err(FramingError::InvalidHex(_))
    ));
}

/// Tests the checksum definition directly.
#[test]
fn test_checksum_definition() {
    assert_eq!(calc_checksum(&[]), 0);
    assert_eq!(calc_checksum(&[0x01, 0x02, 0x03]), 6);
    assert_eq!(calc_checksum(&[0xFF; 257]), (257 * 255 % 65536) as u16);
}

/// Property-based tests for round-trip framing and checksum sensitivity.
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// decode(encode(p)) == p for every representable payload length.
        #[test]
        fn prop_round_trip(payload in proptest::collection::vec(any::<u8>(), 0..=509)) {
            let encoded = encode_frame(&payload).unwrap();
            prop_assert_eq!(decode_frame(&encoded).unwrap(), payload);
        }

        /// Flipping any single bit in the payload or checksum region makes
        /// decoding fail with a checksum mismatch. A single-bit flip always
        /// shifts the sum by a power of two, so no collision is possible.
        #[test]
        fn prop_single_bit_flip_breaks_checksum(
            payload in proptest::collection::vec(any::<u8>(), 1..=64),
            byte_offset in 0usize..66,
            bit in 0u8..8,
        ) {
            let mut frame = pack_frame(&payload).unwrap();
            let region_start = 5; // header + single length byte
            let index = region_start + byte_offset % (payload.len() + 2);
            frame[index] ^= 1 << bit;
            prop_assert!(
                matches!(
                    unpack_frame(&frame),
                    Err(FramingError::ChecksumMismatch { .. })
                ),
                "expected ChecksumMismatch error"
            );
        }
    }
}
