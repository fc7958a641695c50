//! # Frame Codec
//!
//! This module packs and unpacks the binary frame exchanged with the
//! fireplace controller and converts it to and from its hex wire text.
//!
//! A frame is laid out as:
//!
//! ```text
//! AA CC 33 55 | length (1-2 bytes) | payload | checksum (u16 LE)
//! ```
//!
//! The length field holds the payload length directly for payloads below
//! 255 bytes. Longer payloads use an escape form: a first byte of `0xFF`
//! followed by a byte holding `length - 255`, which caps the payload at
//! 509 bytes. The checksum is the sum of the payload bytes modulo 65536.
//!
//! All functions here are pure; hex text in, bytes out, no I/O.

use crate::constants::{FRAME_CHECKSUM_LEN, FRAME_HEADER, FRAME_LENGTH_ESCAPE, FRAME_MAX_PAYLOAD};
use crate::error::FramingError;
use crate::util::hex::{decode_hex, encode_hex};

/// Encodes a payload into its hex wire representation.
///
/// Fails with [`FramingError::PayloadTooLarge`] if the payload cannot be
/// declared by a single escaped length field.
pub fn encode_frame(payload: &[u8]) -> Result<String, FramingError> {
    Ok(encode_hex(&pack_frame(payload)?))
}

/// Decodes a hex wire message back to its payload bytes.
///
/// Validates the magic header, the declared length and the checksum, each
/// with its own [`FramingError`] kind.
pub fn decode_frame(message: &str) -> Result<Vec<u8>, FramingError> {
    unpack_frame(&decode_hex(message)?)
}

/// Packs a payload into a binary frame.
pub fn pack_frame(payload: &[u8]) -> Result<Vec<u8>, FramingError> {
    if payload.len() > FRAME_MAX_PAYLOAD {
        return Err(FramingError::PayloadTooLarge(payload.len()));
    }

    let mut frame = Vec::with_capacity(FRAME_HEADER.len() + 2 + payload.len() + FRAME_CHECKSUM_LEN);
    frame.extend_from_slice(&FRAME_HEADER);

    let mut length = payload.len();
    if length >= FRAME_LENGTH_ESCAPE as usize {
        frame.push(FRAME_LENGTH_ESCAPE);
        length -= FRAME_LENGTH_ESCAPE as usize;
    }
    frame.push(length as u8);

    frame.extend_from_slice(payload);
    frame.extend_from_slice(&calc_checksum(payload).to_le_bytes());
    Ok(frame)
}

/// Unpacks a binary frame, returning the payload bytes.
pub fn unpack_frame(packed: &[u8]) -> Result<Vec<u8>, FramingError> {
    if packed.len() < FRAME_HEADER.len() || packed[..FRAME_HEADER.len()] != FRAME_HEADER {
        return Err(FramingError::MissingHeader);
    }
    let rest = &packed[FRAME_HEADER.len()..];

    let Some((&length_byte, mut rest)) = rest.split_first() else {
        return Err(FramingError::LengthMismatch {
            declared: 0,
            actual: 0,
        });
    };
    let mut declared = length_byte as usize;
    if length_byte == FRAME_LENGTH_ESCAPE {
        let Some((&extension, tail)) = rest.split_first() else {
            return Err(FramingError::LengthMismatch {
                declared,
                actual: 0,
            });
        };
        declared += extension as usize;
        rest = tail;
    }

    if rest.len() < FRAME_CHECKSUM_LEN {
        return Err(FramingError::LengthMismatch {
            declared,
            actual: rest.len(),
        });
    }
    let (payload, checksum_bytes) = rest.split_at(rest.len() - FRAME_CHECKSUM_LEN);
    if payload.len() != declared {
        return Err(FramingError::LengthMismatch {
            declared,
            actual: payload.len(),
        });
    }

    let calculated = calc_checksum(payload);
    let claimed = u16::from_le_bytes([checksum_bytes[0], checksum_bytes[1]]);
    if calculated != claimed {
        return Err(FramingError::ChecksumMismatch {
            calculated,
            claimed,
        });
    }

    Ok(payload.to_vec())
}

/// Calculates the payload checksum: sum of all bytes modulo 65536.
pub fn calc_checksum(payload: &[u8]) -> u16 {
    payload
        .iter()
        .fold(0u16, |sum, &b| sum.wrapping_add(b as u16))
}
