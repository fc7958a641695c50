//! # Ofen Error Handling
//!
//! This module defines the error enums used throughout the ofen-rs crate,
//! one per protocol layer plus the aggregate [`OfenError`] returned by the
//! command client. Lower-layer errors convert into `OfenError` via `From`
//! and are never downgraded or masked on the way up.

use thiserror::Error;

/// Errors produced by the checksum/framing codec.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FramingError {
    /// The decoded bytes do not start with the magic header.
    #[error("data does not start with magic header")]
    MissingHeader,

    /// The declared payload length disagrees with the actual payload.
    #[error("message header indicated {declared} bytes of payload data, but actual payload is {actual} bytes")]
    LengthMismatch { declared: usize, actual: usize },

    /// The checksum recomputed over the payload does not match the frame.
    #[error("checksum mismatch: {calculated:#x} vs. {claimed:#x}")]
    ChecksumMismatch { calculated: u16, claimed: u16 },

    /// The payload exceeds what a single escaped length field can declare.
    #[error("payload with {0} bytes is too long")]
    PayloadTooLarge(usize),

    /// The wire text is not valid hexadecimal.
    #[error("invalid hex message: {0}")]
    InvalidHex(String),
}

/// Errors produced by the XML envelope layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnvelopeError {
    /// The response body is not well-formed XML.
    #[error("malformed XML response: {0}")]
    MalformedXml(String),

    /// The response root element has an unexpected tag.
    #[error("expected root element of response to have tag {expected}, not {found}")]
    UnexpectedRootTag {
        expected: &'static str,
        found: String,
    },

    /// A required element is missing from the response tree.
    #[error("response did not contain a {0} element")]
    MissingElement(&'static str),

    /// The device reported a non-successful function result.
    #[error("non-successful function result: {0}")]
    NonSuccessResult(String),

    /// The status tree contained no matching value.
    #[error("response contained no {0}")]
    ValueNotFound(&'static str),
}

/// Errors produced by the typed state decoders.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The payload is the wrong size for the record format.
    #[error("payload has unexpected length {actual}, expected {expected} bytes")]
    InvalidLength { expected: usize, actual: usize },

    /// A decoded field falls outside its documented range.
    #[error("field {field} value {value} is out of range")]
    FieldOutOfRange { field: &'static str, value: i64 },
}

/// Aggregate error type returned by the command client.
#[derive(Debug, Error)]
pub enum OfenError {
    /// A framing-codec failure.
    #[error(transparent)]
    Framing(#[from] FramingError),

    /// An envelope-layer failure.
    #[error(transparent)]
    Envelope(#[from] EnvelopeError),

    /// A typed-decoder failure.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The response payload's leading data-type tag did not match the request.
    #[error("unexpected response data type {actual:#04x}, expected {expected:#04x}")]
    UnexpectedDataType { expected: u8, actual: u8 },

    /// An opaque failure surfaced by the HTTP transport collaborator.
    #[error("transport error: {0}")]
    Transport(String),
}
