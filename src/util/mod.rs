//! # Utility Modules
//!
//! Common helpers shared across the ofen-rs crate, currently the hex
//! encoding/decoding wrappers used by the framing codec and tests.

pub mod hex;

pub use hex::{decode_hex, encode_hex, hex_to_bytes};
