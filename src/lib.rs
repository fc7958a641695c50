//! # ofen-rs - A Rust Crate for Ofen Innovativ Fireplace Communication
//!
//! The ofen-rs crate implements the device-communication core for a
//! network-connected fireplace appliance speaking a vendor binary-over-HTTP
//! protocol: binary frames with a magic header, escaped length field and
//! 16-bit sum checksum, transported as hex text inside an XML envelope.
//!
//! ## Features
//!
//! - Encode and decode the controller's binary frame format, including the
//!   length-escape extension and checksum validation
//! - Build command request bodies and parse both XML response envelope
//!   shapes (function results and status records)
//! - Decode typed state records with bit-level field semantics: fireplace
//!   operational state, device date/time and network status
//! - Issue read and write exchanges through an injectable async transport,
//!   with the echoed data-type tag verified before parsing
//! - Typed, layered error handling with no retries and no silent fallbacks
//!
//! ## Usage
//!
//! ```no_run
//! use ofen_rs::{HttpTransport, OfenClient};
//!
//! # async fn example() -> Result<(), ofen_rs::OfenError> {
//! let client = OfenClient::new(HttpTransport::new("192.168.1.40"));
//! let state = client.retrieve_fireplace_state().await?;
//! println!("phase {} at {} deg", state.phase, state.temperature);
//! # Ok(())
//! # }
//! ```

pub mod constants;
pub mod error;
pub mod logging;
pub mod ofen;
pub mod payload;
pub mod util;

pub use crate::error::{DecodeError, EnvelopeError, FramingError, OfenError};
pub use crate::logging::{init_logger, log_info};

// Core protocol types
pub use ofen::client::OfenClient;
pub use ofen::envelope::{build_command_request, parse_command_response, parse_status_response};
pub use ofen::frame::{decode_frame, encode_frame};
pub use ofen::transport::{HttpTransport, Transport};
pub use payload::{encode_set_datetime, DataType, DateTimeInfo, FireplaceState, IpStatus};
