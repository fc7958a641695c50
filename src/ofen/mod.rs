//! The ofen module contains the core protocol implementation: the frame
//! codec, the XML envelope layer, the transport seam and the command
//! client that orchestrates one exchange per call.

pub mod client;
pub mod envelope;
pub mod frame;
pub mod transport;

pub use client::OfenClient;
pub use frame::{decode_frame, encode_frame};
pub use transport::{HttpTransport, Transport};
