//! The payload module contains the typed state records decoded from
//! frame payloads and the data-type tag dispatch between them.

pub mod record;

pub use record::{encode_set_datetime, DataType, DateTimeInfo, FireplaceState, IpStatus};
