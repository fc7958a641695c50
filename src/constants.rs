//! Ofen Innovativ Protocol Constants
//!
//! This module defines the wire-format constants used by the fireplace
//! protocol: the frame magic header, data-type tags, command opcodes,
//! request qualifiers and HTTP endpoint paths.

/// Magic header that opens every binary frame
pub const FRAME_HEADER: [u8; 4] = [0xAA, 0xCC, 0x33, 0x55];

/// Length-field escape byte for payloads of 255 bytes or more
pub const FRAME_LENGTH_ESCAPE: u8 = 0xFF;

/// Largest payload a frame can declare (escape byte plus 0xFE)
pub const FRAME_MAX_PAYLOAD: usize = 0xFF + 0xFE;

/// Size of the trailing little-endian checksum
pub const FRAME_CHECKSUM_LEN: usize = 2;

/// Data-type tag announcing a fireplace operational state payload
pub const DATA_TYPE_FIREPLACE_STATE: u8 = 0x00;

/// Data-type tag announcing a device date/time payload
pub const DATA_TYPE_DATETIME: u8 = 0x22;

/// Opcode for the "set system date/time" write command
pub const OPCODE_SET_DATETIME: u8 = 0x23;

/// `m` qualifier requesting fireplace state
pub const QUALIFIER_M_FIREPLACE_STATE: u32 = 500;

/// `m` qualifier addressing the date/time subsystem
pub const QUALIFIER_M_DATETIME: u32 = 300;

/// Endpoint for binary command exchanges
pub const ACTION_STATUS_PATH: &str = "/action/status";

/// Endpoint for status-record queries
pub const EXPORT_STATUS_PATH: &str = "/export/status";

/// Request body selecting the wlan0 interface status group
pub const IP_STATUS_QUERY: &str = "optionalGroupList=Interface:wlan0";

/// Default line instance addressed by commands
pub const DEFAULT_LINE: u8 = 1;

/// Year encoded as offset from this base in date/time payloads
pub const YEAR_BASE: i32 = 2000;

/// Shutter raw values above this carry the movement flag
pub const SHUTTER_MOVEMENT_THRESHOLD: u8 = 100;

/// Offset subtracted from a moving shutter's raw value
pub const SHUTTER_MOVEMENT_OFFSET: u8 = 150;

/// Month-byte bias marking date/time source 2
pub const DATETIME_SOURCE2_BIAS: u8 = 0x20;

/// Month-byte bias marking date/time source 1
pub const DATETIME_SOURCE1_BIAS: u8 = 0x10;
