//! # Typed State Records
//!
//! Fixed-format binary parsers that turn a decoded frame payload into one
//! of the typed records the fireplace controller reports. Each record kind
//! is announced by a single leading data-type tag byte; [`DataType`] maps
//! tags to record kinds so dispatch is a closed match, never reflection.
//!
//! Decoders are pure functions over the untyped payload (the bytes after
//! the tag). They either return a fully populated record or a
//! [`DecodeError`]; fields are never silently clamped into range.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::constants::{
    DATA_TYPE_DATETIME, DATA_TYPE_FIREPLACE_STATE, DATETIME_SOURCE1_BIAS, DATETIME_SOURCE2_BIAS,
    OPCODE_SET_DATETIME, SHUTTER_MOVEMENT_OFFSET, SHUTTER_MOVEMENT_THRESHOLD, YEAR_BASE,
};
use crate::error::DecodeError;

/// The record kinds the controller can report, keyed by data-type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// Fireplace operational state (tag `0x00`).
    FireplaceState,
    /// Device date/time (tag `0x22`).
    DateTime,
}

impl DataType {
    /// The leading tag byte announcing this record kind.
    pub const fn tag(self) -> u8 {
        match self {
            DataType::FireplaceState => DATA_TYPE_FIREPLACE_STATE,
            DataType::DateTime => DATA_TYPE_DATETIME,
        }
    }

    /// Resolves a tag byte to a record kind.
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            DATA_TYPE_FIREPLACE_STATE => Some(DataType::FireplaceState),
            DATA_TYPE_DATETIME => Some(DataType::DateTime),
            _ => None,
        }
    }
}

/// Operational state snapshot of the fireplace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FireplaceState {
    /// Burn phase, low nibble of the first payload byte.
    pub phase: u8,
    /// Door open flag, packed into the first byte's high nibble.
    pub door: bool,
    /// Flue temperature in device units, big-endian signed.
    pub temperature: i16,
    /// Shutter opening in percent (0-100).
    pub shutter: u8,
    /// Whether the shutter is currently moving.
    pub movement: bool,
    /// Total burn time in minutes.
    pub burn_time_mins: u16,
    pub alarm1: u8,
    pub hood: u8,
    pub alarm2: u8,
    pub position: u8,
}

impl FireplaceState {
    /// Minimum payload size after the data-type tag.
    pub const PAYLOAD_LEN: usize = 10;

    /// Parses a fireplace state record from an untyped payload.
    ///
    /// The first byte packs door state (high nibble 1 or 3) and phase
    /// (low nibble). A shutter byte above 100 carries the movement flag
    /// and is shifted down by 150; raw values whose shifted percentage
    /// leaves 0-100 are rejected rather than clamped.
    pub fn parse(payload: &[u8]) -> Result<Self, DecodeError> {
        if payload.len() < Self::PAYLOAD_LEN {
            return Err(DecodeError::InvalidLength {
                expected: Self::PAYLOAD_LEN,
                actual: payload.len(),
            });
        }

        // Door nibble must be read before the phase is reduced.
        let door = matches!(payload[0] >> 4, 1 | 3);
        let phase = payload[0] & 0x0F;

        let temperature = i16::from_be_bytes([payload[1], payload[2]]);

        let raw_shutter = payload[3];
        let (shutter, movement) = if raw_shutter > SHUTTER_MOVEMENT_THRESHOLD {
            let adjusted = raw_shutter.checked_sub(SHUTTER_MOVEMENT_OFFSET).ok_or(
                DecodeError::FieldOutOfRange {
                    field: "shutter",
                    value: raw_shutter as i64,
                },
            )?;
            if adjusted > SHUTTER_MOVEMENT_THRESHOLD {
                return Err(DecodeError::FieldOutOfRange {
                    field: "shutter",
                    value: raw_shutter as i64,
                });
            }
            (adjusted, true)
        } else {
            (raw_shutter, false)
        };

        let burn_time_mins = payload[4] as u16 * 60 + payload[5] as u16;

        Ok(FireplaceState {
            phase,
            door,
            temperature,
            shutter,
            movement,
            burn_time_mins,
            alarm1: payload[6],
            hood: payload[7],
            alarm2: payload[8],
            position: payload[9],
        })
    }
}

/// Date/time snapshot of the controller clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeInfo {
    /// The controller's calendar time (minute resolution).
    pub datetime: NaiveDateTime,
    /// Clock source: 0 = none, 1 or 2 per the month-byte bias bits.
    pub source: u8,
}

impl DateTimeInfo {
    /// Exact payload size after the data-type tag.
    pub const PAYLOAD_LEN: usize = 5;

    /// Parses a date/time record from an untyped payload.
    ///
    /// Layout is `[year-2000, month, day, hour, minute]`; the month byte
    /// carries the clock source as a bias (`> 0x20` source 2, `> 0x10`
    /// source 1) that must be removed before the month is interpreted.
    pub fn parse(payload: &[u8]) -> Result<Self, DecodeError> {
        if payload.len() != Self::PAYLOAD_LEN {
            return Err(DecodeError::InvalidLength {
                expected: Self::PAYLOAD_LEN,
                actual: payload.len(),
            });
        }

        let year = YEAR_BASE + payload[0] as i32;
        let mut month = payload[1];
        let mut source = 0u8;
        if month > DATETIME_SOURCE2_BIAS {
            source = 2;
            month -= DATETIME_SOURCE2_BIAS;
        } else if month > DATETIME_SOURCE1_BIAS {
            source = 1;
            month -= DATETIME_SOURCE1_BIAS;
        }
        let day = payload[2];
        let hour = payload[3];
        let minute = payload[4];

        if !(1..=12).contains(&month) {
            return Err(DecodeError::FieldOutOfRange {
                field: "month",
                value: payload[1] as i64,
            });
        }
        let datetime = NaiveDate::from_ymd_opt(year, month as u32, day as u32)
            .ok_or(DecodeError::FieldOutOfRange {
                field: "day",
                value: day as i64,
            })?
            .and_hms_opt(hour as u32, minute as u32, 0)
            .ok_or(DecodeError::FieldOutOfRange {
                field: "minute",
                value: minute as i64,
            })?;

        Ok(DateTimeInfo { datetime, source })
    }
}

/// Network status of the controller, taken from the status-record tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpStatus {
    /// MAC address of the wlan0 interface.
    pub mac_address: String,
}

/// Builds the write payload for the "set system date/time" command.
///
/// The payload mirrors the [`DateTimeInfo`] layout behind the `0x23`
/// opcode, with the year stored as an offset from 2000. Years outside
/// 2000-2255 fail validation before any network interaction.
pub fn encode_set_datetime(to: &NaiveDateTime) -> Result<Vec<u8>, DecodeError> {
    let yy = to.year() - YEAR_BASE;
    if !(0..=0xFF).contains(&yy) {
        return Err(DecodeError::FieldOutOfRange {
            field: "year",
            value: to.year() as i64,
        });
    }
    Ok(vec![
        OPCODE_SET_DATETIME,
        yy as u8,
        to.month() as u8,
        to.day() as u8,
        to.hour() as u8,
        to.minute() as u8,
    ])
}
