//! # Command Client
//!
//! Orchestrates one protocol exchange per call: build the command
//! payload, frame it, wrap it in the request body, post it through the
//! injected [`Transport`], unwrap the XML envelope, unframe the hex
//! message and parse the typed record. The client keeps no state between
//! exchanges beyond the transport handle and line instance, so a single
//! client may serve concurrent callers.
//!
//! Errors at any step short-circuit the exchange; no partial or fallback
//! record is ever returned.

use chrono::NaiveDateTime;
use log::debug;

use crate::constants::{
    ACTION_STATUS_PATH, DEFAULT_LINE, EXPORT_STATUS_PATH, IP_STATUS_QUERY, QUALIFIER_M_DATETIME,
    QUALIFIER_M_FIREPLACE_STATE,
};
use crate::error::{DecodeError, OfenError};
use crate::ofen::envelope;
use crate::ofen::frame;
use crate::ofen::transport::Transport;
use crate::payload::{encode_set_datetime, DataType, DateTimeInfo, FireplaceState, IpStatus};

/// Command client for a fireplace controller.
pub struct OfenClient<T: Transport> {
    transport: T,
    line: u8,
}

impl<T: Transport> OfenClient<T> {
    /// Creates a client over the given transport, addressing line 1.
    pub fn new(transport: T) -> Self {
        Self::with_line(transport, DEFAULT_LINE)
    }

    /// Creates a client addressing a specific line instance.
    pub fn with_line(transport: T, line: u8) -> Self {
        OfenClient { transport, line }
    }

    /// The injected transport handle.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Reads the current fireplace operational state.
    pub async fn retrieve_fireplace_state(&self) -> Result<FireplaceState, OfenError> {
        let payload = self
            .retrieve_state(
                DataType::FireplaceState,
                None,
                Some(QUALIFIER_M_FIREPLACE_STATE),
                None,
            )
            .await?;
        Ok(FireplaceState::parse(&payload)?)
    }

    /// Reads the controller's system date/time.
    pub async fn retrieve_system_datetime(&self) -> Result<DateTimeInfo, OfenError> {
        let payload = self
            .retrieve_state(DataType::DateTime, None, Some(QUALIFIER_M_DATETIME), None)
            .await?;
        Ok(DateTimeInfo::parse(&payload)?)
    }

    /// Sets the controller's system date/time.
    ///
    /// Returns the device's raw confirmation payload, which is opaque to
    /// this client. Years outside 2000-2255 fail before any I/O.
    pub async fn set_system_datetime(&self, to: &NaiveDateTime) -> Result<Vec<u8>, OfenError> {
        let payload = encode_set_datetime(to)?;
        self.post_command_bytes(&payload, None, Some(QUALIFIER_M_DATETIME), None)
            .await
    }

    /// Reads the controller's network status from the status-record tree.
    pub async fn retrieve_ip_status(&self) -> Result<IpStatus, OfenError> {
        let response = self
            .transport
            .post(EXPORT_STATUS_PATH, IP_STATUS_QUERY.to_string())
            .await?;
        let mac_address = envelope::parse_status_response(&response)?;
        Ok(IpStatus { mac_address })
    }

    /// Performs a read exchange and verifies the echoed data-type tag.
    ///
    /// Returns the payload bytes after the tag; a mismatched tag fails
    /// with [`OfenError::UnexpectedDataType`] without parsing further.
    async fn retrieve_state(
        &self,
        data_type: DataType,
        n: Option<u32>,
        m: Option<u32>,
        t: Option<u32>,
    ) -> Result<Vec<u8>, OfenError> {
        let payload = self
            .post_command_bytes(&[data_type.tag()], n, m, t)
            .await?;
        match payload.split_first() {
            Some((&tag, rest)) if tag == data_type.tag() => Ok(rest.to_vec()),
            Some((&tag, _)) => Err(OfenError::UnexpectedDataType {
                expected: data_type.tag(),
                actual: tag,
            }),
            None => Err(DecodeError::InvalidLength {
                expected: 1,
                actual: 0,
            }
            .into()),
        }
    }

    /// Frames a command payload, posts it and unframes the response.
    async fn post_command_bytes(
        &self,
        payload: &[u8],
        n: Option<u32>,
        m: Option<u32>,
        t: Option<u32>,
    ) -> Result<Vec<u8>, OfenError> {
        let message = frame::encode_frame(payload)?;
        let response_message = self.post_command_raw(&message, n, m, t).await?;
        Ok(frame::decode_frame(&response_message)?)
    }

    /// Posts a hex command message and returns the response hex message.
    async fn post_command_raw(
        &self,
        message: &str,
        n: Option<u32>,
        m: Option<u32>,
        t: Option<u32>,
    ) -> Result<String, OfenError> {
        let body = envelope::build_command_request(self.line, message, n, m, t);
        debug!("posting command body: {body}");
        let response = self.transport.post(ACTION_STATUS_PATH, body).await?;
        let response_message = envelope::parse_command_response(&response)?;
        debug!("received response message: {response_message}");
        Ok(response_message)
    }
}
