//! # HTTP Transport Seam
//!
//! The command client never talks HTTP directly; it posts request bodies
//! through the [`Transport`] trait and receives raw response bytes back.
//! Production code uses [`HttpTransport`] over `reqwest`; tests inject a
//! mock. Connection failures and non-2xx statuses surface as
//! [`OfenError::Transport`] and are never retried here.

use async_trait::async_trait;

use crate::error::OfenError;

/// One-shot HTTP POST seam used by the command client.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Posts a request body to a path on the device, returning the raw
    /// response body bytes.
    async fn post(&self, path: &str, body: String) -> Result<Vec<u8>, OfenError>;
}

/// `reqwest`-backed transport talking to a fireplace controller host.
pub struct HttpTransport {
    base_url: String,
    client: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport for the given host, e.g. `"192.168.1.40"`.
    pub fn new(host: &str) -> Self {
        HttpTransport {
            base_url: format!("http://{host}"),
            client: reqwest::Client::new(),
        }
    }

    /// The base URL requests are posted against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, path: &str, body: String) -> Result<Vec<u8>, OfenError> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .body(body)
            .send()
            .await
            .map_err(|e| OfenError::Transport(e.to_string()))?
            .error_for_status()
            .map_err(|e| OfenError::Transport(e.to_string()))?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| OfenError::Transport(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}
