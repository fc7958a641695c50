//! Mock transport for testing command exchanges without a device.
//!
//! Queues canned response bodies and records every request posted
//! through it, so tests can assert on the exact wire traffic.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use ofen_rs::{OfenError, Transport};

pub struct MockTransport {
    /// Responses handed out in FIFO order, one per post.
    responses: Mutex<VecDeque<Result<Vec<u8>, String>>>,
    /// Recorded `(path, body)` pairs of every post.
    requests: Mutex<Vec<(String, String)>>,
}

#[allow(dead_code)]
impl MockTransport {
    pub fn new() -> Self {
        MockTransport {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a response body to be returned by the next post.
    pub fn queue_response(&self, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(body.as_bytes().to_vec()));
    }

    /// Queue a transport failure for the next post.
    pub fn queue_error(&self, message: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
    }

    /// All `(path, body)` pairs posted so far.
    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn post(&self, path: &str, body: String) -> Result<Vec<u8>, OfenError> {
        self.requests
            .lock()
            .unwrap()
            .push((path.to_string(), body));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("no queued mock response")
            .map_err(OfenError::Transport)
    }
}

/// Builds a successful `function` envelope carrying the framed payload.
#[allow(dead_code)]
pub fn function_response(payload: &[u8]) -> String {
    let message = ofen_rs::encode_frame(payload).unwrap();
    format!(
        "<function><return><result>Succeeded</result><message>{message}</message></return></function>"
    )
}
