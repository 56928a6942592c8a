//! Transport layer abstraction.

use crate::error::{ClientError, ClientResult};
use crate::request::RequestDescriptor;
use http::StatusCode;
use parking_lot::Mutex;
use std::collections::VecDeque;

/// A transport executes fully-built requests against the network.
///
/// This trait abstracts the HTTP layer, allowing different
/// implementations (reqwest, ureq, mock for testing, etc.). Connection
/// handling, TLS, pooling, timeouts, and transport-level retries all
/// live behind this boundary.
///
/// Receiving a response is never an error at this boundary, whatever
/// its status; `Err` means no response exists at all.
pub trait Transport: Send + Sync {
    /// Executes a request and returns the server's response.
    fn execute(&self, request: &RequestDescriptor) -> ClientResult<HttpResponse>;
}

/// A response as returned by the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new response.
    pub fn new(status: StatusCode, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Creates a response with a JSON body.
    pub fn json(status: StatusCode, body: &serde_json::Value) -> Self {
        Self {
            status,
            body: body.to_string().into_bytes(),
        }
    }

    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Parses the body as JSON.
    pub fn body_json(&self) -> ClientResult<serde_json::Value> {
        serde_json::from_slice(&self.body).map_err(|e| ClientError::Serialization(e.to_string()))
    }
}

/// A scripted transport for testing.
///
/// Records every request it executes and replays queued responses in
/// order. Running out of queued responses is a transport error.
#[derive(Default)]
pub struct MockTransport {
    requests: Mutex<Vec<RequestDescriptor>>,
    responses: Mutex<VecDeque<Result<HttpResponse, String>>>,
}

impl MockTransport {
    /// Creates a new mock transport with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response to be returned by the next execute call.
    pub fn enqueue(&self, response: HttpResponse) {
        self.responses.lock().push_back(Ok(response));
    }

    /// Queues a transport failure.
    pub fn enqueue_failure(&self, message: impl Into<String>) {
        self.responses.lock().push_back(Err(message.into()));
    }

    /// Returns every request executed so far, in order.
    pub fn requests(&self) -> Vec<RequestDescriptor> {
        self.requests.lock().clone()
    }

    /// Returns the number of requests executed so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

impl Transport for MockTransport {
    fn execute(&self, request: &RequestDescriptor) -> ClientResult<HttpResponse> {
        self.requests.lock().push(request.clone());
        match self.responses.lock().pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(ClientError::transport(message)),
            None => Err(ClientError::transport("no scripted response queued")),
        }
    }
}
