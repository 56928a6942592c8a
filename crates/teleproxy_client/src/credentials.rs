//! Credential abstraction for request authentication.

use crate::request::RequestDescriptor;

/// Authentication material applied to outgoing requests.
///
/// Credentials are owned by the caller and opaque to the client; they
/// are applied at a fixed layer of request construction, before caller
/// overrides, so an override can still replace what they set.
pub trait Credentials: Send + Sync {
    /// Applies authentication material to a request under construction.
    fn apply(&self, request: &mut RequestDescriptor);
}

/// No authentication.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCredentials;

impl Credentials for NoCredentials {
    fn apply(&self, _request: &mut RequestDescriptor) {}
}

/// Bearer-token authentication via the `authorization` header.
#[derive(Debug, Clone)]
pub struct BearerCredentials {
    token: String,
}

impl BearerCredentials {
    /// Creates bearer credentials from a static token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl Credentials for BearerCredentials {
    fn apply(&self, request: &mut RequestDescriptor) {
        request
            .headers
            .insert("authorization".into(), format!("Bearer {}", self.token));
    }
}
