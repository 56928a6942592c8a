//! Per-call request and result types.

use crate::error::ClientError;
use crate::request::RequestOptions;
use crate::transport::HttpResponse;
use http::{Method, StatusCode};

/// A single proxied call.
#[derive(Debug, Clone)]
pub struct CallRequest {
    /// HTTP method.
    pub method: Method,
    /// Resource path relative to the API base URL. Empty for uploads.
    pub resource: String,
    /// Query parameters, in caller order.
    pub params: Vec<(String, String)>,
    /// JSON payload, if any.
    pub payload: Option<serde_json::Value>,
    /// Extra call flags.
    pub extra: CallExtra,
}

impl CallRequest {
    /// Creates a call for a method and resource path.
    pub fn new(method: Method, resource: impl Into<String>) -> Self {
        Self {
            method,
            resource: resource.into(),
            params: Vec::new(),
            payload: None,
            extra: CallExtra::default(),
        }
    }

    /// Sets the query parameters.
    pub fn with_params(mut self, params: Vec<(String, String)>) -> Self {
        self.params = params;
        self
    }

    /// Sets the JSON payload.
    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Marks the call as an upload, targeting the upload URL verbatim.
    pub fn for_upload(mut self) -> Self {
        self.extra.do_upload = true;
        self
    }

    /// The per-request overrides this call contributes to request
    /// construction.
    pub(crate) fn to_options(&self) -> RequestOptions {
        RequestOptions {
            method: Some(self.method.clone()),
            payload: self.payload.clone(),
            headers: None,
            params: if self.params.is_empty() {
                None
            } else {
                Some(self.params.clone())
            },
        }
    }
}

/// Extra call flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallExtra {
    /// Target the upload URL instead of `{api_url}/{resource}`.
    pub do_upload: bool,
}

/// What a call produced.
///
/// `data` and `code` are always populated, success or not: on an HTTP
/// error `data` holds the raw error response, and on a failure with no
/// response it holds the failure description with `code` 500. `error`
/// is present only on failure.
#[derive(Debug)]
pub struct CallResult {
    /// Response data, or the failure description when no response exists.
    pub data: CallData,
    /// HTTP status code; 500 when no response exists.
    pub code: StatusCode,
    /// The failure, when the call did not succeed.
    pub error: Option<ClientError>,
}

/// The data slot of a call result.
#[derive(Debug, Clone, PartialEq)]
pub enum CallData {
    /// A response was received, success or HTTP error.
    Http(HttpResponse),
    /// No response exists; carries the failure description.
    Failure(String),
}

impl CallResult {
    /// Wraps a successful response.
    pub(crate) fn success(response: HttpResponse) -> Self {
        Self {
            code: response.status,
            data: CallData::Http(response),
            error: None,
        }
    }

    /// Normalizes a failure into the result envelope.
    pub(crate) fn failure(error: ClientError) -> Self {
        let code = error.status();
        let data = match &error {
            ClientError::Http { response } => CallData::Http(response.clone()),
            other => CallData::Failure(other.to_string()),
        };
        Self {
            data,
            code,
            error: Some(error),
        }
    }

    /// True when the call succeeded.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// The response body, when a response was received.
    pub fn body(&self) -> Option<&[u8]> {
        match &self.data {
            CallData::Http(response) => Some(&response.body),
            CallData::Failure(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_result_carries_body_and_code() {
        let result = CallResult::success(HttpResponse::new(StatusCode::OK, b"[]".to_vec()));
        assert!(result.is_success());
        assert_eq!(result.code, StatusCode::OK);
        assert_eq!(result.body(), Some(&b"[]"[..]));
        assert!(result.error.is_none());
    }

    #[test]
    fn http_failure_preserves_response() {
        let response = HttpResponse::new(StatusCode::FORBIDDEN, b"denied".to_vec());
        let result = CallResult::failure(ClientError::http(response.clone()));
        assert!(!result.is_success());
        assert_eq!(result.code, StatusCode::FORBIDDEN);
        assert_eq!(result.data, CallData::Http(response));
        assert!(result.error.is_some());
    }

    #[test]
    fn transport_failure_defaults_to_500() {
        let result = CallResult::failure(ClientError::transport("connection reset"));
        assert_eq!(result.code, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(result.body().is_none());
        match &result.data {
            CallData::Failure(message) => assert!(message.contains("connection reset")),
            CallData::Http(_) => panic!("expected failure data"),
        }
    }

    #[test]
    fn upload_flag() {
        let call = CallRequest::new(Method::POST, "").for_upload();
        assert!(call.extra.do_upload);
        assert!(!CallRequest::new(Method::GET, "systems").extra.do_upload);
    }

    #[test]
    fn options_omit_empty_params() {
        let call = CallRequest::new(Method::GET, "systems");
        assert!(call.to_options().params.is_none());

        let call = call.with_params(vec![("a".into(), "1".into())]);
        assert_eq!(call.to_options().params.unwrap().len(), 1);
    }
}
