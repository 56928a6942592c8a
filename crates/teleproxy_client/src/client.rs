//! The proxy client and its dispatch entry points.

use crate::call::{CallRequest, CallResult};
use crate::config::ClientConfig;
use crate::credentials::Credentials;
use crate::error::{ClientError, ClientResult};
use crate::identity::IdentitySource;
use crate::request::build_request;
use crate::transport::{HttpResponse, Transport};
use http::Method;

/// Resource paths that route through the subset cache.
const SUBSETTED_RESOURCES: &[&str] = &["reports", "systems", "systems/status"];

/// Returns true when a resource is served from the subset cache.
pub(crate) fn is_subsetted(resource: &str) -> bool {
    SUBSETTED_RESOURCES.contains(&resource)
}

/// A proxy client for the backend telemetry API.
///
/// Forwards caller requests to the backend, transparently rewriting
/// subsetted resources through the server-side subset cache. Stateless
/// across calls: the only thing shared between invocations is the
/// immutable configuration, so a client is safe to use from multiple
/// threads whenever its transport is.
///
/// Entry points never return an error and never panic; every outcome,
/// including transport failures, is normalized into a [`CallResult`].
pub struct Client<T: Transport, C: Credentials, I: IdentitySource> {
    pub(crate) config: ClientConfig,
    pub(crate) transport: T,
    pub(crate) credentials: C,
    pub(crate) identity: I,
}

impl<T: Transport, C: Credentials, I: IdentitySource> Client<T, C, I> {
    /// Creates a new client.
    pub fn new(config: ClientConfig, transport: T, credentials: C, identity: I) -> Self {
        config
            .logger()
            .debug(&format!("http proxy is set to {:?}", config.proxy));
        Self {
            config,
            transport,
            credentials,
            identity,
        }
    }

    /// The client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The injected transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Proxies a call, routing subsetted resources through the subset
    /// cache.
    pub fn call(&self, request: CallRequest) -> CallResult {
        self.finish(self.route(&request, false))
    }

    /// Proxies a call without subset classification. Upload targeting
    /// still applies.
    pub fn call_bypassing_subset(&self, request: CallRequest) -> CallResult {
        self.config.logger().debug("called no-subset proxy");
        self.finish(self.route(&request, true))
    }

    /// Proxies a call straight to `{api_url}/{resource}`, for endpoints
    /// known to never be subsetted. Ignores the extra flags.
    pub fn call_strata(&self, request: CallRequest) -> CallResult {
        let url = format!("{}/{}", self.config.api_url, request.resource);
        self.finish(self.execute_direct(&url, &request))
    }

    /// Posts an upload to the configured upload URL.
    pub fn post_upload(
        &self,
        params: Vec<(String, String)>,
        payload: serde_json::Value,
    ) -> CallResult {
        self.call(
            CallRequest::new(Method::POST, "")
                .with_params(params)
                .with_payload(payload)
                .for_upload(),
        )
    }

    /// Routes a call to the subset resolver or a direct request.
    fn route(&self, request: &CallRequest, bypass_subset: bool) -> ClientResult<HttpResponse> {
        if is_subsetted(&request.resource) && !bypass_subset {
            self.config
                .logger()
                .debug(&format!("doing subset call to {}", request.resource));
            return self.resolve_subset(request);
        }

        let url = if request.extra.do_upload {
            self.config.upload_url.clone()
        } else {
            format!("{}/{}", self.config.api_url, request.resource)
        };
        self.execute_direct(&url, request)
    }

    /// Builds and executes a single request against a target URL,
    /// classifying non-success responses as HTTP errors.
    fn execute_direct(&self, url: &str, request: &CallRequest) -> ClientResult<HttpResponse> {
        let descriptor = build_request(url, request.to_options(), &self.config, &self.credentials)?;
        let response = self.transport.execute(&descriptor)?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(ClientError::http(response))
        }
    }

    /// Normalizes an outcome into the result envelope, logging failures.
    fn finish(&self, outcome: ClientResult<HttpResponse>) -> CallResult {
        match outcome {
            Ok(response) => CallResult::success(response),
            Err(error) => {
                match &error {
                    ClientError::Http { response } => self.config.logger().error(&format!(
                        "caught http error {} when proxying call",
                        response.status
                    )),
                    other => self
                        .config
                        .logger()
                        .error(&format!("caught unexpected error when proxying call: {}", other)),
                }
                CallResult::failure(error)
            }
        }
    }
}
