//! Configuration for the proxy client.

use crate::logger::{Logger, NoopLogger};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use teleproxy_protocol::SubsetListType;

/// Configuration for a proxy client instance.
///
/// Built once at construction and immutable afterwards. Every
/// recognized option is an explicit field; there is no open-ended
/// options bag.
#[derive(Clone)]
pub struct ClientConfig {
    /// URL uploads are posted to, used verbatim.
    pub upload_url: String,
    /// Base URL of the backend API.
    pub api_url: String,
    /// Outbound HTTP proxy URL, if any.
    pub proxy: Option<String>,
    /// User agent header value, if any.
    pub user_agent: Option<String>,
    /// Fixed headers that replace anything set earlier in request
    /// construction, if any.
    pub headers: Option<BTreeMap<String, String>>,
    /// Which key names the identifier list in subset creation bodies.
    pub subset_list_type: SubsetListType,
    /// Derived subset base URL, fixed at construction.
    subset_url: String,
    /// Diagnostic logging sink.
    logger: Arc<dyn Logger>,
}

impl ClientConfig {
    /// Creates a configuration with defaults: no proxy, no user agent,
    /// no fixed headers, leaf-id list type, no-op logger.
    pub fn new(upload_url: impl Into<String>, api_url: impl Into<String>) -> Self {
        let api_url = api_url.into();
        let subset_url = format!("{}/subsets", api_url);
        Self {
            upload_url: upload_url.into(),
            api_url,
            proxy: None,
            user_agent: None,
            headers: None,
            subset_list_type: SubsetListType::default(),
            subset_url,
            logger: Arc::new(NoopLogger),
        }
    }

    /// Sets the outbound HTTP proxy.
    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Sets the user agent header value.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets the fixed client headers.
    pub fn with_headers(mut self, headers: BTreeMap<String, String>) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Sets the subset list type.
    pub fn with_subset_list_type(mut self, list_type: SubsetListType) -> Self {
        self.subset_list_type = list_type;
        self
    }

    /// Sets the diagnostic logger.
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// The subset base URL, `{api_url}/subsets`.
    pub fn subset_url(&self) -> &str {
        &self.subset_url
    }

    /// The configured logger.
    pub fn logger(&self) -> &dyn Logger {
        self.logger.as_ref()
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("upload_url", &self.upload_url)
            .field("api_url", &self.api_url)
            .field("proxy", &self.proxy)
            .field("user_agent", &self.user_agent)
            .field("headers", &self.headers)
            .field("subset_list_type", &self.subset_list_type)
            .field("subset_url", &self.subset_url)
            .finish_non_exhaustive()
    }
}
