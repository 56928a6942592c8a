//! Request construction.

use crate::config::ClientConfig;
use crate::credentials::Credentials;
use crate::error::{ClientError, ClientResult};
use http::Method;
use std::collections::BTreeMap;
use url::form_urlencoded;

/// A fully-specified request, ready for the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    /// HTTP method.
    pub method: Method,
    /// Target URL, query string already appended.
    pub url: String,
    /// Header map.
    pub headers: BTreeMap<String, String>,
    /// Outbound proxy URL, if any.
    pub proxy: Option<String>,
    /// Request body bytes, if any.
    pub body: Option<Vec<u8>>,
}

/// Caller-supplied per-request overrides.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Overrides the default GET method.
    pub method: Option<Method>,
    /// JSON payload, serialized into the body.
    pub payload: Option<serde_json::Value>,
    /// Replaces the header map built so far, wholesale.
    pub headers: Option<BTreeMap<String, String>>,
    /// Query parameters, appended to the URL in the given order. They
    /// never reach the body.
    pub params: Option<Vec<(String, String)>>,
}

/// Builds a request by layering client defaults, credentials, and
/// caller overrides.
///
/// Layer order is load-bearing: caller overrides can replace what the
/// proxy and credential layers set, fixed client headers replace the
/// header map wholesale, and the content-negotiation defaults never
/// clobber a header that is already present.
pub fn build_request(
    url: &str,
    options: RequestOptions,
    config: &ClientConfig,
    credentials: &dyn Credentials,
) -> ClientResult<RequestDescriptor> {
    let mut request = RequestDescriptor {
        method: Method::GET,
        url: url.to_string(),
        headers: BTreeMap::new(),
        proxy: None,
        body: None,
    };

    if let Some(proxy) = &config.proxy {
        if !proxy.is_empty() {
            request.proxy = Some(proxy.clone());
        }
    }

    credentials.apply(&mut request);

    if let Some(method) = options.method {
        request.method = method;
    }
    if let Some(payload) = &options.payload {
        let body =
            serde_json::to_vec(payload).map_err(|e| ClientError::Serialization(e.to_string()))?;
        request.body = Some(body);
    }
    if let Some(headers) = options.headers {
        request.headers = headers;
    }

    if let Some(headers) = &config.headers {
        request.headers = headers.clone();
    }

    if let Some(params) = &options.params {
        if !params.is_empty() {
            let query = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(params.iter().map(|(k, v)| (k.as_str(), v.as_str())))
                .finish();
            request.url = format!("{}?{}", url, query);
        }
    }

    request
        .headers
        .entry("content-type".to_string())
        .or_insert_with(|| "application/json".to_string());
    request
        .headers
        .entry("accept".to_string())
        .or_insert_with(|| "application/json".to_string());

    if let Some(user_agent) = &config.user_agent {
        request
            .headers
            .insert("user-agent".to_string(), user_agent.clone());
    }

    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::{BearerCredentials, NoCredentials};
    use serde_json::json;

    fn config() -> ClientConfig {
        ClientConfig::new("https://upload.example.com", "https://api.example.com")
    }

    fn headers(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_to_get_with_json_negotiation() {
        let request = build_request(
            "https://api.example.com/reports",
            RequestOptions::default(),
            &config(),
            &NoCredentials,
        )
        .unwrap();

        assert_eq!(request.method, Method::GET);
        assert_eq!(request.url, "https://api.example.com/reports");
        assert_eq!(
            request.headers.get("content-type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(
            request.headers.get("accept").map(String::as_str),
            Some("application/json")
        );
        assert!(request.proxy.is_none());
        assert!(request.body.is_none());
    }

    #[test]
    fn empty_proxy_is_ignored() {
        let with_proxy = config().with_proxy("http://proxy:3128");
        let request = build_request("u", RequestOptions::default(), &with_proxy, &NoCredentials)
            .unwrap();
        assert_eq!(request.proxy.as_deref(), Some("http://proxy:3128"));

        let empty_proxy = config().with_proxy("");
        let request = build_request("u", RequestOptions::default(), &empty_proxy, &NoCredentials)
            .unwrap();
        assert!(request.proxy.is_none());
    }

    #[test]
    fn payload_is_serialized_into_body() {
        let options = RequestOptions {
            method: Some(Method::POST),
            payload: Some(json!({"machine": "m1"})),
            ..Default::default()
        };
        let request = build_request("u", options, &config(), &NoCredentials).unwrap();
        assert_eq!(request.method, Method::POST);
        let body: serde_json::Value =
            serde_json::from_slice(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"machine": "m1"}));
    }

    #[test]
    fn params_land_in_url_not_body() {
        let options = RequestOptions {
            params: Some(vec![
                ("page".to_string(), "2".to_string()),
                ("per page".to_string(), "50".to_string()),
            ]),
            ..Default::default()
        };
        let request = build_request(
            "https://api.example.com/systems",
            options,
            &config(),
            &NoCredentials,
        )
        .unwrap();
        assert_eq!(
            request.url,
            "https://api.example.com/systems?page=2&per+page=50"
        );
        assert!(request.body.is_none());
    }

    #[test]
    fn empty_params_leave_url_unchanged() {
        let options = RequestOptions {
            params: Some(Vec::new()),
            ..Default::default()
        };
        let request = build_request("https://api.example.com/systems", options, &config(), &NoCredentials)
            .unwrap();
        assert_eq!(request.url, "https://api.example.com/systems");
    }

    #[test]
    fn caller_headers_survive_negotiation_defaults() {
        let options = RequestOptions {
            headers: Some(headers(&[("content-type", "text/plain")])),
            ..Default::default()
        };
        let request = build_request("u", options, &config(), &NoCredentials).unwrap();
        assert_eq!(
            request.headers.get("content-type").map(String::as_str),
            Some("text/plain")
        );
        // accept was not overridden, so the default is injected
        assert_eq!(
            request.headers.get("accept").map(String::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn caller_headers_replace_credential_headers() {
        let options = RequestOptions {
            headers: Some(headers(&[("x-custom", "1")])),
            ..Default::default()
        };
        let request =
            build_request("u", options, &config(), &BearerCredentials::new("tok")).unwrap();
        // the override replaced the whole header map, dropping authorization
        assert!(request.headers.get("authorization").is_none());
        assert_eq!(request.headers.get("x-custom").map(String::as_str), Some("1"));
    }

    #[test]
    fn fixed_headers_replace_everything_set_so_far() {
        let fixed = config().with_headers(headers(&[("x-fixed", "yes")]));
        let options = RequestOptions {
            headers: Some(headers(&[("x-caller", "yes")])),
            ..Default::default()
        };
        let request = build_request("u", options, &fixed, &BearerCredentials::new("tok")).unwrap();
        assert!(request.headers.get("x-caller").is_none());
        assert!(request.headers.get("authorization").is_none());
        assert_eq!(request.headers.get("x-fixed").map(String::as_str), Some("yes"));
        // negotiation defaults still apply on top of fixed headers
        assert_eq!(
            request.headers.get("content-type").map(String::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn user_agent_is_added_when_configured() {
        let with_agent = config().with_user_agent("teleproxy/0.3");
        let request = build_request("u", RequestOptions::default(), &with_agent, &NoCredentials)
            .unwrap();
        assert_eq!(
            request.headers.get("user-agent").map(String::as_str),
            Some("teleproxy/0.3")
        );
    }

    #[test]
    fn credentials_are_applied() {
        let request = build_request(
            "u",
            RequestOptions::default(),
            &config(),
            &BearerCredentials::new("tok"),
        )
        .unwrap();
        assert_eq!(
            request.headers.get("authorization").map(String::as_str),
            Some("Bearer tok")
        );
    }
}
