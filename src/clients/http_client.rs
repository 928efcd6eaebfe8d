//! HTTP client for Azure Resource Manager communication.
//!
//! This module provides the [`HttpClient`] type for sending authenticated
//! requests to the management endpoint. Each call is a single round trip;
//! there is no retry or backoff.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::{AccessToken, ApiVersion, ArmConfig};

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the query parameter carrying the ARM API version.
pub const API_VERSION_PARAM: &str = "api-version";

/// HTTP client for making requests to Azure Resource Manager.
///
/// The client handles:
/// - URL construction from the configured management endpoint
/// - Default headers including User-Agent and bearer authorization
/// - The `api-version` query parameter
/// - Error body parsing into [`HttpResponseError`]
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use cosmos_offer::{AccessToken, ArmConfig};
/// use cosmos_offer::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let token = AccessToken::new("eyJ0eXAi...")?;
/// let client = HttpClient::new(Some(&token), &ArmConfig::default())?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "subscriptions/sub/resourceGroups")
///     .build()?;
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://management.azure.com`).
    base_uri: String,
    /// Version sent with every request unless the request sets its own.
    api_version: ApiVersion,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Bearer token, kept out of `default_headers` so `Debug` stays masked.
    access_token: Option<AccessToken>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Arguments
    ///
    /// * `access_token` - Bearer token for the `Authorization` header, if any
    /// * `config` - Endpoint, API version, user agent and timeout settings
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(access_token: Option<&AccessToken>, config: &ArmConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}cosmos-offer-client v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_uri: config.management_endpoint().as_ref().to_string(),
            api_version: config.api_version().clone(),
            default_headers,
            access_token: access_token.cloned(),
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the API version sent with requests.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the default headers for this client.
    ///
    /// The `Authorization` header is added per request and is not listed here.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns `true` if requests will carry a bearer token.
    #[must_use]
    pub const fn has_access_token(&self) -> bool {
        self.access_token.is_some()
    }

    /// Sends an HTTP request to the management endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    /// - A 2xx body is not valid JSON (`Decode`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!(
            "{}/{}",
            self.base_uri,
            request.path.trim_start_matches('/')
        );

        let mut headers = self.default_headers.clone();
        if request.body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        if let Some(token) = &self.access_token {
            headers.insert(
                "Authorization".to_string(),
                format!("Bearer {}", token.as_ref()),
            );
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        let overrides_version = request
            .query
            .as_ref()
            .is_some_and(|query| query.contains_key(API_VERSION_PARAM));
        if !overrides_version {
            req_builder = req_builder.query(&[(API_VERSION_PARAM, self.api_version.to_string())]);
        }
        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            "Sending management request"
        );

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;
        let is_ok = (200..=299).contains(&code);

        let body = if body_text.trim().is_empty() {
            serde_json::Value::Null
        } else if is_ok {
            serde_json::from_str(&body_text)?
        } else {
            serde_json::from_str(&body_text)
                .unwrap_or_else(|_| serde_json::json!({ "raw_body": body_text }))
        };

        let response = HttpResponse::new(code, res_headers, body);

        if response.is_ok() {
            return Ok(response);
        }

        let error = HttpResponseError::from_body(
            code,
            &response.body,
            response.request_id().map(String::from),
        );
        tracing::warn!(
            status = code,
            code = ?error.code,
            path = %request.path,
            "Management request failed"
        );
        Err(HttpError::Response(error))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
