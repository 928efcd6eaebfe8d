//! Management-plane client for `Microsoft.DocumentDB` resources.
//!
//! This module provides the [`ArmClient`] type, which resolves an endpoint
//! row from the table in [`path`](crate::arm::path), fills in the URL, and
//! sends one request through [`HttpClient`].

use serde::de::DeserializeOwned;

use crate::arm::errors::ArmError;
use crate::arm::path::{get_path, ArmOperation, ArmPath, ResourceKind};
use crate::auth::{AccountIdentity, SessionContext};
use crate::clients::{HttpClient, HttpError, HttpRequest, HttpResponse};
use crate::config::{AccessToken, ArmConfig};

/// Client for Azure Resource Manager operations on Cosmos DB resources.
///
/// Every typed wrapper in [`resources`](crate::arm::resources) funnels into
/// [`ArmClient::execute`]. Each call is exactly one HTTP round trip.
///
/// # Thread Safety
///
/// `ArmClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use cosmos_offer::arm::{ArmClient, ArmOperation, ResourceKind};
/// use cosmos_offer::{AccessToken, AccountIdentity};
///
/// let token = AccessToken::new("eyJ0eXAi...")?;
/// let client = ArmClient::new(Some(&token), None)?;
/// let identity = AccountIdentity::new("sub", "rg", "acct")?;
///
/// let graphs = client
///     .execute(&identity, ResourceKind::GremlinGraph, ArmOperation::List, &["db1"], None)
///     .await?;
/// ```
#[derive(Debug)]
pub struct ArmClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify ArmClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ArmClient>();
};

impl ArmClient {
    /// Creates a new client.
    ///
    /// Uses [`ArmConfig::default`] when `config` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError::Http`] if the underlying HTTP client cannot be
    /// created.
    pub fn new(
        access_token: Option<&AccessToken>,
        config: Option<&ArmConfig>,
    ) -> Result<Self, ArmError> {
        let http_client = match config {
            Some(config) => HttpClient::new(access_token, config)?,
            None => HttpClient::new(access_token, &ArmConfig::default())?,
        };

        Ok(Self { http_client })
    }

    /// Creates a client carrying the session's ARM token.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError::Http`] if the underlying HTTP client cannot be
    /// created.
    pub fn from_session(
        session: &SessionContext,
        config: Option<&ArmConfig>,
    ) -> Result<Self, ArmError> {
        if session.arm_token.is_none() {
            tracing::debug!("Session has no ARM token; requests will be unauthenticated");
        }
        Self::new(session.arm_token.as_ref(), config)
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Runs one operation from the endpoint table and returns the JSON body.
    ///
    /// `segments` fill the row's path parameters in order. `body` is
    /// required for PUT rows and rejected for the others. An empty response
    /// body (e.g. a 202 from a long-running delete) comes back as
    /// `Value::Null`.
    ///
    /// # Errors
    ///
    /// - [`ArmError::PathResolutionFailed`] if the table has no such row
    /// - [`ArmError::ParameterCount`] if `segments` has the wrong length
    /// - [`ArmError::Http`] on transport failure, a non-2xx status, an
    ///   invalid body/method combination, or an undecodable 2xx body
    pub async fn execute(
        &self,
        identity: &AccountIdentity,
        kind: ResourceKind,
        operation: ArmOperation,
        segments: &[&str],
        body: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, ArmError> {
        let response = self
            .execute_response(identity, kind, operation, segments, body)
            .await?;
        Ok(response.body)
    }

    /// Like [`execute`](Self::execute), but returns the whole response so
    /// callers can read request IDs and long-running operation headers.
    ///
    /// # Errors
    ///
    /// Same as [`execute`](Self::execute).
    pub async fn execute_response(
        &self,
        identity: &AccountIdentity,
        kind: ResourceKind,
        operation: ArmOperation,
        segments: &[&str],
        body: Option<serde_json::Value>,
    ) -> Result<HttpResponse, ArmError> {
        let path =
            get_path(kind, operation).ok_or(ArmError::PathResolutionFailed { kind, operation })?;

        if path.params.len() != segments.len() {
            return Err(ArmError::ParameterCount {
                kind,
                operation,
                expected: path.params.len(),
                actual: segments.len(),
            });
        }

        self.send(path, identity, segments, body, &[]).await
    }

    /// Resolves `path` and sends it with optional extra query parameters.
    pub(crate) async fn send(
        &self,
        path: &ArmPath,
        identity: &AccountIdentity,
        segments: &[&str],
        body: Option<serde_json::Value>,
        query: &[(&str, &str)],
    ) -> Result<HttpResponse, ArmError> {
        let mut builder = HttpRequest::builder(path.http_method, path.resolve(identity, segments));
        if let Some(body) = body {
            builder = builder.body(body);
        }
        for (key, value) in query {
            builder = builder.query_param(*key, *value);
        }
        let request = builder.build().map_err(HttpError::from)?;

        Ok(self.http_client.request(request).await?)
    }
}

/// Converts a response body into its typed model.
pub(crate) fn decode<T: DeserializeOwned>(body: serde_json::Value) -> Result<T, ArmError> {
    Ok(serde_json::from_value(body)?)
}

/// Converts a response body, treating `null` as "no content yet".
pub(crate) fn decode_optional<T: DeserializeOwned>(
    body: serde_json::Value,
) -> Result<Option<T>, ArmError> {
    if body.is_null() {
        return Ok(None);
    }
    decode(body).map(Some)
}

/// Serializes a typed request body.
pub(crate) fn encode<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, ArmError> {
    Ok(serde_json::to_value(value)?)
}
