//! HTTP client types for Azure Resource Manager communication.
//!
//! This module provides the transport layer used by the management-plane
//! client: request building, sending, response header access and error
//! parsing.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client
//! - [`HttpRequest`]: A request to be sent to the management endpoint
//! - [`HttpResponse`]: A parsed response
//! - [`HttpMethod`]: Supported HTTP methods (GET, PUT, DELETE)
//! - [`HttpError`]: Unified error type
//!
//! # Example
//!
//! ```rust,ignore
//! use cosmos_offer::{AccessToken, ArmConfig};
//! use cosmos_offer::clients::{HttpClient, HttpRequest, HttpMethod};
//!
//! let token = AccessToken::new("eyJ0eXAi...")?;
//! let client = HttpClient::new(Some(&token), &ArmConfig::default())?;
//!
//! let request = HttpRequest::builder(
//!     HttpMethod::Get,
//!     "subscriptions/sub/resourceGroups/rg/providers/Microsoft.DocumentDB/databaseAccounts/acct/gremlinDatabases",
//! )
//! .build()?;
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! None. Throttling (429) and server errors surface as [`HttpError::Response`]
//! on the first failure.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError, NOT_FOUND_CODE};
pub use http_client::{HttpClient, API_VERSION_PARAM, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
