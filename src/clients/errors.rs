//! HTTP-specific error types for management-plane calls.
//!
//! This module contains error types for HTTP operations, including response
//! errors, body decoding failures, and request validation failures.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses, with the ARM error code
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use cosmos_offer::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) if e.is_not_found() => println!("gone"),
//!     Err(HttpError::Response(e)) => println!("ARM error {}: {}", e.status, e.message),
//!     Err(HttpError::Decode(e)) => println!("Bad JSON: {e}"),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// The ARM error code that marks a missing resource.
pub const NOT_FOUND_CODE: &str = "NotFound";

/// Error returned when an HTTP request receives a non-successful response.
///
/// ARM error bodies look like `{"error": {"code": "NotFound", "message": "..."}}`;
/// the Cosmos DB resource provider sometimes omits the `error` wrapper. Both
/// shapes populate `code` and `message`.
///
/// # Example
///
/// ```rust
/// use cosmos_offer::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     status: 404,
///     code: Some("NotFound".to_string()),
///     message: "Resource not found".to_string(),
///     request_id: None,
/// };
///
/// assert!(error.is_not_found());
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Request failed with status {status}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// The ARM error code, if the body carried one.
    pub code: Option<String>,
    /// The error message from the body, or the raw body text.
    pub message: String,
    /// The `x-ms-request-id` header value, if present.
    pub request_id: Option<String>,
}

impl HttpResponseError {
    /// Builds an error from a status code and decoded body.
    #[must_use]
    pub fn from_body(status: u16, body: &serde_json::Value, request_id: Option<String>) -> Self {
        let detail = body.get("error").unwrap_or(body);
        let code = detail
            .get("code")
            .and_then(serde_json::Value::as_str)
            .map(ToString::to_string);
        let message = detail
            .get("message")
            .and_then(serde_json::Value::as_str)
            .map(ToString::to_string)
            .or_else(|| {
                body.get("raw_body")
                    .and_then(serde_json::Value::as_str)
                    .map(ToString::to_string)
            })
            .unwrap_or_else(|| body.to_string());

        Self {
            status,
            code,
            message,
            request_id,
        }
    }

    /// Returns `true` if this error reports a missing resource.
    ///
    /// The ARM error code decides when present; a bare 404 counts otherwise.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.code
            .as_deref()
            .map_or(self.status == 404, |code| code == NOT_FOUND_CODE)
    }
}

/// Error returned when an HTTP request fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A GET or DELETE request was given a body.
    #[error("Cannot send data with {method}.")]
    UnexpectedBody {
        /// The HTTP method that does not accept a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// A successful response carried a body that is not valid JSON.
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns `true` if this is a response error reporting a missing resource.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Response(e) if e.is_not_found())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_body_reads_wrapped_arm_error() {
        let body = json!({"error": {"code": "NotFound", "message": "Graph g1 not found"}});
        let error = HttpResponseError::from_body(404, &body, Some("req-1".to_string()));

        assert_eq!(error.code.as_deref(), Some("NotFound"));
        assert_eq!(error.message, "Graph g1 not found");
        assert_eq!(error.request_id.as_deref(), Some("req-1"));
        assert!(error.is_not_found());
    }

    #[test]
    fn test_from_body_reads_unwrapped_error() {
        let body = json!({"code": "BadRequest", "message": "Throughput too low"});
        let error = HttpResponseError::from_body(400, &body, None);

        assert_eq!(error.code.as_deref(), Some("BadRequest"));
        assert_eq!(error.message, "Throughput too low");
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_code_takes_precedence_over_status() {
        let body = json!({"error": {"code": "ResourceGroupNotFound", "message": "rg"}});
        let error = HttpResponseError::from_body(404, &body, None);
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_bare_404_counts_as_not_found() {
        let error = HttpResponseError::from_body(404, &json!(null), None);
        assert!(error.code.is_none());
        assert!(error.is_not_found());
    }

    #[test]
    fn test_raw_body_becomes_message() {
        let body = json!({"raw_body": "<html>Bad Gateway</html>"});
        let error = HttpResponseError::from_body(502, &body, None);
        assert_eq!(error.message, "<html>Bad Gateway</html>");
        assert!(error.to_string().contains("502"));
    }

    #[test]
    fn test_invalid_request_error_messages() {
        assert_eq!(
            InvalidHttpRequestError::MissingBody {
                method: "put".to_string()
            }
            .to_string(),
            "Cannot use put without specifying data."
        );
        assert_eq!(
            InvalidHttpRequestError::UnexpectedBody {
                method: "get".to_string()
            }
            .to_string(),
            "Cannot send data with get."
        );
    }

    #[test]
    fn test_http_error_not_found_helper() {
        let error = HttpError::Response(HttpResponseError::from_body(
            404,
            &json!({"code": "NotFound"}),
            None,
        ));
        assert!(error.is_not_found());

        let error = HttpError::InvalidRequest(InvalidHttpRequestError::MissingBody {
            method: "put".to_string(),
        });
        assert!(!error.is_not_found());
    }
}
