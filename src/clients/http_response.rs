//! HTTP response types for management-plane calls.
//!
//! This module provides the [`HttpResponse`] type and accessors for the
//! Azure Resource Manager headers that callers care about.

use std::collections::HashMap;

/// An HTTP response from the management endpoint.
///
/// Header names are stored lowercased. An empty body decodes to
/// `serde_json::Value::Null`, which is what accepted long-running PUT and
/// DELETE calls return.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns `true` if ARM accepted the request as a long-running operation (202).
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        self.code == 202
    }

    /// Returns the `x-ms-request-id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-ms-request-id")
    }

    /// Returns the `x-ms-correlation-request-id` header value, if present.
    #[must_use]
    pub fn correlation_request_id(&self) -> Option<&str> {
        self.header("x-ms-correlation-request-id")
    }

    /// Returns the `Azure-AsyncOperation` status URL of a long-running operation.
    #[must_use]
    pub fn async_operation_url(&self) -> Option<&str> {
        self.header("azure-asyncoperation")
    }

    /// Returns the `Location` header of a long-running operation.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.header("location")
    }

    /// Returns the remaining subscription read quota reported by ARM.
    #[must_use]
    pub fn remaining_subscription_reads(&self) -> Option<u32> {
        self.header("x-ms-ratelimit-remaining-subscription-reads")
            .and_then(|value| value.trim().parse().ok())
    }
}
