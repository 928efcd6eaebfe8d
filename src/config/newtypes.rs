//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around the identifiers that make up
//! an Azure Resource Manager path, plus the management endpoint and access
//! token. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

fn validate_segment(field: &'static str, value: String) -> Result<String, ConfigError> {
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(ConfigError::EmptyValue { field });
    }
    if value.contains(['/', '?', '#']) {
        return Err(ConfigError::InvalidPathSegment { field, value });
    }
    Ok(value)
}

/// An Azure subscription ID.
///
/// # Example
///
/// ```rust
/// use cosmos_offer::SubscriptionId;
///
/// let id = SubscriptionId::new("00000000-0000-0000-0000-000000000000").unwrap();
/// assert_eq!(id.as_ref(), "00000000-0000-0000-0000-000000000000");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(String);

impl SubscriptionId {
    /// Creates a new validated subscription ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyValue`] if the ID is empty, or
    /// [`ConfigError::InvalidPathSegment`] if it contains `/`, `?` or `#`.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        validate_segment("subscription_id", id.into()).map(Self)
    }
}

impl AsRef<str> for SubscriptionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// An Azure resource group name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResourceGroupName(String);

impl ResourceGroupName {
    /// Creates a new validated resource group name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyValue`] if the name is empty, or
    /// [`ConfigError::InvalidPathSegment`] if it contains `/`, `?` or `#`.
    pub fn new(name: impl Into<String>) -> Result<Self, ConfigError> {
        validate_segment("resource_group", name.into()).map(Self)
    }
}

impl AsRef<str> for ResourceGroupName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A Cosmos DB database account name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AccountName(String);

impl AccountName {
    /// Creates a new validated account name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyValue`] if the name is empty, or
    /// [`ConfigError::InvalidPathSegment`] if it contains `/`, `?` or `#`.
    pub fn new(name: impl Into<String>) -> Result<Self, ConfigError> {
        validate_segment("account_name", name.into()).map(Self)
    }
}

impl AsRef<str> for AccountName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A bearer token for the management plane.
///
/// # Security
///
/// The `Debug` implementation masks the token, displaying only
/// `AccessToken(*****)`.
///
/// # Example
///
/// ```rust
/// use cosmos_offer::AccessToken;
///
/// let token = AccessToken::new("eyJ0eXAi").unwrap();
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyValue`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyValue {
                field: "access_token",
            });
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A validated management endpoint URL.
///
/// Trailing slashes are removed so paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use cosmos_offer::HostUrl;
///
/// let url = HostUrl::new("https://management.azure.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://management.azure.com");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), Some("management.azure.com"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl HostUrl {
    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidHostUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the public Azure Resource Manager endpoint.
    #[must_use]
    pub fn azure_public_cloud() -> Self {
        let url = "https://management.azure.com".to_string();
        Self {
            scheme_end: 5,
            host_start: 8,
            host_end: url.len(),
            url,
        }
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        let host = &self.url[self.host_start..self.host_end];
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}
