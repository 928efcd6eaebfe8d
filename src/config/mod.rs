//! Configuration types for management-plane access.
//!
//! This module provides the configuration used to build clients for the
//! Azure Resource Manager (ARM) `Microsoft.DocumentDB` provider.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ArmConfig`]: Endpoint, API version and transport settings
//! - [`ArmConfigBuilder`]: A builder for constructing [`ArmConfig`] instances
//! - [`SubscriptionId`], [`ResourceGroupName`], [`AccountName`]: Validated path identifiers
//! - [`AccessToken`]: A bearer token with masked debug output
//! - [`HostUrl`]: A validated management endpoint URL
//! - [`ApiVersion`]: The `api-version` to send with each request
//!
//! # Example
//!
//! ```rust
//! use cosmos_offer::{ArmConfig, ApiVersion};
//!
//! let config = ArmConfig::builder()
//!     .api_version(ApiVersion::V2021_04_15)
//!     .user_agent_prefix("DataExplorer/1.0")
//!     .build();
//!
//! assert_eq!(config.management_endpoint().as_ref(), "https://management.azure.com");
//! ```

mod newtypes;
mod version;

use std::time::Duration;

pub use newtypes::{AccessToken, AccountName, HostUrl, ResourceGroupName, SubscriptionId};
pub use version::ApiVersion;

/// Configuration for management-plane clients.
///
/// Every field has a default, so `ArmConfig::default()` targets the public
/// Azure cloud with API version 2020-04-01 and no client-side timeout.
///
/// # Thread Safety
///
/// `ArmConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct ArmConfig {
    management_endpoint: HostUrl,
    api_version: ApiVersion,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl ArmConfig {
    /// Creates a new builder for constructing an `ArmConfig`.
    #[must_use]
    pub fn builder() -> ArmConfigBuilder {
        ArmConfigBuilder::new()
    }

    /// Returns the management endpoint.
    #[must_use]
    pub const fn management_endpoint(&self) -> &HostUrl {
        &self.management_endpoint
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the per-request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl Default for ArmConfig {
    fn default() -> Self {
        ArmConfigBuilder::new().build()
    }
}

// Verify ArmConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ArmConfig>();
};

/// Builder for constructing [`ArmConfig`] instances.
///
/// # Defaults
///
/// - `management_endpoint`: `https://management.azure.com`
/// - `api_version`: 2020-04-01
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None` (left to the transport)
///
/// # Example
///
/// ```rust
/// use cosmos_offer::{ArmConfig, HostUrl};
/// use std::time::Duration;
///
/// let config = ArmConfig::builder()
///     .management_endpoint(HostUrl::new("https://management.usgovcloudapi.net").unwrap())
///     .timeout(Duration::from_secs(30))
///     .build();
///
/// assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
/// ```
#[derive(Debug, Default)]
pub struct ArmConfigBuilder {
    management_endpoint: Option<HostUrl>,
    api_version: Option<ApiVersion>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl ArmConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the management endpoint.
    ///
    /// Sovereign clouds and test servers use this to replace the public endpoint.
    #[must_use]
    pub fn management_endpoint(mut self, endpoint: HostUrl) -> Self {
        self.management_endpoint = Some(endpoint);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the per-request timeout handed to the HTTP transport.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`ArmConfig`].
    #[must_use]
    pub fn build(self) -> ArmConfig {
        ArmConfig {
            management_endpoint: self
                .management_endpoint
                .unwrap_or_else(HostUrl::azure_public_cloud),
            api_version: self.api_version.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        }
    }
}
