//! Session context for offer reads.
//!
//! This module provides the [`SessionContext`] type, the explicit stand-in for
//! the process-wide user context a data explorer keeps, and the
//! [`AccountIdentity`] that addresses an account in Azure Resource Manager.

use crate::auth::{AuthType, DefaultExperience};
use crate::config::{AccessToken, AccountName, ResourceGroupName, SubscriptionId};
use crate::error::ConfigError;

/// The ARM address of a Cosmos DB database account.
///
/// # Example
///
/// ```rust
/// use cosmos_offer::AccountIdentity;
///
/// let identity = AccountIdentity::new("sub", "rg", "acct").unwrap();
/// assert_eq!(identity.account_name.as_ref(), "acct");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AccountIdentity {
    /// The subscription that owns the account.
    pub subscription_id: SubscriptionId,
    /// The resource group that contains the account.
    pub resource_group: ResourceGroupName,
    /// The database account name.
    pub account_name: AccountName,
}

impl AccountIdentity {
    /// Creates a new identity, validating each component.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any component is empty or contains a path
    /// separator.
    pub fn new(
        subscription_id: impl Into<String>,
        resource_group: impl Into<String>,
        account_name: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            subscription_id: SubscriptionId::new(subscription_id)?,
            resource_group: ResourceGroupName::new(resource_group)?,
            account_name: AccountName::new(account_name)?,
        })
    }
}

/// Read-only context consulted when reading an offer.
///
/// Nothing in this crate mutates a `SessionContext`; it is built by the host
/// application and passed by reference into each read.
///
/// # Thread Safety
///
/// `SessionContext` is `Send + Sync`.
#[derive(Clone, Debug)]
pub struct SessionContext {
    /// How the session authenticated.
    pub auth_type: AuthType,

    /// Forces the data-plane SDK path even when ARM would be usable.
    pub use_sdk_operations: bool,

    /// The account's declared data model.
    pub default_experience: DefaultExperience,

    /// The account being browsed.
    pub account: AccountIdentity,

    /// Bearer token for management-plane calls, when signed in through AAD.
    ///
    /// Only read by [`ArmClient::from_session`](crate::arm::ArmClient::from_session).
    /// An [`OfferReader`](crate::offer::OfferReader) sends the token of the
    /// client it was built with, so a new token means a new client.
    pub arm_token: Option<AccessToken>,
}

impl SessionContext {
    /// Creates a new context with `use_sdk_operations` off and no ARM token.
    #[must_use]
    pub const fn new(
        auth_type: AuthType,
        default_experience: DefaultExperience,
        account: AccountIdentity,
    ) -> Self {
        Self {
            auth_type,
            use_sdk_operations: false,
            default_experience,
            account,
            arm_token: None,
        }
    }

    /// Sets the SDK-preference override flag.
    #[must_use]
    pub const fn with_sdk_operations(mut self, use_sdk_operations: bool) -> Self {
        self.use_sdk_operations = use_sdk_operations;
        self
    }

    /// Attaches the management-plane bearer token.
    #[must_use]
    pub fn with_arm_token(mut self, token: AccessToken) -> Self {
        self.arm_token = Some(token);
        self
    }

    /// Returns `true` when offers should be read through Azure Resource Manager.
    ///
    /// That requires an AAD sign-in, no SDK override, and an account that is
    /// not a Table API account.
    #[must_use]
    pub const fn prefers_resource_manager(&self) -> bool {
        matches!(self.auth_type, AuthType::Aad)
            && !self.use_sdk_operations
            && !self.default_experience.is_table()
    }
}

// Verify SessionContext is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SessionContext>();
};
