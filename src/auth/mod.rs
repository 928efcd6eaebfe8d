//! Authentication and account context types.
//!
//! This module provides the types describing how the caller is signed in and
//! which data model the Cosmos DB account exposes. Together they decide which
//! backend the offer reader queries.
//!
//! # Overview
//!
//! - [`AuthType`]: How the current session authenticated
//! - [`DefaultExperience`]: The account's declared data model (API kind)
//! - [`SessionContext`]: The explicit context passed to read operations
//! - [`AccountIdentity`]: Subscription, resource group and account name
//!
//! # Example
//!
//! ```rust
//! use cosmos_offer::{AccountIdentity, AuthType, DefaultExperience, SessionContext};
//!
//! let identity = AccountIdentity::new("sub-1", "rg-1", "account-1").unwrap();
//! let context = SessionContext::new(AuthType::Aad, DefaultExperience::DocumentDB, identity);
//!
//! assert!(context.prefers_resource_manager());
//! ```

mod experience;
pub mod session;

use std::fmt;
use std::str::FromStr;

pub use experience::DefaultExperience;
pub use session::{AccountIdentity, SessionContext};

/// How the current session authenticated against the account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AuthType {
    /// Microsoft Entra ID (Azure AD). Only this mode can call the management plane.
    Aad,
    /// An encrypted connection-string token issued by the portal.
    EncryptedToken,
    /// An account master key.
    MasterKey,
    /// A scoped resource token.
    ResourceToken,
    /// A raw connection string.
    ConnectionString,
}

impl AuthType {
    /// Returns the wire name of this auth type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Aad => "aad",
            Self::EncryptedToken => "encryptedtoken",
            Self::MasterKey => "masterkey",
            Self::ResourceToken => "resourcetoken",
            Self::ConnectionString => "connectionstring",
        }
    }
}

impl fmt::Display for AuthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "aad" => Ok(Self::Aad),
            "encryptedtoken" => Ok(Self::EncryptedToken),
            "masterkey" => Ok(Self::MasterKey),
            "resourcetoken" => Ok(Self::ResourceToken),
            "connectionstring" => Ok(Self::ConnectionString),
            other => Err(format!("unknown auth type '{other}'")),
        }
    }
}
