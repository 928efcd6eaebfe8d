//! Error types for client configuration.
//!
//! This module contains the error type returned by configuration builders
//! and validated newtypes.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use cosmos_offer::{AccountName, ConfigError};
//!
//! let result = AccountName::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyValue { field: "account_name" })));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required identifier was empty.
    #[error("'{field}' cannot be empty. Please provide a valid Azure resource identifier.")]
    EmptyValue {
        /// The name of the empty field.
        field: &'static str,
    },

    /// An identifier contains a character that cannot appear in a URL path segment.
    #[error("Invalid {field} '{value}'. Path separators and query characters are not allowed.")]
    InvalidPathSegment {
        /// The name of the field.
        field: &'static str,
        /// The rejected value.
        value: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'YYYY-MM-DD' (e.g., '2020-04-01'), optionally with a '-preview' suffix.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// Management endpoint URL is invalid.
    #[error("Invalid management endpoint '{url}'. Please provide a valid URL with scheme (e.g., 'https://management.azure.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}
