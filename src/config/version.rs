//! Azure Resource Manager API version definitions.
//!
//! This module provides the [`ApiVersion`] enum for selecting the
//! `Microsoft.DocumentDB` resource provider API version sent as the
//! `api-version` query parameter on every management request.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// `Microsoft.DocumentDB` resource provider API version.
///
/// Known stable versions have their own variants. Anything else that is
/// shaped like an ARM version (`YYYY-MM-DD`, optionally `-preview`) parses
/// into [`ApiVersion::Custom`].
///
/// # Example
///
/// ```rust
/// use cosmos_offer::ApiVersion;
///
/// let version: ApiVersion = "2020-04-01".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2020_04_01);
/// assert_eq!(ApiVersion::default().to_string(), "2020-04-01");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 2020-04-01, the default.
    #[default]
    V2020_04_01,
    /// API version 2021-04-15.
    V2021_04_15,
    /// API version 2021-10-15.
    V2021_10_15,
    /// Any other well-formed version string.
    Custom(String),
}

impl ApiVersion {
    /// Returns the newest stable version known to this crate.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2021_10_15
    }

    /// Returns `true` for preview versions.
    #[must_use]
    pub fn is_preview(&self) -> bool {
        matches!(self, Self::Custom(s) if s.ends_with("-preview"))
    }

    fn is_valid_version_format(s: &str) -> bool {
        let date = s.strip_suffix("-preview").unwrap_or(s);
        let parts: Vec<&str> = date.split('-').collect();
        if parts.len() != 3 {
            return false;
        }

        let lengths_ok = parts[0].len() == 4 && parts[1].len() == 2 && parts[2].len() == 2;
        lengths_ok
            && parts
                .iter()
                .all(|part| part.chars().all(|c| c.is_ascii_digit()))
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let version_str = match self {
            Self::V2020_04_01 => "2020-04-01",
            Self::V2021_04_15 => "2021-04-15",
            Self::V2021_10_15 => "2021-10-15",
            Self::Custom(s) => s,
        };
        f.write_str(version_str)
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        match s.as_str() {
            "2020-04-01" => Ok(Self::V2020_04_01),
            "2021-04-15" => Ok(Self::V2021_04_15),
            "2021-10-15" => Ok(Self::V2021_10_15),
            _ => {
                if Self::is_valid_version_format(&s) {
                    Ok(Self::Custom(s))
                } else {
                    Err(ConfigError::InvalidApiVersion { version: s })
                }
            }
        }
    }
}
