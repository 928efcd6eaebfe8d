//! The declared data model of a Cosmos DB account.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// The API an account was created with.
///
/// Values that are not one of the five known kinds are kept verbatim in
/// [`DefaultExperience::Custom`] so that callers can still construct a
/// context for them; the management-plane read path rejects them.
///
/// # Example
///
/// ```rust
/// use cosmos_offer::DefaultExperience;
///
/// let experience: DefaultExperience = "Graph".parse().unwrap();
/// assert_eq!(experience, DefaultExperience::Graph);
///
/// let unknown: DefaultExperience = "Postgres".parse().unwrap();
/// assert_eq!(unknown, DefaultExperience::Custom("Postgres".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DefaultExperience {
    /// Core (SQL) API.
    DocumentDB,
    /// API for MongoDB.
    MongoDB,
    /// Table API.
    Table,
    /// Cassandra API.
    Cassandra,
    /// Gremlin (graph) API.
    Graph,
    /// Any other experience string.
    Custom(String),
}

impl DefaultExperience {
    /// Returns `true` for the key-value Table API.
    #[must_use]
    pub const fn is_table(&self) -> bool {
        matches!(self, Self::Table)
    }
}

impl fmt::Display for DefaultExperience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::DocumentDB => "DocumentDB",
            Self::MongoDB => "MongoDB",
            Self::Table => "Table",
            Self::Cassandra => "Cassandra",
            Self::Graph => "Graph",
            Self::Custom(name) => name,
        };
        f.write_str(name)
    }
}

impl FromStr for DefaultExperience {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(match trimmed.to_lowercase().as_str() {
            "documentdb" => Self::DocumentDB,
            "mongodb" => Self::MongoDB,
            "table" => Self::Table,
            "cassandra" => Self::Cassandra,
            "graph" => Self::Graph,
            _ => Self::Custom(trimmed.to_string()),
        })
    }
}
