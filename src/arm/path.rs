//! Endpoint table for `Microsoft.DocumentDB` resources.
//!
//! Every management operation this crate performs is a row in a const table:
//! a resource kind and operation map to an HTTP method, the ordered list of
//! path parameters the caller supplies, and a URL template. One generic
//! request function ([`ArmClient::execute`](crate::arm::ArmClient::execute))
//! walks this table, so adding an endpoint means adding a row.
//!
//! # Path Templates
//!
//! Templates use `{name}` placeholders. The account-level placeholders
//! (`{subscriptionId}`, `{resourceGroupName}`, `{accountName}`) are filled
//! from an [`AccountIdentity`]; the rest come positionally from the caller.
//! Values are interpolated verbatim with no escaping.
//!
//! # Example
//!
//! ```rust
//! use cosmos_offer::arm::{get_path, ArmOperation, ResourceKind};
//! use cosmos_offer::AccountIdentity;
//!
//! let path = get_path(ResourceKind::GremlinGraph, ArmOperation::GetThroughput).unwrap();
//! assert_eq!(path.params, &["databaseName", "graphName"]);
//!
//! let identity = AccountIdentity::new("sub", "rg", "acct").unwrap();
//! let url = path.resolve(&identity, &["db1", "g1"]);
//! assert!(url.ends_with("gremlinDatabases/db1/graphs/g1/throughputSettings/default"));
//! ```

use std::collections::HashMap;
use std::fmt::{self, Display};

use crate::auth::AccountIdentity;
use crate::clients::HttpMethod;

/// Prefixes a template with the database-account path.
macro_rules! account_path {
    ($tail:literal) => {
        concat!(
            "subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}",
            "/providers/Microsoft.DocumentDB/databaseAccounts/{accountName}/",
            $tail
        )
    };
}

/// Operations available on each resource kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArmOperation {
    /// List the resources of this kind under their parent.
    List,
    /// Read a single resource.
    Get,
    /// Create or replace a resource.
    CreateUpdate,
    /// Delete a resource.
    Delete,
    /// Read the resource's throughput settings.
    GetThroughput,
    /// Replace the resource's throughput settings.
    UpdateThroughput,
}

impl ArmOperation {
    /// All operations, in table order.
    pub const ALL: [Self; 6] = [
        Self::List,
        Self::Get,
        Self::CreateUpdate,
        Self::Delete,
        Self::GetThroughput,
        Self::UpdateThroughput,
    ];

    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Get => "get",
            Self::CreateUpdate => "createUpdate",
            Self::Delete => "delete",
            Self::GetThroughput => "getThroughput",
            Self::UpdateThroughput => "updateThroughput",
        }
    }
}

impl Display for ArmOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resource kinds exposed by the `Microsoft.DocumentDB` provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Core (SQL) API database.
    SqlDatabase,
    /// Core (SQL) API container.
    SqlContainer,
    /// API for MongoDB database.
    MongoDbDatabase,
    /// API for MongoDB collection.
    MongoDbCollection,
    /// Cassandra keyspace.
    CassandraKeyspace,
    /// Cassandra table.
    CassandraTable,
    /// Gremlin database.
    GremlinDatabase,
    /// Gremlin graph.
    GremlinGraph,
    /// Table API table.
    Table,
}

impl ResourceKind {
    /// All resource kinds.
    pub const ALL: [Self; 9] = [
        Self::SqlDatabase,
        Self::SqlContainer,
        Self::MongoDbDatabase,
        Self::MongoDbCollection,
        Self::CassandraKeyspace,
        Self::CassandraTable,
        Self::GremlinDatabase,
        Self::GremlinGraph,
        Self::Table,
    ];

    /// Returns the kind's name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SqlDatabase => "SqlDatabase",
            Self::SqlContainer => "SqlContainer",
            Self::MongoDbDatabase => "MongoDBDatabase",
            Self::MongoDbCollection => "MongoDBCollection",
            Self::CassandraKeyspace => "CassandraKeyspace",
            Self::CassandraTable => "CassandraTable",
            Self::GremlinDatabase => "GremlinDatabase",
            Self::GremlinGraph => "GremlinGraph",
            Self::Table => "Table",
        }
    }

    /// Returns the endpoint rows for this kind.
    #[must_use]
    pub const fn paths(&self) -> &'static [ArmPath] {
        match self {
            Self::SqlDatabase => SQL_DATABASE_PATHS,
            Self::SqlContainer => SQL_CONTAINER_PATHS,
            Self::MongoDbDatabase => MONGODB_DATABASE_PATHS,
            Self::MongoDbCollection => MONGODB_COLLECTION_PATHS,
            Self::CassandraKeyspace => CASSANDRA_KEYSPACE_PATHS,
            Self::CassandraTable => CASSANDRA_TABLE_PATHS,
            Self::GremlinDatabase => GREMLIN_DATABASE_PATHS,
            Self::GremlinGraph => GREMLIN_GRAPH_PATHS,
            Self::Table => TABLE_PATHS,
        }
    }
}

impl Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the endpoint table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArmPath {
    /// The operation this row serves.
    pub operation: ArmOperation,
    /// The HTTP method for this row.
    pub http_method: HttpMethod,
    /// Caller-supplied path parameters, in positional order.
    pub params: &'static [&'static str],
    /// The URL template, relative to the management endpoint.
    pub template: &'static str,
}

impl ArmPath {
    /// Creates a new `ArmPath`.
    #[must_use]
    pub const fn new(
        operation: ArmOperation,
        http_method: HttpMethod,
        params: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            operation,
            http_method,
            params,
            template,
        }
    }

    /// Returns `true` if this row sends a JSON body.
    #[must_use]
    pub const fn expects_body(&self) -> bool {
        self.http_method.expects_body()
    }

    /// Interpolates the account identity and positional segments.
    ///
    /// Extra segments are ignored and missing ones leave their placeholder in
    /// place; [`ArmClient::execute`](crate::arm::ArmClient::execute) checks the
    /// count before calling this.
    #[must_use]
    pub fn resolve(&self, identity: &AccountIdentity, segments: &[&str]) -> String {
        let mut ids: HashMap<&str, &str> = HashMap::new();
        ids.insert("subscriptionId", identity.subscription_id.as_ref());
        ids.insert("resourceGroupName", identity.resource_group.as_ref());
        ids.insert("accountName", identity.account_name.as_ref());
        for (name, value) in self.params.iter().zip(segments) {
            ids.insert(*name, *value);
        }
        build_path(self.template, &ids)
    }
}

#[rustfmt::skip]
const SQL_DATABASE_PATHS: &[ArmPath] = &[
    ArmPath::new(ArmOperation::List, HttpMethod::Get, &[], account_path!("sqlDatabases")),
    ArmPath::new(ArmOperation::Get, HttpMethod::Get, &["databaseName"], account_path!("sqlDatabases/{databaseName}")),
    ArmPath::new(ArmOperation::CreateUpdate, HttpMethod::Put, &["databaseName"], account_path!("sqlDatabases/{databaseName}")),
    ArmPath::new(ArmOperation::Delete, HttpMethod::Delete, &["databaseName"], account_path!("sqlDatabases/{databaseName}")),
    ArmPath::new(ArmOperation::GetThroughput, HttpMethod::Get, &["databaseName"], account_path!("sqlDatabases/{databaseName}/throughputSettings/default")),
    ArmPath::new(ArmOperation::UpdateThroughput, HttpMethod::Put, &["databaseName"], account_path!("sqlDatabases/{databaseName}/throughputSettings/default")),
];

#[rustfmt::skip]
const SQL_CONTAINER_PATHS: &[ArmPath] = &[
    ArmPath::new(ArmOperation::List, HttpMethod::Get, &["databaseName"], account_path!("sqlDatabases/{databaseName}/containers")),
    ArmPath::new(ArmOperation::Get, HttpMethod::Get, &["databaseName", "containerName"], account_path!("sqlDatabases/{databaseName}/containers/{containerName}")),
    ArmPath::new(ArmOperation::CreateUpdate, HttpMethod::Put, &["databaseName", "containerName"], account_path!("sqlDatabases/{databaseName}/containers/{containerName}")),
    ArmPath::new(ArmOperation::Delete, HttpMethod::Delete, &["databaseName", "containerName"], account_path!("sqlDatabases/{databaseName}/containers/{containerName}")),
    ArmPath::new(ArmOperation::GetThroughput, HttpMethod::Get, &["databaseName", "containerName"], account_path!("sqlDatabases/{databaseName}/containers/{containerName}/throughputSettings/default")),
    ArmPath::new(ArmOperation::UpdateThroughput, HttpMethod::Put, &["databaseName", "containerName"], account_path!("sqlDatabases/{databaseName}/containers/{containerName}/throughputSettings/default")),
];

#[rustfmt::skip]
const MONGODB_DATABASE_PATHS: &[ArmPath] = &[
    ArmPath::new(ArmOperation::List, HttpMethod::Get, &[], account_path!("mongodbDatabases")),
    ArmPath::new(ArmOperation::Get, HttpMethod::Get, &["databaseName"], account_path!("mongodbDatabases/{databaseName}")),
    ArmPath::new(ArmOperation::CreateUpdate, HttpMethod::Put, &["databaseName"], account_path!("mongodbDatabases/{databaseName}")),
    ArmPath::new(ArmOperation::Delete, HttpMethod::Delete, &["databaseName"], account_path!("mongodbDatabases/{databaseName}")),
    ArmPath::new(ArmOperation::GetThroughput, HttpMethod::Get, &["databaseName"], account_path!("mongodbDatabases/{databaseName}/throughputSettings/default")),
    ArmPath::new(ArmOperation::UpdateThroughput, HttpMethod::Put, &["databaseName"], account_path!("mongodbDatabases/{databaseName}/throughputSettings/default")),
];

#[rustfmt::skip]
const MONGODB_COLLECTION_PATHS: &[ArmPath] = &[
    ArmPath::new(ArmOperation::List, HttpMethod::Get, &["databaseName"], account_path!("mongodbDatabases/{databaseName}/collections")),
    ArmPath::new(ArmOperation::Get, HttpMethod::Get, &["databaseName", "collectionName"], account_path!("mongodbDatabases/{databaseName}/collections/{collectionName}")),
    ArmPath::new(ArmOperation::CreateUpdate, HttpMethod::Put, &["databaseName", "collectionName"], account_path!("mongodbDatabases/{databaseName}/collections/{collectionName}")),
    ArmPath::new(ArmOperation::Delete, HttpMethod::Delete, &["databaseName", "collectionName"], account_path!("mongodbDatabases/{databaseName}/collections/{collectionName}")),
    ArmPath::new(ArmOperation::GetThroughput, HttpMethod::Get, &["databaseName", "collectionName"], account_path!("mongodbDatabases/{databaseName}/collections/{collectionName}/throughputSettings/default")),
    ArmPath::new(ArmOperation::UpdateThroughput, HttpMethod::Put, &["databaseName", "collectionName"], account_path!("mongodbDatabases/{databaseName}/collections/{collectionName}/throughputSettings/default")),
];

#[rustfmt::skip]
const CASSANDRA_KEYSPACE_PATHS: &[ArmPath] = &[
    ArmPath::new(ArmOperation::List, HttpMethod::Get, &[], account_path!("cassandraKeyspaces")),
    ArmPath::new(ArmOperation::Get, HttpMethod::Get, &["keyspaceName"], account_path!("cassandraKeyspaces/{keyspaceName}")),
    ArmPath::new(ArmOperation::CreateUpdate, HttpMethod::Put, &["keyspaceName"], account_path!("cassandraKeyspaces/{keyspaceName}")),
    ArmPath::new(ArmOperation::Delete, HttpMethod::Delete, &["keyspaceName"], account_path!("cassandraKeyspaces/{keyspaceName}")),
    ArmPath::new(ArmOperation::GetThroughput, HttpMethod::Get, &["keyspaceName"], account_path!("cassandraKeyspaces/{keyspaceName}/throughputSettings/default")),
    ArmPath::new(ArmOperation::UpdateThroughput, HttpMethod::Put, &["keyspaceName"], account_path!("cassandraKeyspaces/{keyspaceName}/throughputSettings/default")),
];

#[rustfmt::skip]
const CASSANDRA_TABLE_PATHS: &[ArmPath] = &[
    ArmPath::new(ArmOperation::List, HttpMethod::Get, &["keyspaceName"], account_path!("cassandraKeyspaces/{keyspaceName}/tables")),
    ArmPath::new(ArmOperation::Get, HttpMethod::Get, &["keyspaceName", "tableName"], account_path!("cassandraKeyspaces/{keyspaceName}/tables/{tableName}")),
    ArmPath::new(ArmOperation::CreateUpdate, HttpMethod::Put, &["keyspaceName", "tableName"], account_path!("cassandraKeyspaces/{keyspaceName}/tables/{tableName}")),
    ArmPath::new(ArmOperation::Delete, HttpMethod::Delete, &["keyspaceName", "tableName"], account_path!("cassandraKeyspaces/{keyspaceName}/tables/{tableName}")),
    ArmPath::new(ArmOperation::GetThroughput, HttpMethod::Get, &["keyspaceName", "tableName"], account_path!("cassandraKeyspaces/{keyspaceName}/tables/{tableName}/throughputSettings/default")),
    ArmPath::new(ArmOperation::UpdateThroughput, HttpMethod::Put, &["keyspaceName", "tableName"], account_path!("cassandraKeyspaces/{keyspaceName}/tables/{tableName}/throughputSettings/default")),
];

#[rustfmt::skip]
const GREMLIN_DATABASE_PATHS: &[ArmPath] = &[
    ArmPath::new(ArmOperation::List, HttpMethod::Get, &[], account_path!("gremlinDatabases")),
    ArmPath::new(ArmOperation::Get, HttpMethod::Get, &["databaseName"], account_path!("gremlinDatabases/{databaseName}")),
    ArmPath::new(ArmOperation::CreateUpdate, HttpMethod::Put, &["databaseName"], account_path!("gremlinDatabases/{databaseName}")),
    ArmPath::new(ArmOperation::Delete, HttpMethod::Delete, &["databaseName"], account_path!("gremlinDatabases/{databaseName}")),
    ArmPath::new(ArmOperation::GetThroughput, HttpMethod::Get, &["databaseName"], account_path!("gremlinDatabases/{databaseName}/throughputSettings/default")),
    ArmPath::new(ArmOperation::UpdateThroughput, HttpMethod::Put, &["databaseName"], account_path!("gremlinDatabases/{databaseName}/throughputSettings/default")),
];

#[rustfmt::skip]
const GREMLIN_GRAPH_PATHS: &[ArmPath] = &[
    ArmPath::new(ArmOperation::List, HttpMethod::Get, &["databaseName"], account_path!("gremlinDatabases/{databaseName}/graphs")),
    ArmPath::new(ArmOperation::Get, HttpMethod::Get, &["databaseName", "graphName"], account_path!("gremlinDatabases/{databaseName}/graphs/{graphName}")),
    ArmPath::new(ArmOperation::CreateUpdate, HttpMethod::Put, &["databaseName", "graphName"], account_path!("gremlinDatabases/{databaseName}/graphs/{graphName}")),
    ArmPath::new(ArmOperation::Delete, HttpMethod::Delete, &["databaseName", "graphName"], account_path!("gremlinDatabases/{databaseName}/graphs/{graphName}")),
    ArmPath::new(ArmOperation::GetThroughput, HttpMethod::Get, &["databaseName", "graphName"], account_path!("gremlinDatabases/{databaseName}/graphs/{graphName}/throughputSettings/default")),
    ArmPath::new(ArmOperation::UpdateThroughput, HttpMethod::Put, &["databaseName", "graphName"], account_path!("gremlinDatabases/{databaseName}/graphs/{graphName}/throughputSettings/default")),
];

#[rustfmt::skip]
const TABLE_PATHS: &[ArmPath] = &[
    ArmPath::new(ArmOperation::List, HttpMethod::Get, &[], account_path!("tables")),
    ArmPath::new(ArmOperation::Get, HttpMethod::Get, &["tableName"], account_path!("tables/{tableName}")),
    ArmPath::new(ArmOperation::CreateUpdate, HttpMethod::Put, &["tableName"], account_path!("tables/{tableName}")),
    ArmPath::new(ArmOperation::Delete, HttpMethod::Delete, &["tableName"], account_path!("tables/{tableName}")),
    ArmPath::new(ArmOperation::GetThroughput, HttpMethod::Get, &["tableName"], account_path!("tables/{tableName}/throughputSettings/default")),
    ArmPath::new(ArmOperation::UpdateThroughput, HttpMethod::Put, &["tableName"], account_path!("tables/{tableName}/throughputSettings/default")),
];

/// Metrics for one region of a database account.
pub const REGION_METRICS_PATH: ArmPath = ArmPath::new(
    ArmOperation::List,
    HttpMethod::Get,
    &["region"],
    account_path!("region/{region}/metrics"),
);

/// Looks up the endpoint row for a resource kind and operation.
#[must_use]
pub fn get_path(kind: ResourceKind, operation: ArmOperation) -> Option<&'static ArmPath> {
    kind.paths().iter().find(|p| p.operation == operation)
}

/// Builds a URL from a template by interpolating IDs.
///
/// Replaces `{name}` placeholders in the template with values from the
/// provided map. The template is scanned once from left to right and
/// substituted values are never rescanned, so a value that itself looks like
/// a placeholder is inserted verbatim. Unknown placeholders are kept.
///
/// # Example
///
/// ```rust
/// use cosmos_offer::arm::build_path;
/// use std::collections::HashMap;
///
/// let mut ids = HashMap::new();
/// ids.insert("databaseName", "db1");
/// ids.insert("graphName", "g1");
///
/// let url = build_path("gremlinDatabases/{databaseName}/graphs/{graphName}", &ids);
/// assert_eq!(url, "gremlinDatabases/db1/graphs/g1");
/// ```
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn build_path<V: Display>(template: &str, ids: &HashMap<&str, V>) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            rest = &rest[open..];
            break;
        };

        let key = &after[..close];
        match ids.get(key) {
            Some(value) => result.push_str(&value.to_string()),
            None => result.push_str(&rest[open..=open + close + 1]),
        }
        rest = &after[close + 1..];
    }

    result.push_str(rest);
    result
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ArmOperation>();
    assert_send_sync::<ResourceKind>();
    assert_send_sync::<ArmPath>();
};
