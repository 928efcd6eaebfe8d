//! Request and response payloads for the management endpoints.
//!
//! These types follow the `Microsoft.DocumentDB` 2020-04-01 schemas loosely:
//! almost every field is optional and unknown fields are ignored, because the
//! resource provider owns the contract and this crate does not validate it.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The envelope ARM wraps around every tracked resource.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ArmResource<P> {
    /// Fully qualified resource ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Resource name. For throughput settings this is the offer ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Resource type, e.g. `Microsoft.DocumentDB/databaseAccounts/gremlinDatabases`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    /// Azure region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Resource tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
    /// Kind-specific properties.
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub properties: Option<P>,
}

/// A `value` array returned by list operations. No `nextLink` handling.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ArmListResult<T> {
    /// The listed items.
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,
}

/// The `properties` block of a GET response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceProperties<R> {
    /// The resource body as stored by the provider.
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub resource: Option<R>,
    /// Throughput options, present on shared-throughput parents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<OptionsResource>,
}

/// Throughput options attached to a database or container.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsResource {
    /// Manual throughput in RU/s.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub throughput: Option<u32>,
    /// Autoscale settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoscale_settings: Option<AutoscaleOptions>,
}

/// Autoscale option used when creating a resource.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoscaleOptions {
    /// Maximum RU/s the resource scales up to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_throughput: Option<u32>,
}

/// Body for create-or-update calls.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateUpdateParameters<R> {
    /// Azure region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Resource tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
    /// The resource and its options.
    pub properties: CreateUpdateProperties<R>,
}

impl<R> CreateUpdateParameters<R> {
    /// Wraps a resource body with no options, location or tags.
    #[must_use]
    pub const fn new(resource: R) -> Self {
        Self {
            location: None,
            tags: None,
            properties: CreateUpdateProperties {
                resource,
                options: None,
            },
        }
    }

    /// Attaches throughput options.
    #[must_use]
    pub fn with_options(mut self, options: OptionsResource) -> Self {
        self.properties.options = Some(options);
        self
    }
}

/// The `properties` block of a create-or-update body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateUpdateProperties<R> {
    /// The resource body.
    pub resource: R,
    /// Throughput options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<OptionsResource>,
}

/// System properties the provider adds to every resource body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemProperties {
    /// Resource ID in the data plane.
    #[serde(rename = "_rid", default, skip_serializing)]
    pub rid: Option<String>,
    /// Last-modified timestamp, seconds since the epoch.
    #[serde(rename = "_ts", default, skip_serializing)]
    pub ts: Option<f64>,
    /// Entity tag.
    #[serde(rename = "_etag", default, skip_serializing)]
    pub etag: Option<String>,
}

/// A Gremlin database body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GremlinDatabaseResource {
    /// Database name.
    pub id: String,
    /// Provider-managed fields.
    #[serde(flatten)]
    pub system: SystemProperties,
}

impl GremlinDatabaseResource {
    /// Creates a body with just the database name.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            system: SystemProperties::default(),
        }
    }
}

/// Partition key definition of a graph or container.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerPartitionKey {
    /// Partition key paths, e.g. `["/pk"]`.
    #[serde(default)]
    pub paths: Vec<String>,
    /// `Hash`, `Range` or `MultiHash`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Partition key version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
}

/// A Gremlin graph body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GremlinGraphResource {
    /// Graph name.
    pub id: String,
    /// Indexing policy, passed through as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexing_policy: Option<serde_json::Value>,
    /// Partition key definition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_key: Option<ContainerPartitionKey>,
    /// Default time-to-live in seconds; `-1` means no expiry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_ttl: Option<i64>,
    /// Unique key policy, passed through as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_key_policy: Option<serde_json::Value>,
    /// Conflict resolution policy, passed through as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflict_resolution_policy: Option<serde_json::Value>,
    /// Provider-managed fields.
    #[serde(flatten)]
    pub system: SystemProperties,
}

impl GremlinGraphResource {
    /// Creates a body with a name and a single hash partition key path.
    #[must_use]
    pub fn new(id: impl Into<String>, partition_key_path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            partition_key: Some(ContainerPartitionKey {
                paths: vec![partition_key_path.into()],
                kind: Some("Hash".to_string()),
                version: None,
            }),
            ..Self::default()
        }
    }
}

/// A value that may arrive either as a JSON number or a numeric string.
///
/// The provider reports `minimumThroughput` as a string; older payloads and
/// the data-plane SDK use a number. Throughput values are read the same way.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOrString {
    /// A JSON number.
    Number(serde_json::Number),
    /// A JSON string.
    String(String),
}

impl NumberOrString {
    /// Coerces the value to a `u32`.
    ///
    /// Strings are read like a lenient integer parse: leading whitespace is
    /// skipped and the leading run of digits is used, so `"400"` and
    /// `"400 RU/s"` both give 400. Fractions are truncated. Negative,
    /// non-numeric or out-of-range values give `None`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Self::Number(n) => n
                .as_u64()
                .or_else(|| {
                    n.as_f64()
                        .filter(|f| f.is_finite() && *f >= 0.0)
                        .map(|f| f.trunc() as u64)
                })
                .and_then(|v| u32::try_from(v).ok()),
            Self::String(s) => {
                let trimmed = s.trim_start();
                let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
                let digits: String = trimmed.chars().take_while(char::is_ascii_digit).collect();
                digits.parse().ok()
            }
        }
    }
}

impl From<u32> for NumberOrString {
    fn from(value: u32) -> Self {
        Self::Number(value.into())
    }
}

/// Autoscale settings as reported on a throughput resource.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoscaleSettingsResource {
    /// Maximum RU/s the resource scales up to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_throughput: Option<NumberOrString>,
    /// Auto-upgrade policy, passed through as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_upgrade_policy: Option<serde_json::Value>,
    /// Target maximum during a pending scale operation.
    #[serde(default, skip_serializing)]
    pub target_max_throughput: Option<u32>,
}

/// The throughput settings of a database or container.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThroughputSettingsResource {
    /// Manual throughput in RU/s.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub throughput: Option<NumberOrString>,
    /// Autoscale settings; present exactly when autoscale is on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoscale_settings: Option<AutoscaleSettingsResource>,
    /// Lowest RU/s the resource can be set to.
    #[serde(default, skip_serializing)]
    pub minimum_throughput: Option<NumberOrString>,
    /// `"true"` while an offer replacement is in progress. Any other value,
    /// including a JSON `true`, reads as not pending.
    #[serde(default, skip_serializing)]
    pub offer_replace_pending: Option<serde_json::Value>,
    /// Provider-managed fields.
    #[serde(flatten)]
    pub system: SystemProperties,
}

impl ThroughputSettingsResource {
    /// A manual throughput body for an update call.
    #[must_use]
    pub fn manual(throughput: u32) -> Self {
        Self {
            throughput: Some(throughput.into()),
            ..Self::default()
        }
    }

    /// An autoscale body for an update call.
    #[must_use]
    pub fn autoscale(max_throughput: u32) -> Self {
        Self {
            autoscale_settings: Some(AutoscaleSettingsResource {
                max_throughput: Some(max_throughput.into()),
                ..AutoscaleSettingsResource::default()
            }),
            ..Self::default()
        }
    }

    /// Returns `true` only when `offerReplacePending` is the string `"true"`.
    #[must_use]
    pub fn is_offer_replace_pending(&self) -> bool {
        matches!(&self.offer_replace_pending, Some(serde_json::Value::String(s)) if s == "true")
    }
}

/// GET response of a `throughputSettings/default` endpoint.
pub type ThroughputSettingsGetResults = ArmResource<ResourceProperties<ThroughputSettingsResource>>;

/// PUT body of a `throughputSettings/default` endpoint.
pub type ThroughputSettingsUpdateParameters = CreateUpdateParameters<ThroughputSettingsResource>;

/// GET response for a Gremlin database.
pub type GremlinDatabaseGetResults = ArmResource<ResourceProperties<GremlinDatabaseResource>>;

/// List response for Gremlin databases.
pub type GremlinDatabaseListResult = ArmListResult<GremlinDatabaseGetResults>;

/// PUT body for a Gremlin database.
pub type GremlinDatabaseCreateUpdateParameters = CreateUpdateParameters<GremlinDatabaseResource>;

/// GET response for a Gremlin graph.
pub type GremlinGraphGetResults = ArmResource<ResourceProperties<GremlinGraphResource>>;

/// List response for Gremlin graphs.
pub type GremlinGraphListResult = ArmListResult<GremlinGraphGetResults>;

/// PUT body for a Gremlin graph.
pub type GremlinGraphCreateUpdateParameters = CreateUpdateParameters<GremlinGraphResource>;

/// Name of a metric.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricName {
    /// Invariant name, e.g. `Total Requests`.
    #[serde(default)]
    pub value: Option<String>,
    /// Display name.
    #[serde(default)]
    pub localized_value: Option<String>,
}

/// One data point of a metric.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricValue {
    /// Sample count.
    #[serde(rename = "_count", default)]
    pub count: Option<f64>,
    /// Average value.
    #[serde(default)]
    pub average: Option<f64>,
    /// Maximum value.
    #[serde(default)]
    pub maximum: Option<f64>,
    /// Minimum value.
    #[serde(default)]
    pub minimum: Option<f64>,
    /// Sample time.
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    /// Total value.
    #[serde(default)]
    pub total: Option<f64>,
}

/// A metric series for a database account region.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    /// Series start.
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    /// Series end.
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    /// ISO-8601 sample interval, e.g. `PT5M`.
    #[serde(default)]
    pub time_grain: Option<String>,
    /// Unit, e.g. `Count`.
    #[serde(default)]
    pub unit: Option<String>,
    /// Metric name.
    #[serde(default)]
    pub name: Option<MetricName>,
    /// Data points.
    #[serde(default)]
    pub metric_values: Vec<MetricValue>,
}

/// List response for region metrics.
pub type MetricListResult = ArmListResult<Metric>;
