//! Throughput settings for every resource kind.
//!
//! The generic pair [`get_throughput`] and [`update_throughput`] work for any
//! kind in the endpoint table. The named getters are the ones the offer
//! reader dispatches to.

use crate::arm::client::{decode, decode_optional, encode, ArmClient};
use crate::arm::errors::ArmError;
use crate::arm::models::{ThroughputSettingsGetResults, ThroughputSettingsUpdateParameters};
use crate::arm::path::{ArmOperation, ResourceKind};
use crate::auth::AccountIdentity;

/// Reads `throughputSettings/default` under any resource.
///
/// # Errors
///
/// Returns [`ArmError`] if the request fails, `segments` has the wrong
/// length for `kind`, or the body does not decode.
pub async fn get_throughput(
    client: &ArmClient,
    identity: &AccountIdentity,
    kind: ResourceKind,
    segments: &[&str],
) -> Result<ThroughputSettingsGetResults, ArmError> {
    let body = client
        .execute(identity, kind, ArmOperation::GetThroughput, segments, None)
        .await?;
    decode(body)
}

/// Replaces `throughputSettings/default` under any resource.
///
/// Returns `Ok(None)` when the provider accepts the change asynchronously.
///
/// # Errors
///
/// Returns [`ArmError`] if the request fails, `segments` has the wrong
/// length for `kind`, or the body does not decode.
pub async fn update_throughput(
    client: &ArmClient,
    identity: &AccountIdentity,
    kind: ResourceKind,
    segments: &[&str],
    params: &ThroughputSettingsUpdateParameters,
) -> Result<Option<ThroughputSettingsGetResults>, ArmError> {
    let body = client
        .execute(
            identity,
            kind,
            ArmOperation::UpdateThroughput,
            segments,
            Some(encode(params)?),
        )
        .await?;
    decode_optional(body)
}

/// Reads the throughput of a SQL container.
///
/// # Errors
///
/// Returns [`ArmError`] if the request fails or the body does not decode.
pub async fn get_sql_container_throughput(
    client: &ArmClient,
    identity: &AccountIdentity,
    database_name: &str,
    container_name: &str,
) -> Result<ThroughputSettingsGetResults, ArmError> {
    get_throughput(
        client,
        identity,
        ResourceKind::SqlContainer,
        &[database_name, container_name],
    )
    .await
}

/// Reads the throughput of a MongoDB collection.
///
/// # Errors
///
/// Returns [`ArmError`] if the request fails or the body does not decode.
pub async fn get_mongodb_collection_throughput(
    client: &ArmClient,
    identity: &AccountIdentity,
    database_name: &str,
    collection_name: &str,
) -> Result<ThroughputSettingsGetResults, ArmError> {
    get_throughput(
        client,
        identity,
        ResourceKind::MongoDbCollection,
        &[database_name, collection_name],
    )
    .await
}

/// Reads the throughput of a Cassandra table.
///
/// # Errors
///
/// Returns [`ArmError`] if the request fails or the body does not decode.
pub async fn get_cassandra_table_throughput(
    client: &ArmClient,
    identity: &AccountIdentity,
    keyspace_name: &str,
    table_name: &str,
) -> Result<ThroughputSettingsGetResults, ArmError> {
    get_throughput(
        client,
        identity,
        ResourceKind::CassandraTable,
        &[keyspace_name, table_name],
    )
    .await
}

/// Reads the throughput of a Table API table. Tables have no parent database.
///
/// # Errors
///
/// Returns [`ArmError`] if the request fails or the body does not decode.
pub async fn get_table_throughput(
    client: &ArmClient,
    identity: &AccountIdentity,
    table_name: &str,
) -> Result<ThroughputSettingsGetResults, ArmError> {
    get_throughput(client, identity, ResourceKind::Table, &[table_name]).await
}
