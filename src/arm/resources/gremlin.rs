//! Gremlin database and graph operations.
//!
//! Each function is one row of the endpoint table with typed input and
//! output. Mutating calls that the provider accepts asynchronously (202 with
//! no body) return `Ok(None)`.

use crate::arm::client::{decode, decode_optional, encode, ArmClient};
use crate::arm::errors::ArmError;
use crate::arm::models::{
    GremlinDatabaseCreateUpdateParameters, GremlinDatabaseGetResults, GremlinDatabaseListResult,
    GremlinGraphCreateUpdateParameters, GremlinGraphGetResults, GremlinGraphListResult,
    ThroughputSettingsGetResults, ThroughputSettingsUpdateParameters,
};
use crate::arm::path::{ArmOperation, ResourceKind};
use crate::auth::AccountIdentity;

/// Lists the Gremlin databases of an account.
///
/// # Errors
///
/// Returns [`ArmError`] if the request fails or the body does not decode.
pub async fn list_gremlin_databases(
    client: &ArmClient,
    identity: &AccountIdentity,
) -> Result<GremlinDatabaseListResult, ArmError> {
    let body = client
        .execute(identity, ResourceKind::GremlinDatabase, ArmOperation::List, &[], None)
        .await?;
    decode(body)
}

/// Reads one Gremlin database.
///
/// # Errors
///
/// Returns [`ArmError`] if the request fails or the body does not decode.
/// A missing database gives an error for which
/// [`ArmError::is_not_found`] is `true`.
pub async fn get_gremlin_database(
    client: &ArmClient,
    identity: &AccountIdentity,
    database_name: &str,
) -> Result<GremlinDatabaseGetResults, ArmError> {
    let body = client
        .execute(
            identity,
            ResourceKind::GremlinDatabase,
            ArmOperation::Get,
            &[database_name],
            None,
        )
        .await?;
    decode(body)
}

/// Creates or replaces a Gremlin database.
///
/// # Errors
///
/// Returns [`ArmError`] if the request fails or the body does not decode.
pub async fn create_update_gremlin_database(
    client: &ArmClient,
    identity: &AccountIdentity,
    database_name: &str,
    params: &GremlinDatabaseCreateUpdateParameters,
) -> Result<Option<GremlinDatabaseGetResults>, ArmError> {
    let body = client
        .execute(
            identity,
            ResourceKind::GremlinDatabase,
            ArmOperation::CreateUpdate,
            &[database_name],
            Some(encode(params)?),
        )
        .await?;
    decode_optional(body)
}

/// Deletes a Gremlin database.
///
/// # Errors
///
/// Returns [`ArmError`] if the request fails.
pub async fn delete_gremlin_database(
    client: &ArmClient,
    identity: &AccountIdentity,
    database_name: &str,
) -> Result<(), ArmError> {
    client
        .execute(
            identity,
            ResourceKind::GremlinDatabase,
            ArmOperation::Delete,
            &[database_name],
            None,
        )
        .await?;
    Ok(())
}

/// Reads the throughput settings of a Gremlin database.
///
/// # Errors
///
/// Returns [`ArmError`] if the request fails or the body does not decode.
pub async fn get_gremlin_database_throughput(
    client: &ArmClient,
    identity: &AccountIdentity,
    database_name: &str,
) -> Result<ThroughputSettingsGetResults, ArmError> {
    let body = client
        .execute(
            identity,
            ResourceKind::GremlinDatabase,
            ArmOperation::GetThroughput,
            &[database_name],
            None,
        )
        .await?;
    decode(body)
}

/// Replaces the throughput settings of a Gremlin database.
///
/// # Errors
///
/// Returns [`ArmError`] if the request fails or the body does not decode.
pub async fn update_gremlin_database_throughput(
    client: &ArmClient,
    identity: &AccountIdentity,
    database_name: &str,
    params: &ThroughputSettingsUpdateParameters,
) -> Result<Option<ThroughputSettingsGetResults>, ArmError> {
    let body = client
        .execute(
            identity,
            ResourceKind::GremlinDatabase,
            ArmOperation::UpdateThroughput,
            &[database_name],
            Some(encode(params)?),
        )
        .await?;
    decode_optional(body)
}

/// Lists the graphs of a Gremlin database.
///
/// # Errors
///
/// Returns [`ArmError`] if the request fails or the body does not decode.
pub async fn list_gremlin_graphs(
    client: &ArmClient,
    identity: &AccountIdentity,
    database_name: &str,
) -> Result<GremlinGraphListResult, ArmError> {
    let body = client
        .execute(
            identity,
            ResourceKind::GremlinGraph,
            ArmOperation::List,
            &[database_name],
            None,
        )
        .await?;
    decode(body)
}

/// Reads one Gremlin graph.
///
/// # Errors
///
/// Returns [`ArmError`] if the request fails or the body does not decode.
pub async fn get_gremlin_graph(
    client: &ArmClient,
    identity: &AccountIdentity,
    database_name: &str,
    graph_name: &str,
) -> Result<GremlinGraphGetResults, ArmError> {
    let body = client
        .execute(
            identity,
            ResourceKind::GremlinGraph,
            ArmOperation::Get,
            &[database_name, graph_name],
            None,
        )
        .await?;
    decode(body)
}

/// Creates or replaces a Gremlin graph.
///
/// # Errors
///
/// Returns [`ArmError`] if the request fails or the body does not decode.
pub async fn create_update_gremlin_graph(
    client: &ArmClient,
    identity: &AccountIdentity,
    database_name: &str,
    graph_name: &str,
    params: &GremlinGraphCreateUpdateParameters,
) -> Result<Option<GremlinGraphGetResults>, ArmError> {
    let body = client
        .execute(
            identity,
            ResourceKind::GremlinGraph,
            ArmOperation::CreateUpdate,
            &[database_name, graph_name],
            Some(encode(params)?),
        )
        .await?;
    decode_optional(body)
}

/// Deletes a Gremlin graph.
///
/// # Errors
///
/// Returns [`ArmError`] if the request fails.
pub async fn delete_gremlin_graph(
    client: &ArmClient,
    identity: &AccountIdentity,
    database_name: &str,
    graph_name: &str,
) -> Result<(), ArmError> {
    client
        .execute(
            identity,
            ResourceKind::GremlinGraph,
            ArmOperation::Delete,
            &[database_name, graph_name],
            None,
        )
        .await?;
    Ok(())
}

/// Reads the throughput settings of a Gremlin graph.
///
/// # Errors
///
/// Returns [`ArmError`] if the request fails or the body does not decode.
pub async fn get_gremlin_graph_throughput(
    client: &ArmClient,
    identity: &AccountIdentity,
    database_name: &str,
    graph_name: &str,
) -> Result<ThroughputSettingsGetResults, ArmError> {
    let body = client
        .execute(
            identity,
            ResourceKind::GremlinGraph,
            ArmOperation::GetThroughput,
            &[database_name, graph_name],
            None,
        )
        .await?;
    decode(body)
}

/// Replaces the throughput settings of a Gremlin graph.
///
/// # Errors
///
/// Returns [`ArmError`] if the request fails or the body does not decode.
pub async fn update_gremlin_graph_throughput(
    client: &ArmClient,
    identity: &AccountIdentity,
    database_name: &str,
    graph_name: &str,
    params: &ThroughputSettingsUpdateParameters,
) -> Result<Option<ThroughputSettingsGetResults>, ArmError> {
    let body = client
        .execute(
            identity,
            ResourceKind::GremlinGraph,
            ArmOperation::UpdateThroughput,
            &[database_name, graph_name],
            Some(encode(params)?),
        )
        .await?;
    decode_optional(body)
}
