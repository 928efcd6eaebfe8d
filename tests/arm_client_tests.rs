//! Integration tests for the management-plane client.
//!
//! These tests run the table-driven client against a local mock server and
//! verify URL construction, headers, query parameters and error mapping.

use cosmos_offer::arm::{database_account_region, throughput, ArmClient};
use cosmos_offer::clients::HttpError;
use cosmos_offer::{
    AccessToken, AccountIdentity, ArmConfig, ArmError, ArmOperation, HostUrl, ResourceKind,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ACCOUNT_PATH: &str =
    "/subscriptions/sub-1/resourceGroups/rg-1/providers/Microsoft.DocumentDB/databaseAccounts/acct-1";

fn identity() -> AccountIdentity {
    AccountIdentity::new("sub-1", "rg-1", "acct-1").unwrap()
}

fn client_for(server: &MockServer) -> ArmClient {
    let config = ArmConfig::builder()
        .management_endpoint(HostUrl::new(server.uri()).unwrap())
        .build();
    let token = AccessToken::new("test-arm-token").unwrap();
    ArmClient::new(Some(&token), Some(&config)).unwrap()
}

// ============================================================================
// Request construction
// ============================================================================

#[tokio::test]
async fn test_get_sends_bearer_token_and_api_version() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{ACCOUNT_PATH}/sqlDatabases/db1")))
        .and(query_param("api-version", "2020-04-01"))
        .and(header("Authorization", "Bearer test-arm-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "db1"})))
        .expect(1)
        .mount(&server)
        .await;

    let body = client_for(&server)
        .execute(
            &identity(),
            ResourceKind::SqlDatabase,
            ArmOperation::Get,
            &["db1"],
            None,
        )
        .await
        .unwrap();

    assert_eq!(body["name"], "db1");
}

#[tokio::test]
async fn test_configured_api_version_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{ACCOUNT_PATH}/tables")))
        .and(query_param("api-version", "2021-04-15"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"value": []})))
        .expect(1)
        .mount(&server)
        .await;

    let config = ArmConfig::builder()
        .management_endpoint(HostUrl::new(server.uri()).unwrap())
        .api_version("2021-04-15".parse().unwrap())
        .build();
    let client = ArmClient::new(None, Some(&config)).unwrap();

    let body = client
        .execute(&identity(), ResourceKind::Table, ArmOperation::List, &[], None)
        .await
        .unwrap();

    assert_eq!(body, json!({"value": []}));
}

#[tokio::test]
async fn test_put_sends_json_body() {
    let server = MockServer::start().await;
    let payload = json!({"properties": {"resource": {"throughput": 800}}});
    Mock::given(method("PUT"))
        .and(path(format!(
            "{ACCOUNT_PATH}/cassandraKeyspaces/ks1/tables/t1/throughputSettings/default"
        )))
        .and(header("Content-Type", "application/json"))
        .and(body_json(&payload))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "offer",
            "properties": {"resource": {"throughput": 800}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let body = client_for(&server)
        .execute(
            &identity(),
            ResourceKind::CassandraTable,
            ArmOperation::UpdateThroughput,
            &["ks1", "t1"],
            Some(payload.clone()),
        )
        .await
        .unwrap();

    assert_eq!(body["properties"]["resource"]["throughput"], 800);
}

#[tokio::test]
async fn test_accepted_delete_returns_null_and_operation_headers() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("{ACCOUNT_PATH}/mongodbDatabases/db1/collections/c1")))
        .respond_with(
            ResponseTemplate::new(202)
                .insert_header("Azure-AsyncOperation", "https://management.azure.com/op/1")
                .insert_header("x-ms-request-id", "req-42"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .execute_response(
            &identity(),
            ResourceKind::MongoDbCollection,
            ArmOperation::Delete,
            &["db1", "c1"],
            None,
        )
        .await
        .unwrap();

    assert!(response.is_accepted());
    assert!(response.body.is_null());
    assert_eq!(
        response.async_operation_url(),
        Some("https://management.azure.com/op/1")
    );
    assert_eq!(response.request_id(), Some("req-42"));
}

// ============================================================================
// Error mapping
// ============================================================================

#[tokio::test]
async fn test_not_found_code_maps_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {"code": "NotFound", "message": "Container c1 not found"}
        })))
        .mount(&server)
        .await;

    let error = throughput::get_sql_container_throughput(&client_for(&server), &identity(), "db1", "c1")
        .await
        .unwrap_err();

    assert!(error.is_not_found());
    assert_eq!(
        error.response().map(|e| e.message.as_str()),
        Some("Container c1 not found")
    );
}

#[tokio::test]
async fn test_other_error_codes_are_not_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(403)
                .insert_header("x-ms-request-id", "req-403")
                .set_body_json(json!({
                    "code": "AuthorizationFailed",
                    "message": "The client does not have authorization"
                })),
        )
        .mount(&server)
        .await;

    let error = throughput::get_table_throughput(&client_for(&server), &identity(), "t1")
        .await
        .unwrap_err();

    assert!(!error.is_not_found());
    let response = error.response().unwrap();
    assert_eq!(response.status, 403);
    assert_eq!(response.code.as_deref(), Some("AuthorizationFailed"));
    assert_eq!(response.request_id.as_deref(), Some("req-403"));
}

#[tokio::test]
async fn test_non_json_error_body_is_kept_as_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let error = client_for(&server)
        .execute(
            &identity(),
            ResourceKind::GremlinDatabase,
            ArmOperation::List,
            &[],
            None,
        )
        .await
        .unwrap_err();

    let response = error.response().unwrap();
    assert_eq!(response.status, 502);
    assert_eq!(response.message, "Bad Gateway");
}

#[tokio::test]
async fn test_invalid_json_success_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    let error = client_for(&server)
        .execute(
            &identity(),
            ResourceKind::SqlDatabase,
            ArmOperation::List,
            &[],
            None,
        )
        .await
        .unwrap_err();

    assert!(matches!(error, ArmError::Http(HttpError::Decode(_))));
}

#[tokio::test]
async fn test_wrong_segment_count_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let error = client_for(&server)
        .execute(
            &identity(),
            ResourceKind::CassandraTable,
            ArmOperation::Get,
            &["ks1", "t1", "extra"],
            None,
        )
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        ArmError::ParameterCount {
            expected: 2,
            actual: 3,
            ..
        }
    ));
}

// ============================================================================
// Region metrics
// ============================================================================

#[tokio::test]
async fn test_list_metrics_sends_filter() {
    let server = MockServer::start().await;
    let filter = "(name.value eq 'Total Requests') and timeGrain eq duration'PT5M'";
    Mock::given(method("GET"))
        .and(path(format!("{ACCOUNT_PATH}/region/westus/metrics")))
        .and(query_param("$filter", filter))
        .and(query_param("api-version", "2020-04-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [{
                "timeGrain": "PT5M",
                "unit": "Count",
                "name": {"value": "Total Requests", "localizedValue": "Total Requests"},
                "metricValues": [{"timestamp": "2024-01-01T00:05:00Z", "total": 12.0}]
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let metrics =
        database_account_region::list_metrics(&client_for(&server), &identity(), "westus", filter)
            .await
            .unwrap();

    assert_eq!(metrics.value.len(), 1);
    let metric = &metrics.value[0];
    assert_eq!(
        metric.name.as_ref().and_then(|n| n.value.as_deref()),
        Some("Total Requests")
    );
    assert_eq!(metric.metric_values[0].total, Some(12.0));
}
