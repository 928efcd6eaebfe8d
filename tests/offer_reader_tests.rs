//! Integration tests for backend selection and normalization in
//! `OfferReader::read_collection_offer`.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use cosmos_offer::arm::ArmClient;
use cosmos_offer::offer::{
    ErrorReporter, Offer, OfferError, OfferLookup, OfferReader, ProgressGuard, ProgressNotifier,
    ReadCollectionOfferParams, SdkError, SdkOfferReader, Throughput,
};
use cosmos_offer::{
    AccessToken, AccountIdentity, ArmConfig, AuthType, DefaultExperience, HostUrl, SessionContext,
};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ACCOUNT_PATH: &str =
    "/subscriptions/sub-1/resourceGroups/rg-1/providers/Microsoft.DocumentDB/databaseAccounts/acct-1";

// ============================================================================
// Test doubles
// ============================================================================

/// Records every SDK call and answers with a fixed result.
struct FakeSdk {
    calls: Mutex<Vec<(String, String)>>,
    result: Result<OfferLookup, SdkError>,
}

impl FakeSdk {
    fn returning(result: Result<OfferLookup, SdkError>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            result,
        }
    }

    fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl SdkOfferReader for &FakeSdk {
    async fn read_offer_by_id(
        &self,
        offer_id: &str,
        resource_id: &str,
    ) -> Result<OfferLookup, SdkError> {
        self.calls
            .lock()
            .unwrap()
            .push((offer_id.to_string(), resource_id.to_string()));
        self.result.clone()
    }
}

/// Counts progress begin/release and records reported errors.
#[derive(Default)]
struct RecordingNotifier {
    progress_messages: Mutex<Vec<String>>,
    released: Arc<AtomicUsize>,
    reports: Mutex<Vec<(String, String, String)>>,
}

impl RecordingNotifier {
    fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }

    fn reports(&self) -> Vec<(String, String, String)> {
        self.reports.lock().unwrap().clone()
    }
}

impl ProgressNotifier for &RecordingNotifier {
    fn begin_progress(&self, message: &str) -> ProgressGuard {
        self.progress_messages
            .lock()
            .unwrap()
            .push(message.to_string());
        let released = Arc::clone(&self.released);
        ProgressGuard::new(move || {
            released.fetch_add(1, Ordering::SeqCst);
        })
    }
}

impl ErrorReporter for &RecordingNotifier {
    fn report_error(&self, error: &OfferError, operation: &str, message: &str) {
        self.reports.lock().unwrap().push((
            error.to_string(),
            operation.to_string(),
            message.to_string(),
        ));
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn session(auth_type: AuthType, experience: DefaultExperience) -> SessionContext {
    SessionContext::new(
        auth_type,
        experience,
        AccountIdentity::new("sub-1", "rg-1", "acct-1").unwrap(),
    )
    .with_arm_token(AccessToken::new("arm-token").unwrap())
}

fn params() -> ReadCollectionOfferParams {
    ReadCollectionOfferParams::new("db1", "coll1", "offer-1", "rid-1")
}

fn arm_client(server: &MockServer) -> ArmClient {
    let config = ArmConfig::builder()
        .management_endpoint(HostUrl::new(server.uri()).unwrap())
        .build();
    ArmClient::new(Some(&AccessToken::new("arm-token").unwrap()), Some(&config)).unwrap()
}

async fn mount_throughput(server: &MockServer, tail: &str, status: u16, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("{ACCOUNT_PATH}/{tail}/throughputSettings/default")))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

fn manual_body(name: &str, throughput: u32) -> serde_json::Value {
    json!({
        "name": name,
        "properties": {"resource": {"throughput": throughput, "offerReplacePending": "false"}}
    })
}

// ============================================================================
// Routing
// ============================================================================

#[tokio::test]
async fn test_aad_documentdb_reads_sql_container_throughput() {
    let server = MockServer::start().await;
    mount_throughput(
        &server,
        "sqlDatabases/db1/containers/coll1",
        200,
        manual_body("offer1", 600),
    )
    .await;
    let sdk = FakeSdk::returning(Ok(OfferLookup::NotFound));
    let notifier = RecordingNotifier::default();
    let reader = OfferReader::new(arm_client(&server), &sdk, &notifier);

    let lookup = reader
        .read_collection_offer(&session(AuthType::Aad, DefaultExperience::DocumentDB), &params())
        .await
        .unwrap();

    assert_eq!(
        lookup,
        OfferLookup::Found(Offer {
            id: "offer1".to_string(),
            throughput: Throughput::Manual(600),
            minimum_throughput: None,
            offer_replace_pending: false,
        })
    );
    assert!(sdk.calls().is_empty());
    assert!(notifier.reports().is_empty());
}

#[tokio::test]
async fn test_aad_mongodb_reads_collection_throughput() {
    let server = MockServer::start().await;
    mount_throughput(
        &server,
        "mongodbDatabases/db1/collections/coll1",
        200,
        manual_body("m1", 400),
    )
    .await;
    let sdk = FakeSdk::returning(Ok(OfferLookup::NotFound));
    let notifier = RecordingNotifier::default();
    let reader = OfferReader::new(arm_client(&server), &sdk, &notifier);

    let offer = reader
        .read_collection_offer(&session(AuthType::Aad, DefaultExperience::MongoDB), &params())
        .await
        .unwrap()
        .into_option()
        .unwrap();

    assert_eq!(offer.id, "m1");
    assert_eq!(offer.manual_throughput(), Some(400));
}

#[tokio::test]
async fn test_aad_cassandra_reads_table_throughput() {
    let server = MockServer::start().await;
    mount_throughput(
        &server,
        "cassandraKeyspaces/db1/tables/coll1",
        200,
        manual_body("c1", 500),
    )
    .await;
    let sdk = FakeSdk::returning(Ok(OfferLookup::NotFound));
    let notifier = RecordingNotifier::default();
    let reader = OfferReader::new(arm_client(&server), &sdk, &notifier);

    let lookup = reader
        .read_collection_offer(&session(AuthType::Aad, DefaultExperience::Cassandra), &params())
        .await
        .unwrap();

    assert!(lookup.is_found());
}

#[tokio::test]
async fn test_aad_graph_reads_autoscale_gremlin_throughput() {
    let server = MockServer::start().await;
    mount_throughput(
        &server,
        "gremlinDatabases/db1/graphs/coll1",
        200,
        json!({
            "name": "g1",
            "properties": {"resource": {
                "minimumThroughput": "400",
                "autoscaleSettings": {"maxThroughput": 4000},
                "offerReplacePending": "true"
            }}
        }),
    )
    .await;
    let sdk = FakeSdk::returning(Ok(OfferLookup::NotFound));
    let notifier = RecordingNotifier::default();
    let reader = OfferReader::new(arm_client(&server), &sdk, &notifier);

    let offer = reader
        .read_collection_offer(&session(AuthType::Aad, DefaultExperience::Graph), &params())
        .await
        .unwrap()
        .into_option()
        .unwrap();

    assert_eq!(offer.throughput, Throughput::Autoscale { max_throughput: 4000 });
    assert_eq!(offer.manual_throughput(), None);
    assert_eq!(offer.minimum_throughput, Some(400));
    assert!(offer.offer_replace_pending);
}

#[tokio::test]
async fn test_loosely_typed_throughput_payload_is_normalized() {
    let server = MockServer::start().await;
    mount_throughput(
        &server,
        "sqlDatabases/db1/containers/coll1",
        200,
        json!({
            "name": "offer1",
            "properties": {"resource": {
                "throughput": "800",
                "minimumThroughput": 400,
                "offerReplacePending": false
            }}
        }),
    )
    .await;
    let sdk = FakeSdk::returning(Ok(OfferLookup::NotFound));
    let notifier = RecordingNotifier::default();
    let reader = OfferReader::new(arm_client(&server), &sdk, &notifier);

    let offer = reader
        .read_collection_offer(&session(AuthType::Aad, DefaultExperience::DocumentDB), &params())
        .await
        .unwrap()
        .into_option()
        .unwrap();

    assert_eq!(offer.throughput, Throughput::Manual(800));
    assert_eq!(offer.minimum_throughput, Some(400));
    assert!(!offer.offer_replace_pending);
    assert!(notifier.reports().is_empty());
}

#[tokio::test]
async fn test_arm_calls_use_the_injected_client_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!(
            "{ACCOUNT_PATH}/sqlDatabases/db1/containers/coll1/throughputSettings/default"
        )))
        .and(header("Authorization", "Bearer arm-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(manual_body("offer1", 400)))
        .expect(1)
        .mount(&server)
        .await;
    let sdk = FakeSdk::returning(Ok(OfferLookup::NotFound));
    let notifier = RecordingNotifier::default();
    let reader = OfferReader::new(arm_client(&server), &sdk, &notifier);
    let context = session(AuthType::Aad, DefaultExperience::DocumentDB)
        .with_arm_token(AccessToken::new("other-token").unwrap());

    let lookup = reader.read_collection_offer(&context, &params()).await.unwrap();

    assert!(lookup.is_found());
}

#[tokio::test]
async fn test_table_accounts_use_sdk_even_with_aad() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let sdk = FakeSdk::returning(Ok(OfferLookup::Found(Offer::manual("sdk-offer", 400))));
    let notifier = RecordingNotifier::default();
    let reader = OfferReader::new(arm_client(&server), &sdk, &notifier);

    let lookup = reader
        .read_collection_offer(&session(AuthType::Aad, DefaultExperience::Table), &params())
        .await
        .unwrap();

    assert_eq!(lookup, OfferLookup::Found(Offer::manual("sdk-offer", 400)));
    assert_eq!(
        sdk.calls(),
        vec![("offer-1".to_string(), "rid-1".to_string())]
    );
}

#[tokio::test]
async fn test_sdk_operations_flag_forces_sdk_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let sdk = FakeSdk::returning(Ok(OfferLookup::NotFound));
    let notifier = RecordingNotifier::default();
    let reader = OfferReader::new(arm_client(&server), &sdk, &notifier);
    let context =
        session(AuthType::Aad, DefaultExperience::DocumentDB).with_sdk_operations(true);

    let lookup = reader.read_collection_offer(&context, &params()).await.unwrap();

    assert_eq!(lookup, OfferLookup::NotFound);
    assert_eq!(sdk.calls().len(), 1);
}

#[tokio::test]
async fn test_non_aad_auth_uses_sdk_path() {
    let server = MockServer::start().await;
    let sdk = FakeSdk::returning(Ok(OfferLookup::Found(Offer::autoscale("k", 1000))));
    let notifier = RecordingNotifier::default();
    let reader = OfferReader::new(arm_client(&server), &sdk, &notifier);

    for auth_type in [
        AuthType::MasterKey,
        AuthType::EncryptedToken,
        AuthType::ResourceToken,
        AuthType::ConnectionString,
    ] {
        let lookup = reader
            .read_collection_offer(&session(auth_type, DefaultExperience::Graph), &params())
            .await
            .unwrap();
        assert!(lookup.is_found());
    }

    assert_eq!(sdk.calls().len(), 4);
}

// ============================================================================
// Not-found and error handling
// ============================================================================

#[tokio::test]
async fn test_arm_not_found_becomes_not_found_without_report() {
    let server = MockServer::start().await;
    mount_throughput(
        &server,
        "sqlDatabases/db1/containers/coll1",
        404,
        json!({"error": {"code": "NotFound", "message": "Throughput settings not found"}}),
    )
    .await;
    let sdk = FakeSdk::returning(Ok(OfferLookup::NotFound));
    let notifier = RecordingNotifier::default();
    let reader = OfferReader::new(arm_client(&server), &sdk, &notifier);

    let lookup = reader
        .read_collection_offer(&session(AuthType::Aad, DefaultExperience::DocumentDB), &params())
        .await
        .unwrap();

    assert_eq!(lookup, OfferLookup::NotFound);
    assert!(notifier.reports().is_empty());
    assert_eq!(notifier.released(), 1);
}

#[tokio::test]
async fn test_arm_error_is_reported_once_and_returned() {
    let server = MockServer::start().await;
    mount_throughput(
        &server,
        "gremlinDatabases/db1/graphs/coll1",
        429,
        json!({"code": "TooManyRequests", "message": "Request rate is large"}),
    )
    .await;
    let sdk = FakeSdk::returning(Ok(OfferLookup::NotFound));
    let notifier = RecordingNotifier::default();
    let reader = OfferReader::new(arm_client(&server), &sdk, &notifier);

    let error = reader
        .read_collection_offer(&session(AuthType::Aad, DefaultExperience::Graph), &params())
        .await
        .unwrap_err();

    assert!(matches!(&error, OfferError::Arm(e) if e.response().map(|r| r.status) == Some(429)));
    let reports = notifier.reports();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].1, "ReadCollectionOffer");
    assert_eq!(reports[0].2, "Error while querying offer for collection coll1");
    assert_eq!(notifier.released(), 1);
}

#[tokio::test]
async fn test_unsupported_experience_fails_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let sdk = FakeSdk::returning(Ok(OfferLookup::NotFound));
    let notifier = RecordingNotifier::default();
    let reader = OfferReader::new(arm_client(&server), &sdk, &notifier);
    let context = session(AuthType::Aad, DefaultExperience::Custom("Etcd".to_string()));

    let error = reader
        .read_collection_offer(&context, &params())
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        OfferError::UnsupportedDataModel { experience: DefaultExperience::Custom(ref name) } if name == "Etcd"
    ));
    assert!(sdk.calls().is_empty());
    assert_eq!(notifier.reports().len(), 1);
    assert_eq!(notifier.released(), 1);
}

#[tokio::test]
async fn test_sdk_error_is_reported_and_returned() {
    let server = MockServer::start().await;
    let sdk = FakeSdk::returning(Err(SdkError::new("Service unavailable").with_code("503")));
    let notifier = RecordingNotifier::default();
    let reader = OfferReader::new(arm_client(&server), &sdk, &notifier);

    let error = reader
        .read_collection_offer(&session(AuthType::MasterKey, DefaultExperience::DocumentDB), &params())
        .await
        .unwrap_err();

    assert!(matches!(error, OfferError::Sdk(SdkError { ref message, .. }) if message == "Service unavailable"));
    let reports = notifier.reports();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].0, "SDK offer read failed: Service unavailable");
    assert_eq!(notifier.released(), 1);
}

#[tokio::test]
async fn test_progress_message_names_collection() {
    let server = MockServer::start().await;
    let sdk = FakeSdk::returning(Ok(OfferLookup::NotFound));
    let notifier = RecordingNotifier::default();
    let reader = OfferReader::new(arm_client(&server), &sdk, &notifier);

    reader
        .read_collection_offer(&session(AuthType::MasterKey, DefaultExperience::DocumentDB), &params())
        .await
        .unwrap();

    assert_eq!(
        *notifier.progress_messages.lock().unwrap(),
        vec!["Querying offer for collection coll1".to_string()]
    );
    assert_eq!(notifier.released(), 1);
}

#[tokio::test]
async fn test_settings_without_resource_are_not_found() {
    let server = MockServer::start().await;
    mount_throughput(
        &server,
        "sqlDatabases/db1/containers/coll1",
        200,
        json!({"name": "offer1", "properties": {}}),
    )
    .await;
    let sdk = FakeSdk::returning(Ok(OfferLookup::NotFound));
    let notifier = RecordingNotifier::default();
    let reader = OfferReader::new(arm_client(&server), &sdk, &notifier);

    let lookup = reader
        .read_collection_offer(&session(AuthType::Aad, DefaultExperience::DocumentDB), &params())
        .await
        .unwrap();

    assert_eq!(lookup, OfferLookup::NotFound);
    assert_eq!(notifier.released(), 1);
}
