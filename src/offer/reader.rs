//! Backend selection and normalization for offer reads.

use crate::arm::models::{ArmResource, NumberOrString, ThroughputSettingsGetResults};
use crate::arm::{gremlin, throughput, ArmClient};
use crate::auth::{DefaultExperience, SessionContext};
use crate::offer::errors::{OfferError, SdkError};
use crate::offer::notify::{ErrorReporter, ProgressNotifier};
use crate::offer::{Offer, OfferLookup, ReadCollectionOfferParams, Throughput};

/// Operation name passed to [`ErrorReporter::report_error`].
pub const READ_COLLECTION_OFFER: &str = "ReadCollectionOffer";

/// Data-plane offer read supplied by the host application.
///
/// Implementations return [`OfferLookup::NotFound`] when the offer does not
/// exist rather than an error.
#[allow(async_fn_in_trait)]
pub trait SdkOfferReader {
    /// Reads an offer by its data-plane ID.
    async fn read_offer_by_id(
        &self,
        offer_id: &str,
        resource_id: &str,
    ) -> Result<OfferLookup, SdkError>;
}

/// Reads container offers through ARM or the data-plane SDK.
///
/// # Example
///
/// ```rust,ignore
/// use cosmos_offer::arm::ArmClient;
/// use cosmos_offer::offer::{OfferReader, ReadCollectionOfferParams, TracingNotifier};
///
/// let arm = ArmClient::from_session(&session, None)?;
/// let reader = OfferReader::new(arm, my_sdk, TracingNotifier);
///
/// let lookup = reader
///     .read_collection_offer(&session, &ReadCollectionOfferParams::new("db", "coll", "offer", "rid"))
///     .await?;
/// ```
#[derive(Debug)]
pub struct OfferReader<S, N> {
    arm: ArmClient,
    sdk: S,
    notifier: N,
}

impl<S, N> OfferReader<S, N>
where
    S: SdkOfferReader,
    N: ProgressNotifier + ErrorReporter,
{
    /// Creates a reader.
    pub const fn new(arm: ArmClient, sdk: S, notifier: N) -> Self {
        Self { arm, sdk, notifier }
    }

    /// Returns the management-plane client.
    pub const fn arm_client(&self) -> &ArmClient {
        &self.arm
    }

    /// Reads the throughput offer of one container.
    ///
    /// A progress message is shown for the duration of the call. Failures
    /// are handed to the [`ErrorReporter`] once and then returned.
    ///
    /// `session` selects the backend and the account. Management calls are
    /// authenticated with the token of the [`ArmClient`] this reader owns,
    /// not `session.arm_token`; build that client from the same session with
    /// [`ArmClient::from_session`].
    ///
    /// # Errors
    ///
    /// - [`OfferError::UnsupportedDataModel`] if the account's experience has
    ///   no throughput endpoint; no request is sent
    /// - [`OfferError::Arm`] if a management call fails for any reason other
    ///   than a missing resource
    /// - [`OfferError::Sdk`] if the SDK read fails
    /// - [`OfferError::InvalidOffer`] if the settings carry no throughput
    pub async fn read_collection_offer(
        &self,
        session: &SessionContext,
        params: &ReadCollectionOfferParams,
    ) -> Result<OfferLookup, OfferError> {
        let _progress = self.notifier.begin_progress(&format!(
            "Querying offer for collection {}",
            params.collection_id
        ));

        let result = if session.prefers_resource_manager() {
            self.read_with_arm(session, params).await
        } else {
            self.sdk
                .read_offer_by_id(&params.offer_id, &params.collection_resource_id)
                .await
                .map_err(OfferError::from)
        };

        result.map_err(|error| {
            self.notifier.report_error(
                &error,
                READ_COLLECTION_OFFER,
                &format!(
                    "Error while querying offer for collection {}",
                    params.collection_id
                ),
            );
            error
        })
    }

    async fn read_with_arm(
        &self,
        session: &SessionContext,
        params: &ReadCollectionOfferParams,
    ) -> Result<OfferLookup, OfferError> {
        let arm = &self.arm;
        let identity = &session.account;
        let database = params.database_id.as_str();
        let collection = params.collection_id.as_str();

        let response = match &session.default_experience {
            DefaultExperience::DocumentDB => {
                throughput::get_sql_container_throughput(arm, identity, database, collection).await
            }
            DefaultExperience::MongoDB => {
                throughput::get_mongodb_collection_throughput(arm, identity, database, collection)
                    .await
            }
            DefaultExperience::Cassandra => {
                throughput::get_cassandra_table_throughput(arm, identity, database, collection)
                    .await
            }
            DefaultExperience::Graph => {
                gremlin::get_gremlin_graph_throughput(arm, identity, database, collection).await
            }
            DefaultExperience::Table => {
                throughput::get_table_throughput(arm, identity, collection).await
            }
            DefaultExperience::Custom(_) => {
                return Err(OfferError::UnsupportedDataModel {
                    experience: session.default_experience.clone(),
                });
            }
        };

        match response {
            Ok(settings) => normalize_offer(settings),
            Err(error) if error.is_not_found() => {
                tracing::debug!(
                    collection = %params.collection_id,
                    "No throughput settings found for collection"
                );
                Ok(OfferLookup::NotFound)
            }
            Err(error) => Err(error.into()),
        }
    }
}

/// Converts a throughput settings response into an [`OfferLookup`].
///
/// A response without `properties.resource` is `NotFound`. Autoscale
/// settings win over a manual value when both are present. Throughput values
/// may be numbers or numeric strings.
///
/// # Errors
///
/// Returns [`OfferError::InvalidOffer`] if the resource has neither
/// autoscale settings nor manual throughput, or if the autoscale settings
/// carry no usable `maxThroughput`.
///
/// # Example
///
/// ```rust
/// use cosmos_offer::arm::models::ThroughputSettingsGetResults;
/// use cosmos_offer::offer::{normalize_offer, Offer, OfferLookup};
/// use serde_json::json;
///
/// let settings: ThroughputSettingsGetResults = serde_json::from_value(json!({
///     "name": "offer1",
///     "properties": {"resource": {"throughput": 600, "offerReplacePending": "false"}}
/// }))
/// .unwrap();
///
/// assert_eq!(normalize_offer(settings).unwrap(), OfferLookup::Found(Offer::manual("offer1", 600)));
/// ```
pub fn normalize_offer(settings: ThroughputSettingsGetResults) -> Result<OfferLookup, OfferError> {
    let ArmResource {
        name, properties, ..
    } = settings;
    let Some(resource) = properties.and_then(|p| p.resource) else {
        return Ok(OfferLookup::NotFound);
    };
    let id = name.unwrap_or_default();

    let manual = resource.throughput.as_ref().and_then(NumberOrString::as_u32);
    let autoscale = resource
        .autoscale_settings
        .as_ref()
        .map(|settings| settings.max_throughput.as_ref().and_then(NumberOrString::as_u32));

    let throughput = match (autoscale, manual) {
        (Some(Some(max_throughput)), _) => Throughput::Autoscale { max_throughput },
        (None, Some(throughput)) => Throughput::Manual(throughput),
        (Some(None), _) | (None, None) => return Err(OfferError::InvalidOffer { offer_id: id }),
    };

    Ok(OfferLookup::Found(Offer {
        id,
        throughput,
        minimum_throughput: resource
            .minimum_throughput
            .as_ref()
            .and_then(NumberOrString::as_u32),
        offer_replace_pending: resource.is_offer_replace_pending(),
    }))
}
