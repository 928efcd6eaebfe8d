//! Per-region metrics of a database account.

use crate::arm::client::{decode, ArmClient};
use crate::arm::errors::ArmError;
use crate::arm::models::MetricListResult;
use crate::arm::path::REGION_METRICS_PATH;
use crate::auth::AccountIdentity;

/// Query parameter carrying the OData metric filter.
pub const FILTER_PARAM: &str = "$filter";

/// Lists metrics for one region of an account.
///
/// `filter` is an OData expression such as
/// `(name.value eq 'Total Requests') and timeGrain eq duration'PT5M'`. It is
/// passed through as-is and the provider requires it.
///
/// # Errors
///
/// Returns [`ArmError`] if the request fails or the body does not decode.
pub async fn list_metrics(
    client: &ArmClient,
    identity: &AccountIdentity,
    region: &str,
    filter: &str,
) -> Result<MetricListResult, ArmError> {
    let response = client
        .send(
            &REGION_METRICS_PATH,
            identity,
            &[region],
            None,
            &[(FILTER_PARAM, filter)],
        )
        .await?;
    decode(response.body)
}
