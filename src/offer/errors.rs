//! Error types for offer reads.

use thiserror::Error;

use crate::arm::ArmError;
use crate::auth::DefaultExperience;

/// Error returned by a data-plane SDK offer read.
///
/// The SDK is supplied by the host application, so this type carries only a
/// message and an optional service error code.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct SdkError {
    /// Human-readable failure description.
    pub message: String,
    /// Service error code, if the SDK reported one.
    pub code: Option<String>,
}

impl SdkError {
    /// Creates an error with a message and no code.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    /// Attaches a service error code.
    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

/// Error type for [`OfferReader`](crate::offer::OfferReader).
///
/// A missing offer or container is not an error; it is
/// [`OfferLookup::NotFound`](crate::offer::OfferLookup::NotFound).
#[derive(Debug, Error)]
pub enum OfferError {
    /// The account's data model has no throughput endpoint.
    #[error("Unsupported default experience type: {experience}")]
    UnsupportedDataModel {
        /// The experience that was requested.
        experience: DefaultExperience,
    },

    /// The throughput settings named neither autoscale nor manual throughput.
    #[error("Offer {offer_id} has neither autoscale settings nor manual throughput")]
    InvalidOffer {
        /// The offer ID from the response envelope.
        offer_id: String,
    },

    /// A management-plane call failed.
    #[error(transparent)]
    Arm(#[from] ArmError),

    /// The data-plane SDK read failed.
    #[error("SDK offer read failed: {0}")]
    Sdk(#[from] SdkError),
}
