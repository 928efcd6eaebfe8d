//! Reading the throughput offer of a container.
//!
//! [`OfferReader::read_collection_offer`] picks a backend from the
//! [`SessionContext`](crate::SessionContext), reads the container's
//! throughput, and normalizes it into an [`Offer`].
//!
//! # Backend Selection
//!
//! The management plane is used when the session signed in through AAD, has
//! not asked for SDK operations, and is not a Table API account. Everything
//! else goes through the host's [`SdkOfferReader`].
//!
//! # Example
//!
//! ```rust,ignore
//! use cosmos_offer::offer::{OfferLookup, OfferReader, ReadCollectionOfferParams, TracingNotifier};
//!
//! let reader = OfferReader::new(arm_client, sdk, TracingNotifier);
//! let params = ReadCollectionOfferParams::new("db1", "graph1", "offer-id", "rid");
//!
//! match reader.read_collection_offer(&session, &params).await? {
//!     OfferLookup::Found(offer) => println!("{:?}", offer.throughput),
//!     OfferLookup::NotFound => println!("no dedicated throughput"),
//! }
//! ```

mod errors;
mod notify;
mod reader;

pub use errors::{OfferError, SdkError};
pub use notify::{ErrorReporter, ProgressGuard, ProgressNotifier, TracingNotifier};
pub use reader::{normalize_offer, OfferReader, SdkOfferReader, READ_COLLECTION_OFFER};

/// Provisioned throughput of an offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Throughput {
    /// Fixed RU/s.
    Manual(u32),
    /// Scales between 10% of `max_throughput` and `max_throughput`.
    Autoscale {
        /// Upper bound in RU/s.
        max_throughput: u32,
    },
}

/// Normalized throughput settings of a container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Offer {
    /// Offer ID.
    pub id: String,
    /// Manual or autoscale throughput.
    pub throughput: Throughput,
    /// Lowest RU/s the container can be set to.
    pub minimum_throughput: Option<u32>,
    /// `true` while a throughput change is still being applied.
    pub offer_replace_pending: bool,
}

impl Offer {
    /// Creates a manual-throughput offer.
    #[must_use]
    pub fn manual(id: impl Into<String>, throughput: u32) -> Self {
        Self {
            id: id.into(),
            throughput: Throughput::Manual(throughput),
            minimum_throughput: None,
            offer_replace_pending: false,
        }
    }

    /// Creates an autoscale offer.
    #[must_use]
    pub fn autoscale(id: impl Into<String>, max_throughput: u32) -> Self {
        Self {
            id: id.into(),
            throughput: Throughput::Autoscale { max_throughput },
            minimum_throughput: None,
            offer_replace_pending: false,
        }
    }

    /// Returns the manual RU/s, or `None` for autoscale offers.
    #[must_use]
    pub const fn manual_throughput(&self) -> Option<u32> {
        match self.throughput {
            Throughput::Manual(throughput) => Some(throughput),
            Throughput::Autoscale { .. } => None,
        }
    }

    /// Returns the autoscale ceiling, or `None` for manual offers.
    #[must_use]
    pub const fn autoscale_max_throughput(&self) -> Option<u32> {
        match self.throughput {
            Throughput::Manual(_) => None,
            Throughput::Autoscale { max_throughput } => Some(max_throughput),
        }
    }
}

/// Outcome of an offer read.
///
/// `NotFound` covers both a container without dedicated throughput and a
/// container that does not exist; the backends do not tell them apart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OfferLookup {
    /// The container has an offer.
    Found(Offer),
    /// No offer was found.
    NotFound,
}

impl OfferLookup {
    /// Converts into an `Option`.
    #[must_use]
    pub fn into_option(self) -> Option<Offer> {
        match self {
            Self::Found(offer) => Some(offer),
            Self::NotFound => None,
        }
    }

    /// Returns `true` if an offer was found.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Identifies the container whose offer is read.
///
/// The management plane uses `database_id` and `collection_id`; the SDK
/// path uses `offer_id` and `collection_resource_id`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadCollectionOfferParams {
    /// Database, keyspace or (for Table API) unused parent name.
    pub database_id: String,
    /// Container, collection, table or graph name.
    pub collection_id: String,
    /// Data-plane offer ID.
    pub offer_id: String,
    /// Data-plane resource ID (`_rid`) of the container.
    pub collection_resource_id: String,
}

impl ReadCollectionOfferParams {
    /// Creates a new parameter set.
    #[must_use]
    pub fn new(
        database_id: impl Into<String>,
        collection_id: impl Into<String>,
        offer_id: impl Into<String>,
        collection_resource_id: impl Into<String>,
    ) -> Self {
        Self {
            database_id: database_id.into(),
            collection_id: collection_id.into(),
            offer_id: offer_id.into(),
            collection_resource_id: collection_resource_id.into(),
        }
    }
}
