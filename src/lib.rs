//! # Cosmos DB Offer Client
//!
//! Reads the throughput ("offer") settings of Azure Cosmos DB containers and
//! exposes typed Azure Resource Manager operations for Cosmos DB resources.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ArmConfig`] and [`ArmConfigBuilder`]
//! - Validated newtypes for subscription, resource group, account and token values
//! - An explicit [`SessionContext`] describing how the caller signed in
//! - A table-driven management client in [`arm`] covering SQL, MongoDB,
//!   Cassandra, Gremlin and Table resources
//! - An [`offer::OfferReader`] that picks ARM or a data-plane SDK and
//!   normalizes the result
//!
//! ## Quick Start
//!
//! ```rust
//! use cosmos_offer::{ArmConfig, ApiVersion, HostUrl};
//!
//! let config = ArmConfig::builder()
//!     .management_endpoint(HostUrl::new("https://management.azure.com").unwrap())
//!     .api_version(ApiVersion::V2020_04_01)
//!     .user_agent_prefix("MyExplorer/1.0")
//!     .build();
//!
//! assert_eq!(config.api_version().to_string(), "2020-04-01");
//! ```
//!
//! ## Reading an Offer
//!
//! ```rust,ignore
//! use cosmos_offer::{AccessToken, AccountIdentity, AuthType, DefaultExperience, SessionContext};
//! use cosmos_offer::arm::ArmClient;
//! use cosmos_offer::offer::{OfferLookup, OfferReader, ReadCollectionOfferParams, TracingNotifier};
//!
//! let identity = AccountIdentity::new("sub", "rg", "acct")?;
//! let session = SessionContext::new(AuthType::Aad, DefaultExperience::Graph, identity)
//!     .with_arm_token(AccessToken::new(token)?);
//!
//! let reader = OfferReader::new(ArmClient::from_session(&session, None)?, sdk, TracingNotifier);
//! let params = ReadCollectionOfferParams::new("db1", "graph1", "offer-id", "collection-rid");
//!
//! if let OfferLookup::Found(offer) = reader.read_collection_offer(&session, &params).await? {
//!     println!("{} -> {:?}", offer.id, offer.throughput);
//! }
//! ```
//!
//! ## Direct Resource Operations
//!
//! ```rust,ignore
//! use cosmos_offer::arm::{gremlin, ArmClient};
//!
//! let client = ArmClient::new(Some(&token), None)?;
//! let graphs = gremlin::list_gremlin_graphs(&client, &identity, "db1").await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration and session are passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: Clients are `Send + Sync`
//! - **One round trip per call**: No retries, pagination or polling

pub mod arm;
pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod offer;

// Re-export public types at crate root for convenience
pub use auth::{AccountIdentity, AuthType, DefaultExperience, SessionContext};
pub use config::{
    AccessToken, AccountName, ApiVersion, ArmConfig, ArmConfigBuilder, HostUrl,
    ResourceGroupName, SubscriptionId,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError,
};

// Re-export the main entry points
pub use arm::{ArmClient, ArmError, ArmOperation, ResourceKind};
pub use offer::{Offer, OfferError, OfferLookup, OfferReader, ReadCollectionOfferParams, Throughput};
