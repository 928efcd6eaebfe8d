//! Azure Resource Manager operations for Cosmos DB accounts.
//!
//! This module covers the management-plane half of the crate:
//!
//! - [`ArmClient`]: sends one request per call, driven by the endpoint table
//! - [`ResourceKind`] and [`ArmOperation`]: the two keys of that table
//! - [`resources`]: typed wrappers (Gremlin, throughput, region metrics)
//! - [`models`]: request and response payloads
//!
//! # Example
//!
//! ```rust,ignore
//! use cosmos_offer::arm::{resources::gremlin, ArmClient};
//! use cosmos_offer::{AccessToken, AccountIdentity};
//!
//! let client = ArmClient::new(Some(&AccessToken::new(token)?), None)?;
//! let identity = AccountIdentity::new("sub", "rg", "acct")?;
//!
//! let throughput = gremlin::get_gremlin_graph_throughput(&client, &identity, "db1", "g1").await?;
//! ```

mod client;
mod errors;
pub mod models;
mod path;
pub mod resources;

pub use client::ArmClient;
pub use errors::ArmError;
pub use path::{build_path, get_path, ArmOperation, ArmPath, ResourceKind, REGION_METRICS_PATH};
pub use resources::{database_account_region, gremlin, throughput};
