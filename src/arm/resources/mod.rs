//! Typed operations per resource family.
//!
//! - [`gremlin`]: Gremlin databases and graphs
//! - [`throughput`]: throughput settings for any resource kind
//! - [`database_account_region`]: per-region account metrics
//!
//! Other kinds are reachable through
//! [`ArmClient::execute`](crate::arm::ArmClient::execute) with a
//! [`ResourceKind`](crate::arm::ResourceKind).

pub mod database_account_region;
pub mod gremlin;
pub mod throughput;
