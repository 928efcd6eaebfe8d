//! Error types for management-plane operations.
//!
//! [`ArmError`] wraps the transport-level [`HttpError`] and adds the two
//! failures the endpoint table itself can produce: an unknown
//! kind/operation pair and a wrong number of path segments.
//!
//! # Example
//!
//! ```rust,ignore
//! use cosmos_offer::arm::{gremlin, ArmError};
//!
//! match gremlin::get_gremlin_graph(&client, &identity, "db1", "g1").await {
//!     Ok(graph) => println!("Found: {:?}", graph.name),
//!     Err(e) if e.is_not_found() => println!("no such graph"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::arm::path::{ArmOperation, ResourceKind};
use crate::clients::{HttpError, HttpResponseError};

/// Error type for management-plane operations.
#[derive(Debug, Error)]
pub enum ArmError {
    /// No endpoint row exists for this kind and operation.
    #[error("No endpoint for {kind}::{operation}")]
    PathResolutionFailed {
        /// The resource kind.
        kind: ResourceKind,
        /// The requested operation.
        operation: ArmOperation,
    },

    /// The caller supplied the wrong number of path segments.
    #[error("{kind}::{operation} takes {expected} path segment(s), got {actual}")]
    ParameterCount {
        /// The resource kind.
        kind: ResourceKind,
        /// The requested operation.
        operation: ArmOperation,
        /// Number of segments the endpoint declares.
        expected: usize,
        /// Number of segments supplied.
        actual: usize,
    },

    /// The request failed in transport or returned a non-2xx status.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A body could not be converted to or from its typed model.
    #[error("Failed to convert payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl ArmError {
    /// Returns `true` if the management endpoint reported a missing resource.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_not_found())
    }

    /// Returns the response error, if this failure came from a non-2xx status.
    #[must_use]
    pub const fn response(&self) -> Option<&HttpResponseError> {
        match self {
            Self::Http(HttpError::Response(e)) => Some(e),
            _ => None,
        }
    }
}
