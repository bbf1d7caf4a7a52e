//! Error types for Campus Core

use crate::limits::ValidationError;
use thiserror::Error;

/// Result type alias using Campus Core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Campus map error types
///
/// Every variant is recoverable. An operation that returns an error leaves the
/// graph or registry exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Building not found: {0}")]
    NotFound(String),

    #[error("Node already exists: {0}")]
    DuplicateNode(String),

    #[error("Building already exists: {0}")]
    DuplicateBuilding(String),

    #[error("No such node for edge endpoint: {0}")]
    InvalidEdgeEndpoint(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl Error {
    /// True when a lookup by code came back empty
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
