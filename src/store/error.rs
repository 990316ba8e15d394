//! # Store Error Types
//!
//! Error taxonomy for the read-only data stores. Only two cases matter to
//! the resolver: a record being absent (expected, triggers a fallback
//! path) and everything else (unexpected, short-circuits to a sentinel).

use thiserror::Error;

/// Error returned by store lookups
#[derive(Debug, Error)]
pub enum StoreError {
    /// Record absent. Expected during resolution; callers fall back.
    #[error("record not found")]
    NotFound,

    /// Any other backend failure (connection loss, malformed data, ...)
    #[error("store backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl StoreError {
    /// True when the error is the expected absent-record case
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound)
    }
}
