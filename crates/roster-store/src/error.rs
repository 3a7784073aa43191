// ABOUTME: Error taxonomy for the person store.
// ABOUTME: Distinguishes an unreachable store from a failed write transaction.

use thiserror::Error;

/// Errors that can occur during store operations.
///
/// A missing record is not an error: lookups yield `Ok(None)`.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store cannot be reached or a session cannot be opened.
    #[error("store unavailable: {0}")]
    Unavailable(#[source] rusqlite::Error),

    /// A write transaction failed to begin or commit; nothing was persisted.
    #[error("persistence failure: {0}")]
    Persistence(#[source] rusqlite::Error),

    /// Filesystem failure while preparing the store directory.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
