//! Error types for pf-store.

use thiserror::Error;

/// Errors surfaced by store backends.
///
/// `Unavailable` covers transient backend failure (poisoned lock, timed-out
/// connection).  The store never retries internally; retry policy belongs to
/// the caller.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Alias for `Result<T, StoreError>`.
pub type StoreResult<T> = Result<T, StoreError>;
