//! Caller-facing error type.
//!
//! Nothing here is retried or swallowed: validation failures are rejected
//! before any store round-trip, and store failures propagate unmodified
//! inside `Store`.

use thiserror::Error;

use pf_core::PersonId;
use pf_store::StoreError;

/// The top-level error type for all orchestrators.
#[derive(Debug, Error)]
pub enum FinderError {
    /// A parameter was outside its documented domain.  Never retried.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The referenced person does not exist.
    #[error("person {0} not found")]
    OwnerNotFound(PersonId),

    /// The backing store failed; retry policy belongs to the caller.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Shorthand result type for pf-search.
pub type FinderResult<T> = Result<T, FinderError>;
