//! The `PersonStore` and `LocationStore` traits implemented by all backends.
//!
//! Receivers are `&self`: searches may run concurrently against one shared
//! store, so backends use interior mutability and provide their own locking.

use pf_core::{BoundingBox, GeoPoint, LocatedPerson, NewPerson, Person, PersonId};

use crate::StoreResult;

/// Registry of persons.  Ids are assigned by the backend on insert and are
/// never reused.
pub trait PersonStore {
    /// Store `draft` and return the row with its newly assigned id.
    fn insert_person(&self, draft: NewPerson) -> StoreResult<Person>;

    /// Fetch one person, `None` if the id was never assigned.
    fn person(&self, id: PersonId) -> StoreResult<Option<Person>>;

    /// Fetch several persons at once.  Unknown ids are skipped, not errors;
    /// the result is ordered by id with duplicates removed.
    fn persons_by_ids(&self, ids: &[PersonId]) -> StoreResult<Vec<Person>>;
}

/// Current coordinates, one per person.
pub trait LocationStore {
    /// Insert or replace the coordinate of `owner` — **atomically**.
    ///
    /// Concurrent upserts for the same owner must leave exactly one live
    /// row (last write wins).  Callers are expected to have validated that
    /// `owner` exists; a backend may reject an orphan row or silently keep
    /// it out of joins, but it must not corrupt the one-row invariant.
    fn upsert_location(&self, owner: PersonId, point: GeoPoint) -> StoreResult<()>;

    /// Current coordinate of `owner`, if one was ever set.
    fn location_of(&self, owner: PersonId) -> StoreResult<Option<GeoPoint>>;

    /// Number of located persons inside `bbox` (bounds inclusive).
    fn count_in_box(&self, bbox: &BoundingBox) -> StoreResult<u64>;

    /// One page of located persons inside `bbox`, ordered by [`PersonId`]
    /// ascending.
    ///
    /// The ordering is total, so a fixed box/limit/offset returns the same
    /// slice on every call — pagination cannot be skewed by interleaved
    /// queries.
    fn page_in_box(
        &self,
        bbox: &BoundingBox,
        limit: u32,
        offset: u64,
    ) -> StoreResult<Vec<LocatedPerson>>;
}
