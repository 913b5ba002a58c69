//! Setting the current location of a person.

use tracing::debug;

use pf_core::{GeoPoint, Location, PersonId};
use pf_store::{LocationStore, PersonStore};

use crate::{FinderError, FinderResult};

/// Orchestrates "set the current location of person X".
///
/// The owner-existence check runs first (persons are never deleted, so it
/// cannot go stale); the insert-or-replace itself is a single atomic store
/// operation, so two concurrent calls for one owner can never leave two
/// coordinate rows — the later write simply wins.
pub struct LocationWriter<'s, S> {
    store: &'s S,
}

impl<'s, S: PersonStore + LocationStore> LocationWriter<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Insert or replace the coordinate of `owner`.
    ///
    /// Fails with `InvalidInput` when the coordinate is outside the WGS-84
    /// domain and `OwnerNotFound` when no such person was registered.
    pub fn set_location(&self, owner: PersonId, point: GeoPoint) -> FinderResult<Location> {
        if !(-90.0..=90.0).contains(&point.lat) {
            return Err(FinderError::InvalidInput(format!(
                "latitude {} outside [-90, 90]",
                point.lat
            )));
        }
        if !(-180.0..=180.0).contains(&point.lon) {
            return Err(FinderError::InvalidInput(format!(
                "longitude {} outside [-180, 180]",
                point.lon
            )));
        }

        self.store
            .person(owner)?
            .ok_or(FinderError::OwnerNotFound(owner))?;
        self.store.upsert_location(owner, point)?;

        debug!(%owner, %point, "location set");
        Ok(Location { owner, point })
    }
}
