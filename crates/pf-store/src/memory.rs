//! In-memory store backend.
//!
//! Both tables live behind a single `Mutex`, which makes every operation —
//! including the insert-or-replace of [`upsert_location`] — atomic with
//! respect to concurrent callers.  Suitable for tests, demos, and as the
//! reference implementation of the store contract.
//!
//! [`upsert_location`]: crate::LocationStore::upsert_location

use std::sync::{Mutex, MutexGuard};

use rustc_hash::FxHashMap;
use tracing::debug;

use pf_core::{BoundingBox, GeoPoint, LocatedPerson, NewPerson, Person, PersonId};

use crate::store::{LocationStore, PersonStore};
use crate::{StoreError, StoreResult};

#[derive(Default)]
struct Tables {
    persons:   FxHashMap<PersonId, Person>,
    locations: FxHashMap<PersonId, GeoPoint>,
    next_id:   i64,
}

/// Shared in-memory backend.  Cheap to construct; clone-free sharing via
/// `&MemoryStore` or `Arc<MemoryStore>`.
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            tables: Mutex::new(Tables { next_id: 1, ..Tables::default() }),
        }
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".into()))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonStore for MemoryStore {
    fn insert_person(&self, draft: NewPerson) -> StoreResult<Person> {
        let mut tables = self.lock()?;
        let id = PersonId(tables.next_id);
        tables.next_id += 1;

        let person = Person { id, name: draft.name };
        tables.persons.insert(id, person.clone());
        Ok(person)
    }

    fn person(&self, id: PersonId) -> StoreResult<Option<Person>> {
        Ok(self.lock()?.persons.get(&id).cloned())
    }

    fn persons_by_ids(&self, ids: &[PersonId]) -> StoreResult<Vec<Person>> {
        let tables = self.lock()?;
        let mut found: Vec<Person> = ids
            .iter()
            .filter_map(|id| tables.persons.get(id))
            .cloned()
            .collect();
        found.sort_by_key(|p| p.id);
        found.dedup_by_key(|p| p.id);
        Ok(found)
    }
}

impl LocationStore for MemoryStore {
    fn upsert_location(&self, owner: PersonId, point: GeoPoint) -> StoreResult<()> {
        let mut tables = self.lock()?;
        let replaced = tables.locations.insert(owner, point).is_some();
        debug!(%owner, %point, replaced, "upserted location");
        Ok(())
    }

    fn location_of(&self, owner: PersonId) -> StoreResult<Option<GeoPoint>> {
        Ok(self.lock()?.locations.get(&owner).copied())
    }

    fn count_in_box(&self, bbox: &BoundingBox) -> StoreResult<u64> {
        let tables = self.lock()?;
        let count = tables
            .locations
            .iter()
            // Inner join: an orphan location whose owner was never stored
            // does not count.
            .filter(|(owner, point)| {
                tables.persons.contains_key(owner) && bbox.contains(**point)
            })
            .count();
        Ok(count as u64)
    }

    fn page_in_box(
        &self,
        bbox: &BoundingBox,
        limit: u32,
        offset: u64,
    ) -> StoreResult<Vec<LocatedPerson>> {
        let tables = self.lock()?;
        let mut hits: Vec<(PersonId, GeoPoint)> = tables
            .locations
            .iter()
            .filter(|(owner, point)| {
                tables.persons.contains_key(owner) && bbox.contains(**point)
            })
            .map(|(owner, point)| (*owner, *point))
            .collect();
        hits.sort_by_key(|(owner, _)| *owner);

        let page = hits
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(limit as usize)
            .filter_map(|(owner, point)| {
                tables
                    .persons
                    .get(&owner)
                    .map(|person| LocatedPerson { person: person.clone(), point })
            })
            .collect();
        Ok(page)
    }
}
