//! Person registration and lookup.

use tracing::debug;

use pf_core::{NewPerson, Person, PersonId};
use pf_store::PersonStore;

use crate::{FinderError, FinderResult};

/// Creates persons and fetches them by id.
pub struct PersonRegistry<'s, S> {
    store: &'s S,
}

impl<'s, S: PersonStore> PersonRegistry<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Register a new person and return the stored row with its assigned id.
    ///
    /// The name must be non-blank and at most [`Person::MAX_NAME_LEN`]
    /// characters.
    pub fn create(&self, name: &str) -> FinderResult<Person> {
        if name.trim().is_empty() {
            return Err(FinderError::InvalidInput("name must not be blank".into()));
        }
        if name.chars().count() > Person::MAX_NAME_LEN {
            return Err(FinderError::InvalidInput(format!(
                "name must be at most {} characters",
                Person::MAX_NAME_LEN
            )));
        }

        let person = self.store.insert_person(NewPerson::new(name))?;
        debug!(id = %person.id, "registered person");
        Ok(person)
    }

    /// Fetch one person; `OwnerNotFound` if the id was never assigned.
    pub fn get(&self, id: PersonId) -> FinderResult<Person> {
        self.store
            .person(id)?
            .ok_or(FinderError::OwnerNotFound(id))
    }

    /// Fetch several persons.  Unknown ids are skipped; the result is
    /// ordered by id.
    pub fn by_ids(&self, ids: &[PersonId]) -> FinderResult<Vec<Person>> {
        Ok(self.store.persons_by_ids(ids)?)
    }
}
