//! Person and location records.
//!
//! A person exists in two states, encoded as two types:
//!
//! * [`NewPerson`] — a draft awaiting registration; it has no id yet.
//! * [`Person`] — a stored row with its store-assigned [`PersonId`].
//!
//! The split (rather than an `Option<PersonId>` field or an invalid-id
//! sentinel) means code that holds a `Person` can always rely on the id
//! being real.

use crate::{GeoPoint, PersonId};

/// A person awaiting registration.  The store assigns an id on insert and
/// hands back a [`Person`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewPerson {
    pub name: String,
}

impl NewPerson {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A registered person.
///
/// `name` is non-blank and at most [`Person::MAX_NAME_LEN`] characters;
/// the bound is enforced at registration time, not by this type.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    pub id: PersonId,
    pub name: String,
}

impl Person {
    /// Maximum accepted name length, in characters.
    pub const MAX_NAME_LEN: usize = 100;
}

/// The current coordinate of one person.
///
/// Invariant: at most one live `Location` per `owner` — every store backend
/// upserts atomically, so concurrent writers can never leave two rows.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub owner: PersonId,
    pub point: GeoPoint,
}

/// A joined person + location row returned from a bounding-box query.
///
/// This is a *candidate* in glossary terms: it lies inside the query's
/// rectangle but has not yet been confirmed inside the true circular
/// radius.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocatedPerson {
    pub person: Person,
    pub point: GeoPoint,
}
