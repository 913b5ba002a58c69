//! Strongly typed person identifier.
//!
//! `PersonId` is `Copy + Ord + Hash` so it can be used as a map key and as
//! the stable tie-break / pagination sort key without ceremony.  The inner
//! integer is `i64` because the SQLite backend assigns ids from
//! `INTEGER PRIMARY KEY` rowids, which are signed 64-bit.
//!
//! There is no "unassigned" sentinel: a person without an id is a
//! [`NewPerson`][crate::NewPerson], a different type entirely, so an
//! unregistered draft can never be mistaken for a stored row.

use std::fmt;

/// Identifier of a registered person.  Assigned by the store on insert,
/// immutable afterwards.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PersonId(pub i64);

impl PersonId {
    /// The raw integer, for SQL parameter binding.
    #[inline(always)]
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PersonId({})", self.0)
    }
}

impl From<i64> for PersonId {
    #[inline(always)]
    fn from(raw: i64) -> Self {
        PersonId(raw)
    }
}
