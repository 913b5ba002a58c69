//! `pf-core` — foundational types for the persons-finder framework.
//!
//! This crate is a dependency of every other `pf-*` crate.  It intentionally
//! has no `pf-*` dependencies, no I/O, and minimal external ones (only
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`ids`]     | `PersonId`                                              |
//! | [`geo`]     | `GeoPoint`, haversine distance, `BoundingBox`           |
//! | [`person`]  | `NewPerson`, `Person`, `Location`, `LocatedPerson`      |
//! | [`page`]    | `PageRequest`, `PageInfo`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.         |

pub mod geo;
pub mod ids;
pub mod page;
pub mod person;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::{BoundingBox, GeoPoint};
pub use ids::PersonId;
pub use page::{PageInfo, PageRequest};
pub use person::{LocatedPerson, Location, NewPerson, Person};
