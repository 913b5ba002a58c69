//! `pf-search` — the orchestration layer of the persons-finder framework.
//!
//! Three small request/response components, each generic over the store
//! traits from `pf-store`:
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`registry`] | `PersonRegistry` — create persons, fetch by ids        |
//! | [`writer`]   | `LocationWriter` — set a person's current coordinate   |
//! | [`searcher`] | `ProximitySearch` — paginated radius search            |
//! | [`error`]    | `FinderError`, `FinderResult`                          |
//!
//! None of them hold state between calls; every query re-reads the store.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to `Neighbor`/`SearchPage`.  |

pub mod error;
pub mod registry;
pub mod searcher;
pub mod writer;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{FinderError, FinderResult};
pub use registry::PersonRegistry;
pub use searcher::{MAX_RADIUS_KM, Neighbor, ProximitySearch, SearchPage};
pub use writer::LocationWriter;
