//! `pf-store` — persistence contract and backends for the persons-finder
//! framework.
//!
//! Two backends are provided, one behind a Cargo feature:
//!
//! | Feature   | Backend                  | Storage                          |
//! |-----------|--------------------------|----------------------------------|
//! | *(none)*  | [`MemoryStore`]          | `FxHashMap` tables behind a lock |
//! | `sqlite`  | [`SqliteStore`]          | one SQLite file (WAL)            |
//!
//! Both implement [`PersonStore`] and [`LocationStore`]; orchestrators in
//! `pf-search` depend only on those traits.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pf_store::{LocationStore, MemoryStore, PersonStore};
//!
//! let store = MemoryStore::new();
//! let ada = store.insert_person(NewPerson::new("Ada"))?;
//! store.upsert_location(ada.id, GeoPoint::new(-36.7173, 174.7358))?;
//! ```

pub mod error;
pub mod memory;
pub mod store;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use store::{LocationStore, PersonStore};

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;
