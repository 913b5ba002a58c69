//! SQLite store backend (feature `sqlite`).
//!
//! One database file with two tables, `persons` and `locations`, plus a
//! `(latitude, longitude)` index so the bounding-box scan stays off the
//! full table.  The single connection sits behind a `Mutex`; callers on
//! other threads serialize on it.
//!
//! The insert-or-replace of a person's coordinate is pushed down to SQLite
//! (`INSERT ... ON CONFLICT DO UPDATE`), so the one-row-per-owner invariant
//! holds no matter how calls interleave.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{Connection, OptionalExtension};
use tracing::debug;

use pf_core::{BoundingBox, GeoPoint, LocatedPerson, NewPerson, Person, PersonId};

use crate::store::{LocationStore, PersonStore};
use crate::{StoreError, StoreResult};

/// Store backed by a single SQLite database.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (or create) the database at `path` and initialise the schema.
    pub fn open(path: &Path) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        debug!(path = %path.display(), "opened SQLite store");
        Self::init(conn)
    }

    /// Fully in-memory database; used by tests and throwaway demos.
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             PRAGMA foreign_keys = ON;
             CREATE TABLE IF NOT EXISTS persons (
                 id   INTEGER PRIMARY KEY AUTOINCREMENT,
                 name TEXT NOT NULL
             );
             CREATE TABLE IF NOT EXISTS locations (
                 person_id INTEGER PRIMARY KEY REFERENCES persons(id),
                 latitude  REAL NOT NULL,
                 longitude REAL NOT NULL
             );
             CREATE INDEX IF NOT EXISTS locations_lat_lon
                 ON locations (latitude, longitude);",
        )?;
        Ok(Self { conn: Mutex::new(conn) })
    }

    fn conn(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| StoreError::Unavailable("connection lock poisoned".into()))
    }
}

impl PersonStore for SqliteStore {
    fn insert_person(&self, draft: NewPerson) -> StoreResult<Person> {
        let conn = self.conn()?;
        conn.prepare_cached("INSERT INTO persons (name) VALUES (?1)")?
            .execute(rusqlite::params![draft.name])?;
        Ok(Person {
            id: PersonId(conn.last_insert_rowid()),
            name: draft.name,
        })
    }

    fn person(&self, id: PersonId) -> StoreResult<Option<Person>> {
        let conn = self.conn()?;
        let row = conn
            .prepare_cached("SELECT id, name FROM persons WHERE id = ?1")?
            .query_row(rusqlite::params![id.get()], |r| {
                Ok(Person { id: PersonId(r.get(0)?), name: r.get(1)? })
            })
            .optional()?;
        Ok(row)
    }

    fn persons_by_ids(&self, ids: &[PersonId]) -> StoreResult<Vec<Person>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare_cached("SELECT id, name FROM persons WHERE id = ?1")?;

        let mut found = Vec::with_capacity(ids.len());
        for id in ids {
            let row = stmt
                .query_row(rusqlite::params![id.get()], |r| {
                    Ok(Person { id: PersonId(r.get(0)?), name: r.get(1)? })
                })
                .optional()?;
            if let Some(person) = row {
                found.push(person);
            }
        }
        found.sort_by_key(|p| p.id);
        found.dedup_by_key(|p| p.id);
        Ok(found)
    }
}

impl LocationStore for SqliteStore {
    fn upsert_location(&self, owner: PersonId, point: GeoPoint) -> StoreResult<()> {
        let changed = self
            .conn()?
            .prepare_cached(
                "INSERT INTO locations (person_id, latitude, longitude) \
                 VALUES (?1, ?2, ?3) \
                 ON CONFLICT(person_id) DO UPDATE \
                 SET latitude = excluded.latitude, longitude = excluded.longitude",
            )?
            .execute(rusqlite::params![owner.get(), point.lat, point.lon])?;
        debug!(%owner, %point, changed, "upserted location");
        Ok(())
    }

    fn location_of(&self, owner: PersonId) -> StoreResult<Option<GeoPoint>> {
        let conn = self.conn()?;
        let row = conn
            .prepare_cached("SELECT latitude, longitude FROM locations WHERE person_id = ?1")?
            .query_row(rusqlite::params![owner.get()], |r| {
                Ok(GeoPoint::new(r.get(0)?, r.get(1)?))
            })
            .optional()?;
        Ok(row)
    }

    fn count_in_box(&self, bbox: &BoundingBox) -> StoreResult<u64> {
        let conn = self.conn()?;
        let count: i64 = conn
            .prepare_cached(
                "SELECT COUNT(*) \
                 FROM persons p INNER JOIN locations l ON p.id = l.person_id \
                 WHERE l.latitude  BETWEEN ?1 AND ?2 \
                   AND l.longitude BETWEEN ?3 AND ?4",
            )?
            .query_row(
                rusqlite::params![bbox.min_lat, bbox.max_lat, bbox.min_lon, bbox.max_lon],
                |r| r.get(0),
            )?;
        Ok(count as u64)
    }

    fn page_in_box(
        &self,
        bbox: &BoundingBox,
        limit: u32,
        offset: u64,
    ) -> StoreResult<Vec<LocatedPerson>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare_cached(
            "SELECT p.id, p.name, l.latitude, l.longitude \
             FROM persons p INNER JOIN locations l ON p.id = l.person_id \
             WHERE l.latitude  BETWEEN ?1 AND ?2 \
               AND l.longitude BETWEEN ?3 AND ?4 \
             ORDER BY p.id \
             LIMIT ?5 OFFSET ?6",
        )?;

        let rows = stmt.query_map(
            rusqlite::params![
                bbox.min_lat,
                bbox.max_lat,
                bbox.min_lon,
                bbox.max_lon,
                i64::from(limit),
                offset as i64,
            ],
            |r| {
                Ok(LocatedPerson {
                    person: Person { id: PersonId(r.get(0)?), name: r.get(1)? },
                    point:  GeoPoint::new(r.get(2)?, r.get(3)?),
                })
            },
        )?;
        rows.collect::<Result<Vec<_>, _>>().map_err(StoreError::from)
    }
}
