//! The proximity search algorithm.
//!
//! A search is a pure request/response operation with a two-phase filtering
//! protocol:
//!
//! 1. Validate the query domain.
//! 2. Derive the bounding box around the center.
//! 3. Ask the store for the box count and one box page of candidates
//!    (ordered by id, so pagination is stable across calls).
//! 4. Compute the exact great-circle distance per candidate and drop
//!    everything outside the true circle — the box corners lie beyond the
//!    radius and survive phase 3.
//! 5. Sort the survivors by distance, ties broken by id.
//! 6. Attach pagination metadata.
//!
//! Pagination metadata is derived from the *bounding-box* count, exactly as
//! the backing queries see it.  The box over-counts relative to the true
//! circle, so `total_items` can overstate the in-radius population and a
//! page can come back shorter than `page_size` even when later pages still
//! hold matches.  Filtering before counting would fix that at the cost of
//! fetching the entire candidate set per request; this implementation keeps
//! the pushed-down pagination and documents the trade in its tests.

use tracing::debug;

use pf_core::{BoundingBox, GeoPoint, PageInfo, PageRequest, Person};
use pf_store::LocationStore;

use crate::{FinderError, FinderResult};

/// Largest accepted search radius, in kilometres.
pub const MAX_RADIUS_KM: f64 = 1_000.0;

/// One search hit: a person and their exact great-circle distance from the
/// query point.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Neighbor {
    pub person: Person,
    pub distance_km: f64,
}

/// A page of search hits, distance-ascending, plus pagination metadata.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SearchPage {
    pub items: Vec<Neighbor>,
    pub page_info: PageInfo,
}

/// Finds registered persons within a radius of a query point.
pub struct ProximitySearch<'s, S> {
    store: &'s S,
}

impl<'s, S: LocationStore> ProximitySearch<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Run one paginated radius search around `center`.
    ///
    /// Every returned item satisfies `distance_km ≤ radius_km`; the page is
    /// sorted distance-ascending with ids breaking ties.  A query matching
    /// nothing — or a page whose candidates all fall in the box corners —
    /// returns an empty page with all-zero metadata.
    pub fn search(
        &self,
        center: GeoPoint,
        radius_km: f64,
        page: PageRequest,
    ) -> FinderResult<SearchPage> {
        validate_query(center, radius_km, page)?;

        let bbox = BoundingBox::around(center, radius_km);
        let total_candidates = self.store.count_in_box(&bbox)?;
        let candidates = self
            .store
            .page_in_box(&bbox, page.page_size, page.offset())?;

        if candidates.is_empty() {
            return Ok(SearchPage { items: Vec::new(), page_info: PageInfo::empty(page) });
        }

        let mut items: Vec<Neighbor> = candidates
            .into_iter()
            .map(|candidate| Neighbor {
                distance_km: center.distance_km(candidate.point),
                person: candidate.person,
            })
            .filter(|neighbor| neighbor.distance_km <= radius_km)
            .collect();

        if items.is_empty() {
            return Ok(SearchPage { items, page_info: PageInfo::empty(page) });
        }

        items.sort_by(|a, b| {
            a.distance_km
                .total_cmp(&b.distance_km)
                .then_with(|| a.person.id.cmp(&b.person.id))
        });

        debug!(
            %center,
            radius_km,
            total_candidates,
            returned = items.len(),
            "proximity search page"
        );
        Ok(SearchPage {
            items,
            page_info: PageInfo::for_total(page, total_candidates),
        })
    }
}

fn validate_query(center: GeoPoint, radius_km: f64, page: PageRequest) -> FinderResult<()> {
    // Negated range checks so NaN fails every bound.
    if !(-90.0..=90.0).contains(&center.lat) {
        return Err(FinderError::InvalidInput(format!(
            "latitude {} outside [-90, 90]",
            center.lat
        )));
    }
    if !(-180.0..=180.0).contains(&center.lon) {
        return Err(FinderError::InvalidInput(format!(
            "longitude {} outside [-180, 180]",
            center.lon
        )));
    }
    if !(0.0..=MAX_RADIUS_KM).contains(&radius_km) {
        return Err(FinderError::InvalidInput(format!(
            "radiusKm {radius_km} outside [0, {MAX_RADIUS_KM}]"
        )));
    }
    if page.page < 1 {
        return Err(FinderError::InvalidInput("page must be at least 1".into()));
    }
    if page.page_size < 1 {
        return Err(FinderError::InvalidInput("pageSize must be at least 1".into()));
    }
    Ok(())
}
