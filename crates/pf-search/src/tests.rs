//! Orchestrator tests for pf-search, run against the in-memory backend.

#[cfg(test)]
mod helpers {
    use pf_core::{GeoPoint, NewPerson, PersonId};
    use pf_store::{LocationStore, MemoryStore, PersonStore};

    /// Store with one located person per `(lat, lon)` pair, registered in
    /// order so ids ascend with the input slice.
    pub fn seeded(points: &[(f64, f64)]) -> (MemoryStore, Vec<PersonId>) {
        let store = MemoryStore::new();
        let mut ids = Vec::with_capacity(points.len());
        for (i, (lat, lon)) in points.iter().enumerate() {
            let person = store
                .insert_person(NewPerson::new(format!("Person {i}")))
                .unwrap();
            store
                .upsert_location(person.id, GeoPoint::new(*lat, *lon))
                .unwrap();
            ids.push(person.id);
        }
        (store, ids)
    }
}

#[cfg(test)]
mod registry {
    use pf_core::PersonId;
    use pf_store::MemoryStore;

    use crate::{FinderError, PersonRegistry};

    #[test]
    fn create_assigns_id() {
        let store = MemoryStore::new();
        let registry = PersonRegistry::new(&store);
        let ada = registry.create("Ada Lovelace").unwrap();
        assert_eq!(registry.get(ada.id).unwrap().name, "Ada Lovelace");
    }

    #[test]
    fn blank_name_rejected() {
        let store = MemoryStore::new();
        let registry = PersonRegistry::new(&store);
        for name in ["", "   ", "\t\n"] {
            let err = registry.create(name).unwrap_err();
            assert!(matches!(err, FinderError::InvalidInput(_)), "{name:?}");
        }
    }

    #[test]
    fn name_length_bounded() {
        let store = MemoryStore::new();
        let registry = PersonRegistry::new(&store);
        assert!(registry.create(&"x".repeat(100)).is_ok());
        let err = registry.create(&"x".repeat(101)).unwrap_err();
        assert!(matches!(err, FinderError::InvalidInput(_)));
    }

    #[test]
    fn get_unknown_is_not_found() {
        let store = MemoryStore::new();
        let registry = PersonRegistry::new(&store);
        let err = registry.get(PersonId(404)).unwrap_err();
        assert!(matches!(err, FinderError::OwnerNotFound(PersonId(404))));
    }

    #[test]
    fn by_ids_skips_unknown() {
        let store = MemoryStore::new();
        let registry = PersonRegistry::new(&store);
        let a = registry.create("Ada").unwrap();
        let b = registry.create("Grace").unwrap();
        let found = registry.by_ids(&[b.id, PersonId(404), a.id]).unwrap();
        let ids: Vec<_> = found.iter().map(|p| p.id).collect();
        assert_eq!(ids, [a.id, b.id]);
    }
}

#[cfg(test)]
mod writer {
    use pf_core::{GeoPoint, NewPerson, PersonId};
    use pf_store::{LocationStore, MemoryStore, PersonStore};

    use crate::{FinderError, LocationWriter};

    #[test]
    fn set_then_replace_keeps_one_row() {
        let store = MemoryStore::new();
        let ada = store.insert_person(NewPerson::new("Ada")).unwrap();
        let writer = LocationWriter::new(&store);

        writer.set_location(ada.id, GeoPoint::new(10.0, 20.0)).unwrap();
        let moved = writer.set_location(ada.id, GeoPoint::new(-36.7, 174.7)).unwrap();

        assert_eq!(moved.point, GeoPoint::new(-36.7, 174.7));
        assert_eq!(store.location_of(ada.id).unwrap(), Some(moved.point));
    }

    #[test]
    fn repeated_identical_calls_are_idempotent() {
        let store = MemoryStore::new();
        let ada = store.insert_person(NewPerson::new("Ada")).unwrap();
        let writer = LocationWriter::new(&store);

        for _ in 0..5 {
            writer.set_location(ada.id, GeoPoint::new(1.5, 2.5)).unwrap();
        }
        assert_eq!(store.location_of(ada.id).unwrap(), Some(GeoPoint::new(1.5, 2.5)));
    }

    #[test]
    fn unknown_owner_is_not_found() {
        let store = MemoryStore::new();
        let writer = LocationWriter::new(&store);
        let err = writer
            .set_location(PersonId(404), GeoPoint::new(0.0, 0.0))
            .unwrap_err();
        assert!(matches!(err, FinderError::OwnerNotFound(PersonId(404))));
    }

    #[test]
    fn out_of_domain_coordinate_rejected() {
        let store = MemoryStore::new();
        let ada = store.insert_person(NewPerson::new("Ada")).unwrap();
        let writer = LocationWriter::new(&store);

        for (lat, lon) in [(90.5, 0.0), (-91.0, 0.0), (0.0, 180.5), (0.0, -181.0)] {
            let err = writer.set_location(ada.id, GeoPoint::new(lat, lon)).unwrap_err();
            assert!(matches!(err, FinderError::InvalidInput(_)), "({lat}, {lon})");
        }
        assert!(store.location_of(ada.id).unwrap().is_none(), "nothing stored");
    }
}

#[cfg(test)]
mod search {
    use pf_core::{GeoPoint, PageRequest};

    use super::helpers::seeded;
    use crate::{FinderError, ProximitySearch};

    #[test]
    fn rejects_out_of_domain_parameters() {
        let (store, _) = seeded(&[]);
        let search = ProximitySearch::new(&store);
        let page = PageRequest::new(1, 10);
        let origin = GeoPoint::new(0.0, 0.0);

        let cases: Vec<(GeoPoint, f64, PageRequest)> = vec![
            (GeoPoint::new(90.1, 0.0), 10.0, page),
            (GeoPoint::new(-90.1, 0.0), 10.0, page),
            (GeoPoint::new(0.0, 180.1), 10.0, page),
            (GeoPoint::new(0.0, -180.1), 10.0, page),
            (origin, -0.1, page),
            (origin, 1000.1, page),
            (origin, f64::NAN, page),
            (origin, 10.0, PageRequest::new(0, 10)),
            (origin, 10.0, PageRequest::new(1, 0)),
        ];
        for (center, radius, page) in cases {
            let err = search.search(center, radius, page).unwrap_err();
            assert!(
                matches!(err, FinderError::InvalidInput(_)),
                "center {center}, radius {radius}"
            );
        }
    }

    #[test]
    fn boundary_parameters_are_accepted() {
        let (store, _) = seeded(&[]);
        let search = ProximitySearch::new(&store);
        for center in [
            GeoPoint::new(90.0, 180.0),
            GeoPoint::new(-90.0, -180.0),
        ] {
            assert!(search.search(center, 1000.0, PageRequest::new(1, 1)).is_ok());
            assert!(search.search(center, 0.0, PageRequest::new(1, 1)).is_ok());
        }
    }

    #[test]
    fn every_returned_item_is_within_radius() {
        // 0.85° diagonal sits inside the 100 km box (half-width ≈ 0.9°) but
        // ~134 km from the center — a box corner that the exact filter must
        // drop.
        let (store, ids) = seeded(&[
            (0.5, 0.0),   // ~55.6 km — in
            (0.85, 0.85), // corner — out
            (0.0, 0.2),   // ~22.3 km — in
        ]);
        let search = ProximitySearch::new(&store);
        let result = search
            .search(GeoPoint::new(0.0, 0.0), 100.0, PageRequest::new(1, 10))
            .unwrap();

        let returned: Vec<_> = result.items.iter().map(|n| n.person.id).collect();
        assert_eq!(returned, [ids[2], ids[0]], "sorted by distance, corner dropped");
        for item in &result.items {
            assert!(item.distance_km <= 100.0, "{}", item.distance_km);
        }
    }

    #[test]
    fn box_count_metadata_overstates_circle_total() {
        // Deliberate compatibility behavior: totalItems counts the bounding
        // box, so corner candidates inflate it even though they are never
        // returned.
        let (store, _) = seeded(&[(0.5, 0.0), (0.85, 0.85), (0.85, -0.85)]);
        let search = ProximitySearch::new(&store);
        let result = search
            .search(GeoPoint::new(0.0, 0.0), 100.0, PageRequest::new(1, 10))
            .unwrap();

        assert_eq!(result.items.len(), 1);
        assert_eq!(result.page_info.total_items, 3);
        assert_eq!(result.page_info.total_pages, 1);
    }

    #[test]
    fn page_of_corner_candidates_collapses_to_zero_metadata() {
        // Candidates exist in the box but none survive the circle filter:
        // the page reports the all-zero shape, not the box count.
        let (store, _) = seeded(&[(0.85, 0.85), (0.85, -0.85)]);
        let search = ProximitySearch::new(&store);
        let result = search
            .search(GeoPoint::new(0.0, 0.0), 100.0, PageRequest::new(1, 10))
            .unwrap();

        assert!(result.items.is_empty());
        assert_eq!(result.page_info.total_items, 0);
        assert_eq!(result.page_info.total_pages, 0);
        assert!(!result.page_info.has_next);
        assert!(!result.page_info.has_previous);
    }

    #[test]
    fn no_candidates_returns_empty_zeroed_page() {
        let (store, _) = seeded(&[(50.0, 50.0)]);
        let search = ProximitySearch::new(&store);
        let result = search
            .search(GeoPoint::new(-50.0, -50.0), 10.0, PageRequest::new(1, 10))
            .unwrap();

        assert!(result.items.is_empty());
        assert_eq!(result.page_info.total_items, 0);
        assert_eq!(result.page_info.total_pages, 0);
        assert!(!result.page_info.has_next);
        assert!(!result.page_info.has_previous);
    }

    #[test]
    fn zero_radius_matches_only_the_exact_point() {
        let (store, ids) = seeded(&[(12.0, 34.0), (12.0, 34.001)]);
        let search = ProximitySearch::new(&store);
        let result = search
            .search(GeoPoint::new(12.0, 34.0), 0.0, PageRequest::new(1, 10))
            .unwrap();

        let returned: Vec<_> = result.items.iter().map(|n| n.person.id).collect();
        assert_eq!(returned, [ids[0]]);
        assert_eq!(result.items[0].distance_km, 0.0);
    }

    #[test]
    fn equidistant_hits_tie_break_by_id() {
        // Mirror points east and west of the center: identical distances.
        let (store, ids) = seeded(&[(0.0, 0.3), (0.0, -0.3)]);
        let search = ProximitySearch::new(&store);
        let result = search
            .search(GeoPoint::new(0.0, 0.0), 50.0, PageRequest::new(1, 10))
            .unwrap();

        let returned: Vec<_> = result.items.iter().map(|n| n.person.id).collect();
        assert_eq!(returned, ids, "equal distances fall back to id order");
    }
}

#[cfg(test)]
mod pagination {
    use pf_core::{GeoPoint, PageRequest};

    use super::helpers::seeded;
    use crate::ProximitySearch;

    /// Five persons east of the origin, ids ascending with distance.
    fn eastward() -> (pf_store::MemoryStore, Vec<pf_core::PersonId>) {
        seeded(&[
            (0.0, 0.01),
            (0.0, 0.02),
            (0.0, 0.03),
            (0.0, 0.04),
            (0.0, 0.05),
        ])
    }

    #[test]
    fn flags_track_position() {
        let (store, _) = eastward();
        let search = ProximitySearch::new(&store);
        let center = GeoPoint::new(0.0, 0.0);

        let first = search.search(center, 200.0, PageRequest::new(1, 2)).unwrap();
        assert_eq!(first.page_info.total_items, 5);
        assert_eq!(first.page_info.total_pages, 3);
        assert!(first.page_info.has_next);
        assert!(!first.page_info.has_previous);

        let last = search.search(center, 200.0, PageRequest::new(3, 2)).unwrap();
        assert_eq!(last.items.len(), 1);
        assert!(!last.page_info.has_next);
        assert!(last.page_info.has_previous);
    }

    #[test]
    fn concatenated_pages_ascend_without_gaps_or_duplicates() {
        let (store, ids) = eastward();
        let search = ProximitySearch::new(&store);
        let center = GeoPoint::new(0.0, 0.0);

        let mut seen_ids = Vec::new();
        let mut distances = Vec::new();
        for page in 1..=3 {
            let result = search
                .search(center, 200.0, PageRequest::new(page, 2))
                .unwrap();
            seen_ids.extend(result.items.iter().map(|n| n.person.id));
            distances.extend(result.items.iter().map(|n| n.distance_km));
        }

        assert_eq!(seen_ids, ids, "no omissions, no duplicates");
        assert!(
            distances.windows(2).all(|w| w[0] < w[1]),
            "strictly ascending: {distances:?}"
        );
    }

    #[test]
    fn page_past_the_end_is_empty_and_zeroed() {
        let (store, _) = eastward();
        let search = ProximitySearch::new(&store);
        let result = search
            .search(GeoPoint::new(0.0, 0.0), 200.0, PageRequest::new(9, 2))
            .unwrap();

        assert!(result.items.is_empty());
        assert_eq!(result.page_info.total_items, 0);
        assert!(!result.page_info.has_next);
    }
}

#[cfg(test)]
mod end_to_end {
    use pf_core::{GeoPoint, PageRequest};

    use super::helpers::seeded;
    use crate::ProximitySearch;

    // Two people ~2 m apart on Auckland's North Shore plus one ~2.6 km away.
    const HERE:    (f64, f64) = (-36.717287, 174.735808);
    const NEXT_TO: (f64, f64) = (-36.717300, 174.735800);
    const ACROSS:  (f64, f64) = (-36.727899, 174.710234);

    #[test]
    fn two_km_radius_returns_the_close_pair_in_order() {
        let (store, ids) = seeded(&[HERE, NEXT_TO, ACROSS]);
        let search = ProximitySearch::new(&store);
        let result = search
            .search(GeoPoint::new(HERE.0, HERE.1), 2.0, PageRequest::new(1, 10))
            .unwrap();

        let returned: Vec<_> = result.items.iter().map(|n| n.person.id).collect();
        assert_eq!(returned, [ids[0], ids[1]]);
        assert_eq!(result.items[0].distance_km, 0.0);
        let second = result.items[1].distance_km;
        assert!(second > 0.0 && second < 0.01, "~2 m apart, got {second} km");
    }

    #[test]
    fn widening_the_radius_brings_in_the_third() {
        let (store, ids) = seeded(&[HERE, NEXT_TO, ACROSS]);
        let search = ProximitySearch::new(&store);
        let result = search
            .search(GeoPoint::new(HERE.0, HERE.1), 2.8, PageRequest::new(1, 10))
            .unwrap();

        let returned: Vec<_> = result.items.iter().map(|n| n.person.id).collect();
        assert_eq!(returned, [ids[0], ids[1], ids[2]]);

        let across = result.items[2].distance_km;
        assert!((2.4..2.8).contains(&across), "~2.6 km away, got {across} km");
        assert!(
            result.items.windows(2).all(|w| w[0].distance_km <= w[1].distance_km),
            "distance-ascending"
        );
    }
}

#[cfg(test)]
mod store_failures {
    use pf_core::{BoundingBox, GeoPoint, LocatedPerson, PageRequest, PersonId};
    use pf_store::{LocationStore, StoreError, StoreResult};

    use crate::{FinderError, ProximitySearch};

    /// A store whose queries always fail, standing in for an unreachable
    /// backend.
    struct DownStore;

    impl LocationStore for DownStore {
        fn upsert_location(&self, _: PersonId, _: GeoPoint) -> StoreResult<()> {
            Err(StoreError::Unavailable("backend down".into()))
        }
        fn location_of(&self, _: PersonId) -> StoreResult<Option<GeoPoint>> {
            Err(StoreError::Unavailable("backend down".into()))
        }
        fn count_in_box(&self, _: &BoundingBox) -> StoreResult<u64> {
            Err(StoreError::Unavailable("backend down".into()))
        }
        fn page_in_box(&self, _: &BoundingBox, _: u32, _: u64) -> StoreResult<Vec<LocatedPerson>> {
            Err(StoreError::Unavailable("backend down".into()))
        }
    }

    #[test]
    fn store_errors_propagate_unmodified() {
        let search = ProximitySearch::new(&DownStore);
        let err = search
            .search(GeoPoint::new(0.0, 0.0), 10.0, PageRequest::new(1, 10))
            .unwrap_err();
        assert!(matches!(
            err,
            FinderError::Store(StoreError::Unavailable(_))
        ));
    }

    #[test]
    fn invalid_input_short_circuits_before_the_store() {
        // DownStore would error on any call; an invalid radius must never
        // reach it.
        let search = ProximitySearch::new(&DownStore);
        let err = search
            .search(GeoPoint::new(0.0, 0.0), -1.0, PageRequest::new(1, 10))
            .unwrap_err();
        assert!(matches!(err, FinderError::InvalidInput(_)));
    }
}
