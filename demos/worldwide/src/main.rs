//! worldwide — randomized proximity searches over the SQLite backend.
//!
//! Seeds a few hundred people (deterministic RNG): most scattered across
//! the globe, a cluster around each anchor city.  Then runs a paginated
//! 500 km search from each anchor and prints how the box pre-filter and
//! the exact circle filter disagree.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use pf_core::{GeoPoint, PageRequest};
use pf_search::{LocationWriter, PersonRegistry, ProximitySearch};
use pf_store::SqliteStore;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:            u64   = 42;
const SCATTER_COUNT:   usize = 300;  // uniform worldwide
const CLUSTER_COUNT:   usize = 50;   // per anchor city
const CLUSTER_SPREAD:  f64   = 2.0;  // degrees around the anchor
const RADIUS_KM:       f64   = 500.0;
const PAGE_SIZE:       u32   = 10;

const CITIES: [(&str, f64, f64); 3] = [
    ("Auckland", -36.8485, 174.7633),
    ("New York",  40.7128, -74.0060),
    ("London",    51.5074,  -0.1278),
];

const FIRST_NAMES: [&str; 8] =
    ["Alice", "Bob", "Charlie", "Diana", "Eve", "Frank", "Grace", "Henry"];
const LAST_NAMES: [&str; 8] =
    ["Smith", "Johnson", "Williams", "Brown", "Garcia", "Miller", "Davis", "Wilson"];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // 1. Fresh database under output/.
    std::fs::create_dir_all("output/worldwide")?;
    let db_path = Path::new("output/worldwide/finder.db");
    let _ = std::fs::remove_file(db_path);
    let store = SqliteStore::open(db_path)?;

    let registry = PersonRegistry::new(&store);
    let writer = LocationWriter::new(&store);
    let search = ProximitySearch::new(&store);

    // 2. Seed: uniform scatter plus a cluster near each anchor.
    let mut rng = SmallRng::seed_from_u64(SEED);
    let t0 = Instant::now();
    let mut seeded = 0usize;

    for i in 0..SCATTER_COUNT {
        let person = registry.create(&pick_name(&mut rng, i))?;
        let point = GeoPoint::new(rng.gen_range(-90.0..90.0), rng.gen_range(-180.0..180.0));
        writer.set_location(person.id, point)?;
        seeded += 1;
    }
    for (city, lat, lon) in CITIES {
        for i in 0..CLUSTER_COUNT {
            let person = registry.create(&format!("{} of {city}", pick_name(&mut rng, i)))?;
            let point = GeoPoint::new(
                (lat + rng.gen_range(-CLUSTER_SPREAD..CLUSTER_SPREAD)).clamp(-90.0, 90.0),
                lon + rng.gen_range(-CLUSTER_SPREAD..CLUSTER_SPREAD),
            );
            writer.set_location(person.id, point)?;
            seeded += 1;
        }
    }
    println!(
        "Seeded {seeded} people in {:.3} s ({})\n",
        t0.elapsed().as_secs_f64(),
        db_path.display()
    );

    // 3. Paginated search from each anchor.
    for (city, lat, lon) in CITIES {
        let center = GeoPoint::new(lat, lon);
        let mut in_radius = 0usize;
        let mut box_total = 0u64;
        let mut page = 1;
        loop {
            let result = search.search(center, RADIUS_KM, PageRequest::new(page, PAGE_SIZE))?;
            in_radius += result.items.len();
            box_total = box_total.max(result.page_info.total_items);
            if !result.page_info.has_next {
                break;
            }
            page += 1;
        }
        println!(
            "{city:<9} within {RADIUS_KM} km: {in_radius} people \
             ({box_total} box candidates across {page} page(s))"
        );
    }

    Ok(())
}

fn pick_name(rng: &mut SmallRng, index: usize) -> String {
    let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
    let last = LAST_NAMES[index % LAST_NAMES.len()];
    format!("{first} {last}")
}
