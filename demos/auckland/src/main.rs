//! auckland — end-to-end walkthrough of the proximity search on a handful
//! of people around Auckland's North Shore.
//!
//! Two people stand ~2 m apart on the Devonport waterfront, one is ~2.6 km
//! away across Ngataringa Bay, and two more are up the coast and over the
//! harbour in the CBD.  A 2 km search catches the close pair, 2.8 km pulls
//! in the third, and a 20 km search pages across everyone.

use anyhow::Result;

use pf_core::{GeoPoint, PageRequest};
use pf_search::{LocationWriter, PersonRegistry, ProximitySearch, SearchPage};
use pf_store::MemoryStore;

// ── Cast ──────────────────────────────────────────────────────────────────────

const QUERY_POINT: GeoPoint = GeoPoint { lat: -36.717287, lon: 174.735808 };

const PEOPLE: [(&str, f64, f64); 5] = [
    ("Tama Ngata",  -36.717287, 174.735808), // Devonport waterfront
    ("Ruth Park",   -36.717300, 174.735800), // two metres away
    ("Alice Chen",  -36.727899, 174.710234), // across Ngataringa Bay
    ("Hemi Walker", -36.788000, 174.772000), // Takapuna Beach
    ("Sofia Rossi", -36.848500, 174.763300), // Auckland CBD
];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let store = MemoryStore::new();
    let registry = PersonRegistry::new(&store);
    let writer = LocationWriter::new(&store);
    let search = ProximitySearch::new(&store);

    // 1. Register everyone and pin their current locations.
    for (name, lat, lon) in PEOPLE {
        let person = registry.create(name)?;
        writer.set_location(person.id, GeoPoint::new(lat, lon))?;
    }
    println!("Registered {} people around the Waitematā\n", PEOPLE.len());

    // 2. Tight radius: only the waterfront pair.
    let close = search.search(QUERY_POINT, 2.0, PageRequest::new(1, 10))?;
    print_page("Within 2 km of the waterfront", &close);

    // 3. Nudge the radius out and the bay is no longer a moat.
    let wider = search.search(QUERY_POINT, 2.8, PageRequest::new(1, 10))?;
    print_page("Within 2.8 km", &wider);

    // 4. 20 km spans the harbour — page through it two at a time.
    let mut page = 1;
    loop {
        let result = search.search(QUERY_POINT, 20.0, PageRequest::new(page, 2))?;
        print_page(&format!("Within 20 km, page {page}"), &result);
        if !result.page_info.has_next {
            break;
        }
        page += 1;
    }

    // 5. The same page, as the JSON a caller would ship over the wire.
    println!("2 km page as JSON:");
    println!("{}", serde_json::to_string_pretty(&close)?);

    Ok(())
}

fn print_page(title: &str, page: &SearchPage) {
    println!("{title}");
    println!("  {:<14} {:>12}", "Name", "Distance km");
    println!("  {}", "-".repeat(27));
    for neighbor in &page.items {
        println!(
            "  {:<14} {:>12.3}",
            neighbor.person.name, neighbor.distance_km
        );
    }
    let info = page.page_info;
    println!(
        "  page {}/{} · {} candidate(s) in box · has_next: {}\n",
        info.page, info.total_pages, info.total_items, info.has_next
    );
}
