use std::sync::Arc;

use chrono::Utc;
use reliefmap_lib::{
    seed_resources, Error, GeoPoint, IdGenerator, NearbyQuery, NewResource, ResourceQuery,
    ResourceStore, ResourceUpdate, Result,
};
use serde_json::json;

fn seeded_store() -> ResourceStore {
    ResourceStore::with_resources(Arc::new(IdGenerator::new()), seed_resources(Utc::now()))
}

fn camp(lat: f64, lng: f64) -> NewResource {
    serde_json::from_value(json!({
        "name": "Field Camp",
        "lat": lat,
        "lng": lng,
        "type": "shelter",
        "contact": "+91-00-0000000000",
        "capacity": 120,
    }))
    .expect("valid create payload")
}

#[test]
fn search_mumbai_finds_only_the_flood_relief_center() {
    let store = seeded_store();
    let page = store.list(&ResourceQuery {
        search: Some("mumbai".to_string()),
        ..Default::default()
    });

    assert_eq!(page.total, 1);
    assert_eq!(page.resources[0].name, "Mumbai Flood Relief Center");
}

#[test]
fn nearby_mumbai_excludes_other_cities() {
    let store = seeded_store();
    let query = NearbyQuery::new(GeoPoint::new(19.0760, 72.8777)).with_radius(1.0);
    let hits = store.nearby(&query);

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].resource.name, "Mumbai Flood Relief Center");
    assert!(hits[0].distance < 1e-6);
}

#[test]
fn nearby_over_whole_country_is_sorted() {
    let store = seeded_store();
    let query = NearbyQuery::new(GeoPoint::new(19.0760, 72.8777)).with_radius(5_000.0);
    let hits = store.nearby(&query);

    assert_eq!(hits.len(), 5);
    assert!(hits.windows(2).all(|w| w[0].distance <= w[1].distance));
    assert_eq!(hits[0].resource.name, "Mumbai Flood Relief Center");
    for far in &hits[1..] {
        assert!(far.distance > 800.0, "{} too close", far.resource.name);
    }
}

#[test]
fn nearby_type_filter() {
    let store = seeded_store();
    let query = NearbyQuery::new(GeoPoint::new(19.0760, 72.8777))
        .with_radius(5_000.0)
        .with_kind("shelter");
    let names: Vec<String> = store
        .nearby(&query)
        .into_iter()
        .map(|h| h.resource.name)
        .collect();

    assert_eq!(
        names,
        vec![
            "Bangalore Disaster Response Center".to_string(),
            "Delhi Emergency Shelter Complex".to_string(),
        ]
    );
}

#[test]
fn stats_track_store_size_and_capacity() -> Result<()> {
    let mut store = seeded_store();

    let stats = store.stats();
    assert_eq!(stats.total_resources, 5);
    assert_eq!(stats.total_capacity, 3_000);
    assert_eq!((stats.shelter, stats.food, stats.medical), (2, 2, 1));

    let created = store.create(camp(26.9, 75.8))?;
    store.delete(1)?;

    let stats = store.stats();
    assert_eq!(stats.total_resources, store.len());
    assert_eq!(
        stats.total_capacity,
        store.iter().map(|r| r.capacity).sum::<u64>()
    );
    assert_eq!(stats.total_capacity, 3_000 - 500 + created.capacity);
    Ok(())
}

#[test]
fn created_ids_never_collide_with_seed_ids() -> Result<()> {
    let mut store = seeded_store();
    let created = store.create(camp(10.0, 10.0))?;
    assert!(store.iter().filter(|r| r.id == created.id).count() == 1);
    assert!(created.id > 5);
    Ok(())
}

#[test]
fn rejected_create_does_not_mutate() {
    let mut store = seeded_store();
    assert_eq!(store.create(camp(95.0, 10.0)), Err(Error::InvalidCoordinates));
    assert_eq!(store.len(), 5);
}

#[test]
fn update_never_touches_date_added() -> Result<()> {
    let mut store = seeded_store();
    let before = store.get(2)?.clone();

    let update: ResourceUpdate = serde_json::from_value(json!({
        "id": 77,
        "dateAdded": "2001-01-01T00:00:00Z",
        "capacity": "900",
    }))
    .expect("valid update payload");
    let after = store.update(2, update)?;

    assert_eq!(after.id, 2);
    assert_eq!(after.date_added, before.date_added);
    assert!(after.last_updated >= before.last_updated);
    assert_eq!(after.capacity, 900);
    Ok(())
}

#[test]
fn stats_capacity_saturates_instead_of_overflowing() -> Result<()> {
    let mut store = seeded_store();
    for name in ["Stadium Annex", "Port Warehouse"] {
        let input: NewResource = serde_json::from_value(json!({
            "name": name,
            "lat": 20.0,
            "lng": 78.0,
            "type": "shelter",
            "contact": "+91-00-0000000000",
            "capacity": u64::MAX,
        }))
        .expect("valid create payload");
        assert_eq!(store.create(input)?.capacity, u64::MAX);
    }

    let stats = store.stats();
    assert_eq!(stats.total_capacity, u64::MAX);
    assert_eq!(stats.total_resources, 7);
    assert_eq!(stats.shelter, 4);
    Ok(())
}
