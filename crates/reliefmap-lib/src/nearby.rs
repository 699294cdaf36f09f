//! Nearby resource search.
//!
//! Every resource is measured against the query point with the haversine
//! formula; there is no spatial index. At the scale this registry serves
//! (tens to low thousands of facilities) a linear scan is the whole story,
//! and callers should not assume any indexing.

use serde::{Deserialize, Serialize};

use crate::geo::{haversine_km, GeoPoint};
use crate::resource::Resource;

/// Default search radius in kilometres.
pub const DEFAULT_RADIUS_KM: f64 = 50.0;

/// Parameters for a radius search around a point.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyQuery {
    /// Centre of the search.
    pub origin: GeoPoint,
    /// Inclusive radius in kilometres.
    pub radius_km: f64,
    /// Optional exact match on the resource `type`.
    pub kind: Option<String>,
}

impl NearbyQuery {
    pub fn new(origin: GeoPoint) -> Self {
        Self {
            origin,
            radius_km: DEFAULT_RADIUS_KM,
            kind: None,
        }
    }

    pub fn with_radius(mut self, radius_km: f64) -> Self {
        self.radius_km = radius_km;
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }
}

/// A resource annotated with its distance from the query point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyResource {
    #[serde(flatten)]
    pub resource: Resource,
    /// Distance from the query origin in kilometres.
    pub distance: f64,
}

/// Return resources within `query.radius_km` of the origin, nearest first.
///
/// The sort is stable, so resources at equal distance keep the order in
/// which `resources` yielded them.
pub fn find_nearby<'a, I>(resources: I, query: &NearbyQuery) -> Vec<NearbyResource>
where
    I: IntoIterator<Item = &'a Resource>,
{
    let kind = query.kind.as_deref().filter(|k| !k.is_empty());

    let mut hits: Vec<NearbyResource> = resources
        .into_iter()
        .filter(|r| kind.map_or(true, |k| r.kind == k))
        .filter_map(|r| {
            let distance = haversine_km(query.origin, r.location());
            (distance <= query.radius_km).then(|| NearbyResource {
                resource: r.clone(),
                distance,
            })
        })
        .collect();

    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn resource(id: u64, kind: &str, lat: f64, lng: f64) -> Resource {
        let now = Utc::now();
        Resource {
            id,
            name: format!("r{id}"),
            lat,
            lng,
            kind: kind.to_string(),
            contact: String::new(),
            capacity: 0,
            description: String::new(),
            address: String::new(),
            operating_hours: "24/7".into(),
            facilities: vec![],
            status: "active".into(),
            date_added: now,
            last_updated: now,
        }
    }

    #[test]
    fn sorts_ascending_by_distance() {
        let resources = vec![
            resource(1, "food", 0.3, 0.0),
            resource(2, "food", 0.1, 0.0),
            resource(3, "food", 0.2, 0.0),
        ];
        let query = NearbyQuery::new(GeoPoint::new(0.0, 0.0));
        let ids: Vec<u64> = find_nearby(&resources, &query)
            .iter()
            .map(|n| n.resource.id)
            .collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn ties_keep_store_order() {
        let resources = vec![
            resource(10, "food", 0.0, 0.1),
            resource(11, "food", 0.1, 0.0),
            resource(12, "food", 0.0, -0.1),
        ];
        let query = NearbyQuery::new(GeoPoint::new(0.0, 0.0));
        let ids: Vec<u64> = find_nearby(&resources, &query)
            .iter()
            .map(|n| n.resource.id)
            .collect();
        assert_eq!(ids, vec![10, 11, 12]);
    }

    #[test]
    fn radius_is_inclusive_and_excludes_far_points() {
        let origin = GeoPoint::new(0.0, 0.0);
        let edge = resource(1, "food", 1.0, 0.0);
        let far = resource(2, "food", 5.0, 0.0);
        let edge_distance = haversine_km(origin, edge.location());

        let query = NearbyQuery::new(origin).with_radius(edge_distance);
        let hits = find_nearby([&edge, &far], &query);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].resource.id, 1);
    }

    #[test]
    fn filters_by_kind() {
        let resources = vec![
            resource(1, "food", 0.0, 0.0),
            resource(2, "medical", 0.0, 0.0),
        ];
        let query = NearbyQuery::new(GeoPoint::new(0.0, 0.0)).with_kind("medical");
        let hits = find_nearby(&resources, &query);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].resource.kind, "medical");
    }

    #[test]
    fn distance_is_flattened_into_resource_json() {
        let hit = NearbyResource {
            resource: resource(4, "shelter", 1.0, 1.0),
            distance: 12.5,
        };
        let value = serde_json::to_value(&hit).unwrap();
        assert_eq!(value["id"], 4);
        assert_eq!(value["distance"], 12.5);
        assert!(value.get("resource").is_none());
    }
}
