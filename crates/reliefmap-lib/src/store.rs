//! In-memory resource store.
//!
//! Records are kept in insertion order. Every operation is a full scan,
//! which is the intended trade-off for a registry of this size.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::ids::{IdGenerator, RecordId};
use crate::nearby::{find_nearby, NearbyQuery, NearbyResource};
use crate::resource::{NewResource, Resource, ResourceKind, ResourceUpdate, DEFAULT_RESOURCE_STATUS};

/// Default page size for [`ResourceStore::list`].
pub const DEFAULT_LIST_LIMIT: usize = 50;

/// Filters for listing resources.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceQuery {
    /// Exact match on `type`. Empty strings are ignored.
    pub kind: Option<String>,
    /// Case-insensitive substring over name, description and address.
    pub search: Option<String>,
    /// Maximum number of records returned.
    pub limit: usize,
}

impl Default for ResourceQuery {
    fn default() -> Self {
        Self {
            kind: None,
            search: None,
            limit: DEFAULT_LIST_LIMIT,
        }
    }
}

/// One page of list results.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourcePage {
    /// At most `limit` matching resources, in store order.
    pub resources: Vec<Resource>,
    /// Number of matches before truncation.
    pub total: usize,
}

/// Aggregate counts over the whole store.
///
/// Only the three well-known kinds get a bucket; other kinds still count
/// toward the totals. `total_capacity` saturates at `u64::MAX`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceStats {
    pub shelter: usize,
    pub food: usize,
    pub medical: usize,
    pub total_capacity: u64,
    pub total_resources: usize,
}

/// Mutable collection of relief resources.
#[derive(Debug)]
pub struct ResourceStore {
    resources: Vec<Resource>,
    ids: Arc<IdGenerator>,
}

impl ResourceStore {
    /// Create an empty store drawing ids from `ids`.
    pub fn new(ids: Arc<IdGenerator>) -> Self {
        Self {
            resources: Vec::new(),
            ids,
        }
    }

    /// Create a store holding pre-built records (e.g. seed data).
    pub fn with_resources(ids: Arc<IdGenerator>, resources: Vec<Resource>) -> Self {
        for resource in &resources {
            ids.observe(resource.id);
        }
        Self { resources, ids }
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Iterate over all resources in store order.
    pub fn iter(&self) -> impl Iterator<Item = &Resource> {
        self.resources.iter()
    }

    /// Filter by kind, then by search text, then truncate to `limit`.
    pub fn list(&self, query: &ResourceQuery) -> ResourcePage {
        let kind = query.kind.as_deref().filter(|k| !k.is_empty());
        let needle = query
            .search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let matches: Vec<&Resource> = self
            .resources
            .iter()
            .filter(|r| kind.map_or(true, |k| r.kind == k))
            .filter(|r| needle.as_deref().map_or(true, |n| r.matches_search(n)))
            .collect();

        let total = matches.len();
        let resources = matches.into_iter().take(query.limit).cloned().collect();

        ResourcePage { resources, total }
    }

    pub fn get(&self, id: RecordId) -> Result<&Resource> {
        self.resources
            .iter()
            .find(|r| r.id == id)
            .ok_or(Error::ResourceNotFound { id })
    }

    /// Validate and insert a new resource, returning the stored record.
    pub fn create(&mut self, input: NewResource) -> Result<Resource> {
        self.create_at(input, Utc::now())
    }

    fn create_at(&mut self, input: NewResource, now: DateTime<Utc>) -> Result<Resource> {
        let valid = input.validate()?;

        let resource = Resource {
            id: self.ids.next_id(),
            name: valid.name,
            lat: valid.location.lat,
            lng: valid.location.lng,
            kind: valid.kind,
            contact: valid.contact,
            capacity: valid.capacity,
            description: valid.description,
            address: valid.address,
            operating_hours: valid.operating_hours,
            facilities: valid.facilities,
            status: DEFAULT_RESOURCE_STATUS.to_string(),
            date_added: now,
            last_updated: now,
        };

        debug!(id = resource.id, kind = %resource.kind, "resource created");
        self.resources.push(resource.clone());
        Ok(resource)
    }

    /// Merge `update` onto the resource with `id`.
    pub fn update(&mut self, id: RecordId, update: ResourceUpdate) -> Result<Resource> {
        let resource = self
            .resources
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(Error::ResourceNotFound { id })?;

        update.apply_to(resource, Utc::now())?;
        debug!(id, "resource updated");
        Ok(resource.clone())
    }

    /// Remove the resource with `id`, returning it.
    pub fn delete(&mut self, id: RecordId) -> Result<Resource> {
        let index = self
            .resources
            .iter()
            .position(|r| r.id == id)
            .ok_or(Error::ResourceNotFound { id })?;

        debug!(id, "resource deleted");
        Ok(self.resources.remove(index))
    }

    pub fn stats(&self) -> ResourceStats {
        self.resources
            .iter()
            .fold(ResourceStats::default(), |mut acc, r| {
                match r.kind.as_str() {
                    ResourceKind::SHELTER => acc.shelter += 1,
                    ResourceKind::FOOD => acc.food += 1,
                    ResourceKind::MEDICAL => acc.medical += 1,
                    _ => {}
                }
                acc.total_capacity = acc.total_capacity.saturating_add(r.capacity);
                acc.total_resources += 1;
                acc
            })
    }

    /// Resources within the query radius, nearest first.
    pub fn nearby(&self, query: &NearbyQuery) -> Vec<NearbyResource> {
        find_nearby(&self.resources, query)
    }
}
