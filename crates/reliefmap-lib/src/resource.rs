//! Relief resource records and the payloads used to create and modify them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geo::GeoPoint;
use crate::ids::RecordId;
use crate::input::{coerce_coordinate, coerce_count, NumberInput};

/// Well-known resource kinds. The `type` field itself stays open text.
pub struct ResourceKind;

impl ResourceKind {
    pub const SHELTER: &'static str = "shelter";
    pub const FOOD: &'static str = "food";
    pub const MEDICAL: &'static str = "medical";
}

/// Default `operatingHours` for new resources.
pub const DEFAULT_OPERATING_HOURS: &str = "24/7";

/// Default lifecycle status for new resources.
pub const DEFAULT_RESOURCE_STATUS: &str = "active";

/// A physical relief facility (shelter, food center, medical hub).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: RecordId,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub contact: String,
    pub capacity: u64,
    pub description: String,
    pub address: String,
    pub operating_hours: String,
    pub facilities: Vec<String>,
    pub status: String,
    pub date_added: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Resource {
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }

    /// Case-insensitive substring match against name, description and address.
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn matches_search(&self, needle: &str) -> bool {
        [&self.name, &self.description, &self.address]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Fields accepted when creating a resource.
///
/// Everything is optional at the type level so that missing fields can be
/// reported together instead of failing on the first absent key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewResource {
    pub name: Option<String>,
    pub lat: Option<NumberInput>,
    pub lng: Option<NumberInput>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub contact: Option<String>,
    pub capacity: Option<NumberInput>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub operating_hours: Option<String>,
    pub facilities: Option<Vec<String>>,
}

/// A create payload that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ValidatedResource {
    pub name: String,
    pub location: GeoPoint,
    pub kind: String,
    pub contact: String,
    pub capacity: u64,
    pub description: String,
    pub address: String,
    pub operating_hours: String,
    pub facilities: Vec<String>,
}

impl NewResource {
    /// Check required fields, then coordinate bounds, then numeric coercion.
    pub(crate) fn validate(self) -> Result<ValidatedResource> {
        let missing: Vec<&'static str> = [
            ("name", is_blank(self.name.as_deref())),
            ("lat", self.lat.is_none()),
            ("lng", self.lng.is_none()),
            ("type", is_blank(self.kind.as_deref())),
            ("contact", is_blank(self.contact.as_deref())),
            ("capacity", self.capacity.is_none()),
        ]
        .into_iter()
        .filter_map(|(field, absent)| absent.then_some(field))
        .collect();

        if !missing.is_empty() {
            return Err(Error::MissingRequiredFields { fields: missing });
        }

        let (Some(lat), Some(lng)) = (
            coerce_coordinate(self.lat.as_ref())?,
            coerce_coordinate(self.lng.as_ref())?,
        ) else {
            return Err(Error::InvalidCoordinates);
        };
        let location = GeoPoint::checked(lat, lng)?;
        let capacity = coerce_count(self.capacity.as_ref(), "capacity")?.unwrap_or_default();

        Ok(ValidatedResource {
            name: self.name.unwrap_or_default(),
            location,
            kind: self.kind.unwrap_or_default(),
            contact: self.contact.unwrap_or_default(),
            capacity,
            description: self.description.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            operating_hours: self
                .operating_hours
                .filter(|h| !h.is_empty())
                .unwrap_or_else(|| DEFAULT_OPERATING_HOURS.to_string()),
            facilities: self.facilities.unwrap_or_default(),
        })
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}

/// Partial update of the mutable resource fields.
///
/// `id` and `dateAdded` are deliberately absent: a caller supplying them has
/// them ignored during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceUpdate {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub contact: Option<String>,
    pub capacity: Option<NumberInput>,
    pub lat: Option<NumberInput>,
    pub lng: Option<NumberInput>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub operating_hours: Option<String>,
    pub facilities: Option<Vec<String>>,
    pub status: Option<String>,
}

impl ResourceUpdate {
    /// Merge onto `resource`. Numeric coercion happens before any field is
    /// written, so a failed update leaves the record untouched.
    pub(crate) fn apply_to(self, resource: &mut Resource, now: DateTime<Utc>) -> Result<()> {
        let lat = coerce_coordinate(self.lat.as_ref())?;
        let lng = coerce_coordinate(self.lng.as_ref())?;
        let capacity = coerce_count(self.capacity.as_ref(), "capacity")?;

        if let Some(name) = self.name {
            resource.name = name;
        }
        if let Some(kind) = self.kind {
            resource.kind = kind;
        }
        if let Some(contact) = self.contact {
            resource.contact = contact;
        }
        if let Some(capacity) = capacity {
            resource.capacity = capacity;
        }
        if let Some(lat) = lat {
            resource.lat = lat;
        }
        if let Some(lng) = lng {
            resource.lng = lng;
        }
        if let Some(description) = self.description {
            resource.description = description;
        }
        if let Some(address) = self.address {
            resource.address = address;
        }
        if let Some(hours) = self.operating_hours {
            resource.operating_hours = hours;
        }
        if let Some(facilities) = self.facilities {
            resource.facilities = facilities;
        }
        if let Some(status) = self.status {
            resource.status = status;
        }

        resource.last_updated = now.max(resource.last_updated);
        Ok(())
    }
}
