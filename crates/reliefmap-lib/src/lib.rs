//! ReliefMap library entry points.
//!
//! This crate holds the in-memory registry of relief resources, the
//! haversine-based nearby search, and the append-only alert, report and
//! volunteer collections. The HTTP service crates only translate requests
//! into calls on the types exported here.

#![deny(warnings)]

pub mod alert;
pub mod error;
pub mod geo;
pub mod ids;
pub mod input;
pub mod log;
pub mod nearby;
pub mod report;
pub mod resource;
pub mod seed;
pub mod store;
pub mod volunteer;

pub use alert::{AlertLog, EmergencyAlert, NewAlert};
pub use error::{Error, Result};
pub use geo::{haversine_km, GeoPoint, EARTH_RADIUS_KM};
pub use ids::{IdGenerator, RecordId};
pub use input::NumberInput;
pub use log::AppendLog;
pub use nearby::{find_nearby, NearbyQuery, NearbyResource, DEFAULT_RADIUS_KM};
pub use report::{NewReport, Report, ReportLog};
pub use resource::{NewResource, Resource, ResourceKind, ResourceUpdate};
pub use seed::{seed_alerts, seed_resources};
pub use store::{ResourcePage, ResourceQuery, ResourceStats, ResourceStore, DEFAULT_LIST_LIMIT};
pub use volunteer::{NewVolunteer, VolunteerLog, VolunteerRequest};
