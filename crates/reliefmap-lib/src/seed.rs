//! Reference data loaded at service start.

use chrono::{DateTime, Utc};

use crate::alert::EmergencyAlert;
use crate::resource::{Resource, DEFAULT_RESOURCE_STATUS};

struct SeedResource {
    id: u64,
    name: &'static str,
    lat: f64,
    lng: f64,
    kind: &'static str,
    contact: &'static str,
    capacity: u64,
    description: &'static str,
    address: &'static str,
    operating_hours: &'static str,
    facilities: &'static [&'static str],
}

const RESOURCES: &[SeedResource] = &[
    SeedResource {
        id: 1,
        name: "Delhi Emergency Shelter Complex",
        lat: 28.6139,
        lng: 77.2090,
        kind: "shelter",
        contact: "+91-11-1234567890",
        capacity: 500,
        description: "Large emergency shelter with dormitories, medical facility, and kitchen",
        address: "Connaught Place, New Delhi",
        operating_hours: "24/7",
        facilities: &["Medical Aid", "Food", "Shelter", "Communication"],
    },
    SeedResource {
        id: 2,
        name: "Mumbai Flood Relief Center",
        lat: 19.0760,
        lng: 72.8777,
        kind: "food",
        contact: "+91-22-9988776655",
        capacity: 800,
        description: "24/7 food distribution center with fresh meals and emergency supplies",
        address: "Bandra West, Mumbai",
        operating_hours: "24/7",
        facilities: &["Food Distribution", "Water", "Emergency Supplies"],
    },
    SeedResource {
        id: 3,
        name: "Chennai Medical Emergency Hub",
        lat: 13.0827,
        lng: 80.2707,
        kind: "medical",
        contact: "+91-44-9876543210",
        capacity: 300,
        description: "Fully equipped medical center with trauma care and ambulance services",
        address: "T. Nagar, Chennai",
        operating_hours: "24/7",
        facilities: &["Emergency Care", "Trauma Unit", "Ambulance", "Pharmacy"],
    },
    SeedResource {
        id: 4,
        name: "Bangalore Disaster Response Center",
        lat: 12.9716,
        lng: 77.5946,
        kind: "shelter",
        contact: "+91-80-1111222233",
        capacity: 400,
        description: "Multi-purpose disaster response facility with coordination center",
        address: "Whitefield, Bangalore",
        operating_hours: "24/7",
        facilities: &["Shelter", "Coordination", "Communication", "Transportation"],
    },
    SeedResource {
        id: 5,
        name: "Kolkata Community Kitchen",
        lat: 22.5726,
        lng: 88.3639,
        kind: "food",
        contact: "+91-33-4444555566",
        capacity: 1000,
        description: "Large community kitchen serving traditional meals and special dietary needs",
        address: "Park Street, Kolkata",
        operating_hours: "6:00 AM - 10:00 PM",
        facilities: &["Hot Meals", "Special Diet", "Takeaway", "Delivery"],
    },
];

/// The five reference facilities, stamped with `now`.
pub fn seed_resources(now: DateTime<Utc>) -> Vec<Resource> {
    RESOURCES
        .iter()
        .map(|s| Resource {
            id: s.id,
            name: s.name.to_string(),
            lat: s.lat,
            lng: s.lng,
            kind: s.kind.to_string(),
            contact: s.contact.to_string(),
            capacity: s.capacity,
            description: s.description.to_string(),
            address: s.address.to_string(),
            operating_hours: s.operating_hours.to_string(),
            facilities: s.facilities.iter().map(|f| f.to_string()).collect(),
            status: DEFAULT_RESOURCE_STATUS.to_string(),
            date_added: now,
            last_updated: now,
        })
        .collect()
}

/// The two standing alerts, stamped with `now`.
pub fn seed_alerts(now: DateTime<Utc>) -> Vec<EmergencyAlert> {
    vec![
        EmergencyAlert {
            id: 1,
            title: Some("Cyclone Warning - Eastern Coast".to_string()),
            description: Some(
                "Severe cyclone expected to hit eastern coastal regions. All resources on high alert."
                    .to_string(),
            ),
            severity: Some("high".to_string()),
            affected_areas: vec!["Chennai".into(), "Kolkata".into(), "Bhubaneswar".into()],
            date_created: now,
            is_active: true,
        },
        EmergencyAlert {
            id: 2,
            title: Some("Flood Alert - Mumbai Region".to_string()),
            description: Some("Heavy rainfall expected. Flood relief centers activated.".to_string()),
            severity: Some("medium".to_string()),
            affected_areas: vec!["Mumbai".into(), "Pune".into(), "Nashik".into()],
            date_created: now,
            is_active: true,
        },
    ]
}
