//! Volunteer sign-ups.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::RecordId;
use crate::log::{AppendLog, Identified};
use crate::report::PENDING_STATUS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerRequest {
    pub id: RecordId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub skills: Vec<String>,
    pub availability: Option<String>,
    pub location: Option<String>,
    pub status: String,
    pub date_registered: DateTime<Utc>,
}

impl Identified for VolunteerRequest {
    fn id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVolunteer {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub skills: Option<Vec<String>>,
    pub availability: Option<String>,
    pub location: Option<String>,
}

pub type VolunteerLog = AppendLog<VolunteerRequest>;

impl AppendLog<VolunteerRequest> {
    pub fn create(&mut self, input: NewVolunteer) -> VolunteerRequest {
        let volunteer = VolunteerRequest {
            id: self.ids.next_id(),
            name: input.name,
            email: input.email,
            phone: input.phone,
            skills: input.skills.unwrap_or_default(),
            availability: input.availability,
            location: input.location,
            status: PENDING_STATUS.to_string(),
            date_registered: Utc::now(),
        };
        self.push(volunteer.clone());
        volunteer
    }
}
