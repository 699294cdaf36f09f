//! Emergency alerts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::RecordId;
use crate::log::{AppendLog, Identified};

/// A broadcast warning about an ongoing or expected disaster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyAlert {
    pub id: RecordId,
    pub title: Option<String>,
    pub description: Option<String>,
    /// `low`, `medium` or `high` by convention; not enforced.
    pub severity: Option<String>,
    pub affected_areas: Vec<String>,
    pub date_created: DateTime<Utc>,
    pub is_active: bool,
}

impl Identified for EmergencyAlert {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// Fields accepted when raising an alert.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAlert {
    pub title: Option<String>,
    pub description: Option<String>,
    pub severity: Option<String>,
    pub affected_areas: Option<Vec<String>>,
}

pub type AlertLog = AppendLog<EmergencyAlert>;

impl AppendLog<EmergencyAlert> {
    /// Append a new, active alert.
    pub fn create(&mut self, input: NewAlert) -> EmergencyAlert {
        let alert = EmergencyAlert {
            id: self.ids.next_id(),
            title: input.title,
            description: input.description,
            severity: input.severity,
            affected_areas: input.affected_areas.unwrap_or_default(),
            date_created: Utc::now(),
            is_active: true,
        };
        self.push(alert.clone());
        alert
    }

    /// Alerts still in effect, in the order they were raised.
    pub fn active(&self) -> Vec<EmergencyAlert> {
        self.iter().filter(|a| a.is_active).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::ids::IdGenerator;

    #[test]
    fn new_alerts_are_active_with_defaults() {
        let mut log = AlertLog::new(Arc::new(IdGenerator::new()));
        let alert = log.create(NewAlert {
            title: Some("Heatwave".into()),
            severity: Some("high".into()),
            ..Default::default()
        });

        assert!(alert.is_active);
        assert!(alert.affected_areas.is_empty());
        assert_eq!(log.len(), 1);
        assert_eq!(log.get(alert.id), Some(&alert));
    }

    #[test]
    fn active_excludes_inactive_alerts() {
        let now = Utc::now();
        let closed = EmergencyAlert {
            id: 1,
            title: Some("Old".into()),
            description: None,
            severity: None,
            affected_areas: vec![],
            date_created: now,
            is_active: false,
        };
        let mut log = AlertLog::with_entries(Arc::new(IdGenerator::new()), vec![closed]);
        let open = log.create(NewAlert::default());

        let active = log.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, open.id);
    }

    #[test]
    fn alert_serializes_with_wire_names() {
        let mut log = AlertLog::new(Arc::new(IdGenerator::new()));
        let alert = log.create(NewAlert {
            affected_areas: Some(vec!["Pune".into()]),
            ..Default::default()
        });
        let value = serde_json::to_value(&alert).unwrap();
        assert_eq!(value["isActive"], true);
        assert_eq!(value["affectedAreas"][0], "Pune");
        assert!(value["title"].is_null());
        assert!(value.get("dateCreated").is_some());
    }
}
