//! Incident reports filed against resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ids::RecordId;
use crate::input::{coerce_count, NumberInput};
use crate::log::{AppendLog, Identified};

/// Default status of a freshly filed report or sign-up.
pub const PENDING_STATUS: &str = "pending";

/// A problem reported about a resource (closed, overcrowded, wrong info...).
///
/// `resource_id` is not checked against the resource store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: RecordId,
    pub resource_id: Option<RecordId>,
    pub issue: Option<String>,
    pub description: Option<String>,
    pub reporter_contact: Option<String>,
    pub status: String,
    pub date_reported: DateTime<Utc>,
}

impl Identified for Report {
    fn id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReport {
    pub resource_id: Option<NumberInput>,
    pub issue: Option<String>,
    pub description: Option<String>,
    pub reporter_contact: Option<String>,
}

pub type ReportLog = AppendLog<Report>;

impl AppendLog<Report> {
    /// File a report. Fails only if `resourceId` is not an integer.
    pub fn create(&mut self, input: NewReport) -> Result<Report> {
        let resource_id = coerce_count(input.resource_id.as_ref(), "resourceId")?;

        let report = Report {
            id: self.ids.next_id(),
            resource_id,
            issue: input.issue,
            description: input.description,
            reporter_contact: input.reporter_contact,
            status: PENDING_STATUS.to_string(),
            date_reported: Utc::now(),
        };
        self.push(report.clone());
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::error::Error;
    use crate::ids::IdGenerator;

    #[test]
    fn report_defaults_to_pending() {
        let mut log = ReportLog::new(Arc::new(IdGenerator::new()));
        let report = log
            .create(NewReport {
                resource_id: Some("3".into()),
                issue: Some("closed".into()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(report.status, PENDING_STATUS);
        assert_eq!(report.resource_id, Some(3));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn unknown_resource_ids_are_accepted() {
        let mut log = ReportLog::new(Arc::new(IdGenerator::new()));
        let report = log
            .create(NewReport {
                resource_id: Some(999_999u64.into()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(report.resource_id, Some(999_999));
    }

    #[test]
    fn non_numeric_resource_id_is_rejected() {
        let mut log = ReportLog::new(Arc::new(IdGenerator::new()));
        let err = log
            .create(NewReport {
                resource_id: Some("abc".into()),
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(err, Error::InvalidNumber { field: "resourceId" });
        assert!(log.is_empty());
    }
}
