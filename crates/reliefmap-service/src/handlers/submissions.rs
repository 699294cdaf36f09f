//! Incident reports and volunteer sign-ups.
//!
//! Neither collection has a read endpoint; entries are kept for operators.

use axum::extract::State;
use tracing::info;

use reliefmap_lib::{NewReport, NewVolunteer, Report, VolunteerRequest};
use reliefmap_service_shared::{ApiError, ApiJson, AppState, Created, Envelope, record_submission};

use super::{MSG_REPORT_SUBMITTED, MSG_VOLUNTEER_SUBMITTED};

/// Handle `POST /api/reports`.
///
/// `resourceId` is not checked against the registry.
pub async fn create_report(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<NewReport>,
) -> Result<Created<Report>, ApiError> {
    let report = state.reports().write().await.create(input)?;

    record_submission("report");
    info!(
        report_id = report.id,
        resource_id = ?report.resource_id,
        "report submitted"
    );

    Ok(Created(
        Envelope::data(report).with_message(MSG_REPORT_SUBMITTED),
    ))
}

/// Handle `POST /api/volunteer`.
pub async fn create_volunteer(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<NewVolunteer>,
) -> Created<VolunteerRequest> {
    let volunteer = state.volunteers().write().await.create(input);

    record_submission("volunteer");
    info!(
        volunteer_id = volunteer.id,
        skills = volunteer.skills.len(),
        "volunteer registered"
    );

    Created(Envelope::data(volunteer).with_message(MSG_VOLUNTEER_SUBMITTED))
}
