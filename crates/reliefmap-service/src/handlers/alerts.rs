use axum::extract::State;
use tracing::info;

use reliefmap_lib::{EmergencyAlert, NewAlert};
use reliefmap_service_shared::{ApiJson, AppState, Created, Envelope, record_submission};

use super::MSG_ALERT_CREATED;

/// Handle `GET /api/alerts`. Inactive alerts are omitted.
pub async fn list_alerts(State(state): State<AppState>) -> Envelope<Vec<EmergencyAlert>> {
    Envelope::data(state.alerts().read().await.active())
}

/// Handle `POST /api/alerts`.
pub async fn create_alert(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<NewAlert>,
) -> Created<EmergencyAlert> {
    let alert = state.alerts().write().await.create(input);

    record_submission("alert");
    info!(
        alert_id = alert.id,
        severity = ?alert.severity,
        areas = alert.affected_areas.len(),
        "alert created"
    );

    Created(Envelope::data(alert).with_message(MSG_ALERT_CREATED))
}
