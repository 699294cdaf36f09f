//! Health check handlers for liveness and readiness probes.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{AppState, CollectionCounts};

/// Health status response for liveness and readiness probes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Always "ok"; the service has no external dependency that can degrade.
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,

    /// Collection sizes, reported by the readiness probe only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collections: Option<CollectionCounts>,
}

impl HealthStatus {
    pub fn alive(service: &str, version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            timestamp: Utc::now(),
            collections: None,
        }
    }

    pub fn ready(service: &str, version: &str, counts: CollectionCounts) -> Self {
        Self {
            collections: Some(counts),
            ..Self::alive(service, version)
        }
    }
}

/// Liveness probe handler.
///
/// ```text
/// GET /health/live
/// {"status":"ok","service":"reliefmap-service-shared","version":"0.1.0","timestamp":"..."}
/// ```
pub async fn health_live() -> impl IntoResponse {
    let status = HealthStatus::alive(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    (StatusCode::OK, Json(status))
}

/// Readiness probe handler.
///
/// Collections live in memory, so the service is ready as soon as it can
/// read them. An empty store is still ready.
pub async fn health_ready(State(state): State<AppState>) -> impl IntoResponse {
    let counts = state.counts().await;
    let status = HealthStatus::ready(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"), counts);
    (StatusCode::OK, Json(status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status_alive() {
        let status = HealthStatus::alive("reliefmap", "1.0.0");
        assert_eq!(status.status, "ok");
        assert_eq!(status.version, "1.0.0");
        assert!(status.collections.is_none());
    }

    #[test]
    fn test_health_status_serialization() {
        let json = serde_json::to_string(&HealthStatus::alive("reliefmap", "0.1.0")).unwrap();
        assert!(json.contains("\"status\":\"ok\""));
        assert!(json.contains("\"timestamp\""));
        assert!(!json.contains("collections"));
    }

    #[tokio::test]
    async fn test_health_ready_reports_counts() {
        let state = AppState::seeded();
        let status = HealthStatus::ready("reliefmap", "0.1.0", state.counts().await);
        let counts = status.collections.unwrap();
        assert_eq!(counts.resources, 5);
        assert_eq!(counts.alerts, 2);
    }
}
