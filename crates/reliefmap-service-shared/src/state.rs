//! Application state for the HTTP service.
//!
//! Each collection sits behind its own `RwLock`. A handler takes exactly one
//! lock for the whole of its read or read-modify-write, so every operation is
//! atomic with respect to its collection and no two locks are ever nested.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use reliefmap_lib::{
    seed_alerts, seed_resources, AlertLog, IdGenerator, ReportLog, ResourceStore, VolunteerLog,
};

/// Shared application state for all axum handlers.
///
/// This struct is cheaply cloneable (using `Arc` internally) and should be
/// shared via axum's `State` extractor.
///
/// # Example
///
/// ```ignore
/// use axum::{Router, routing::get, extract::State};
/// use reliefmap_service_shared::AppState;
///
/// async fn handler(State(state): State<AppState>) {
///     let resources = state.resources().read().await;
///     // ... use resources
/// }
///
/// let app = Router::new()
///     .route("/api/resources", get(handler))
///     .with_state(AppState::seeded());
/// ```
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    ids: Arc<IdGenerator>,
    resources: RwLock<ResourceStore>,
    alerts: RwLock<AlertLog>,
    reports: RwLock<ReportLog>,
    volunteers: RwLock<VolunteerLog>,
}

impl AppState {
    /// State with every collection empty.
    pub fn empty() -> Self {
        let ids = Arc::new(IdGenerator::new());
        Self::from_components(
            Arc::clone(&ids),
            ResourceStore::new(Arc::clone(&ids)),
            AlertLog::new(ids),
        )
    }

    /// State loaded with the reference resources and alerts.
    pub fn seeded() -> Self {
        let ids = Arc::new(IdGenerator::new());
        let now = Utc::now();

        let resources = ResourceStore::with_resources(Arc::clone(&ids), seed_resources(now));
        let alerts = AlertLog::with_entries(Arc::clone(&ids), seed_alerts(now));
        tracing::info!(
            resources = resources.len(),
            alerts = alerts.len(),
            "seed data loaded"
        );

        Self::from_components(ids, resources, alerts)
    }

    /// Seeded or empty, depending on `seed`.
    pub fn load(seed: bool) -> Self {
        if seed {
            Self::seeded()
        } else {
            Self::empty()
        }
    }

    /// Create application state from pre-built collections.
    ///
    /// `resources` and `alerts` must draw ids from `ids`.
    pub fn from_components(ids: Arc<IdGenerator>, resources: ResourceStore, alerts: AlertLog) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                reports: RwLock::new(ReportLog::new(Arc::clone(&ids))),
                volunteers: RwLock::new(VolunteerLog::new(Arc::clone(&ids))),
                resources: RwLock::new(resources),
                alerts: RwLock::new(alerts),
                ids,
            }),
        }
    }

    pub fn resources(&self) -> &RwLock<ResourceStore> {
        &self.inner.resources
    }

    pub fn alerts(&self) -> &RwLock<AlertLog> {
        &self.inner.alerts
    }

    pub fn reports(&self) -> &RwLock<ReportLog> {
        &self.inner.reports
    }

    pub fn volunteers(&self) -> &RwLock<VolunteerLog> {
        &self.inner.volunteers
    }

    /// The id source shared by every collection.
    pub fn ids(&self) -> &IdGenerator {
        &self.inner.ids
    }

    /// Current size of each collection, taking one lock at a time.
    pub async fn counts(&self) -> CollectionCounts {
        CollectionCounts {
            resources: self.inner.resources.read().await.len(),
            alerts: self.inner.alerts.read().await.len(),
            reports: self.inner.reports.read().await.len(),
            volunteers: self.inner.volunteers.read().await.len(),
        }
    }
}

/// Snapshot of collection sizes, used by readiness reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CollectionCounts {
    pub resources: usize,
    pub alerts: usize,
    pub reports: usize,
    pub volunteers: usize,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("last_id", &self.inner.ids.last_id())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use reliefmap_lib::{NewAlert, NewReport, NewVolunteer};

    use super::*;

    #[tokio::test]
    async fn test_seeded_state_counts() {
        let state = AppState::seeded();
        let counts = state.counts().await;
        assert_eq!(counts.resources, 5);
        assert_eq!(counts.alerts, 2);
        assert_eq!(counts.reports, 0);
        assert_eq!(counts.volunteers, 0);
    }

    #[tokio::test]
    async fn test_empty_state() {
        let state = AppState::load(false);
        assert_eq!(state.counts().await, CollectionCounts::default());
    }

    #[tokio::test]
    async fn test_clones_share_collections() {
        let state1 = AppState::empty();
        let state2 = state1.clone();

        state1.alerts().write().await.create(NewAlert::default());
        assert_eq!(state2.alerts().read().await.len(), 1);
    }

    #[tokio::test]
    async fn test_ids_unique_across_collections() {
        let state = AppState::seeded();
        let alert = state.alerts().write().await.create(NewAlert::default());
        let report = state
            .reports()
            .write()
            .await
            .create(NewReport::default())
            .unwrap();
        let volunteer = state.volunteers().write().await.create(NewVolunteer::default());

        assert!(alert.id > 5);
        assert!(report.id > alert.id);
        assert!(volunteer.id > report.id);
    }

    #[test]
    fn test_app_state_debug() {
        let state = AppState::empty();
        let debug = format!("{:?}", state);
        assert!(debug.contains("AppState"));
        assert!(debug.contains("last_id"));
    }
}
