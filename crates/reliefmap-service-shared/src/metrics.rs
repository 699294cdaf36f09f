//! Prometheus metrics for the ReliefMap service.
//!
//! - [`init_metrics`] installs the global recorder once at startup.
//! - [`metrics_handler`] renders the exposition text for `GET /metrics`.
//! - The `record_*` helpers count domain events. They are no-ops until a
//!   recorder is installed, so handlers call them unconditionally.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use reliefmap_lib::ResourceKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static PROMETHEUS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Configuration for the metrics system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    pub enabled: bool,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl MetricsConfig {
    /// `METRICS_ENABLED=false` disables the recorder (default: enabled).
    pub fn from_env() -> Self {
        let enabled = std::env::var("METRICS_ENABLED")
            .map(|v| v.trim().to_lowercase() != "false")
            .unwrap_or(true);
        Self { enabled }
    }
}

/// Errors that can occur during metrics initialization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricsError {
    #[error("metrics are disabled")]
    Disabled,
    #[error("metrics recorder already initialized")]
    AlreadyInitialized,
    #[error("failed to install metrics recorder: {0}")]
    InstallFailed(String),
}

/// Install the Prometheus recorder.
///
/// # Errors
///
/// Fails when metrics are disabled, or when a recorder is already installed.
pub fn init_metrics(config: &MetricsConfig) -> Result<(), MetricsError> {
    if !config.enabled {
        return Err(MetricsError::Disabled);
    }
    if PROMETHEUS_HANDLE.get().is_some() {
        return Err(MetricsError::AlreadyInitialized);
    }

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| MetricsError::InstallFailed(e.to_string()))?;

    PROMETHEUS_HANDLE
        .set(handle)
        .map_err(|_| MetricsError::AlreadyInitialized)
}

/// Returns `None` if [`init_metrics`] has not been called.
pub fn prometheus_handle() -> Option<&'static PrometheusHandle> {
    PROMETHEUS_HANDLE.get()
}

/// Axum handler for the `/metrics` endpoint.
pub async fn metrics_handler() -> String {
    PROMETHEUS_HANDLE
        .get()
        .map(|h| h.render())
        .unwrap_or_else(|| "# Metrics not initialized\n".to_string())
}

// =============================================================================
// Domain metrics
// =============================================================================

/// Count a created resource. Kinds outside the stats buckets share `other`.
pub fn record_resource_created(kind: &str) {
    metrics::counter!("reliefmap_resources_created_total", "type" => kind_label(kind))
        .increment(1);
}

fn kind_label(kind: &str) -> &'static str {
    match kind {
        ResourceKind::SHELTER => ResourceKind::SHELTER,
        ResourceKind::FOOD => ResourceKind::FOOD,
        ResourceKind::MEDICAL => ResourceKind::MEDICAL,
        _ => "other",
    }
}

pub fn record_resource_updated() {
    metrics::counter!("reliefmap_resources_updated_total").increment(1);
}

pub fn record_resource_deleted() {
    metrics::counter!("reliefmap_resources_deleted_total").increment(1);
}

/// Count a nearby search and record how many resources it returned.
pub fn record_nearby_search(results: usize) {
    metrics::counter!("reliefmap_nearby_searches_total").increment(1);
    metrics::histogram!("reliefmap_nearby_results").record(results as f64);
}

/// Count an accepted alert, report, or volunteer submission.
pub fn record_submission(kind: &'static str) {
    metrics::counter!("reliefmap_submissions_total", "kind" => kind).increment(1);
}
