//! Shared infrastructure for the ReliefMap HTTP service.
//!
//! - [`AppState`]: the in-memory collections behind per-collection locks
//! - [`Envelope`]: the `{success, data, message, total}` JSON wrapper
//! - [`ApiError`]: failure envelopes with the matching status code
//! - [`ApiJson`], [`ApiQuery`], [`ApiPath`]: extractors that reject with [`ApiError`]
//! - [`health`]: liveness and readiness probes
//! - [`metrics`]: Prometheus metrics infrastructure
//! - [`logging`]: Structured JSON logging setup
//! - [`middleware`]: Request tracking, metrics, and CORS
//!
//! # Architecture
//!
//! Handlers stay thin. Record rules live in `reliefmap-lib`; this crate
//! provides only HTTP glue:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  axum Handler                                               │
//! │  - Extract JSON body / query / path                         │
//! │  - Validate parameters                                      │
//! │  - Call reliefmap-lib under one collection lock             │
//! │  - Wrap the result in an Envelope                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Testing Support
//!
//! Enable the `test-utils` feature to access [`test_utils`] from dependent crates.

#![deny(warnings)]

pub mod config;
mod envelope;
mod error;
mod extract;
mod health;
pub mod logging;
pub mod metrics;
pub mod middleware;
mod request;
mod state;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{ServiceConfig, DEFAULT_PORT, DEFAULT_PUBLIC_DIR};
pub use envelope::{Created, Envelope};
pub use error::{
    from_lib_error, ApiError, MSG_INTERNAL, MSG_INVALID_COORDINATES, MSG_MISSING_FIELDS,
    MSG_RESOURCE_NOT_FOUND, MSG_ROUTE_NOT_FOUND,
};
pub use extract::{ApiJson, ApiPath, ApiQuery};
pub use health::{health_live, health_ready, HealthStatus};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use metrics::{
    init_metrics, metrics_handler, record_nearby_search, record_resource_created,
    record_resource_deleted, record_resource_updated, record_submission, MetricsConfig,
    MetricsError,
};
pub use middleware::{cors_layer, extract_or_generate_request_id, MetricsLayer, RequestId};
pub use request::{parse_resource_id, ListResourcesParams, NearbyParams, NearbyPath, Validate};
pub use state::{AppState, CollectionCounts};
