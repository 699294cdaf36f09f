//! ReliefMap disaster relief resource HTTP service.
//!
//! # Endpoints
//!
//! - `GET /api/resources` - List resources (`type`, `search`, `limit`)
//! - `POST /api/resources` - Register a resource
//! - `GET|PUT|DELETE /api/resources/{id}` - Fetch, update, or remove one resource
//! - `GET /api/resources/nearby/{lat}/{lng}` - Resources within `radius` km, nearest first
//! - `GET /api/stats` - Per-type counts and total capacity
//! - `GET|POST /api/alerts` - Active emergency alerts
//! - `POST /api/reports` - File an incident report
//! - `POST /api/volunteer` - Volunteer sign-up
//! - `GET /metrics` - Prometheus metrics endpoint
//! - `GET /health/live`, `GET /health/ready` - Liveness and readiness probes
//!
//! Anything else is looked up in the public directory, then answered with the
//! 404 `Route not found` envelope.

#![deny(warnings)]

use std::path::Path;

use axum::{
    Router,
    handler::HandlerWithoutStateExt,
    routing::{get, post},
};
use tower_http::{catch_panic::CatchPanicLayer, services::ServeDir, trace::TraceLayer};

use reliefmap_service_shared::{
    AppState, MetricsLayer, cors_layer, health_live, health_ready, metrics_handler,
};

pub mod handlers;

use handlers::{alerts, fallback, nearby, resources, submissions};

/// Build the complete application: API routes, static files, and middleware.
pub fn app(state: AppState, public_dir: impl AsRef<Path>) -> Router {
    let static_files = ServeDir::new(public_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(fallback::route_not_found.into_service());

    let router = api_routes()
        .route("/metrics", get(metrics_handler))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready))
        .method_not_allowed_fallback(fallback::route_not_found)
        .fallback_service(static_files)
        .with_state(state);

    service_layers(router)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/resources",
            get(resources::list_resources).post(resources::create_resource),
        )
        .route(
            "/api/resources/{id}",
            get(resources::get_resource)
                .put(resources::update_resource)
                .delete(resources::delete_resource),
        )
        .route(
            "/api/resources/nearby/{lat}/{lng}",
            get(nearby::nearby_resources),
        )
        .route("/api/stats", get(resources::resource_stats))
        .route(
            "/api/alerts",
            get(alerts::list_alerts).post(alerts::create_alert),
        )
        .route("/api/reports", post(submissions::create_report))
        .route("/api/volunteer", post(submissions::create_volunteer))
}

/// Wrap a router in the middleware stack shared by every route.
///
/// Panics are converted to the generic 500 envelope before metrics and
/// tracing see the response.
pub fn service_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(fallback::handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .layer(MetricsLayer)
}
