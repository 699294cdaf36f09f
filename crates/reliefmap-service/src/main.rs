//! ReliefMap service entry point.
//!
//! # Configuration
//!
//! - `PORT` - HTTP port (default: 3000)
//! - `BIND_ADDR` - Listening address (default: 0.0.0.0)
//! - `PUBLIC_DIR` - Static landing page directory (default: public)
//! - `SEED_DATA` - `false` starts with empty collections
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text
//! - `METRICS_ENABLED` - `false` disables the Prometheus recorder

use std::net::SocketAddr;

use tracing::{info, warn};

use reliefmap_service::app;
use reliefmap_service_shared::{
    AppState, LoggingConfig, MetricsConfig, ServiceConfig, init_logging, init_metrics,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logging_config = LoggingConfig::from_env().with_service("reliefmap");
    init_logging(&logging_config)?;

    let metrics_config = MetricsConfig::from_env();
    if let Err(e) = init_metrics(&metrics_config) {
        warn!(error = %e, "metrics unavailable, continuing without them");
    }

    let config = ServiceConfig::from_env();
    info!(
        port = config.port,
        public_dir = %config.public_dir.display(),
        seed_data = config.seed_data,
        "starting reliefmap service"
    );

    let state = AppState::load(config.seed_data);
    let counts = state.counts().await;
    info!(
        resources = counts.resources,
        alerts = counts.alerts,
        "application state loaded"
    );

    let app = app(state, &config.public_dir);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %addr, "listening on");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
