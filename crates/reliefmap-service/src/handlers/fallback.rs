//! Responses for requests no handler produced normally.

use std::any::Any;

use axum::response::{IntoResponse, Response};
use tracing::error;

use reliefmap_service_shared::ApiError;

/// Unknown path, or a known path with the wrong method.
pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

/// Map a caught panic to the generic 500 envelope. The payload is only logged.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    error!(panic = %detail, "handler panicked");
    ApiError::Internal.into_response()
}
