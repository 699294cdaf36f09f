//! HTTP error type rendered as a failure envelope.
//!
//! Every failure leaves the service as `{"success": false, "message": ...}`
//! with the status code chosen by [`ApiError::status_code`].

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use reliefmap_lib::Error as LibError;

use crate::envelope::Envelope;

/// Message for unknown resource ids.
pub const MSG_RESOURCE_NOT_FOUND: &str = "Resource not found";

/// Message for create payloads lacking required fields.
pub const MSG_MISSING_FIELDS: &str = "Missing required fields";

/// Message for out-of-range or non-numeric coordinates.
pub const MSG_INVALID_COORDINATES: &str = "Invalid coordinates";

/// Message for requests that match no route.
pub const MSG_ROUTE_NOT_FOUND: &str = "Route not found";

/// Generic message for unexpected failures. Never carries detail.
pub const MSG_INTERNAL: &str = "Something went wrong!";

/// Errors a handler can return.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Caller input failed validation.
    #[error("{0}")]
    BadRequest(String),

    /// The addressed record does not exist.
    #[error("{0}")]
    NotFound(String),

    /// No route matched the request.
    #[error("Route not found")]
    RouteNotFound,

    /// Unexpected failure. The cause is logged, not returned.
    #[error("Something went wrong!")]
    Internal,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn resource_not_found() -> Self {
        Self::NotFound(MSG_RESOURCE_NOT_FOUND.to_string())
    }

    pub fn invalid_coordinates() -> Self {
        Self::BadRequest(MSG_INVALID_COORDINATES.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Envelope::<()>::failure(self.to_string())).into_response()
    }
}

/// Convert library errors to the message the API exposes for them.
pub fn from_lib_error(error: &LibError) -> ApiError {
    match error {
        LibError::ResourceNotFound { .. } => ApiError::resource_not_found(),
        LibError::MissingRequiredFields { .. } => ApiError::bad_request(MSG_MISSING_FIELDS),
        LibError::InvalidCoordinates => ApiError::invalid_coordinates(),
        LibError::InvalidNumber { field } => {
            ApiError::bad_request(format!("Invalid value for '{}'", field))
        }
    }
}

impl From<LibError> for ApiError {
    fn from(error: LibError) -> Self {
        from_lib_error(&error)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "rejected JSON body");
        ApiError::bad_request(format!("Invalid JSON body: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "rejected query string");
        ApiError::bad_request(format!("Invalid query: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "rejected path parameters");
        ApiError::RouteNotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::bad_request("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::resource_not_found().status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ApiError::RouteNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Internal.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(ApiError::RouteNotFound.to_string(), MSG_ROUTE_NOT_FOUND);
        assert_eq!(ApiError::Internal.to_string(), MSG_INTERNAL);
        assert_eq!(
            ApiError::resource_not_found().to_string(),
            MSG_RESOURCE_NOT_FOUND
        );
    }

    #[test]
    fn test_from_lib_error_validation() {
        let missing = LibError::MissingRequiredFields {
            fields: vec!["name"],
        };
        assert_eq!(
            from_lib_error(&missing),
            ApiError::BadRequest(MSG_MISSING_FIELDS.to_string())
        );
        assert_eq!(
            from_lib_error(&LibError::InvalidCoordinates),
            ApiError::BadRequest(MSG_INVALID_COORDINATES.to_string())
        );

        let number = from_lib_error(&LibError::InvalidNumber { field: "capacity" });
        assert_eq!(number.status_code(), StatusCode::BAD_REQUEST);
        assert!(number.to_string().contains("capacity"));
    }

    #[test]
    fn test_from_lib_error_not_found() {
        let error: ApiError = LibError::ResourceNotFound { id: 12 }.into();
        assert_eq!(error, ApiError::resource_not_found());
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::bad_request("nope").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::Internal.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
