//! Uniform JSON response envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// `{success, data?, message?, total?}` wrapper used by every API response.
///
/// # Example
///
/// ```
/// use reliefmap_service_shared::Envelope;
///
/// let response = Envelope::data(vec![1, 2, 3]).with_total(3);
/// let json = serde_json::to_value(&response).unwrap();
/// assert_eq!(json["success"], true);
/// assert_eq!(json["total"], 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl<T> Envelope<T> {
    /// Successful response carrying `data`.
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            total: None,
        }
    }

    /// Failed response carrying only a message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            total: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_total(mut self, total: usize) -> Self {
        self.total = Some(total);
        self
    }
}

impl Envelope<()> {
    /// Successful response with a message and no body.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            total: None,
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// An envelope returned with `201 Created`.
#[derive(Debug, Clone)]
pub struct Created<T>(pub Envelope<T>);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, self.0).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct TestData {
        value: i32,
    }

    #[test]
    fn test_data_envelope_serialization() {
        let envelope = Envelope::data(TestData { value: 42 });
        let json = serde_json::to_string(&envelope).unwrap();

        assert!(json.contains("\"success\":true"));
        assert!(json.contains("\"data\":{\"value\":42}"));
        assert!(!json.contains("message"));
        assert!(!json.contains("total"));
    }

    #[test]
    fn test_failure_envelope() {
        let envelope = Envelope::<()>::failure("Route not found");
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Route not found");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_message_and_total() {
        let envelope = Envelope::data(vec![TestData { value: 1 }])
            .with_total(10)
            .with_message("ok");
        assert_eq!(envelope.total, Some(10));
        assert_eq!(envelope.message.as_deref(), Some("ok"));
    }

    #[test]
    fn test_message_only_envelope() {
        let json = serde_json::to_value(Envelope::message("Resource deleted successfully")).unwrap();
        assert_eq!(json["success"], true);
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_created_status() {
        let response = Created(Envelope::data(TestData { value: 1 })).into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[test]
    fn test_envelope_deserialization() {
        let json = r#"{"success":true,"data":{"value":7},"total":1}"#;
        let envelope: Envelope<TestData> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.data, Some(TestData { value: 7 }));
        assert_eq!(envelope.total, Some(1));
    }
}
