//! Request parameter types and validation for HTTP endpoints.

use serde::{Deserialize, Serialize};

use reliefmap_lib::{GeoPoint, NearbyQuery, RecordId, ResourceQuery, DEFAULT_LIST_LIMIT};

use crate::error::ApiError;

/// Validation trait for request types.
///
/// Implementations check every field and return an [`ApiError`] describing
/// the first invalid one.
pub trait Validate {
    fn validate(&self) -> Result<(), ApiError>;
}

/// Query string of `GET /api/resources`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListResourcesParams {
    /// Exact match on resource type.
    #[serde(rename = "type")]
    pub kind: Option<String>,

    /// Case-insensitive text search.
    pub search: Option<String>,

    /// Maximum number of records returned (default 50).
    pub limit: Option<usize>,
}

impl ListResourcesParams {
    pub fn into_query(self) -> ResourceQuery {
        ResourceQuery {
            kind: self.kind,
            search: self.search,
            limit: self.limit.unwrap_or(DEFAULT_LIST_LIMIT),
        }
    }
}

/// Path segments of `GET /api/resources/nearby/{lat}/{lng}`.
///
/// Kept as text so that a non-numeric coordinate can be answered with the
/// API's own validation message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyPath {
    pub lat: String,
    pub lng: String,
}

impl NearbyPath {
    /// Parse the query origin. Range is not enforced; finiteness is.
    pub fn origin(&self) -> Result<GeoPoint, ApiError> {
        let parse = |raw: &str| {
            raw.trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(ApiError::invalid_coordinates)
        };
        Ok(GeoPoint::new(parse(&self.lat)?, parse(&self.lng)?))
    }
}

/// Query string of the nearby search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NearbyParams {
    /// Search radius in kilometres (default 50).
    pub radius: Option<f64>,

    /// Exact match on resource type.
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl NearbyParams {
    pub fn into_query(self, origin: GeoPoint) -> NearbyQuery {
        let mut query = NearbyQuery::new(origin);
        if let Some(radius) = self.radius {
            query = query.with_radius(radius);
        }
        query.kind = self.kind;
        query
    }
}

impl Validate for NearbyParams {
    fn validate(&self) -> Result<(), ApiError> {
        if let Some(radius) = self.radius {
            if !radius.is_finite() || radius < 0.0 {
                return Err(ApiError::bad_request(
                    "The 'radius' parameter must be a non-negative number",
                ));
            }
        }
        Ok(())
    }
}

/// Parse a resource id path segment.
///
/// Anything that is not a non-negative integer cannot name a stored record,
/// so it is reported as not found rather than as a bad request.
pub fn parse_resource_id(raw: &str) -> Result<RecordId, ApiError> {
    raw.trim()
        .parse::<RecordId>()
        .map_err(|_| ApiError::resource_not_found())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_default_limit() {
        let query = ListResourcesParams::default().into_query();
        assert_eq!(query.limit, 50);
        assert!(query.kind.is_none());
    }

    #[test]
    fn test_list_params_deserialize_type_alias() {
        let params: ListResourcesParams =
            serde_json::from_str(r#"{"type":"food","limit":3}"#).unwrap();
        let query = params.into_query();
        assert_eq!(query.kind.as_deref(), Some("food"));
        assert_eq!(query.limit, 3);
    }

    #[test]
    fn test_nearby_path_parses_numbers() {
        let path = NearbyPath {
            lat: "19.0760".into(),
            lng: "72.8777".into(),
        };
        assert_eq!(path.origin().unwrap(), GeoPoint::new(19.076, 72.8777));
    }

    #[test]
    fn test_nearby_path_rejects_garbage() {
        let path = NearbyPath {
            lat: "north".into(),
            lng: "72.8".into(),
        };
        assert_eq!(path.origin(), Err(ApiError::invalid_coordinates()));

        let path = NearbyPath {
            lat: "inf".into(),
            lng: "72.8".into(),
        };
        assert!(path.origin().is_err());
    }

    #[test]
    fn test_nearby_params_validation() {
        assert!(NearbyParams::default().validate().is_ok());

        let negative = NearbyParams {
            radius: Some(-1.0),
            kind: None,
        };
        assert!(negative.validate().is_err());

        let nan = NearbyParams {
            radius: Some(f64::NAN),
            kind: None,
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_nearby_params_into_query() {
        let origin = GeoPoint::new(1.0, 2.0);
        let query = NearbyParams::default().into_query(origin);
        assert_eq!(query.radius_km, 50.0);

        let query = NearbyParams {
            radius: Some(5.0),
            kind: Some("medical".into()),
        }
        .into_query(origin);
        assert_eq!(query.radius_km, 5.0);
        assert_eq!(query.kind.as_deref(), Some("medical"));
    }

    #[test]
    fn test_parse_resource_id() {
        assert_eq!(parse_resource_id("42"), Ok(42));
        assert_eq!(parse_resource_id("abc"), Err(ApiError::resource_not_found()));
        assert_eq!(parse_resource_id("-1"), Err(ApiError::resource_not_found()));
    }
}
