use thiserror::Error;

use crate::ids::RecordId;

/// Convenient result alias for the relief registry library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// No resource with the given id exists in the store.
    #[error("resource {id} not found")]
    ResourceNotFound { id: RecordId },

    /// One or more fields required to create a resource were absent.
    #[error("missing required fields: {}", .fields.join(", "))]
    MissingRequiredFields { fields: Vec<&'static str> },

    /// Latitude/longitude were non-numeric or outside the valid ranges.
    #[error("invalid coordinates")]
    InvalidCoordinates,

    /// A numeric field could not be coerced into the expected type.
    #[error("invalid value for field '{field}'")]
    InvalidNumber { field: &'static str },
}

impl Error {
    /// True for errors caused by caller input rather than missing records.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::MissingRequiredFields { .. }
                | Error::InvalidCoordinates
                | Error::InvalidNumber { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_lists_every_field() {
        let err = Error::MissingRequiredFields {
            fields: vec!["name", "contact"],
        };
        assert_eq!(err.to_string(), "missing required fields: name, contact");
    }

    #[test]
    fn validation_classification() {
        assert!(Error::InvalidCoordinates.is_validation());
        assert!(Error::InvalidNumber { field: "capacity" }.is_validation());
        assert!(!Error::ResourceNotFound { id: 7 }.is_validation());
    }
}
