//! # Registry Errors

use thiserror::Error;

use crate::patient::ValidationError;
use crate::query::QueryError;
use crate::storage::StorageError;

pub type RegistryResult<T> = Result<T, RegistryError>;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Patient not found: {0}")]
    NotFound(String),

    #[error("Patient with this ID already exists: {0}")]
    Conflict(String),

    #[error("{0}")]
    Query(#[from] QueryError),

    #[error("Failed to persist patients: {0}")]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patient::ValidationDetails;

    #[test]
    fn test_messages_name_the_id() {
        assert_eq!(
            RegistryError::NotFound("P404".into()).to_string(),
            "Patient not found: P404"
        );
        assert!(RegistryError::Conflict("P001".into())
            .to_string()
            .contains("P001"));
    }

    #[test]
    fn test_validation_message_passes_through() {
        let err: RegistryError =
            ValidationError::single(ValidationDetails::missing_field("city")).into();
        assert!(err.to_string().starts_with("Validation failed"));
    }
}
