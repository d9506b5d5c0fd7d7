//! Mobile-friendly error types.

use folio_core::api::FolioError;

/// Mobile-friendly error type.
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum MobileError {
    #[error("Persistence not configured")]
    PersistenceNotConfigured,

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Fetch error: {0}")]
    FetchError(String),

    #[error("State error: {0}")]
    StateError(String),

    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<FolioError> for MobileError {
    fn from(err: FolioError) -> Self {
        match err {
            FolioError::PersistenceNotConfigured => MobileError::PersistenceNotConfigured,
            FolioError::Storage(e) => MobileError::StorageError(e.to_string()),
            FolioError::Fetch(e) => MobileError::FetchError(e.to_string()),
            FolioError::Cache(e) => MobileError::StorageError(e.to_string()),
            FolioError::State(e) => MobileError::StateError(e.to_string()),
            FolioError::UnknownLocale(code) => MobileError::UnknownLocale(code),
            other => MobileError::Internal(other.to_string()),
        }
    }
}
