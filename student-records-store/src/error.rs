use student_records_core::ServiceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read fixture '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid fixture '{path}': {source}")]
    Fixture {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No {resource} record with id '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("{0}")]
    Duplicate(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => ServiceError::NotFound(err.to_string()),
            StoreError::Duplicate(message) => ServiceError::Conflict(message),
            StoreError::Io { .. } | StoreError::Fixture { .. } => {
                ServiceError::Repository(err.to_string())
            }
        }
    }
}
