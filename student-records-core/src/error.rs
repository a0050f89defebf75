use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured error understood by integration clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationError {
    pub code: String,
    pub description: String,
    pub message: String,
}

impl IntegrationError {
    pub const GLOBAL_INTERNAL_ERROR: &'static str = "Global.Internal.Error";

    pub fn new(
        code: impl Into<String>,
        description: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            message: message.into(),
        }
    }

    pub fn global(message: impl Into<String>) -> Self {
        Self::new(
            Self::GLOBAL_INTERNAL_ERROR,
            "An unexpected error occurred on the server.",
            message,
        )
    }
}

/// Failures reported by the coordination services behind the API.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Missing argument: {0}")]
    MissingArgument(String),

    #[error("Session expired: {0}")]
    SessionExpired(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Integration error: {0:?}")]
    Integration(Vec<IntegrationError>),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Closed classification of [`ServiceError`], used to pick the HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    PermissionDenied,
    NotFound,
    InvalidArgument,
    MissingArgument,
    SessionExpired,
    Conflict,
    Repository,
    Integration,
    Internal,
}

impl ServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::PermissionDenied(_) => ErrorKind::PermissionDenied,
            ServiceError::NotFound(_) => ErrorKind::NotFound,
            ServiceError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            ServiceError::MissingArgument(_) => ErrorKind::MissingArgument,
            ServiceError::SessionExpired(_) => ErrorKind::SessionExpired,
            ServiceError::Conflict(_) => ErrorKind::Conflict,
            ServiceError::Repository(_) => ErrorKind::Repository,
            ServiceError::Integration(_) => ErrorKind::Integration,
            ServiceError::Internal(_) => ErrorKind::Internal,
        }
    }

    pub fn integration(error: IntegrationError) -> Self {
        ServiceError::Integration(vec![error])
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::InvalidArgument(err.to_string())
    }
}
