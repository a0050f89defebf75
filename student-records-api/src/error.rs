use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use student_records_core::{ErrorKind, IntegrationError, ServiceError};
use thiserror::Error;
use validator::ValidationErrors;

/// Shape of the error body written for an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorFormat {
    /// `{"errors":[{"code","description","message"}]}`
    #[default]
    Integration,
    /// `{"message": "..."}`
    Legacy,
}

/// What the endpoint was doing when a call failed, used in client-safe messages.
#[derive(Debug, Clone, Copy)]
pub struct ErrorContext {
    pub action: &'static str,
    pub label: &'static str,
}

impl ErrorContext {
    pub const fn new(action: &'static str, label: &'static str) -> Self {
        Self { action, label }
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not acceptable: {0}")]
    NotAcceptable(String),

    #[error("Unsupported request")]
    Unsupported,

    #[error("Service error ({kind:?}): {errors:?}")]
    Service {
        kind: ErrorKind,
        errors: Vec<IntegrationError>,
    },
}

/// HTTP status for each service failure class.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::PermissionDenied => StatusCode::FORBIDDEN,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::InvalidArgument | ErrorKind::MissingArgument => StatusCode::BAD_REQUEST,
        ErrorKind::SessionExpired => StatusCode::UNAUTHORIZED,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::Repository | ErrorKind::Integration | ErrorKind::Internal => {
            StatusCode::BAD_REQUEST
        }
    }
}

pub const UNSUPPORTED_DESCRIPTION: &str = "Unsupported Request";
pub const UNSUPPORTED_MESSAGE: &str = "Operation not supported.";

impl ApiError {
    /// Translate a service failure into a client-safe error.
    ///
    /// Repository and internal details stay in the logs; session expiry gets a
    /// fixed message.
    pub fn from_service(err: ServiceError, context: ErrorContext) -> Self {
        let kind = err.kind();
        let errors = match err {
            ServiceError::PermissionDenied(msg) => {
                vec![IntegrationError::new("Access.Denied", "Permission denied.", msg)]
            }
            ServiceError::NotFound(msg) => vec![IntegrationError::new(
                "GUID.Not.Found",
                "GUID not found.",
                msg,
            )],
            ServiceError::InvalidArgument(msg) | ServiceError::MissingArgument(msg) => {
                vec![IntegrationError::new(
                    "Validation.Exception",
                    "Validation exception.",
                    msg,
                )]
            }
            ServiceError::SessionExpired(_) => vec![IntegrationError::new(
                "Authentication.Required",
                "Session expired.",
                format!(
                    "Session has expired while {} {}.",
                    context.action, context.label
                ),
            )],
            ServiceError::Conflict(msg) => vec![IntegrationError::new(
                "Global.Internal.Error",
                "Conflict.",
                msg,
            )],
            ServiceError::Integration(errors) if !errors.is_empty() => errors,
            ServiceError::Integration(_)
            | ServiceError::Repository(_)
            | ServiceError::Internal(_) => {
                vec![IntegrationError::global(format!(
                    "An error occurred while {} {}.",
                    context.action, context.label
                ))]
            }
        };
        ApiError::Service { kind, errors }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotAcceptable(_) => StatusCode::NOT_ACCEPTABLE,
            ApiError::Unsupported => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Service { kind, .. } => status_for(*kind),
        }
    }

    pub fn errors(&self) -> Vec<IntegrationError> {
        match self {
            ApiError::Unauthorized(msg) => vec![IntegrationError::new(
                "Global.UnauthorizedAccess",
                "Authentication is required.",
                msg.clone(),
            )],
            ApiError::Forbidden(msg) => vec![IntegrationError::new(
                "Access.Denied",
                "Permission denied.",
                msg.clone(),
            )],
            ApiError::NotFound(msg) => vec![IntegrationError::new(
                "GUID.Not.Found",
                "GUID not found.",
                msg.clone(),
            )],
            ApiError::BadRequest(msg) => vec![IntegrationError::new(
                "Validation.Exception",
                "Validation exception.",
                msg.clone(),
            )],
            ApiError::NotAcceptable(msg) => vec![IntegrationError::new(
                "Global.Internal.Error",
                "Version not supported.",
                msg.clone(),
            )],
            ApiError::Unsupported => vec![IntegrationError::new(
                IntegrationError::GLOBAL_INTERNAL_ERROR,
                UNSUPPORTED_DESCRIPTION,
                UNSUPPORTED_MESSAGE,
            )],
            ApiError::Service { errors, .. } => errors.clone(),
        }
    }

    /// Render the error with the body shape the endpoint uses.
    pub fn into_response_with(self, format: ErrorFormat) -> Response {
        let status = self.status();
        let errors = self.errors();
        let body = match format {
            ErrorFormat::Integration => json!({ "errors": errors }),
            ErrorFormat::Legacy => {
                let message = errors
                    .iter()
                    .map(|e| e.message.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");
                json!({ "message": message })
            }
        };
        (status, Json(body)).into_response()
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::BadRequest(format!("Validation failed: {}", errors))
    }
}

impl From<jsonwebtoken::errors::Error> for ApiError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        ApiError::Unauthorized(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.into_response_with(ErrorFormat::Integration)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
