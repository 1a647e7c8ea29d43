use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::api::pages;
use crate::application::use_cases::{IngestError, ServeError};
use crate::domain::errors::DomainError;

/// Uniform failure response for every handler.
///
/// Handlers return `Result<_, ApiError>`; any error propagated out of a
/// use case is converted exactly once, here, into an error page with a
/// status code. Success paths never touch this type.
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, message = %self.message, "request failed");
        }
        (self.status, pages::error_page(&self.message)).into_response()
    }
}

// Convert use case errors to API errors

impl From<IngestError> for ApiError {
    fn from(err: IngestError) -> Self {
        match err {
            IngestError::Decode(msg) => {
                ApiError::bad_request(format!("cannot decode image: {}", msg))
            }
            IngestError::Domain(e) => ApiError::bad_request(e.to_string()),
            IngestError::Encode(msg) => {
                ApiError::internal_error(format!("encoding failed: {}", msg))
            }
            IngestError::Store(e) => ApiError::internal_error(format!("storage error: {}", e)),
            IngestError::Internal(msg) => ApiError::internal_error(msg),
        }
    }
}

impl From<ServeError> for ApiError {
    fn from(err: ServeError) -> Self {
        match err {
            ServeError::NotFound(key) => ApiError::not_found(format!("no image with key {}", key)),
            ServeError::Decode(msg) => {
                ApiError::internal_error(format!("stored image is unreadable: {}", msg))
            }
            ServeError::Encode(msg) => {
                ApiError::internal_error(format!("encoding failed: {}", msg))
            }
            ServeError::Store(e) => ApiError::internal_error(format!("storage error: {}", e)),
            ServeError::Internal(msg) => ApiError::internal_error(msg),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::bad_request(err.to_string())
    }
}
