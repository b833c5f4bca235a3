use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::ErrorBody;
use service::errors::ServiceError;
use tracing::error;

pub const UNHANDLED_MESSAGE: &str = "An unexpected error occurred.";

/// Error response carrying a structured `{message, code}` body.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: String,
    pub code: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>, code: Option<&str>) -> Self {
        Self { status, message: message.into(), code: code.map(str::to_string) }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message, Some("InvalidInput"))
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message, Some("SnowparkNotFound"))
    }

    pub fn unhandled() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, UNHANDLED_MESSAGE, Some("UnhandledException"))
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        let code = Some(e.code());
        match e {
            ServiceError::InvalidInput(msg) => Self::new(StatusCode::BAD_REQUEST, msg, code),
            ServiceError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg, code),
            ServiceError::CreateFailed(msg) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg, code)
            }
            // internal details stay in the log
            ServiceError::Internal(msg) => {
                error!(error = %msg, "internal service error");
                Self::unhandled()
            }
        }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(
                status = %self.status,
                message = %self.message,
                code = ?self.code,
                "request failed"
            );
        }
        (self.status, Json(ErrorBody::new(self.message, self.code))).into_response()
    }
}

/// Renders a caught handler panic as a generic 500.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    error!(event = "handler_panic", panic = %detail, "request handler panicked");
    JsonApiError::unhandled().into_response()
}
