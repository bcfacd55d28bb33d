use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::ServiceError;

pub const INVALID_TEXT: &str = "Missing or invalid 'text'";
pub const NO_AUDIO: &str = "No audio file uploaded";
pub const AUDIO_TOO_LARGE: &str = "Audio file too large";
pub const INVALID_UPLOAD: &str = "Invalid multipart body";

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Caller faults become 400 with a specific message; downstream faults become
/// 500 with a fixed message and the cause only in the log.
#[derive(Debug)]
pub enum ApiError {
    Validation(String),
    PayloadTooLarge,
    Service {
        message: &'static str,
        source: ServiceError,
    },
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn service(message: &'static str) -> impl FnOnce(ServiceError) -> Self {
        move |source| Self::Service { message, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(message) => {
                tracing::warn!(error = %message, "Rejected request");
                (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message })).into_response()
            }
            ApiError::PayloadTooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                Json(ErrorResponse {
                    error: AUDIO_TOO_LARGE.to_string(),
                }),
            )
                .into_response(),
            ApiError::Service { message, source } => {
                tracing::error!(error = %source, "{}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: message.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
