use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::GenerationError;
use crate::application::services::{AssistantError, ExtractionError};
use crate::domain::ValidationError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

pub fn status_for(err: &AssistantError) -> StatusCode {
    match err {
        AssistantError::Validation(ValidationError::UnsupportedMediaType(_)) => {
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        }
        AssistantError::Validation(ValidationError::FileTooLarge { .. }) => {
            StatusCode::PAYLOAD_TOO_LARGE
        }
        AssistantError::Validation(_) => StatusCode::BAD_REQUEST,
        AssistantError::Extraction(ExtractionError::UnsupportedContentType(_)) => {
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        }
        AssistantError::Extraction(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AssistantError::Generation(GenerationError::Authentication(_)) => StatusCode::UNAUTHORIZED,
        AssistantError::Generation(GenerationError::RateLimited) => StatusCode::TOO_MANY_REQUESTS,
        AssistantError::Generation(GenerationError::Upstream(_)) => StatusCode::BAD_GATEWAY,
        AssistantError::SessionNotFound(_) => StatusCode::NOT_FOUND,
        AssistantError::AnalysisSuperseded => StatusCode::CONFLICT,
    }
}

impl IntoResponse for AssistantError {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "Request failed");
        } else {
            tracing::warn!(error = %self, status = status.as_u16(), "Request rejected");
        }
        error_response(status, self.to_string())
    }
}
