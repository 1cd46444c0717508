use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::SessionId;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct AnalysisResponse {
    pub title: Option<String>,
    pub summary: Vec<String>,
}

/// Re-runs summarization for an open document. A result overtaken by a newer
/// request is reported as a conflict.
#[tracing::instrument(skip(state))]
pub async fn analyze_document_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Response {
    match state.assistant.analyze(SessionId::from_uuid(id)).await {
        Ok(result) => Json(AnalysisResponse {
            title: result.title,
            summary: result.summary_points,
        })
        .into_response(),
        Err(e) => e.into_response(),
    }
}
