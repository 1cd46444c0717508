use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::SessionId;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct AskRequest {
    pub question: String,
}

#[derive(Serialize)]
pub struct AskResponse {
    pub answer: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn ask_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AskRequest>,
) -> Response {
    tracing::debug!(question = %sanitize_prompt(&request.question), "Processing question");

    match state
        .assistant
        .ask(SessionId::from_uuid(id), &request.question)
        .await
    {
        Ok(answer) => Json(AskResponse { answer }).into_response(),
        Err(e) => e.into_response(),
    }
}
