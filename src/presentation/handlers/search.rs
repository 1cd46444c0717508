use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::SessionId;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct SearchRequest {
    pub term: String,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub found: bool,
    pub result: String,
}

pub async fn search_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SearchRequest>,
) -> Response {
    match state
        .assistant
        .search(SessionId::from_uuid(id), &request.term)
        .await
    {
        Ok(result) => Json(SearchResponse {
            found: result.found,
            result: result.message,
        })
        .into_response(),
        Err(e) => e.into_response(),
    }
}
