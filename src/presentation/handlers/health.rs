use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub open_sessions: usize,
}

pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            open_sessions: state.assistant.open_sessions().await,
        }),
    )
}
