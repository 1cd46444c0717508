use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    analyze_document_handler, ask_handler, delete_document_handler, get_document_handler,
    get_document_text_handler, health_handler, search_handler, upload_document_handler,
};
use crate::presentation::state::AppState;

/// Headroom over the file limit for multipart framing, so oversized files
/// reach the upload policy instead of failing mid-stream.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let max_file_bytes = state
        .settings
        .extraction
        .max_file_size_mb
        .saturating_mul(1024 * 1024);
    let body_limit = usize::try_from(max_file_bytes)
        .unwrap_or(usize::MAX)
        .saturating_add(MULTIPART_OVERHEAD_BYTES);

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/documents", post(upload_document_handler))
        .route(
            "/api/v1/documents/{id}",
            get(get_document_handler).delete(delete_document_handler),
        )
        .route(
            "/api/v1/documents/{id}/text",
            get(get_document_text_handler),
        )
        .route(
            "/api/v1/documents/{id}/analysis",
            post(analyze_document_handler),
        )
        .route("/api/v1/documents/{id}/ask", post(ask_handler))
        .route("/api/v1/documents/{id}/search", post(search_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
