use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::application::services::DocumentSession;
use crate::domain::{AnalysisResult, ApiKey, Backend, ContentType, RawDocument, SessionId};
use crate::presentation::state::AppState;

use super::error::error_response;

pub const API_KEY_HEADER: &str = "x-api-key";
pub const PROVIDER_HEADER: &str = "x-llm-provider";
const UPLOAD_FIELD: &str = "file";

#[derive(Serialize)]
pub struct DocumentResponse {
    pub session_id: String,
    pub filename: String,
    pub page_count: usize,
    pub truncated: bool,
    pub created_at: DateTime<Utc>,
    pub title: Option<String>,
    pub summary: Vec<String>,
}

impl DocumentResponse {
    fn new(session: &DocumentSession, analysis: Option<AnalysisResult>) -> Self {
        let (title, summary) = match analysis {
            Some(result) => (result.title, result.summary_points),
            None => (None, Vec::new()),
        };

        Self {
            session_id: session.id().to_string(),
            filename: session.filename().to_string(),
            page_count: session.page_count(),
            truncated: session.is_truncated(),
            created_at: session.created_at(),
            title,
            summary,
        }
    }
}

#[derive(Serialize)]
pub struct DocumentTextResponse {
    pub session_id: String,
    pub page_count: usize,
    pub char_count: usize,
    pub text: String,
}

#[tracing::instrument(skip(state, headers, multipart))]
pub async fn upload_document_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Response {
    let backend = match header_value(&headers, PROVIDER_HEADER) {
        Some(raw) => match raw.parse::<Backend>() {
            Ok(backend) => backend,
            Err(e) => return error_response(StatusCode::BAD_REQUEST, e),
        },
        None => state.settings.llm.provider,
    };

    let api_key = header_value(&headers, API_KEY_HEADER)
        .map(ApiKey::new)
        .filter(|key| !key.is_blank())
        .or_else(|| state.settings.llm.default_api_key());
    let Some(api_key) = api_key else {
        tracing::warn!("Upload without credential");
        return error_response(
            StatusCode::UNAUTHORIZED,
            format!("Missing API key, send it in the {API_KEY_HEADER} header"),
        );
    };

    let document = match read_upload(&mut multipart).await {
        Ok(document) => document,
        Err(response) => return response,
    };

    tracing::info!(
        filename = %document.filename,
        content_type = %document.content_type.as_mime(),
        size_bytes = document.size_bytes(),
        backend = %backend,
        "Received document"
    );

    match state
        .assistant
        .open_document(document, backend, api_key)
        .await
    {
        Ok(opened) => (
            StatusCode::CREATED,
            Json(DocumentResponse::new(&opened.session, Some(opened.analysis))),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn get_document_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Response {
    match state.assistant.session(SessionId::from_uuid(id)).await {
        Ok(session) => {
            let analysis = session.analysis().await;
            Json(DocumentResponse::new(&session, analysis)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

pub async fn get_document_text_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Response {
    match state.assistant.session(SessionId::from_uuid(id)).await {
        Ok(session) => Json(DocumentTextResponse {
            session_id: session.id().to_string(),
            page_count: session.page_count(),
            char_count: session.text().char_count(),
            text: session.text().as_str().to_string(),
        })
        .into_response(),
        Err(e) => e.into_response(),
    }
}

#[tracing::instrument(skip(state))]
pub async fn delete_document_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Response {
    match state.assistant.close(SessionId::from_uuid(id)).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

async fn read_upload(multipart: &mut Multipart) -> Result<RawDocument, Response> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(UPLOAD_FIELD) && field.file_name().is_none() {
            continue;
        }

        let filename = field.file_name().unwrap_or("unknown").to_string();
        let content_type = ContentType::from_mime(
            field
                .content_type()
                .unwrap_or("application/octet-stream"),
        );
        let data = field.bytes().await.map_err(multipart_error)?;

        return Ok(RawDocument::new(filename, content_type, data));
    }

    tracing::warn!("Upload request with no file");
    Err(error_response(StatusCode::BAD_REQUEST, "No file uploaded"))
}

fn multipart_error(e: MultipartError) -> Response {
    tracing::warn!(error = %e, "Failed to read multipart");
    error_response(e.status(), format!("Failed to read multipart: {}", e))
}
