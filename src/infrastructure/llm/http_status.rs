use reqwest::StatusCode;

use crate::application::ports::GenerationError;

const MAX_ERROR_BODY_CHARS: usize = 512;

/// Maps a non-success response onto the generation error taxonomy.
pub(super) fn error_for_status(provider: &str, status: StatusCode, body: &str) -> GenerationError {
    let body: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            GenerationError::Authentication(format!("{provider} returned {status}"))
        }
        StatusCode::BAD_REQUEST if body.contains("API_KEY_INVALID") => {
            GenerationError::Authentication(format!("{provider} rejected the API key"))
        }
        StatusCode::TOO_MANY_REQUESTS => GenerationError::RateLimited,
        _ => GenerationError::Upstream(format!("{provider} returned {status}: {body}")),
    }
}

pub(super) fn build_http_client(
    timeout: std::time::Duration,
) -> Result<reqwest::Client, GenerationError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| GenerationError::Upstream(format!("failed to build HTTP client: {e}")))
}
