use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    content_dir: String,
    content_dir_readable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check endpoint
///
/// Checks that the content root can be listed. Returns 200 OK when it can,
/// 503 Service Unavailable otherwise.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let content_dir = &state.deps.content_dir;

    let error = match tokio::fs::read_dir(content_dir).await {
        Ok(_) => None,
        Err(e) => Some(format!("Cannot read content directory: {}", e)),
    };
    let is_healthy = error.is_none();

    let status_code = if is_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(HealthResponse {
            status: if is_healthy { "healthy" } else { "unhealthy" }.to_string(),
            content_dir: content_dir.display().to_string(),
            content_dir_readable: is_healthy,
            error,
        }),
    )
}
