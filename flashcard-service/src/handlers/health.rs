use axum::{Json, response::IntoResponse};
use serde_json::json;

/// Liveness check. Always 200; generation being unconfigured does not make
/// the process unhealthy.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "server": "flashcard-service"
    }))
}
