use axum::Json;
use chrono::Local;

use crate::message::HealthResponse;

/// `GET /health`. Always succeeds; the timestamp is read fresh on every
/// call, local wall-clock time in ISO-8601.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
        service: "League Chatbot Backend".to_string(),
    })
}
