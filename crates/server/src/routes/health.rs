use crate::state::ServerState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use std::time::SystemTime;

/// Global server start time for uptime calculation
static SERVER_START_TIME: once_cell::sync::Lazy<SystemTime> =
    once_cell::sync::Lazy::new(SystemTime::now);

fn uptime_seconds() -> u64 {
    SERVER_START_TIME
        .elapsed()
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Health check endpoint (liveness)
/// Returns 200 if server is running
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "prompt-search-server",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime_seconds": uptime_seconds(),
    }))
}

/// Readiness check endpoint
///
/// An empty catalog is still ready; searches simply return no matches.
pub async fn readiness_check(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    let catalog = state.catalog();

    Json(json!({
        "status": "ready",
        "service": "prompt-search-server",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime_seconds": uptime_seconds(),
        "question_match": state.matcher.options().question_match,
        "catalog": {
            "prompts": catalog.prompt_count(),
            "questions": catalog.question_count(),
            "loaded_at": state.loaded_at().to_rfc3339(),
        }
    }))
}
