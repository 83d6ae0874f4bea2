use crate::error::ServerResult;
use crate::state::ServerState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use std::sync::Arc;

/// Reload the catalog from the configured data directory
///
/// Queries in flight keep the snapshot they started with.
pub async fn reload_catalog(
    State(state): State<Arc<ServerState>>,
) -> ServerResult<impl IntoResponse> {
    let catalog = state.reload().await?;

    Ok(Json(json!({
        "status": "reloaded",
        "prompts": catalog.prompt_count(),
        "questions": catalog.question_count(),
        "loaded_at": state.loaded_at().to_rfc3339(),
    })))
}
