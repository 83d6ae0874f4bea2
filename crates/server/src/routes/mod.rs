//! API route handlers
//!
//! - `health`: liveness and readiness
//! - `search`: keyword search and its CORS preflight
//! - `reload`: atomic catalog reload

pub mod health;
pub mod reload;
pub mod search;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info
///
/// # Response
///
/// ```json
/// {
///   "name": "Prompt Search Server",
///   "version": "0.1.0",
///   "api_version": "v1",
///   "endpoints": ["..."]
/// }
/// ```
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "Prompt Search Server",
        "version": env!("CARGO_PKG_VERSION"),
        "api_version": "v1",
        "endpoints": [
            "/api/v1/search",
            "/api/v1/reload",
            "/health",
            "/ready"
        ]
    })))
}

/// 404 Not Found handler
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
