use crate::error::ServerResult;
use crate::state::ServerState;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use promptsearch::{MatchResult, NormalizedQuery};
use std::sync::Arc;

/// Query string pairs of `GET /api/v1/search`, in request order
pub type SearchParams = Vec<(String, String)>;

/// First value of `q`; later repeats are ignored
pub fn query_param(params: &SearchParams) -> Option<&str> {
    params
        .iter()
        .find(|(key, _)| key == "q")
        .map(|(_, value)| value.as_str())
}

/// Search prompts and questions
///
/// A missing, empty or whitespace-only `q` is rejected with 400. No matches is
/// a 200 with both lists empty.
pub async fn search(
    State(state): State<Arc<ServerState>>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> ServerResult<Json<MatchResult>> {
    let Query(params) = params?;
    let query = NormalizedQuery::parse(query_param(&params).unwrap_or_default())?;
    let catalog = state.catalog();

    let result = state
        .matcher
        .search_normalized(&query, &catalog.prompts, &catalog.questions);

    tracing::info!(
        mode = %query.mode(),
        tokens = query.tokens().len(),
        prompts = result.results.len(),
        questions = result.results_q.len(),
        "search served"
    );

    Ok(Json(result))
}

/// CORS preflight for the search endpoint. Never touches the catalog.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}
