use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use promptsearch::{LoadError, MatchError, PipelineError};
use serde::{Deserialize, Serialize};

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("{0}")]
    MissingQuery(#[from] MatchError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Catalog unavailable: {0}")]
    Load(LoadError),

    #[error("Request timeout")]
    Timeout,

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found")]
    NotFound,
}

/// API error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ServerError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::MissingQuery(_) | ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Timeout => StatusCode::REQUEST_TIMEOUT,
            ServerError::NotFound => StatusCode::NOT_FOUND,
            ServerError::Load(_) | ServerError::Internal(_) | ServerError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get error code string
    pub fn error_code(&self) -> &'static str {
        match self {
            ServerError::MissingQuery(_) => "MISSING_QUERY",
            ServerError::BadRequest(_) => "BAD_REQUEST",
            ServerError::Load(_) => "CATALOG_UNAVAILABLE",
            ServerError::Timeout => "REQUEST_TIMEOUT",
            ServerError::Internal(_) => "INTERNAL_ERROR",
            ServerError::Config(_) => "CONFIG_ERROR",
            ServerError::NotFound => "NOT_FOUND",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code().to_string();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(code = %error_code, error = %message, "request failed");
        }

        let body = Json(ErrorResponse {
            error: ErrorDetail {
                code: error_code,
                message,
            },
        });

        (status, body).into_response()
    }
}

impl From<LoadError> for ServerError {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::Cancelled | LoadError::DeadlineExceeded => ServerError::Timeout,
            other => ServerError::Load(other),
        }
    }
}

impl From<PipelineError> for ServerError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::Load(err) => err.into(),
            PipelineError::Match(err) => err.into(),
        }
    }
}

impl From<tokio::task::JoinError> for ServerError {
    fn from(err: tokio::task::JoinError) -> Self {
        ServerError::Internal(format!("catalog load task failed: {err}"))
    }
}

impl From<QueryRejection> for ServerError {
    fn from(err: QueryRejection) -> Self {
        ServerError::BadRequest(err.body_text())
    }
}
