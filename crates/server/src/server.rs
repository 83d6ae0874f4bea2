//! Server initialization and routing
//!
//! This module handles the Axum server setup including:
//! - Router configuration with all API endpoints
//! - Middleware stack (request id, logging, timeout, compression, CORS)
//! - Graceful shutdown handling

use crate::config::ServerConfig;
use crate::middleware::{log_requests, request_id};
use crate::routes::{api_info, not_found};
use crate::routes::{health, reload, search};
use crate::state::ServerState;
use axum::http::{header, Method, StatusCode};
use axum::middleware::from_fn;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Build the Axum router with all routes and middleware
///
/// Middleware stack, outermost first:
/// 1. Trace layer
/// 2. Request ID tracking
/// 3. Request logging
/// 4. CORS (when enabled)
/// 5. Compression
/// 6. Timeout handling
pub fn build_router(state: Arc<ServerState>) -> Router {
    let api_routes = Router::new()
        .route(
            "/api/v1/search",
            get(search::search).options(search::preflight),
        )
        .route("/api/v1/reload", post(reload::reload_catalog));

    let public_routes = Router::new()
        .route("/", get(api_info))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check));

    let router = Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .fallback(not_found)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            state.config.timeout(),
        ))
        .layer(CompressionLayer::new());

    let router = if state.config.enable_cors {
        router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
    } else {
        router
    };

    router
        .layer(from_fn(log_requests))
        .layer(from_fn(request_id))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the Prompt Search HTTP server
///
/// Loads the catalog from the configured data directory, then serves until
/// SIGTERM or Ctrl+C. A catalog that cannot be loaded at startup is fatal.
///
/// # Example
///
/// ```rust,no_run
/// use server::ServerConfig;
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let config = ServerConfig::load()?;
///     server::start_server(config).await?;
///     Ok(())
/// }
/// ```
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(&config.log_level)
        .with_target(false)
        .with_thread_ids(true)
        .with_thread_names(true)
        .json()
        .init();

    let addr: SocketAddr = config.socket_addr()?;

    let state = Arc::new(ServerState::new(config.clone()).await?);
    let catalog = state.catalog();

    let app = build_router(state);

    tracing::info!(
        "Starting Prompt Search server on {} with {} prompts and {} questions",
        addr,
        catalog.prompt_count(),
        catalog.question_count()
    );
    tracing::info!(
        "Data dir: {}, question match: {:?}",
        config.data_dir.display(),
        config.question_match
    );
    tracing::info!(
        "Timeout: {}s, load timeout: {}s, CORS: {}",
        config.timeout_secs,
        config.load_timeout_secs,
        config.enable_cors
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Shutdown signal handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
