//! Prompt Search Server - HTTP REST API for prompt and question search
//!
//! This crate exposes the `promptsearch` pipeline over HTTP. The catalog is
//! loaded once at startup and kept as an immutable snapshot; a reload builds a
//! complete new snapshot and swaps it in atomically, so a search never sees a
//! partially loaded dataset.
//!
//! # Features
//!
//! - **Middleware**: Compression, CORS, request ID tracking, structured logging
//! - **Configuration**: Environment variable and file-based configuration
//! - **Error Handling**: JSON error responses with error codes
//! - **Graceful Shutdown**: Proper signal handling for production deployments
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe with catalog counts
//! - `GET /api/v1/search?q=<text>` - Search prompts and questions
//! - `OPTIONS /api/v1/search` - CORS preflight
//! - `POST /api/v1/reload` - Reload the catalog from disk

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
