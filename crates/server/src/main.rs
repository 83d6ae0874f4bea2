//! Prompt Search Server - HTTP REST API for prompt and question search
//!
//! Reads `.env` if present, then configuration from `server.*` and
//! `PROMPT_SEARCH__*` environment variables.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            return Err(err.into());
        }
    }

    // Load configuration
    let config = ServerConfig::load()?;

    // Start server
    server::start_server(config).await?;

    Ok(())
}
