//! Activities server binary for Mergington High School.
//!
//! Entry point that wires together the seeded roster store and the HTTP
//! layer. It initializes logging, loads configuration from the environment,
//! seeds the store from the default catalog, and serves requests until the
//! process is terminated.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load server configuration from environment variables
//! 3. Seed the roster store from the default catalog
//! 4. Bind and serve the HTTP API

use std::sync::Arc;

use mergington_roster::{RosterStore, default_catalog};
use mergington_server::server::{ServerConfig, start_server};
use mergington_server::state::AppState;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the server fails to
/// bind or serve.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("mergington-server starting");

    // 2. Load configuration.
    let config = ServerConfig::from_env()?;
    info!(host = config.host, port = config.port, "configuration loaded");

    // 3. Seed the roster store.
    let store = RosterStore::with_catalog(default_catalog());
    info!(activity_count = store.activity_count(), "roster store seeded");

    // 4. Serve.
    let state = Arc::new(AppState::new(store));
    start_server(&config, state).await?;

    Ok(())
}
