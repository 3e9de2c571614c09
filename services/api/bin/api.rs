//! Main Entrypoint for the EduAssist API Service
//!
//! This binary is responsible for:
//! 1. Loading configuration from the environment.
//! 2. Loading the knowledge table (built-in or from `KNOWLEDGE_PATH`).
//! 3. Constructing the Axum router and applying middleware.
//! 4. Starting the web server and handling graceful shutdown.

use anyhow::Context;
use eduassist_api::{config::Config, router::create_router, state::AppState};
use eduassist_core::KnowledgeStore;
use std::{net::SocketAddr, sync::Arc};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

/// Listens for the `Ctrl+C` signal to gracefully shut down the server.
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    info!("Received shutdown signal. Shutting down gracefully...");
}

/// Loads the configured knowledge document, or falls back to the built-in table.
fn load_knowledge(config: &Config) -> anyhow::Result<KnowledgeStore> {
    match &config.knowledge_path {
        Some(path) => {
            let store = KnowledgeStore::load(path)
                .with_context(|| format!("Failed to load knowledge from {}", path.display()))?;
            info!(path = %path.display(), topics = store.topics().len(), "Loaded knowledge file.");
            Ok(store)
        }
        None => {
            let store = KnowledgeStore::builtin().clone();
            info!(topics = store.topics().len(), "Using built-in knowledge table.");
            Ok(store)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // --- 1. Load Configuration ---
    let config = Config::from_env().context("Failed to load configuration")?;

    // --- 2. Initialize Logging ---
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
        .init();
    info!("Configuration loaded. Initializing application state...");

    // --- 3. Load Knowledge ---
    let knowledge = Arc::new(load_knowledge(&config)?);
    let app_state = Arc::new(AppState::with_knowledge(knowledge));

    // --- 4. Create Router and Apply Middleware ---
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = create_router(app_state).layer(cors);

    // --- 5. Start Server ---
    info!(
        bind_address = %config.bind_address,
        "Service configured. Starting server..."
    );
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Server has shut down.");
    Ok(())
}
