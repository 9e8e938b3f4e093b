//! Gloss Server
//!
//! HTTP boundary for the knowledge-block validation pipeline.
//! Accepts document uploads, runs them through the validation service,
//! and maps outcomes to status codes.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;

use config::ServerConfig;
use gloss_extractor::ValidationService;
use handlers::{create_router, AppState};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Start the validation HTTP server
///
/// Builds the validation pipeline with the standard format adapters and
/// serves it until the process is stopped.
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Gloss server");
    info!("Bind address: {}", config.bind_addr());
    info!("Upload size cap: {} bytes", config.max_upload_bytes);

    let service = Arc::new(ValidationService::with_defaults());
    info!(
        "Supported formats: {}",
        service.supported_formats().join(", ")
    );

    let state = AppState {
        service,
        config: Arc::new(config.clone()),
    };

    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Server listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}
