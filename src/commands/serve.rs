//! Serve command - Starts the HTTP server.

use crate::api::{create_router, AppState};
use crate::cli::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    tracing::info!("Starting server...");

    // One HTTP client for the process lifetime, shared by both Google API
    // clients (connection pooling happens inside reqwest).
    let http = reqwest::Client::new();

    let max_in_flight = config.max_concurrent_requests;
    let app_state = AppState::from_config(http, &config);

    // Build router
    let app = create_router(app_state, max_in_flight);

    // Start server
    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}
