//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API server on its own.
//!
//! ## Intended use
//! This binary is useful for development and debugging when you only want the REST server (with
//! OpenAPI/Swagger UI). The workspace's main `enrol-run` binary is the deployable entry point.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{build_router, AppState};
use enrol_core::{config::forward_endpoint_from_env_value, CoreConfig, RegistrationService};

/// Main entry point for the enrol REST API server
///
/// Starts the REST API server on the configured address (default: 0.0.0.0:3000).
/// Provides HTTP endpoints for registration operations with OpenAPI/Swagger documentation.
///
/// # Environment Variables
/// - `ENROL_REST_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `ENROL_FORWARD_ENDPOINT`: Endpoint the forwarding sink reports (default: "/api/users/save")
///
/// # Returns
/// * `Ok(())` - If server starts and runs successfully
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?)
                .add_directive("enrol_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("ENROL_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    tracing::info!("-- Starting enrol REST API on {}", addr);

    let forward_endpoint =
        forward_endpoint_from_env_value(std::env::var("ENROL_FORWARD_ENDPOINT").ok());
    let cfg = Arc::new(CoreConfig::new(forward_endpoint)?);

    let state = AppState::new(RegistrationService::new(cfg));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
