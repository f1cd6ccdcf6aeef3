use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{build_router, AppState};
use enrol_core::{config::forward_endpoint_from_env_value, CoreConfig, RegistrationService};

/// Main entry point for the enrol application
///
/// Starts the REST server and serves the registration API with
/// OpenAPI/Swagger documentation.
///
/// # Environment Variables
/// - `ENROL_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `ENROL_FORWARD_ENDPOINT`: Endpoint the forwarding sink reports (default: "/api/users/save")
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If server startup or runtime fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("enrol_run=info".parse()?)
                .add_directive("enrol_core=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("ENROL_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    tracing::info!("++ Starting enrol REST on {}", rest_addr);

    let forward_endpoint =
        forward_endpoint_from_env_value(std::env::var("ENROL_FORWARD_ENDPOINT").ok());
    let cfg = std::sync::Arc::new(CoreConfig::new(forward_endpoint)?);
    tracing::info!("++ Forwarding sink endpoint: {}", cfg.forward_endpoint());

    let service = RegistrationService::new(cfg);
    tracing::info!(
        "Registry initialised with {} record(s)",
        service.registry().size()
    );

    let app = build_router(AppState::new(service));

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
