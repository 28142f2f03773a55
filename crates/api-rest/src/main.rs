//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API server on its own, without the workspace runner's `.env` handling.
//!
//! ## Intended use
//! Useful for development and debugging of the HTTP surface (with OpenAPI/Swagger UI).

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, AppState};
use triage_core::{config::rules_file_from_env_value, CoreConfig, TriageService};

/// Main entry point for the triage REST API server
///
/// # Environment Variables
/// - `TRIAGE_REST_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `TRIAGE_RULES_FILE`: Optional YAML keyword table override
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the keyword override file cannot be read or is invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?)
                .add_directive("triage_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("TRIAGE_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    let rules_file = rules_file_from_env_value(std::env::var("TRIAGE_RULES_FILE").ok());
    let cfg = Arc::new(CoreConfig::resolve(rules_file)?);

    tracing::info!("-- Starting triage REST API on {}", addr);

    let app = router(AppState::new(TriageService::new(cfg)));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
