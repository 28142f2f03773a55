use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{AppState, router};
use triage_core::{CoreConfig, TriageService, config::rules_file_from_env_value};

/// Main entry point for the triage service
///
/// Loads `.env`, resolves the keyword tables once and serves the REST API.
///
/// # Environment Variables
/// - `TRIAGE_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `TRIAGE_RULES_FILE`: Optional YAML keyword table override
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration, binding or serving fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("triage_run=info".parse()?)
                .add_directive("triage_core=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr: SocketAddr = std::env::var("TRIAGE_REST_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:3000".into())
        .parse()?;

    let rules_file = rules_file_from_env_value(std::env::var("TRIAGE_RULES_FILE").ok());
    let cfg = Arc::new(CoreConfig::resolve(rules_file)?);
    match cfg.rules_source() {
        Some(path) => tracing::info!("++ Keyword tables from {}", path.display()),
        None => tracing::info!("++ Keyword tables: built-in defaults"),
    }

    tracing::info!("++ Starting triage REST on {}", rest_addr);

    let app = router(AppState::new(TriageService::new(cfg)));
    let listener = tokio::net::TcpListener::bind(rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
