mod api_doc;
mod app;
mod config;
mod error;
mod handlers;
mod hubspot;
mod models;
mod routes;
mod state;
mod views;

use anyhow::Context;
use config::Config;
use hubspot::HubSpotClient;
use state::AppState;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the process environment still applies
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,hubspot_cobj_proxy=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("hubspot-cobj-proxy starting");

    let config = Config::from_env()?;
    config.log_startup();

    let hubspot_client =
        HubSpotClient::from_config(&config).context("Failed to create HubSpot client")?;

    let addr = format!("{}:{}", config.service_host, config.service_port);
    let port = config.service_port;

    let state = AppState {
        crm: Arc::new(hubspot_client),
        config: Arc::new(config),
    };

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Server running on http://localhost:{}", port);

    axum::serve(listener, app::router(state))
        .await
        .context("Server error")?;

    Ok(())
}
