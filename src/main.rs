//! Workbench - starter sites and Python lab dashboard
//!
//! Serves one site per process, chosen by the `SITE` environment variable.

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use workbench::config::{self, Config, LogFormat, LoggingConfig};
use workbench::{api, AppState, Result};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = config::init()?;

    init_tracing(config);
    tracing::info!(
        "Starting {} site on {}:{}",
        config.site,
        config.server.host,
        config.server.port
    );

    // Resolve host facts once; handlers only read them
    let state = AppState::new(config.clone()).await;
    tracing::info!("Application state initialized");

    api::status::init_startup_time();

    let app = api::app(state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| LoggingConfig::default_filter(config.server.debug).into());

    let registry = tracing_subscriber::registry().with(filter);
    match config.logging.format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

async fn shutdown_signal() {
    // Wait for Ctrl+C
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}
