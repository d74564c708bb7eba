//! flyq-api - Flight search service entry point
//!
//! Loads the flight CSV once, then serves the JSON API until Ctrl+C or
//! SIGTERM.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use flyq_common::config::{load_config_file, ConfigOverrides, ServiceConfig};
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flyq_api::store::RecordStore;
use flyq_api::{build_router, AppState};

/// Command-line arguments for flyq-api
#[derive(Parser, Debug)]
#[command(name = "flyq-api")]
#[command(about = "Flight search and mock booking API")]
#[command(version)]
struct Args {
    /// Address to bind
    #[arg(long, env = "FLYQ_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "FLYQ_PORT")]
    port: Option<u16>,

    /// CSV file with flight records
    #[arg(short, long, env = "FLYQ_DATA_FILE")]
    data_file: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, env = "FLYQ_LOG_LEVEL")]
    log_level: Option<String>,

    /// TOML config file (default: <config dir>/flyq/config.toml)
    #[arg(short, long, env = "FLYQ_CONFIG")]
    config: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            host: self.host.clone(),
            port: self.port,
            data_file: self.data_file.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let file_config =
        load_config_file(args.config.as_deref()).with_context(|| match &args.config {
            Some(path) => format!("Failed to load configuration from {}", path.display()),
            None => "Failed to load configuration".to_string(),
        })?;
    let config = ServiceConfig::resolve(&args.overrides(), &file_config);

    // RUST_LOG takes precedence over the configured level
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "flyq_api={0},flyq_common={0},tower_http={0}",
                    config.log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting flyq-api v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let store = RecordStore::load_csv(&config.data_file).with_context(|| {
        format!(
            "Failed to load flight data from {}",
            config.data_file.display()
        )
    })?;
    info!("✓ {} flights in memory", store.len());

    let app = build_router(AppState::new(store));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;

    info!("flyq-api listening on http://{}", bind_addr);
    info!("  GET  /api/flights             - all flights");
    info!("  GET  /api/flights/search      - search flights");
    info!("  GET  /api/flights/<number>    - flight details");
    info!("  GET  /api/flights/stats       - flight statistics");
    info!("  GET  /api/airlines            - all airlines");
    info!("  GET  /api/cities              - all cities");
    info!("  POST /api/book-flight         - book a flight");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
