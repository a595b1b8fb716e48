//! HTTP server for the attendance engine.
//!
//! Reads the holiday calendar from `ATTENDANCE_CONFIG_DIR` and serves the
//! API on `ATTENDANCE_BIND_ADDR`.

use std::env;

use attendance_engine::api::{AppState, create_router};
use attendance_engine::config::ConfigLoader;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const DEFAULT_CONFIG_DIR: &str = "./config/india";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging()?;

    let config_dir =
        env::var("ATTENDANCE_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let bind_addr =
        env::var("ATTENDANCE_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    info!(config_dir = %config_dir, "Starting attendance engine");

    let config = match ConfigLoader::load(&config_dir) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Failed to load holiday calendar");
            return Err(e.into());
        }
    };

    info!(
        calendar = %config.calendar().name,
        holidays = config.calendar().entries.len(),
        "Holiday calendar loaded"
    );

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(bind_addr = %bind_addr, "Listening");

    axum::serve(listener, router).await?;
    Ok(())
}
