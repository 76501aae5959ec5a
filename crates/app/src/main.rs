//! Portal - Main Entry Point
//!
//! Initializes logging and configuration, wires the pipeline and prints
//! the character list.

use std::process::ExitCode;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use portal_infrastructure::ApiConfig;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Logs go to stderr; stdout carries the rendered list only.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ApiConfig::from_env()?;

    tracing::info!(
        base_url = %config.base_url,
        "Starting Portal v{}",
        env!("CARGO_PKG_VERSION")
    );

    let view_model = portal::compose(&config)?;
    let state = portal::run(&view_model, &mut std::io::stdout()).await?;

    if state.is_error() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
