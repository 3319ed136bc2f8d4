//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the aggregator REST API on its own, without loading `.env`.
//!
//! ## Intended use
//! Useful for development when the environment is already set. The workspace's main
//! `hospital-run` binary does the same after loading `.env`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hospital_core::{core_config_from_env_value, HospitalService, DEFAULT_REST_ADDR};

/// Main entry point for the hospital REST API server
///
/// # Environment Variables
/// - `HOSPITAL_REST_ADDR`: Server address (default: "0.0.0.0:8080")
/// - `HOSPITAL_API_BASE_URL`: Upstream API base URL
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the upstream base URL is invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("HOSPITAL_REST_ADDR").unwrap_or_else(|_| DEFAULT_REST_ADDR.into());
    let cfg = core_config_from_env_value(std::env::var("HOSPITAL_API_BASE_URL").ok())?;
    tracing::info!("-- Upstream API at {}", cfg.upstream_base_url());

    api_rest::serve(&addr, HospitalService::new(&cfg)).await
}
