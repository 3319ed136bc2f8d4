use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hospital_core::{DEFAULT_REST_ADDR, HospitalService, core_config_from_env_value};

/// Main entry point for the hospital aggregator
///
/// Loads `.env` if present, then serves the REST API backed by the upstream hospital-records API.
///
/// # Environment Variables
/// - `HOSPITAL_REST_ADDR`: REST server address (default: "0.0.0.0:8080")
/// - `HOSPITAL_API_BASE_URL`: Upstream API base URL
///   (default: "https://web.socem.plymouth.ac.uk/COMP2005/api/")
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration is invalid or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hospital_run=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr =
        std::env::var("HOSPITAL_REST_ADDR").unwrap_or_else(|_| DEFAULT_REST_ADDR.into());
    let cfg = core_config_from_env_value(std::env::var("HOSPITAL_API_BASE_URL").ok())?;

    tracing::info!("++ Upstream API at {}", cfg.upstream_base_url());
    tracing::info!("++ Starting hospital aggregator on {}", rest_addr);

    api_rest::serve(&rest_addr, HospitalService::new(&cfg)).await
}
