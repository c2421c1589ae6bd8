use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use diagnosify_core::{
    config::{catalog_path_from_env_value, resolve_catalog},
    CoreConfig, DEFAULT_REST_ADDR,
};

/// Main entry point for the DIAGNOSIFY application
///
/// Loads the condition catalog once, then serves the REST API on port 3000 (configurable via
/// `DIAGNOSIFY_REST_ADDR`). The catalog is shared read-only by every request.
///
/// # Environment Variables
/// - `DIAGNOSIFY_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `DIAGNOSIFY_CATALOG`: Path to a YAML condition catalog (default: built-in catalog)
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration, startup or the server itself fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("diagnosify_run=info".parse()?)
                .add_directive("api_rest=info".parse()?)
                .add_directive("diagnosify_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr =
        std::env::var("DIAGNOSIFY_REST_ADDR").unwrap_or_else(|_| DEFAULT_REST_ADDR.into());
    let catalog_path = catalog_path_from_env_value(std::env::var("DIAGNOSIFY_CATALOG").ok());

    tracing::info!("++ Starting DIAGNOSIFY REST on {}", rest_addr);
    if let Some(path) = &catalog_path {
        tracing::info!("++ Using condition catalog {}", path.display());
    }

    let cfg = Arc::new(CoreConfig::new(resolve_catalog(catalog_path)?));

    api_rest::serve(&rest_addr, cfg).await
}
