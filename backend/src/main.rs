//! Backend entry-point: configuration, tracing, HTTP server.

use clap::Parser;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use stockyard_backend::server::{AppConfig, run};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = AppConfig::parse();
    run(config).await
}
