//! # Catalog Service
//!
//! Serves the product catalog and user directory over HTTP.
//!
//! ```bash
//! # Listen on the default address with compact logs
//! RUST_LOG=info cargo run -p catalog-service
//!
//! # JSON logs on another port
//! CATALOG_BIND=0.0.0.0:9000 CATALOG_LOG_FORMAT=json cargo run -p catalog-service
//! ```

use anyhow::Context;
use catalog_service::config::CliArgs;
use catalog_service::lifecycle::{shutdown_signal, CatalogSystem};
use clap::Parser;
use repository_framework::tracing::setup_tracing;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // Setup tracing once for the entire application
    setup_tracing(args.log_format);

    info!(bind_address = %args.bind, "Starting catalog service");

    let system = CatalogSystem::new().context("failed to load catalog")?;

    system
        .serve(args.bind, shutdown_signal())
        .await
        .context("catalog API failed")?;

    info!("Catalog service stopped");
    Ok(())
}
