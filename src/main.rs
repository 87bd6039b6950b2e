use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use items_api::config::Config;
use items_api::logging::{init_logging, LogConfig};
use items_api::{api, InMemoryItemRepository};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    init_logging(LogConfig {
        json_format: config.log_json,
        ..LogConfig::default()
    })?;

    let repo = if config.no_seed {
        InMemoryItemRepository::new()
    } else {
        InMemoryItemRepository::seeded()
    };

    let addr = config.addr();
    api::serve_with_shutdown(Arc::new(repo), &addr, shutdown_signal())
        .await
        .with_context(|| format!("failed to serve on {addr}"))?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
