use anyhow::{Context, Result};
use clap::Parser;
use conference_feed::config::Config;
use conference_feed::fetch::HttpPageSource;
use conference_feed::logging;
use conference_feed::server::{self, AppState};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_logging();
    let config = Config::parse();

    let source = HttpPageSource::from_config(&config).context("Failed to build HTTP client")?;
    let addr = config.bind_addr();
    info!(
        %addr,
        static_dir = %config.static_dir.display(),
        standings_url = %config.standings_url,
        schedule_url = %config.schedule_url,
        "Server configuration"
    );

    let app = server::router(AppState::new(Arc::new(source), config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server is running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Could not listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
