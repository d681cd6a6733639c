// Main entry point for the BiasRadar API server

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use bias_radar_core::kernel::{NewsApiAdapter, ServerDeps, VaderSentimentScorer};
use bias_radar_core::server::{build_app, AppOptions};
use bias_radar_core::Config;
use newsapi_client::NewsApiClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,bias_radar_core=debug,newsapi_client=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting BiasRadar API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        newsapi_base_url = %config.newsapi_base_url,
        port = config.port,
        "Configuration loaded"
    );

    // News provider
    let newsapi = NewsApiClient::with_options(
        config.newsapi_key.clone(),
        config.newsapi_base_url.clone(),
        Duration::from_secs(config.newsapi_timeout_secs),
    )
    .context("Failed to create NewsAPI client")?;

    let deps = ServerDeps::new(
        Arc::new(NewsApiAdapter::new(newsapi)),
        Arc::new(VaderSentimentScorer::new()),
    );

    // Build application
    let app = build_app(
        deps,
        AppOptions {
            allowed_origins: config.allowed_origins.clone(),
            request_timeout: Duration::from_secs(config.request_timeout_secs),
        },
    );

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Analyze endpoint: http://localhost:{}/api/analyze", config.port);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
