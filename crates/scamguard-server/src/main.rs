//! ScamGuard Analysis HTTP Server
//!
//! Serves rule-engine analysis of fraud reports over a REST API.

use anyhow::Result;
use scamguard_runtime::AnalysisService;
use scamguard_server::{
    api,
    config::{LogFormat, ServerConfig},
    source_loader,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;

    // Initialize tracing
    init_tracing(&config.log_level, config.log_format)?;
    info!("Loaded configuration: {:?}", config);

    // Initialize report source and analysis service
    let source = source_loader::init_source(&config)?;
    let service = AnalysisService::new(source);
    info!("Report source: {}", service.source_description());

    let app = api::create_router(Arc::new(service));

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    info!("✓ Server listening on http://{}", addr);
    info!("  Health check: http://{}/health", addr);
    info!("  Analysis API: http://{}/v1/analyze", addr);
    info!("  Rule table: http://{}/v1/rules", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialize tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured log level.
fn init_tracing(log_level: &str, log_format: LogFormat) -> Result<()> {
    let json = log_format == LogFormat::Json;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "scamguard_server={level},scamguard_runtime={level},tower_http=debug",
                    level = log_level
                )
                .into()
            }),
        )
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(tracing_subscriber::fmt::layer))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}
