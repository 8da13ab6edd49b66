//! Serves the guidance backend API from the built-in reference catalog.

use std::sync::Arc;

use ai_risk_assessment::adapters::http::router;
use ai_risk_assessment::adapters::reference::ReferenceCatalog;
use ai_risk_assessment::config::AppConfig;
use ai_risk_assessment::telemetry::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.server.validate()?;

    let addr = config.server.socket_addr()?;
    let app = router(Arc::new(ReferenceCatalog::standard()), &config.server);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "serving AI risk assessment API");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
