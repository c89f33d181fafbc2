//! Risk scorer entrypoint: load config and model, then serve `POST /predict`.
//! A missing or unreadable model aborts startup before the listener binds.

use risk_scorer::{
    config::ScorerConfig, logging::StructuredLogger, model::load_model, server,
    service::RiskService,
};
use std::sync::Arc;
use tracing::{error, info};

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "failed to listen for Ctrl+C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => error!(error = %e, "failed to listen for SIGTERM"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = ScorerConfig::from_env()?;

    StructuredLogger::init(config.log.json, &config.log.level);

    info!(model_path = ?config.model_path, "risk scorer starting");

    let model = match load_model(&config.model_path, &config.model) {
        Ok(m) => m,
        Err(e) => {
            error!(error = %e, "model load failed; refusing to serve");
            return Err(e.into());
        }
    };
    let service = Arc::new(RiskService::new(model, config.risk.clone()));
    let app = server::router(service);

    let bind_addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, "listening; POST /predict");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("risk scorer stopping");
    Ok(())
}
