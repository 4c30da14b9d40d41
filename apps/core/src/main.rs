// EchoLearn Backend Entry Point
// Voice tutoring API: lesson catalog, intent interpretation, interaction logging

mod brain;
mod catalog;
mod config;
mod database;
mod diagnostics;
mod error;
mod models;
mod recorder;
mod routes;

#[cfg(test)]
mod tests;

use anyhow::Context;
use config::ServerConfig;
use database::{DocumentStore, SqliteDocumentStore};
use error::AppError;
use routes::AppState;
use std::sync::Arc;
use tracing::{error, info, warn};

/// `Ok(None)` when no store is configured.
async fn connect_store(cfg: &ServerConfig) -> Result<Option<Arc<dyn DocumentStore>>, AppError> {
    let Some(url) = cfg.database_url.as_deref() else {
        warn!("DATABASE_URL not set, interactions will not be persisted");
        return Ok(None);
    };

    let store = SqliteDocumentStore::connect(url, cfg.store_name()).await?;
    Ok(Some(Arc::new(store)))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => error!("Failed to listen for SIGTERM: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is normal outside development
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "echolearn_core=info,tower_http=info".into()),
        )
        .init();

    let cfg = ServerConfig::from_env().context("failed to read server configuration")?;

    let state = match connect_store(&cfg).await {
        Ok(store) => AppState::new(store, cfg.database_env()),
        Err(e) => {
            error!("Failed to initialize document store: {}", e);
            AppState::with_store_error(e.to_string(), cfg.database_env())
        }
    };
    info!(
        "Interaction persistence {}",
        if state.recorder.is_available() { "enabled" } else { "disabled" }
    );
    let app = routes::app(state);

    let addr = cfg.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("EchoLearn backend listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}
