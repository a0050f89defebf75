use anyhow::Result;
use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use student_records_api::{
    observability::{init_logging, request_id_middleware, LogConfig},
    AppState,
};
use student_records_store::InMemoryStore;
use tower_http::trace::TraceLayer;

mod config;

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::Config::load()?;

    init_logging(LogConfig {
        format: config.log_format,
        level: config.log_level.clone(),
        filter: None,
    })
    .map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!("Starting student records server");

    let store = match &config.fixture_path {
        Some(path) => InMemoryStore::load(path).await?,
        None => {
            tracing::warn!("No fixture_path configured, serving an empty store");
            InMemoryStore::new()
        }
    };

    let state = AppState::from_backend(Arc::new(store), config.api_settings());

    let app = Router::new()
        .route("/health", get(health_check))
        .merge(student_records_api::routes(state))
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
