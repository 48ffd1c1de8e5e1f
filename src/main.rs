use std::sync::Arc;

use anyhow::Context;
use legal_assistant::{
    config::AppConfig,
    routes,
    state::{AppState, Mode},
};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,legal_assistant=debug")),
        )
        .init();

    let config = AppConfig::from_env();
    let state = Arc::new(AppState::new(&config));

    match state.mode() {
        Mode::Live => info!(model = %config.model, "completion API key found, running in live mode"),
        Mode::Demo => warn!("GROQ_API_KEY not set, running in demo mode with canned replies"),
    }

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router(&config.static_dir)
        .with_state(state)
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    info!(addr = %listener.local_addr()?, "legal assistant listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
