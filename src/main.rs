use std::sync::Arc;

use anyhow::Context;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use marketing_chat_relay::{config::Config, routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "marketing_chat_relay=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::debug!(?config, "loaded configuration");
    if config.nim_api_key.is_none() {
        tracing::warn!("NIM_API_KEY is not set; /api/chat will answer 500 until it is configured");
    }

    let state = Arc::new(AppState::from_config(&config).context("failed to build NIM client")?);

    let app = routes::create_router(&config.static_dir)
        .with_state(state)
        .layer(CorsLayer::very_permissive());

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("🚀 Digital marketing chat relay running on http://{addr}");
    tracing::info!("🔑 Using NVIDIA NIM API with model {}", config.nim_model);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
    }
    tracing::info!("shutting down");
}
