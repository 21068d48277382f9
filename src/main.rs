// src/main.rs

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use wetsim_backend::api::http::health_check;
use wetsim_backend::api::ws::ws_chat_handler;
use wetsim_backend::config::CONFIG;
use wetsim_backend::llm::OpenAiBackend;
use wetsim_backend::state::AppState;

/// Graceful shutdown signal handler for SIGTERM and Ctrl+C
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections...");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let level = CONFIG.logging.level.parse().unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    CONFIG.validate()?;

    info!("Starting wetsim backend");
    info!("Model: {}", CONFIG.openai.model);

    let backend = Arc::new(OpenAiBackend::from_config(&CONFIG.openai)?);
    let app_state = Arc::new(AppState::new(backend));

    let cors = if CONFIG.server.allowed_origin == "*" {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(CONFIG.server.allowed_origin.parse::<axum::http::HeaderValue>()?)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let mut app = Router::new()
        .route("/ws", get(ws_chat_handler))
        .route("/health", get(health_check));

    // Serve the built client in production deployments only.
    if CONFIG.server.serve_static {
        info!("Serving static files from {}", CONFIG.server.static_dir);
        app = app.fallback_service(ServeDir::new(&CONFIG.server.static_dir));
    }

    let app = app.layer(cors).with_state(app_state);

    let bind_address = CONFIG.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    info!("WebSocket server listening on ws://{}/ws", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");
    Ok(())
}
