//! Type Guide - typography and color readability chatbot
//!
//! A small axum service around a pure conversation dispatcher. The browser
//! client holds the conversation state and sends it back on every turn.

mod api;
mod catalog;
mod config;
mod contrast;
mod dispatch;

use api::{create_router, AppState};
use catalog::Catalog;
use config::ServerConfig;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "type_guide=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    // Configuration
    let config = ServerConfig::from_env();

    // Build the catalog up front so the first request doesn't pay for it
    let topics = Catalog::global().keys(&[])?;
    tracing::info!(topics = ?topics, "Content catalog loaded");

    let state = AppState::new(config.default_flow);

    // Create router
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let compression = CompressionLayer::new()
        .gzip(true)
        .br(true)
        .deflate(true)
        .zstd(true);

    let app = create_router(state).layer(cors).layer(compression);

    // Start server
    let addr = config.bind_addr();
    tracing::info!(flow = %config.default_flow, "Type Guide server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
