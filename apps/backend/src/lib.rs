pub mod config;
pub mod error;
pub mod models;
pub mod routes;

use axum::{
    routing::{get, post},
    Router,
};
use dictation_core::JudgeSettings;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Service-wide judging defaults; requests may override per room.
    pub settings: JudgeSettings,
}

/// Build the router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Answer routes
        .route("/api/answers/judge", post(routes::answers::judge))
        .route("/api/answers/diff", post(routes::answers::diff))
        .route("/api/answers/validate", post(routes::answers::validate))
        // Sentence routes
        .route("/api/sentences/parse", post(routes::sentences::parse))
        .route("/api/sentences/reconstruct", post(routes::sentences::reconstruct))
        // Word selection routes
        .route("/api/word-selection", post(routes::word_selection::create))
        .route("/api/word-selection/answer", post(routes::word_selection::answer))
        // Scoring routes
        .route("/api/leaderboard", post(routes::leaderboard::build))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        "Judging with similarity threshold {} and close threshold {}%",
        config.judge.similarity_threshold,
        config.judge.close_threshold
    );

    let app = build_router(AppState {
        settings: config.judge,
    });

    let addr = config.addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
