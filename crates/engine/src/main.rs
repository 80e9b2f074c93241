//! Trivia Engine - Main entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trivia_engine::api;
use trivia_engine::infrastructure::{
    config::{load_dotenv_from, EngineConfig},
    sqlite::{seed_demo_data, SqliteRepositories},
};
use trivia_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the engine is usually run from `crates/engine`).
    load_dotenv_from(&std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join(".."));

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trivia_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Trivia Engine");

    let config = EngineConfig::from_env();

    // Open SQLite and ensure schema
    tracing::info!("Opening database at {}", config.database_path);
    let repos = SqliteRepositories::connect(&config.database_path).await?;

    if config.seed_demo_data {
        seed_demo_data(&repos.pool).await?;
    }

    // Create application
    let app = Arc::new(App::new(repos));

    let mut router = api::http::routes()
        .with_state(app)
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = api::cors::cors_layer(config.cors_allowed_origins.as_deref()) {
        router = router.layer(cors);
    }

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server_host, config.server_port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
