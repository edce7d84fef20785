//! Planning Poker server - Main entry point.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use planning_poker::adapters::http::{app_router, StoryHandlers};
use planning_poker::adapters::postgres::{
    self, PostgresSessionRegistry, PostgresStoryRepository, PostgresVoteReader,
};
use planning_poker::application::{
    CreateStoryHandler, DeleteStoryHandler, GetStoryStatusHandler, ListStoriesHandler,
    UpdateStoryStatusHandler,
};
use planning_poker::config::{AppConfig, LogFormat, ServerConfig};
use planning_poker::ports::{SessionRegistry, StoryRepository, VoteReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("loading configuration")?;
    config.validate().context("validating configuration")?;

    init_tracing(&config.server);
    tracing::info!(
        environment = ?config.server.environment,
        "Starting planning-poker"
    );

    let pool = postgres::connect(&config.database)
        .await
        .context("connecting to PostgreSQL")?;

    if config.database.run_migrations {
        tracing::info!("Running database migrations");
        postgres::migrate(&pool)
            .await
            .context("running migrations")?;
    }

    let sessions: Arc<dyn SessionRegistry> = Arc::new(PostgresSessionRegistry::new(pool.clone()));
    let stories: Arc<dyn StoryRepository> = Arc::new(PostgresStoryRepository::new(pool.clone()));
    let votes: Arc<dyn VoteReader> = Arc::new(PostgresVoteReader::new(pool));

    let handlers = StoryHandlers::new(
        Arc::new(CreateStoryHandler::new(sessions.clone(), stories.clone())),
        Arc::new(ListStoriesHandler::new(sessions.clone(), stories.clone())),
        Arc::new(GetStoryStatusHandler::new(
            sessions.clone(),
            stories.clone(),
            votes,
        )),
        Arc::new(UpdateStoryStatusHandler::new(sessions.clone(), stories.clone())),
        Arc::new(DeleteStoryHandler::new(sessions, stories)),
    );

    let app = app_router(handlers, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    match server.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // Without a signal handler the server runs until killed.
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
