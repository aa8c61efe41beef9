mod applications;
mod config;
mod db;
mod errors;
mod jobs;
mod matching;
mod models;
mod profile;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::jobs::source::{JobSource, PgJobSource, StaticJobSource};
use crate::matching::matcher::KeywordJobMatcher;
use crate::profile::store::{InMemoryProfileStore, ProfileStore, RedisProfileStore};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobFit API v{}", env!("CARGO_PKG_VERSION"));

    let profiles: Arc<dyn ProfileStore> = match &config.redis_url {
        Some(url) => {
            let client = redis::Client::open(url.as_str()).context("Invalid REDIS_URL")?;
            info!("Profile store: Redis");
            Arc::new(RedisProfileStore::new(client))
        }
        None => {
            info!("Profile store: in-memory (REDIS_URL not set)");
            Arc::new(InMemoryProfileStore::new())
        }
    };

    let jobs: Arc<dyn JobSource> = match &config.database_url {
        Some(url) => {
            let pool = create_pool(url).await?;
            info!("Job source: PostgreSQL");
            Arc::new(PgJobSource::new(pool))
        }
        None => {
            info!("Job source: built-in sample postings (DATABASE_URL not set)");
            Arc::new(StaticJobSource::sample())
        }
    };

    let matcher = Arc::new(KeywordJobMatcher::new(config.match_weighting.weights()));
    info!("Job matcher: keyword ({:?} weighting)", config.match_weighting);

    let state = AppState {
        profiles,
        jobs,
        matcher,
        config: config.clone(),
    };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
