use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use daily_menu::{
    config::Config,
    db::{self, Cache, CacheWriterHandle},
    routes::{create_router, AppState, RngSource},
    services::{
        catalog,
        providers::{
            CachedCandidateProvider, CandidateProvider, InMemoryCandidateProvider,
            PgCandidateProvider,
        },
        RecommendationEngine,
    },
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("daily_menu=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let (provider, cache_writer) = build_provider(&config).await?;
    tracing::info!(provider = provider.name(), "Candidate provider ready");

    let state = AppState::new(
        RecommendationEngine::new(provider),
        config.default_budget,
        RngSource::from_seed(config.rng_seed),
    );
    let app = create_router(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!(address = %config.bind_address(), "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(handle) = cache_writer {
        handle.shutdown().await;
    }

    tracing::info!("Server stopped");
    Ok(())
}

/// Picks the candidate source from the configuration and optionally wraps it in the Redis cache
async fn build_provider(
    config: &Config,
) -> anyhow::Result<(Arc<dyn CandidateProvider>, Option<CacheWriterHandle>)> {
    let base: Arc<dyn CandidateProvider> = match &config.database_url {
        Some(database_url) => {
            let pool = db::create_pool(database_url).await?;
            db::run_migrations(&pool).await?;
            let provider = PgCandidateProvider::new(pool);

            if config.seed_sample_recipes {
                let written = provider.seed(&catalog::sample_recipes()).await?;
                tracing::info!(written, "Seeded sample recipes into database");
            }
            Arc::new(provider)
        }
        None if config.seed_sample_recipes => {
            Arc::new(InMemoryCandidateProvider::with_sample_catalog())
        }
        None => {
            tracing::warn!("No database and no sample recipes, every slot will use its default recipe");
            Arc::new(InMemoryCandidateProvider::default())
        }
    };

    match &config.redis_url {
        Some(redis_url) => {
            let client = db::create_redis_client(redis_url)?;
            let (cache, handle) = Cache::new(client);
            let cached: Arc<dyn CandidateProvider> = Arc::new(CachedCandidateProvider::new(
                base,
                cache,
                config.candidate_cache_ttl,
            ));
            Ok((cached, Some(handle)))
        }
        None => Ok((base, None)),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
