//! Dependency injection module using Shaku.

use marquee_cache::{build_backend, connect_store, CacheBackend, CacheStrategy};
use marquee_config::AppConfig;
use marquee_core::{module, MarqueeResult, MovieRecord, MovieRecordRedisHash};
use marquee_service::{
    MemoryUserService, MovieRecordRedisHashServiceComponent,
    MovieRecordRedisHashServiceComponentParameters, MovieRecordServiceComponent,
    MovieRecordServiceComponentParameters,
};
use std::sync::Arc;
use tracing::info;

// Services for a single process: the in-memory user directory, the
// movie record catalogue over the configured cache layout and the v2
// records in their fixed hash.
module! {
    pub MarqueeModule {
        components = [
            MemoryUserService,
            MovieRecordServiceComponent,
            MovieRecordRedisHashServiceComponent,
        ],
        providers = [],
    }
}

/// Builds the module around already selected movie record caches.
pub fn build_module(
    cache: Arc<dyn CacheBackend<String, MovieRecord>>,
    hash: Arc<dyn CacheBackend<String, MovieRecordRedisHash>>,
) -> Arc<MarqueeModule> {
    let module = MarqueeModule::builder()
        .with_component_parameters::<MovieRecordServiceComponent>(
            MovieRecordServiceComponentParameters { cache },
        )
        .with_component_parameters::<MovieRecordRedisHashServiceComponent>(
            MovieRecordRedisHashServiceComponentParameters { cache: hash },
        )
        .build();

    Arc::new(module)
}

/// Connects the store and binds the cache layout named in configuration.
pub async fn build_marquee_module(config: &AppConfig) -> MarqueeResult<Arc<MarqueeModule>> {
    let store = connect_store(&config.redis).await?;
    let cache = build_backend::<String, MovieRecord>(
        config.cache.strategy,
        &config.cache.movie_record_cache_name,
        store.clone(),
    )?;
    let hash = build_backend::<String, MovieRecordRedisHash>(
        CacheStrategy::Hash,
        &config.cache.movie_record_hash_name,
        store,
    )?;

    info!(
        strategy = %config.cache.strategy,
        cache = %config.cache.movie_record_cache_name,
        hash = %config.cache.movie_record_hash_name,
        "Movie record caches ready"
    );

    Ok(build_module(cache, hash))
}
