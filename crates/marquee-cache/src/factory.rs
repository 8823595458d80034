//! Startup selection of the store and the cache layout.

use crate::store::{KeyValueStore, MemoryStore, RedisStore};
use crate::{CacheBackend, CacheKey, CacheValue, HashBackend, RegionBackend};
use marquee_config::{CacheStrategy, RedisConfig};
use marquee_core::{MarqueeError, MarqueeResult};
use std::sync::Arc;
use tracing::{info, warn};

/// Connects to Redis, or falls back to an in-process store when Redis is
/// disabled in configuration.
pub async fn connect_store(config: &RedisConfig) -> MarqueeResult<Arc<dyn KeyValueStore>> {
    if config.enabled {
        let store = RedisStore::connect(config).await?;
        Ok(Arc::new(store))
    } else {
        warn!("Redis is disabled, cached records will live in process memory");
        Ok(Arc::new(MemoryStore::new()))
    }
}

/// Builds the cache backend for `name` using the configured layout.
///
/// This is the only place a layout is chosen; callers see the trait object.
pub fn build_backend<K, V>(
    strategy: CacheStrategy,
    name: &str,
    store: Arc<dyn KeyValueStore>,
) -> MarqueeResult<Arc<dyn CacheBackend<K, V>>>
where
    K: CacheKey,
    V: CacheValue,
{
    if name.trim().is_empty() {
        return Err(MarqueeError::Configuration(
            "Cache name must not be empty".to_string(),
        ));
    }

    info!(strategy = %strategy, name = %name, "Building cache backend");

    let backend: Arc<dyn CacheBackend<K, V>> = match strategy {
        CacheStrategy::Region => Arc::new(RegionBackend::new(name, store)),
        CacheStrategy::Hash => Arc::new(HashBackend::new(name, store)),
    };
    Ok(backend)
}
