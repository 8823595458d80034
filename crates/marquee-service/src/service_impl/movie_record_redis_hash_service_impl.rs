//! v2 movie record service over the hash layout.

use crate::dto::{MovieRecordRedisHashResponse, MovieRecordsRedisHashResponse};
use crate::movie_record_redis_hash_service::MovieRecordRedisHashService;
use async_trait::async_trait;
use marquee_cache::{CacheBackend, HashBackend, KeyValueStore, MemoryStore};
use marquee_core::{
    validation_errors_to_marquee_error, MarqueeError, MarqueeResult, MovieRecordRedisHash,
};
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};
use validator::Validate;

const RESOURCE: &str = "Movie Record";

const DEFAULT_HASH: &str = "MovieRecordRedisHash";

/// A hash cache over process memory.
#[must_use]
pub fn in_memory_movie_record_hash() -> Arc<dyn CacheBackend<String, MovieRecordRedisHash>> {
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    Arc::new(HashBackend::new(DEFAULT_HASH, store))
}

/// v2 movie record service component for Shaku DI.
#[derive(Component)]
#[shaku(interface = MovieRecordRedisHashService)]
pub struct MovieRecordRedisHashServiceComponent {
    #[shaku(default = in_memory_movie_record_hash())]
    cache: Arc<dyn CacheBackend<String, MovieRecordRedisHash>>,
}

impl MovieRecordRedisHashServiceComponent {
    /// Creates a service over `cache`.
    #[must_use]
    pub fn new(cache: Arc<dyn CacheBackend<String, MovieRecordRedisHash>>) -> Self {
        Self { cache }
    }
}

impl std::fmt::Debug for MovieRecordRedisHashServiceComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MovieRecordRedisHashServiceComponent")
            .field("cache", &self.cache.name())
            .finish()
    }
}

#[async_trait]
impl MovieRecordRedisHashService for MovieRecordRedisHashServiceComponent {
    async fn list(&self) -> MarqueeResult<MovieRecordsRedisHashResponse> {
        let count = self.cache.count().await?;
        let movie_records = self.cache.multi_retrieve_list(None).await?;

        Ok(MovieRecordsRedisHashResponse {
            count,
            movie_records,
        })
    }

    async fn get(&self, id: &str) -> MarqueeResult<MovieRecordRedisHashResponse> {
        debug!("Getting v2 movie record: {}", id);

        self.cache
            .retrieve(&id.to_string())
            .await?
            .map(MovieRecordRedisHashResponse::from)
            .ok_or_else(|| MarqueeError::not_found(RESOURCE, id))
    }

    async fn create(&self, record: MovieRecordRedisHash) -> MarqueeResult<MovieRecordRedisHash> {
        record
            .validate()
            .map_err(|errors| validation_errors_to_marquee_error(&errors))?;

        self.cache.insert(&record.id, &record).await?;

        info!(movie_record_id = %record.id, "v2 movie record stored");
        Ok(record)
    }

    async fn update(&self, record: MovieRecordRedisHash) -> MarqueeResult<MovieRecordRedisHash> {
        record
            .validate()
            .map_err(|errors| validation_errors_to_marquee_error(&errors))?;

        if self.cache.retrieve(&record.id).await?.is_none() {
            return Err(MarqueeError::not_found(RESOURCE, &record.id));
        }

        self.cache.insert(&record.id, &record).await?;

        info!(movie_record_id = %record.id, "v2 movie record updated");
        Ok(record)
    }

    async fn delete(&self, id: &str) -> MarqueeResult<()> {
        let removed = self.cache.delete(&id.to_string()).await?;

        debug!(movie_record_id = %id, removed, "v2 movie record delete");
        Ok(())
    }
}
