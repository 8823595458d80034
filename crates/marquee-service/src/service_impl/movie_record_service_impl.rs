//! Movie record service backed by a cache region.

use crate::dto::{MovieRecordResponse, MovieRecordsResponse};
use crate::movie_record_service::MovieRecordService;
use async_trait::async_trait;
use indexmap::IndexMap;
use marquee_cache::{CacheBackend, KeyValueStore, MemoryStore, RegionBackend};
use marquee_core::{validation_errors_to_marquee_error, MarqueeError, MarqueeResult, MovieRecord};
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};
use validator::Validate;

const RESOURCE: &str = "Movie Record";

/// Region name used when no cache is wired in.
const DEFAULT_REGION: &str = "movie";

/// A region cache over process memory.
#[must_use]
pub fn in_memory_movie_record_cache() -> Arc<dyn CacheBackend<String, MovieRecord>> {
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    Arc::new(RegionBackend::new(DEFAULT_REGION, store))
}

/// Movie record service component for Shaku DI.
///
/// The cache is a component parameter so the server can hand in whichever
/// layout configuration selected.
#[derive(Component)]
#[shaku(interface = MovieRecordService)]
pub struct MovieRecordServiceComponent {
    #[shaku(default = in_memory_movie_record_cache())]
    cache: Arc<dyn CacheBackend<String, MovieRecord>>,
}

impl MovieRecordServiceComponent {
    /// Creates a service over `cache`.
    #[must_use]
    pub fn new(cache: Arc<dyn CacheBackend<String, MovieRecord>>) -> Self {
        Self { cache }
    }

    fn validate(record: &MovieRecord) -> MarqueeResult<()> {
        record
            .validate()
            .map_err(|errors| validation_errors_to_marquee_error(&errors))
    }
}

impl std::fmt::Debug for MovieRecordServiceComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MovieRecordServiceComponent")
            .field("cache", &self.cache.name())
            .finish()
    }
}

#[async_trait]
impl MovieRecordService for MovieRecordServiceComponent {
    async fn list(&self) -> MarqueeResult<MovieRecordsResponse> {
        let count = self.cache.count().await?;
        let movie_records = self.cache.multi_retrieve_list(None).await?;

        debug!(count, returned = movie_records.len(), "Listed movie records");
        Ok(MovieRecordsResponse {
            count,
            movie_records,
        })
    }

    async fn ping(&self) -> MarqueeResult<()> {
        self.cache.ping().await
    }

    async fn count(&self) -> MarqueeResult<u64> {
        self.cache.count().await
    }

    async fn map(&self) -> MarqueeResult<IndexMap<String, MovieRecord>> {
        self.cache.multi_retrieve_map().await
    }

    async fn get(&self, id: &str) -> MarqueeResult<MovieRecordResponse> {
        debug!("Getting movie record: {}", id);

        self.cache
            .retrieve(&id.to_string())
            .await?
            .map(MovieRecordResponse::from)
            .ok_or_else(|| MarqueeError::not_found(RESOURCE, id))
    }

    async fn create(&self, record: MovieRecord) -> MarqueeResult<MovieRecord> {
        Self::validate(&record)?;

        self.cache.insert(&record.id, &record).await?;

        info!(movie_record_id = %record.id, "Movie record stored");
        Ok(record)
    }

    async fn update(&self, record: MovieRecord) -> MarqueeResult<MovieRecord> {
        Self::validate(&record)?;

        if !self.cache.exists(&record.id).await? {
            return Err(MarqueeError::not_found(RESOURCE, &record.id));
        }

        self.cache.insert(&record.id, &record).await?;

        info!(movie_record_id = %record.id, "Movie record updated");
        Ok(record)
    }

    async fn delete(&self, id: &str) -> MarqueeResult<bool> {
        if !self.cache.delete(&id.to_string()).await? {
            return Err(MarqueeError::not_found(RESOURCE, id));
        }

        info!(movie_record_id = %id, "Movie record deleted");
        Ok(true)
    }
}
