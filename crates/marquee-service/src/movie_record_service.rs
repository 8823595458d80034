//! Movie record service trait definition.

use crate::dto::{MovieRecordResponse, MovieRecordsResponse};
use async_trait::async_trait;
use indexmap::IndexMap;
use marquee_core::{Interface, MarqueeResult, MovieRecord};

/// Movie record catalogue kept in a cache region.
#[async_trait]
pub trait MovieRecordService: Interface + Send + Sync {
    /// Lists every record with the region's record count.
    async fn list(&self) -> MarqueeResult<MovieRecordsResponse>;

    /// Checks that the backing store answers, without enumerating records.
    async fn ping(&self) -> MarqueeResult<()>;

    /// Number of records currently cached.
    async fn count(&self) -> MarqueeResult<u64>;

    /// Every record keyed by its id.
    async fn map(&self) -> MarqueeResult<IndexMap<String, MovieRecord>>;

    /// Gets a record by id.
    async fn get(&self, id: &str) -> MarqueeResult<MovieRecordResponse>;

    /// Stores a record under its id, replacing any previous one.
    async fn create(&self, record: MovieRecord) -> MarqueeResult<MovieRecord>;

    /// Replaces an existing record.
    async fn update(&self, record: MovieRecord) -> MarqueeResult<MovieRecord>;

    /// Deletes a record.
    async fn delete(&self, id: &str) -> MarqueeResult<bool>;
}
