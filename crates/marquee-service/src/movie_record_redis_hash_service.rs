//! v2 movie record service trait definition.

use crate::dto::{MovieRecordRedisHashResponse, MovieRecordsRedisHashResponse};
use async_trait::async_trait;
use marquee_core::{Interface, MarqueeResult, MovieRecordRedisHash};

/// Movie records kept as fields of a single Redis hash.
#[async_trait]
pub trait MovieRecordRedisHashService: Interface + Send + Sync {
    /// Lists every record with the hash size.
    async fn list(&self) -> MarqueeResult<MovieRecordsRedisHashResponse>;

    /// Gets a record by id.
    async fn get(&self, id: &str) -> MarqueeResult<MovieRecordRedisHashResponse>;

    /// Stores a record under its id, replacing any previous one.
    async fn create(&self, record: MovieRecordRedisHash) -> MarqueeResult<MovieRecordRedisHash>;

    /// Replaces an existing record.
    async fn update(&self, record: MovieRecordRedisHash) -> MarqueeResult<MovieRecordRedisHash>;

    /// Deletes a record. Deleting an unknown id is not an error.
    async fn delete(&self, id: &str) -> MarqueeResult<()>;
}
