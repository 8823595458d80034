//! Key/value store protocol used by the cache backends.
//!
//! Keys, fields and values are plain strings at this level. Typed encoding
//! happens in the backends.

mod glob;
mod memory;
mod redis_store;

pub use self::memory::MemoryStore;
pub use self::redis_store::{create_pool, RedisStore, ScanCursor};

use async_trait::async_trait;
use marquee_core::MarqueeResult;

/// Operations a cache backend needs from the remote store.
///
/// Bulk reads (`mget`, `hmget`) return one slot per requested key. Bulk
/// writes and deletes with empty input are no-ops.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Checks that the store answers, without reading any keys.
    async fn ping(&self) -> MarqueeResult<()>;

    /// Returns true if `key` exists.
    async fn exists(&self, key: &str) -> MarqueeResult<bool>;

    /// All keys matching the glob `pattern`, without duplicates.
    async fn scan_keys(&self, pattern: &str) -> MarqueeResult<Vec<String>>;

    async fn get(&self, key: &str) -> MarqueeResult<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> MarqueeResult<()>;

    async fn mget(&self, keys: &[String]) -> MarqueeResult<Vec<Option<String>>>;

    async fn mset(&self, pairs: &[(String, String)]) -> MarqueeResult<()>;

    /// Deletes `keys`, returning how many existed.
    async fn del(&self, keys: &[String]) -> MarqueeResult<u64>;

    async fn hexists(&self, hash: &str, field: &str) -> MarqueeResult<bool>;

    async fn hlen(&self, hash: &str) -> MarqueeResult<u64>;

    async fn hget(&self, hash: &str, field: &str) -> MarqueeResult<Option<String>>;

    async fn hset(&self, hash: &str, field: &str, value: &str) -> MarqueeResult<()>;

    async fn hset_many(&self, hash: &str, pairs: &[(String, String)]) -> MarqueeResult<()>;

    async fn hmget(&self, hash: &str, fields: &[String]) -> MarqueeResult<Vec<Option<String>>>;

    async fn hgetall(&self, hash: &str) -> MarqueeResult<Vec<(String, String)>>;

    /// All field/value pairs of `hash` whose field matches the glob `pattern`,
    /// without duplicates.
    async fn hscan(&self, hash: &str, pattern: &str) -> MarqueeResult<Vec<(String, String)>>;

    /// Deletes `fields` from `hash`, returning how many existed.
    async fn hdel(&self, hash: &str, fields: &[String]) -> MarqueeResult<u64>;
}
