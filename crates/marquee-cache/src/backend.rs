//! The contract shared by every cache layout.

use crate::{CacheKey, CacheValue};
use async_trait::async_trait;
use indexmap::IndexMap;
use marquee_core::MarqueeResult;

/// Typed access to the records of one cache region.
///
/// "Not found" is never an error: lookups return `None`, deletions return
/// `false`, and map-producing operations leave missing keys out. Every `Err`
/// is a store failure, passed through without retry.
///
/// Patterns use the store's glob syntax and are normalized first: `None` or
/// `""` matches everything, and a pattern without `*` gets one appended.
#[async_trait]
pub trait CacheBackend<K: CacheKey, V: CacheValue>: Send + Sync {
    /// Region (or hash) name this backend is bound to.
    fn name(&self) -> &str;

    /// Checks that the store answers. Constant cost, touches no records.
    async fn ping(&self) -> MarqueeResult<()>;

    /// Returns true if a record is stored under `key`.
    async fn exists(&self, key: &K) -> MarqueeResult<bool>;

    /// Number of records in the region.
    async fn count(&self) -> MarqueeResult<u64>;

    /// Number of records whose key matches `pattern`.
    async fn count_matching(&self, pattern: Option<&str>) -> MarqueeResult<u64>;

    /// Stores `value` under `key`, overwriting any previous value.
    async fn insert(&self, key: &K, value: &V) -> MarqueeResult<()>;

    /// Stores every entry of `entries`, overwriting previous values.
    async fn multi_insert(&self, entries: &IndexMap<K, V>) -> MarqueeResult<()>;

    /// Returns the value stored under `key`.
    async fn retrieve(&self, key: &K) -> MarqueeResult<Option<V>>;

    /// Logical keys matching `pattern`, in store enumeration order.
    async fn multi_retrieve_key_list(&self, pattern: Option<&str>) -> MarqueeResult<Vec<K>>;

    /// Values whose key matches `pattern`.
    ///
    /// Values removed between enumeration and fetch are dropped, so the
    /// result can be shorter than the number of keys matched.
    async fn multi_retrieve_list(&self, pattern: Option<&str>) -> MarqueeResult<Vec<V>>;

    /// Values for `keys`, one slot per input key, `None` where absent.
    async fn multi_retrieve_list_by_keys(&self, keys: &[K]) -> MarqueeResult<Vec<Option<V>>>;

    /// Every record of the region, keyed by logical key.
    async fn multi_retrieve_map(&self) -> MarqueeResult<IndexMap<K, V>>;

    /// Records whose key matches `pattern`, keyed by logical key.
    async fn multi_retrieve_map_matching(
        &self,
        pattern: Option<&str>,
    ) -> MarqueeResult<IndexMap<K, V>>;

    /// Records for `keys` that exist, keyed by logical key.
    async fn multi_retrieve_map_by_keys(&self, keys: &[K]) -> MarqueeResult<IndexMap<K, V>>;

    /// Removes the record under `key`. Returns true if something was removed.
    async fn delete(&self, key: &K) -> MarqueeResult<bool>;

    /// Removes the records under `keys`. Returns how many were removed.
    async fn delete_many(&self, keys: &[K]) -> MarqueeResult<u64>;
}
