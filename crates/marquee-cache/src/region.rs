//! Region layout: one prefixed key per record.

use crate::key::{decode, decode_all, encode};
use crate::store::KeyValueStore;
use crate::{assemble, CacheBackend, CacheKey, CacheValue, KeyCodec};
use async_trait::async_trait;
use indexmap::IndexMap;
use marquee_core::MarqueeResult;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;

/// Stores every record under its own key, `<region>.<key>`.
///
/// Counting and pattern queries enumerate the keyspace with a `<region>.`
/// scan, so they are linear in the size of the region.
pub struct RegionBackend<K, V> {
    codec: KeyCodec,
    store: Arc<dyn KeyValueStore>,
    _types: PhantomData<fn() -> (K, V)>,
}

impl<K: CacheKey, V: CacheValue> RegionBackend<K, V> {
    /// Create a backend for `region` over `store`.
    pub fn new(region: impl Into<String>, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            codec: KeyCodec::new(region),
            store,
            _types: PhantomData,
        }
    }

    fn physical_keys(&self, keys: &[K]) -> Vec<String> {
        keys.iter().map(|key| self.codec.physical_key(key)).collect()
    }

    async fn scan(&self, pattern: Option<&str>) -> MarqueeResult<Vec<String>> {
        self.store.scan_keys(&self.codec.pattern_key(pattern)).await
    }
}

#[async_trait]
impl<K: CacheKey, V: CacheValue> CacheBackend<K, V> for RegionBackend<K, V> {
    fn name(&self) -> &str {
        self.codec.region()
    }

    async fn ping(&self) -> MarqueeResult<()> {
        self.store.ping().await
    }

    async fn exists(&self, key: &K) -> MarqueeResult<bool> {
        self.store.exists(&self.codec.physical_key(key)).await
    }

    async fn count(&self) -> MarqueeResult<u64> {
        self.count_matching(None).await
    }

    async fn count_matching(&self, pattern: Option<&str>) -> MarqueeResult<u64> {
        Ok(self.scan(pattern).await?.len() as u64)
    }

    async fn insert(&self, key: &K, value: &V) -> MarqueeResult<()> {
        self.store
            .set(&self.codec.physical_key(key), &encode(value)?)
            .await
    }

    async fn multi_insert(&self, entries: &IndexMap<K, V>) -> MarqueeResult<()> {
        if entries.is_empty() {
            return Ok(());
        }

        let pairs = entries
            .iter()
            .map(|(key, value)| -> MarqueeResult<(String, String)> {
                Ok((self.codec.physical_key(key), encode(value)?))
            })
            .collect::<MarqueeResult<Vec<_>>>()?;

        self.store.mset(&pairs).await
    }

    async fn retrieve(&self, key: &K) -> MarqueeResult<Option<V>> {
        self.store
            .get(&self.codec.physical_key(key))
            .await?
            .as_deref()
            .map(decode)
            .transpose()
    }

    async fn multi_retrieve_key_list(&self, pattern: Option<&str>) -> MarqueeResult<Vec<K>> {
        Ok(self
            .scan(pattern)
            .await?
            .iter()
            .filter_map(|physical| self.codec.logical_key(physical))
            .collect())
    }

    async fn multi_retrieve_list(&self, pattern: Option<&str>) -> MarqueeResult<Vec<V>> {
        let keys = self.scan(pattern).await?;
        if keys.is_empty() {
            return Ok(Vec::new());
        }

        let values = decode_all::<V>(self.store.mget(&keys).await?)?;
        let found: Vec<V> = values.into_iter().flatten().collect();

        if found.len() < keys.len() {
            debug!(
                region = %self.codec.region(),
                matched = keys.len(),
                found = found.len(),
                "Records vanished between scan and fetch"
            );
        }

        Ok(found)
    }

    async fn multi_retrieve_list_by_keys(&self, keys: &[K]) -> MarqueeResult<Vec<Option<V>>> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }

        decode_all(self.store.mget(&self.physical_keys(keys)).await?)
    }

    async fn multi_retrieve_map(&self) -> MarqueeResult<IndexMap<K, V>> {
        self.multi_retrieve_map_matching(None).await
    }

    async fn multi_retrieve_map_matching(
        &self,
        pattern: Option<&str>,
    ) -> MarqueeResult<IndexMap<K, V>> {
        let physical = self.scan(pattern).await?;
        if physical.is_empty() {
            return Ok(IndexMap::new());
        }

        let values = decode_all::<V>(self.store.mget(&physical).await?)?;

        // keys are handed back without the region prefix, same as the hash layout
        let entries = physical
            .iter()
            .zip(values)
            .filter_map(|(key, value)| self.codec.logical_key::<K>(key).map(|key| (key, value)));
        let (keys, values): (Vec<K>, Vec<Option<V>>) = entries.unzip();

        Ok(assemble(keys, values))
    }

    async fn multi_retrieve_map_by_keys(&self, keys: &[K]) -> MarqueeResult<IndexMap<K, V>> {
        let values = self.multi_retrieve_list_by_keys(keys).await?;
        Ok(assemble(keys.iter().cloned(), values))
    }

    async fn delete(&self, key: &K) -> MarqueeResult<bool> {
        let removed = self.store.del(&[self.codec.physical_key(key)]).await?;
        Ok(removed > 0)
    }

    async fn delete_many(&self, keys: &[K]) -> MarqueeResult<u64> {
        if keys.is_empty() {
            return Ok(0);
        }

        self.store.del(&self.physical_keys(keys)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, MockKeyValueStore};
    use marquee_core::MarqueeError;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Film {
        title: String,
    }

    fn film(title: &str) -> Film {
        Film {
            title: title.to_string(),
        }
    }

    fn backend(store: Arc<dyn KeyValueStore>) -> RegionBackend<String, Film> {
        RegionBackend::new("movie", store)
    }

    fn memory_backend() -> (Arc<MemoryStore>, RegionBackend<String, Film>) {
        let store = Arc::new(MemoryStore::new());
        (store.clone(), backend(store))
    }

    #[tokio::test]
    async fn test_insert_then_retrieve() {
        let (store, cache) = memory_backend();
        cache.insert(&"42".to_string(), &film("Matrix")).await.unwrap();

        assert!(cache.exists(&"42".to_string()).await.unwrap());
        assert_eq!(cache.retrieve(&"42".to_string()).await.unwrap(), Some(film("Matrix")));
        assert_eq!(cache.retrieve(&"99".to_string()).await.unwrap(), None);
        assert!(store.exists("movie.42").await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let (_, cache) = memory_backend();
        let key = "42".to_string();
        cache.insert(&key, &film("Matrix")).await.unwrap();

        assert!(cache.delete(&key).await.unwrap());
        assert!(!cache.exists(&key).await.unwrap());
        assert!(!cache.delete(&key).await.unwrap());
    }

    #[tokio::test]
    async fn test_count_ignores_other_regions() {
        let (store, cache) = memory_backend();
        store.set("user.1", "{}").await.unwrap();

        let entries: IndexMap<String, Film> = (1..=3)
            .map(|i| (i.to_string(), film(&format!("Film {}", i))))
            .collect();
        cache.multi_insert(&entries).await.unwrap();

        assert_eq!(cache.count().await.unwrap(), 3);
        assert_eq!(cache.count_matching(Some("2")).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_key_list_is_logical() {
        let (_, cache) = memory_backend();
        cache.insert(&"ITEM1".to_string(), &film("a")).await.unwrap();
        cache.insert(&"OTHER".to_string(), &film("b")).await.unwrap();

        let keys = cache.multi_retrieve_key_list(Some("ITEM")).await.unwrap();
        assert_eq!(keys, vec!["ITEM1".to_string()]);
    }

    #[tokio::test]
    async fn test_map_matching_uses_logical_keys() {
        let (_, cache) = memory_backend();
        cache.insert(&"1".to_string(), &film("a")).await.unwrap();
        cache.insert(&"2".to_string(), &film("b")).await.unwrap();

        let map = cache.multi_retrieve_map().await.unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("1"), Some(&film("a")));
        assert!(!map.contains_key("movie.1"));
    }

    #[tokio::test]
    async fn test_multi_insert_then_map_by_keys() {
        let (_, cache) = memory_backend();
        let mut entries = IndexMap::new();
        entries.insert("k1".to_string(), film("v1"));
        entries.insert("k2".to_string(), film("v2"));
        cache.multi_insert(&entries).await.unwrap();

        let keys = vec!["k1".to_string(), "k2".to_string()];
        assert_eq!(cache.multi_retrieve_map_by_keys(&keys).await.unwrap(), entries);
    }

    #[tokio::test]
    async fn test_list_by_keys_keeps_positions() {
        let (_, cache) = memory_backend();
        cache.insert(&"a".to_string(), &film("A")).await.unwrap();

        let keys = vec!["missing".to_string(), "a".to_string()];
        let values = cache.multi_retrieve_list_by_keys(&keys).await.unwrap();
        assert_eq!(values, vec![None, Some(film("A"))]);
    }

    #[tokio::test]
    async fn test_delete_many_counts_removed() {
        let (_, cache) = memory_backend();
        cache.insert(&"a".to_string(), &film("A")).await.unwrap();
        cache.insert(&"b".to_string(), &film("B")).await.unwrap();

        let keys = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(cache.delete_many(&keys).await.unwrap(), 2);
        assert_eq!(cache.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_list_drops_vanished_values() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_scan_keys()
            .withf(|pattern: &str| pattern == "movie.*")
            .times(1)
            .returning(|_| Ok(vec!["movie.1".to_string(), "movie.2".to_string()]));
        store
            .expect_mget()
            .times(1)
            .returning(|_| Ok(vec![None, Some(r#"{"title":"b"}"#.to_string())]));

        let cache = backend(Arc::new(store));
        assert_eq!(cache.multi_retrieve_list(None).await.unwrap(), vec![film("b")]);
    }

    #[tokio::test]
    async fn test_map_by_keys_filters_absent() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_mget()
            .withf(|keys: &[String]| keys == ["movie.k1", "movie.k2", "movie.k3"])
            .times(1)
            .returning(|_| {
                Ok(vec![
                    Some(r#"{"title":"v1"}"#.to_string()),
                    None,
                    Some(r#"{"title":"v3"}"#.to_string()),
                ])
            });

        let cache = backend(Arc::new(store));
        let keys: Vec<String> = ["k1", "k2", "k3"].iter().map(|k| (*k).to_string()).collect();
        let map = cache.multi_retrieve_map_by_keys(&keys).await.unwrap();

        assert_eq!(map.len(), 2);
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["k1", "k3"]);
    }

    #[tokio::test]
    async fn test_empty_bulk_inputs_skip_store() {
        // no expectations: any store call fails the test
        let cache = backend(Arc::new(MockKeyValueStore::new()));

        cache.multi_insert(&IndexMap::new()).await.unwrap();
        assert_eq!(cache.delete_many(&[]).await.unwrap(), 0);
        assert!(cache.multi_retrieve_list_by_keys(&[]).await.unwrap().is_empty());
        assert!(cache.multi_retrieve_map_by_keys(&[]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_store_errors_propagate() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_get()
            .returning(|_| Err(MarqueeError::cache("connection refused")));

        let cache = backend(Arc::new(store));
        let err = cache.retrieve(&"42".to_string()).await.unwrap_err();
        assert!(matches!(err, MarqueeError::Cache(_)));
    }

    #[tokio::test]
    async fn test_integer_keys_are_stored_bare() {
        let store = Arc::new(MemoryStore::new());
        let cache: RegionBackend<i64, Film> = RegionBackend::new("movie", store.clone());
        cache.insert(&7, &film("Seven")).await.unwrap();

        assert!(store.exists("7").await.unwrap());
        assert_eq!(cache.retrieve(&7).await.unwrap(), Some(film("Seven")));
    }

    #[tokio::test]
    async fn test_ping_does_not_scan() {
        let mut store = MockKeyValueStore::new();
        store.expect_ping().times(1).returning(|| Ok(()));
        store.expect_scan_keys().never();

        let cache = backend(Arc::new(store));
        cache.ping().await.unwrap();
    }
}
