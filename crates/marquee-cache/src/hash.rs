//! Hash layout: every record is a field of one hash.

use crate::key::{decode, decode_all, encode};
use crate::store::KeyValueStore;
use crate::{assemble, CacheBackend, CacheKey, CacheValue, KeyCodec};
use async_trait::async_trait;
use indexmap::IndexMap;
use marquee_core::MarqueeResult;
use std::marker::PhantomData;
use std::sync::Arc;

/// Stores every record as a field of the hash named after the region.
///
/// Fields hold the rendered logical key with no prefix. `count` is a single
/// `HLEN`; pattern queries drain an `HSCAN` cursor.
pub struct HashBackend<K, V> {
    hash: String,
    store: Arc<dyn KeyValueStore>,
    _types: PhantomData<fn() -> (K, V)>,
}

impl<K: CacheKey, V: CacheValue> HashBackend<K, V> {
    /// Create a backend over the hash `hash` in `store`.
    pub fn new(hash: impl Into<String>, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            hash: hash.into(),
            store,
            _types: PhantomData,
        }
    }

    fn fields(keys: &[K]) -> Vec<String> {
        keys.iter().map(K::render).collect()
    }

    async fn scan(&self, pattern: Option<&str>) -> MarqueeResult<Vec<(String, String)>> {
        self.store
            .hscan(&self.hash, &KeyCodec::normalize_pattern(pattern))
            .await
    }

    fn into_map(pairs: Vec<(String, String)>) -> MarqueeResult<IndexMap<K, V>> {
        pairs
            .into_iter()
            .filter_map(|(field, raw)| K::parse(&field).map(|key| (key, raw)))
            .map(|(key, raw)| -> MarqueeResult<(K, V)> { Ok((key, decode(&raw)?)) })
            .collect()
    }
}

#[async_trait]
impl<K: CacheKey, V: CacheValue> CacheBackend<K, V> for HashBackend<K, V> {
    fn name(&self) -> &str {
        &self.hash
    }

    async fn ping(&self) -> MarqueeResult<()> {
        self.store.ping().await
    }

    async fn exists(&self, key: &K) -> MarqueeResult<bool> {
        self.store.hexists(&self.hash, &key.render()).await
    }

    async fn count(&self) -> MarqueeResult<u64> {
        self.store.hlen(&self.hash).await
    }

    async fn count_matching(&self, pattern: Option<&str>) -> MarqueeResult<u64> {
        Ok(self.scan(pattern).await?.len() as u64)
    }

    async fn insert(&self, key: &K, value: &V) -> MarqueeResult<()> {
        self.store
            .hset(&self.hash, &key.render(), &encode(value)?)
            .await
    }

    async fn multi_insert(&self, entries: &IndexMap<K, V>) -> MarqueeResult<()> {
        if entries.is_empty() {
            return Ok(());
        }

        let pairs = entries
            .iter()
            .map(|(key, value)| -> MarqueeResult<(String, String)> {
                Ok((key.render(), encode(value)?))
            })
            .collect::<MarqueeResult<Vec<_>>>()?;

        self.store.hset_many(&self.hash, &pairs).await
    }

    async fn retrieve(&self, key: &K) -> MarqueeResult<Option<V>> {
        self.store
            .hget(&self.hash, &key.render())
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
            .filter_map(|(field, _)| K::parse(field))
            .collect())
    }

    async fn multi_retrieve_list(&self, pattern: Option<&str>) -> MarqueeResult<Vec<V>> {
        self.scan(pattern)
            .await?
            .iter()
            .map(|(_, raw)| decode(raw))
            .collect()
    }

    async fn multi_retrieve_list_by_keys(&self, keys: &[K]) -> MarqueeResult<Vec<Option<V>>> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }

        decode_all(self.store.hmget(&self.hash, &Self::fields(keys)).await?)
    }

    async fn multi_retrieve_map(&self) -> MarqueeResult<IndexMap<K, V>> {
        Self::into_map(self.store.hgetall(&self.hash).await?)
    }

    async fn multi_retrieve_map_matching(
        &self,
        pattern: Option<&str>,
    ) -> MarqueeResult<IndexMap<K, V>> {
        Self::into_map(self.scan(pattern).await?)
    }

    async fn multi_retrieve_map_by_keys(&self, keys: &[K]) -> MarqueeResult<IndexMap<K, V>> {
        let values = self.multi_retrieve_list_by_keys(keys).await?;
        Ok(assemble(keys.iter().cloned(), values))
    }

    async fn delete(&self, key: &K) -> MarqueeResult<bool> {
        let removed = self.store.hdel(&self.hash, &[key.render()]).await?;
        Ok(removed != 0)
    }

    async fn delete_many(&self, keys: &[K]) -> MarqueeResult<u64> {
        if keys.is_empty() {
            return Ok(0);
        }

        self.store.hdel(&self.hash, &Self::fields(keys)).await
    }
}
