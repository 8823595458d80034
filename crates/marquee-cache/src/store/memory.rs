//! In-process store.

use super::glob::GlobPattern;
use super::KeyValueStore;
use async_trait::async_trait;
use indexmap::IndexMap;
use marquee_core::MarqueeResult;
use parking_lot::RwLock;

#[derive(Debug, Default)]
struct Keyspace {
    strings: IndexMap<String, String>,
    hashes: IndexMap<String, IndexMap<String, String>>,
}

impl Keyspace {
    fn contains(&self, key: &str) -> bool {
        self.strings.contains_key(key) || self.hashes.contains_key(key)
    }

    fn remove(&mut self, key: &str) -> bool {
        self.strings.shift_remove(key).is_some() || self.hashes.shift_remove(key).is_some()
    }
}

/// Store kept in process memory.
///
/// Mirrors the Redis semantics the backends rely on: keys enumerate in
/// insertion order, writing a string key replaces a hash under the same
/// name and vice versa, and a hash disappears with its last field.
/// Used when Redis is disabled and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    keyspace: RwLock<Keyspace>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of top-level keys, strings and hashes together.
    pub fn len(&self) -> usize {
        let keyspace = self.keyspace.read();
        keyspace.strings.len() + keyspace.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes everything.
    pub fn clear(&self) {
        let mut keyspace = self.keyspace.write();
        keyspace.strings.clear();
        keyspace.hashes.clear();
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn ping(&self) -> MarqueeResult<()> {
        Ok(())
    }

    async fn exists(&self, key: &str) -> MarqueeResult<bool> {
        Ok(self.keyspace.read().contains(key))
    }

    async fn scan_keys(&self, pattern: &str) -> MarqueeResult<Vec<String>> {
        let glob = GlobPattern::new(pattern);
        let keyspace = self.keyspace.read();

        Ok(keyspace
            .strings
            .keys()
            .chain(keyspace.hashes.keys())
            .filter(|key| glob.matches(key))
            .cloned()
            .collect())
    }

    async fn get(&self, key: &str) -> MarqueeResult<Option<String>> {
        Ok(self.keyspace.read().strings.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> MarqueeResult<()> {
        let mut keyspace = self.keyspace.write();
        keyspace.hashes.shift_remove(key);
        keyspace.strings.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn mget(&self, keys: &[String]) -> MarqueeResult<Vec<Option<String>>> {
        let keyspace = self.keyspace.read();
        Ok(keys
            .iter()
            .map(|key| keyspace.strings.get(key).cloned())
            .collect())
    }

    async fn mset(&self, pairs: &[(String, String)]) -> MarqueeResult<()> {
        let mut keyspace = self.keyspace.write();
        for (key, value) in pairs {
            keyspace.hashes.shift_remove(key);
            keyspace.strings.insert(key.clone(), value.clone());
        }
        Ok(())
    }

    async fn del(&self, keys: &[String]) -> MarqueeResult<u64> {
        let mut keyspace = self.keyspace.write();
        Ok(keys.iter().filter(|key| keyspace.remove(key)).count() as u64)
    }

    async fn hexists(&self, hash: &str, field: &str) -> MarqueeResult<bool> {
        Ok(self
            .keyspace
            .read()
            .hashes
            .get(hash)
            .is_some_and(|fields| fields.contains_key(field)))
    }

    async fn hlen(&self, hash: &str) -> MarqueeResult<u64> {
        Ok(self
            .keyspace
            .read()
            .hashes
            .get(hash)
            .map_or(0, |fields| fields.len() as u64))
    }

    async fn hget(&self, hash: &str, field: &str) -> MarqueeResult<Option<String>> {
        Ok(self
            .keyspace
            .read()
            .hashes
            .get(hash)
            .and_then(|fields| fields.get(field).cloned()))
    }

    async fn hset(&self, hash: &str, field: &str, value: &str) -> MarqueeResult<()> {
        let mut keyspace = self.keyspace.write();
        keyspace.strings.shift_remove(hash);
        keyspace
            .hashes
            .entry(hash.to_string())
            .or_default()
            .insert(field.to_string(), value.to_string());
        Ok(())
    }

    async fn hset_many(&self, hash: &str, pairs: &[(String, String)]) -> MarqueeResult<()> {
        if pairs.is_empty() {
            return Ok(());
        }

        let mut keyspace = self.keyspace.write();
        keyspace.strings.shift_remove(hash);
        let fields = keyspace.hashes.entry(hash.to_string()).or_default();
        for (field, value) in pairs {
            fields.insert(field.clone(), value.clone());
        }
        Ok(())
    }

    async fn hmget(&self, hash: &str, fields: &[String]) -> MarqueeResult<Vec<Option<String>>> {
        let keyspace = self.keyspace.read();
        let stored = keyspace.hashes.get(hash);
        Ok(fields
            .iter()
            .map(|field| stored.and_then(|stored| stored.get(field).cloned()))
            .collect())
    }

    async fn hgetall(&self, hash: &str) -> MarqueeResult<Vec<(String, String)>> {
        Ok(self
            .keyspace
            .read()
            .hashes
            .get(hash)
            .map(|fields| {
                fields
                    .iter()
                    .map(|(field, value)| (field.clone(), value.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn hscan(&self, hash: &str, pattern: &str) -> MarqueeResult<Vec<(String, String)>> {
        let glob = GlobPattern::new(pattern);
        Ok(self
            .keyspace
            .read()
            .hashes
            .get(hash)
            .map(|fields| {
                fields
                    .iter()
                    .filter(|(field, _)| glob.matches(field))
                    .map(|(field, value)| (field.clone(), value.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn hdel(&self, hash: &str, fields: &[String]) -> MarqueeResult<u64> {
        let mut keyspace = self.keyspace.write();
        let Some(stored) = keyspace.hashes.get_mut(hash) else {
            return Ok(0);
        };

        let removed = fields
            .iter()
            .filter(|field| stored.shift_remove(field.as_str()).is_some())
            .count() as u64;

        if stored.is_empty() {
            keyspace.hashes.shift_remove(hash);
        }
        Ok(removed)
    }
}
