//! Redis-backed store.

use super::KeyValueStore;
use async_trait::async_trait;
use deadpool_redis::redis::{self, AsyncCommands};
use deadpool_redis::{Config, Connection, Pool, Runtime};
use indexmap::{IndexMap, IndexSet};
use marquee_config::RedisConfig;
use marquee_core::{MarqueeError, MarqueeResult};
use tracing::{debug, info};

/// Entries the server examines per SCAN/HSCAN round trip.
const SCAN_BATCH: usize = 250;

/// Create a Redis connection pool and check that the server answers.
pub async fn create_pool(config: &RedisConfig) -> MarqueeResult<Pool> {
    info!("Creating Redis connection pool...");

    let pool = Config::from_url(&config.url)
        .builder()
        .map_err(|e| MarqueeError::Configuration(format!("Invalid Redis config: {}", e)))?
        .max_size(config.pool_size as usize)
        .runtime(Runtime::Tokio1)
        .build()
        .map_err(|e| MarqueeError::Configuration(format!("Failed to create pool: {}", e)))?;

    let mut conn = pool
        .get()
        .await
        .map_err(|e| MarqueeError::Cache(format!("Failed to get Redis connection: {}", e)))?;
    ping(&mut conn).await?;

    info!("Redis connection pool created successfully");

    Ok(pool)
}

async fn ping(conn: &mut Connection) -> MarqueeResult<()> {
    redis::cmd("PING")
        .query_async::<String>(conn)
        .await
        .map_err(|e| MarqueeError::Cache(format!("Redis did not answer PING: {}", e)))?;
    Ok(())
}

enum ScanTarget {
    Keys,
    HashFields(String),
}

/// A server-side SCAN or HSCAN cursor scoped to a single call.
///
/// The cursor owns its pooled connection. Dropping it, whether after the
/// last batch or halfway through on an error, hands the connection back to
/// the pool.
pub struct ScanCursor {
    conn: Connection,
    target: ScanTarget,
    pattern: String,
    cursor: u64,
    exhausted: bool,
}

impl ScanCursor {
    /// Opens a cursor over the keyspace.
    pub fn keys(conn: Connection, pattern: impl Into<String>) -> Self {
        Self::open(conn, ScanTarget::Keys, pattern.into())
    }

    /// Opens a cursor over the fields of one hash.
    pub fn hash_fields(conn: Connection, hash: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::open(conn, ScanTarget::HashFields(hash.into()), pattern.into())
    }

    fn open(conn: Connection, target: ScanTarget, pattern: String) -> Self {
        Self {
            conn,
            target,
            pattern,
            cursor: 0,
            exhausted: false,
        }
    }

    fn command(&self) -> redis::Cmd {
        let mut cmd = match &self.target {
            ScanTarget::Keys => redis::cmd("SCAN"),
            ScanTarget::HashFields(hash) => {
                let mut cmd = redis::cmd("HSCAN");
                cmd.arg(hash);
                cmd
            }
        };
        cmd.arg(self.cursor)
            .arg("MATCH")
            .arg(&self.pattern)
            .arg("COUNT")
            .arg(SCAN_BATCH);
        cmd
    }

    /// Fetches the next batch, or `None` once the server cursor is back at 0.
    ///
    /// A batch may be empty while the scan is still in progress.
    pub async fn next_batch(&mut self) -> MarqueeResult<Option<Vec<String>>> {
        if self.exhausted {
            return Ok(None);
        }

        let (next, items): (u64, Vec<String>) = self
            .command()
            .query_async(&mut self.conn)
            .await
            .map_err(|e| MarqueeError::Cache(format!("Failed to scan '{}': {}", self.pattern, e)))?;

        self.cursor = next;
        self.exhausted = next == 0;
        Ok(Some(items))
    }

    /// Drains a keyspace cursor. Keys the server repeats are kept once.
    pub async fn collect_keys(mut self) -> MarqueeResult<Vec<String>> {
        let mut keys = IndexSet::new();
        while let Some(batch) = self.next_batch().await? {
            keys.extend(batch);
        }
        Ok(keys.into_iter().collect())
    }

    /// Drains a hash cursor into field/value pairs. Repeated fields are kept once.
    pub async fn collect_pairs(mut self) -> MarqueeResult<Vec<(String, String)>> {
        let mut pairs = IndexMap::new();
        while let Some(batch) = self.next_batch().await? {
            for (field, value) in into_pairs(batch) {
                pairs.entry(field).or_insert(value);
            }
        }
        Ok(pairs.into_iter().collect())
    }
}

impl Drop for ScanCursor {
    fn drop(&mut self) {
        if !self.exhausted {
            debug!(pattern = %self.pattern, cursor = self.cursor, "Scan cursor released before completion");
        }
    }
}

/// Splits a flat `[field, value, field, value, ...]` reply into pairs.
fn into_pairs(flat: Vec<String>) -> Vec<(String, String)> {
    let mut items = flat.into_iter();
    let mut pairs = Vec::with_capacity(items.len() / 2);
    while let (Some(field), Some(value)) = (items.next(), items.next()) {
        pairs.push((field, value));
    }
    pairs
}

/// Store over a `deadpool-redis` connection pool.
#[derive(Clone)]
pub struct RedisStore {
    pool: Pool,
}

impl RedisStore {
    /// Create a store over an existing pool.
    #[must_use]
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    /// Create a pool from configuration and wrap it.
    pub async fn connect(config: &RedisConfig) -> MarqueeResult<Self> {
        Ok(Self::new(create_pool(config).await?))
    }

    /// Get a connection from the pool.
    async fn get_conn(&self) -> MarqueeResult<Connection> {
        self.pool
            .get()
            .await
            .map_err(|e| MarqueeError::Cache(format!("Failed to get Redis connection: {}", e)))
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn ping(&self) -> MarqueeResult<()> {
        let mut conn = self.get_conn().await?;
        ping(&mut conn).await
    }

    async fn exists(&self, key: &str) -> MarqueeResult<bool> {
        let mut conn = self.get_conn().await?;
        let exists: bool = conn.exists(key).await.map_err(|e| {
            MarqueeError::Cache(format!("Failed to check key '{}': {}", key, e))
        })?;

        Ok(exists)
    }

    async fn scan_keys(&self, pattern: &str) -> MarqueeResult<Vec<String>> {
        let conn = self.get_conn().await?;
        let keys = ScanCursor::keys(conn, pattern).collect_keys().await?;

        debug!("Scanned {} keys matching '{}'", keys.len(), pattern);
        Ok(keys)
    }

    async fn get(&self, key: &str) -> MarqueeResult<Option<String>> {
        let mut conn = self.get_conn().await?;
        let value: Option<String> = conn.get(key).await.map_err(|e| {
            MarqueeError::Cache(format!("Failed to get key '{}': {}", key, e))
        })?;

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> MarqueeResult<()> {
        let mut conn = self.get_conn().await?;
        conn.set::<_, _, ()>(key, value).await.map_err(|e| {
            MarqueeError::Cache(format!("Failed to set key '{}': {}", key, e))
        })?;

        debug!("Stored key '{}'", key);
        Ok(())
    }

    async fn mget(&self, keys: &[String]) -> MarqueeResult<Vec<Option<String>>> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }

        // Issued as a raw command so one key still yields a one-slot array.
        let mut conn = self.get_conn().await?;
        let values: Vec<Option<String>> = redis::cmd("MGET")
            .arg(keys)
            .query_async(&mut conn)
            .await
            .map_err(|e| MarqueeError::Cache(format!("Failed to get {} keys: {}", keys.len(), e)))?;

        Ok(values)
    }

    async fn mset(&self, pairs: &[(String, String)]) -> MarqueeResult<()> {
        if pairs.is_empty() {
            return Ok(());
        }

        let mut conn = self.get_conn().await?;
        conn.mset::<_, _, ()>(pairs).await.map_err(|e| {
            MarqueeError::Cache(format!("Failed to set {} keys: {}", pairs.len(), e))
        })?;

        debug!("Stored {} keys", pairs.len());
        Ok(())
    }

    async fn del(&self, keys: &[String]) -> MarqueeResult<u64> {
        if keys.is_empty() {
            return Ok(0);
        }

        let mut conn = self.get_conn().await?;
        let deleted: u64 = conn.del(keys).await.map_err(|e| {
            MarqueeError::Cache(format!("Failed to delete keys: {}", e))
        })?;

        debug!("Deleted {} of {} keys", deleted, keys.len());
        Ok(deleted)
    }

    async fn hexists(&self, hash: &str, field: &str) -> MarqueeResult<bool> {
        let mut conn = self.get_conn().await?;
        let exists: bool = conn.hexists(hash, field).await.map_err(|e| {
            MarqueeError::Cache(format!("Failed to check field '{}' of '{}': {}", field, hash, e))
        })?;

        Ok(exists)
    }

    async fn hlen(&self, hash: &str) -> MarqueeResult<u64> {
        let mut conn = self.get_conn().await?;
        let len: u64 = conn.hlen(hash).await.map_err(|e| {
            MarqueeError::Cache(format!("Failed to size hash '{}': {}", hash, e))
        })?;

        Ok(len)
    }

    async fn hget(&self, hash: &str, field: &str) -> MarqueeResult<Option<String>> {
        let mut conn = self.get_conn().await?;
        let value: Option<String> = conn.hget(hash, field).await.map_err(|e| {
            MarqueeError::Cache(format!("Failed to get field '{}' of '{}': {}", field, hash, e))
        })?;

        match &value {
            Some(_) => debug!("Cache hit for field '{}' of '{}'", field, hash),
            None => debug!("Cache miss for field '{}' of '{}'", field, hash),
        }

        Ok(value)
    }

    async fn hset(&self, hash: &str, field: &str, value: &str) -> MarqueeResult<()> {
        let mut conn = self.get_conn().await?;
        conn.hset::<_, _, _, ()>(hash, field, value).await.map_err(|e| {
            MarqueeError::Cache(format!("Failed to set field '{}' of '{}': {}", field, hash, e))
        })?;

        debug!("Stored field '{}' of '{}'", field, hash);
        Ok(())
    }

    async fn hset_many(&self, hash: &str, pairs: &[(String, String)]) -> MarqueeResult<()> {
        if pairs.is_empty() {
            return Ok(());
        }

        let mut conn = self.get_conn().await?;
        conn.hset_multiple::<_, _, _, ()>(hash, pairs).await.map_err(|e| {
            MarqueeError::Cache(format!("Failed to set {} fields of '{}': {}", pairs.len(), hash, e))
        })?;

        debug!("Stored {} fields of '{}'", pairs.len(), hash);
        Ok(())
    }

    async fn hmget(&self, hash: &str, fields: &[String]) -> MarqueeResult<Vec<Option<String>>> {
        if fields.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.get_conn().await?;
        let values: Vec<Option<String>> = redis::cmd("HMGET")
            .arg(hash)
            .arg(fields)
            .query_async(&mut conn)
            .await
            .map_err(|e| {
                MarqueeError::Cache(format!("Failed to get {} fields of '{}': {}", fields.len(), hash, e))
            })?;

        Ok(values)
    }

    async fn hgetall(&self, hash: &str) -> MarqueeResult<Vec<(String, String)>> {
        let mut conn = self.get_conn().await?;
        let flat: Vec<String> = redis::cmd("HGETALL")
            .arg(hash)
            .query_async(&mut conn)
            .await
            .map_err(|e| MarqueeError::Cache(format!("Failed to read hash '{}': {}", hash, e)))?;

        Ok(into_pairs(flat))
    }

    async fn hscan(&self, hash: &str, pattern: &str) -> MarqueeResult<Vec<(String, String)>> {
        let conn = self.get_conn().await?;
        let pairs = ScanCursor::hash_fields(conn, hash, pattern)
            .collect_pairs()
            .await?;

        debug!("Scanned {} fields of '{}' matching '{}'", pairs.len(), hash, pattern);
        Ok(pairs)
    }

    async fn hdel(&self, hash: &str, fields: &[String]) -> MarqueeResult<u64> {
        if fields.is_empty() {
            return Ok(0);
        }

        let mut conn = self.get_conn().await?;
        let deleted: u64 = conn.hdel(hash, fields).await.map_err(|e| {
            MarqueeError::Cache(format!("Failed to delete fields of '{}': {}", hash, e))
        })?;

        debug!("Deleted {} of {} fields of '{}'", deleted, fields.len(), hash);
        Ok(deleted)
    }
}
