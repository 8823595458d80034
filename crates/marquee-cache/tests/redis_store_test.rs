//! Integration tests for RedisStore and both cache layouts over it.
//!
//! These tests run against a real Redis server using testcontainers and
//! return early when Docker is not available.

mod common;

use common::{record, Record, TestRedis};
use marquee_cache::store::{create_pool, ScanCursor};
use marquee_cache::{build_backend, CacheBackend, CacheStrategy, KeyValueStore};
use std::sync::Arc;

const STRATEGIES: [CacheStrategy; 2] = [CacheStrategy::Region, CacheStrategy::Hash];

/// A backend whose name is unique to the scenario, so scenarios sharing one
/// server start from an empty cache.
fn backend(
    store: &Arc<dyn KeyValueStore>,
    scenario: &str,
    strategy: CacheStrategy,
) -> Arc<dyn CacheBackend<String, Record>> {
    build_backend(strategy, &format!("{}-{}", scenario, strategy), store.clone()).unwrap()
}

fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
    raw.iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn strings(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn test_shared_behaviour_on_redis() {
    let Some(redis) = TestRedis::start().await else {
        return;
    };
    let store = redis.store().await;

    for strategy in STRATEGIES {
        let label = format!("redis {}", strategy);

        common::insert_retrieve_and_miss(backend(&store, "hit", strategy).as_ref(), &label).await;
        common::insert_overwrites(backend(&store, "overwrite", strategy).as_ref(), &label).await;
        common::count_after_bulk_insert(backend(&store, "bulk", strategy).as_ref(), &label).await;
        common::maps_use_logical_keys(backend(&store, "maps", strategy).as_ref(), &label).await;
        common::list_by_keys_is_positional(backend(&store, "positional", strategy).as_ref(), &label)
            .await;
        common::key_list_and_pattern_list(backend(&store, "patterns", strategy).as_ref(), &label)
            .await;
        common::delete_single_and_many(backend(&store, "delete", strategy).as_ref(), &label).await;
    }
}

#[tokio::test]
async fn test_more_records_than_one_scan_batch() {
    let Some(redis) = TestRedis::start().await else {
        return;
    };
    let store = redis.store().await;

    for strategy in STRATEGIES {
        let cache = backend(&store, "large", strategy);
        common::many_records_survive_scanning(cache.as_ref(), &format!("redis {}", strategy), 600)
            .await;
    }
}

#[tokio::test]
async fn test_hash_pattern_scan_on_item_fields() {
    let Some(redis) = TestRedis::start().await else {
        return;
    };
    let store = redis.store().await;
    store
        .hset_many(
            "items",
            &pairs(&[("ITEM1234", "a"), ("ITEM4567", "b"), ("ITEM8901", "c")]),
        )
        .await
        .unwrap();

    assert_eq!(
        store.hscan("items", "*45*").await.unwrap(),
        pairs(&[("ITEM4567", "b")])
    );

    let mut all = store.hscan("items", "ITEM*").await.unwrap();
    all.sort();
    assert_eq!(
        all,
        pairs(&[("ITEM1234", "a"), ("ITEM4567", "b"), ("ITEM8901", "c")])
    );
    assert!(store.hscan("items", "NOPE*").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_bulk_reads_pad_missing_slots() {
    let Some(redis) = TestRedis::start().await else {
        return;
    };
    let store = redis.store().await;

    store
        .mset(&pairs(&[("movie.1", "one"), ("movie.3", "three")]))
        .await
        .unwrap();
    assert_eq!(
        store
            .mget(&strings(&["movie.1", "movie.2", "movie.3"]))
            .await
            .unwrap(),
        vec![Some("one".to_string()), None, Some("three".to_string())]
    );
    assert!(store.mget(&[]).await.unwrap().is_empty());

    store.hset("movies", "1", "one").await.unwrap();
    store.hset("movies", "3", "three").await.unwrap();
    assert_eq!(
        store
            .hmget("movies", &strings(&["1", "2", "3"]))
            .await
            .unwrap(),
        vec![Some("one".to_string()), None, Some("three".to_string())]
    );
    assert!(store.hmget("movies", &[]).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_hgetall_returns_pairs() {
    let Some(redis) = TestRedis::start().await else {
        return;
    };
    let store = redis.store().await;
    store
        .hset_many("genres", &pairs(&[("1", "Horror"), ("2", "Crime")]))
        .await
        .unwrap();

    let mut all = store.hgetall("genres").await.unwrap();
    all.sort();

    assert_eq!(all, pairs(&[("1", "Horror"), ("2", "Crime")]));
    assert_eq!(store.hlen("genres").await.unwrap(), 2);
    assert!(store.hgetall("missing").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_scan_cursor_walks_until_exhausted() {
    let Some(redis) = TestRedis::start().await else {
        return;
    };
    let store = redis.store().await;
    let keys: Vec<(String, String)> = (0..600)
        .map(|i| (format!("walk.{}", i), i.to_string()))
        .collect();
    store.mset(&keys).await.unwrap();
    store.set("other.1", "x").await.unwrap();

    let pool = create_pool(redis.config()).await.unwrap();
    let mut cursor = ScanCursor::keys(pool.get().await.unwrap(), "walk.*");
    let mut seen = Vec::new();
    let mut rounds = 0;
    while let Some(batch) = cursor.next_batch().await.unwrap() {
        seen.extend(batch);
        rounds += 1;
    }
    seen.sort();
    seen.dedup();

    assert_eq!(seen.len(), 600);
    assert!(rounds > 1);
    assert_eq!(cursor.next_batch().await.unwrap(), None);

    let empty = ScanCursor::keys(pool.get().await.unwrap(), "absent.*")
        .collect_keys()
        .await
        .unwrap();
    assert!(empty.is_empty());
}

#[tokio::test]
async fn test_hash_cursor_collects_pairs() {
    let Some(redis) = TestRedis::start().await else {
        return;
    };
    let store = redis.store().await;
    let fields: Vec<(String, String)> = (0..300)
        .map(|i| (format!("f{}", i), format!("v{}", i)))
        .collect();
    store.hset_many("wide", &fields).await.unwrap();

    let pool = create_pool(redis.config()).await.unwrap();
    let mut collected = ScanCursor::hash_fields(pool.get().await.unwrap(), "wide", "*")
        .collect_pairs()
        .await
        .unwrap();
    collected.sort();

    let mut expected = fields.clone();
    expected.sort();
    assert_eq!(collected, expected);
}

#[tokio::test]
async fn test_ping_and_delete_counts() {
    let Some(redis) = TestRedis::start().await else {
        return;
    };
    let store = redis.store().await;

    store.ping().await.unwrap();

    store.set("gone.1", "x").await.unwrap();
    assert!(store.exists("gone.1").await.unwrap());
    assert_eq!(
        store.del(&strings(&["gone.1", "gone.2"])).await.unwrap(),
        1
    );
    assert_eq!(store.del(&[]).await.unwrap(), 0);

    store.hset("h", "a", "1").await.unwrap();
    assert!(store.hexists("h", "a").await.unwrap());
    assert_eq!(store.hdel("h", &strings(&["a", "b"])).await.unwrap(), 1);
    assert_eq!(store.hget("h", "a").await.unwrap(), None);
}
