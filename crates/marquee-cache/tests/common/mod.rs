//! Cache behaviour shared by every store the backends run on.
//!
//! Each scenario expects an empty cache and labels its assertions with the
//! layout under test.

#![allow(dead_code)]

pub mod redis;

pub use self::redis::TestRedis;

use indexmap::IndexMap;
use marquee_cache::CacheBackend;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub title: String,
    pub year: i32,
}

pub fn record(title: &str, year: i32) -> Record {
    Record {
        title: title.to_string(),
        year,
    }
}

pub fn key(raw: &str) -> String {
    raw.to_string()
}

pub async fn insert_retrieve_and_miss(cache: &dyn CacheBackend<String, Record>, label: &str) {
    cache.insert(&key("42"), &record("Matrix", 1999)).await.unwrap();

    assert!(cache.exists(&key("42")).await.unwrap(), "{label}");
    assert_eq!(
        cache.retrieve(&key("42")).await.unwrap(),
        Some(record("Matrix", 1999)),
        "{label}"
    );
    assert_eq!(cache.retrieve(&key("99")).await.unwrap(), None, "{label}");
    assert!(!cache.exists(&key("99")).await.unwrap(), "{label}");
}

pub async fn insert_overwrites(cache: &dyn CacheBackend<String, Record>, label: &str) {
    cache.insert(&key("1"), &record("Old", 2000)).await.unwrap();
    cache.insert(&key("1"), &record("New", 2001)).await.unwrap();

    assert_eq!(cache.count().await.unwrap(), 1, "{label}");
    assert_eq!(
        cache.retrieve(&key("1")).await.unwrap().map(|r| r.title),
        Some("New".to_string()),
        "{label}"
    );
}

pub async fn count_after_bulk_insert(cache: &dyn CacheBackend<String, Record>, label: &str) {
    let entries: IndexMap<String, Record> = (0..5)
        .map(|i| (format!("id-{}", i), record("Film", 1990 + i)))
        .collect();
    cache.multi_insert(&entries).await.unwrap();

    assert_eq!(cache.count().await.unwrap(), 5, "{label}");
    assert_eq!(cache.count_matching(Some("id-")).await.unwrap(), 5, "{label}");
    assert_eq!(cache.count_matching(Some("*-3")).await.unwrap(), 1, "{label}");
}

pub async fn maps_use_logical_keys(cache: &dyn CacheBackend<String, Record>, label: &str) {
    cache.insert(&key("a"), &record("A", 2001)).await.unwrap();
    cache.insert(&key("b"), &record("B", 2002)).await.unwrap();

    let all = cache.multi_retrieve_map().await.unwrap();
    let matching = cache.multi_retrieve_map_matching(Some("a")).await.unwrap();

    let mut all_keys: Vec<&String> = all.keys().collect();
    all_keys.sort();
    assert_eq!(all_keys, vec!["a", "b"], "{label}");
    assert_eq!(matching.keys().collect::<Vec<_>>(), vec!["a"], "{label}");
}

pub async fn list_by_keys_is_positional(cache: &dyn CacheBackend<String, Record>, label: &str) {
    cache.insert(&key("k1"), &record("V1", 2001)).await.unwrap();
    cache.insert(&key("k3"), &record("V3", 2003)).await.unwrap();
    let keys = vec![key("k1"), key("k2"), key("k3")];

    let list = cache.multi_retrieve_list_by_keys(&keys).await.unwrap();
    assert_eq!(
        list,
        vec![Some(record("V1", 2001)), None, Some(record("V3", 2003))],
        "{label}"
    );

    let map = cache.multi_retrieve_map_by_keys(&keys).await.unwrap();
    assert_eq!(map.len(), 2, "{label}");
    assert_eq!(map.keys().collect::<Vec<_>>(), vec!["k1", "k3"], "{label}");
}

/// Infix, prefix and unfiltered matching over `ITEM1234`, `ITEM4567` and `ITEM8901`.
pub async fn key_list_and_pattern_list(cache: &dyn CacheBackend<String, Record>, label: &str) {
    for id in ["ITEM1234", "ITEM4567", "ITEM8901"] {
        cache.insert(&key(id), &record(id, 2000)).await.unwrap();
    }

    assert_eq!(
        cache.multi_retrieve_key_list(Some("*45*")).await.unwrap(),
        vec![key("ITEM4567")],
        "{label}"
    );
    assert_eq!(
        cache.multi_retrieve_list(Some("ITEM*")).await.unwrap().len(),
        3,
        "{label}"
    );
    assert_eq!(cache.multi_retrieve_key_list(None).await.unwrap().len(), 3, "{label}");
}

pub async fn delete_single_and_many(cache: &dyn CacheBackend<String, Record>, label: &str) {
    for id in ["a", "b", "c"] {
        cache.insert(&key(id), &record(id, 2000)).await.unwrap();
    }

    assert!(cache.delete(&key("a")).await.unwrap(), "{label}");
    assert!(!cache.exists(&key("a")).await.unwrap(), "{label}");
    assert!(!cache.delete(&key("a")).await.unwrap(), "{label}");

    let removed = cache
        .delete_many(&[key("b"), key("c"), key("zzz")])
        .await
        .unwrap();
    assert_eq!(removed, 2, "{label}");
    assert_eq!(cache.count().await.unwrap(), 0, "{label}");
}

/// Inserts `total` records in one call, then reads every one of them back
/// through the pattern-driven operations.
pub async fn many_records_survive_scanning(
    cache: &dyn CacheBackend<String, Record>,
    label: &str,
    total: usize,
) {
    let entries: IndexMap<String, Record> = (0..total)
        .map(|i| (format!("bulk-{:04}", i), record("Bulk", 1900 + (i % 100) as i32)))
        .collect();
    cache.multi_insert(&entries).await.unwrap();

    assert_eq!(cache.count().await.unwrap(), total as u64, "{label}");

    let mut keys = cache.multi_retrieve_key_list(None).await.unwrap();
    assert_eq!(keys.len(), total, "{label}");
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), total, "{label}");

    assert_eq!(cache.multi_retrieve_list(None).await.unwrap().len(), total, "{label}");
    assert_eq!(cache.multi_retrieve_map().await.unwrap().len(), total, "{label}");
}
