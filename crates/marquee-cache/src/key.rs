//! Key and value bounds for typed cache backends.

use marquee_core::MarqueeResult;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;
use std::hash::Hash;

/// A type usable as a logical cache key.
///
/// Only keys with [`CacheKey::NAMESPACED`] set receive the `<region>.` prefix
/// in the region layout. Integer keys are stored exactly as rendered, which
/// means a region scan (`<region>.*`) does not see them.
pub trait CacheKey: Clone + Eq + Hash + Debug + Send + Sync + 'static {
    /// Whether the region layout prefixes this key with the region name.
    const NAMESPACED: bool;

    /// Renders the key as sent to the store.
    fn render(&self) -> String;

    /// Parses a key read back from the store.
    fn parse(raw: &str) -> Option<Self>;
}

impl CacheKey for String {
    const NAMESPACED: bool = true;

    fn render(&self) -> String {
        self.clone()
    }

    fn parse(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

macro_rules! integer_cache_key {
    ($($ty:ty),* $(,)?) => {
        $(
            impl CacheKey for $ty {
                const NAMESPACED: bool = false;

                fn render(&self) -> String {
                    self.to_string()
                }

                fn parse(raw: &str) -> Option<Self> {
                    raw.parse().ok()
                }
            }
        )*
    };
}

integer_cache_key!(i32, i64, u32, u64);

/// A type usable as a cached value. Values travel to the store as JSON text.
pub trait CacheValue: Serialize + DeserializeOwned + Send + Sync + 'static {}

impl<T> CacheValue for T where T: Serialize + DeserializeOwned + Send + Sync + 'static {}

pub(crate) fn encode<V: CacheValue>(value: &V) -> MarqueeResult<String> {
    Ok(serde_json::to_string(value)?)
}

pub(crate) fn decode<V: CacheValue>(raw: &str) -> MarqueeResult<V> {
    Ok(serde_json::from_str(raw)?)
}

pub(crate) fn decode_all<V: CacheValue>(raw: Vec<Option<String>>) -> MarqueeResult<Vec<Option<V>>> {
    raw.into_iter()
        .map(|value| value.as_deref().map(decode).transpose())
        .collect()
}
