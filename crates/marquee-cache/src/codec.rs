//! Physical key construction for a cache region.

use crate::CacheKey;

/// Wildcard token understood by store-side key matching.
pub const WILDCARD: &str = "*";

const SEPARATOR: char = '.';

/// Builds and parses the keys of one region.
///
/// A logical key `42` in region `movie` is stored as `movie.42`. Keys that
/// already contain the region name are left untouched, so building a physical
/// key is idempotent.
#[derive(Debug, Clone)]
pub struct KeyCodec {
    region: String,
    prefix: String,
}

impl KeyCodec {
    /// Creates a codec for the given region name.
    pub fn new(region: impl Into<String>) -> Self {
        let region = region.into();
        let prefix = format!("{}{}", region, SEPARATOR);
        Self { region, prefix }
    }

    /// Returns the region name.
    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Returns the physical key for a logical key.
    #[must_use]
    pub fn physical_key<K: CacheKey>(&self, key: &K) -> String {
        let raw = key.render();
        if !K::NAMESPACED || raw.contains(&self.region) {
            raw
        } else {
            format!("{}{}", self.prefix, raw)
        }
    }

    /// Removes the `<region>.` prefix from a physical key.
    #[must_use]
    pub fn strip_physical_key<'a>(&self, key: &'a str) -> &'a str {
        match key.find(&self.prefix) {
            Some(pos) => &key[pos + self.prefix.len()..],
            None => key,
        }
    }

    /// Recovers the logical key from a physical key returned by the store.
    pub fn logical_key<K: CacheKey>(&self, physical: &str) -> Option<K> {
        if K::NAMESPACED {
            K::parse(self.strip_physical_key(physical))
        } else {
            K::parse(physical)
        }
    }

    /// Normalizes a caller pattern.
    ///
    /// An absent pattern matches everything, and a pattern without a wildcard
    /// becomes a prefix match. Never rejects input.
    #[must_use]
    pub fn normalize_pattern(pattern: Option<&str>) -> String {
        let mut pattern = pattern.unwrap_or_default().to_string();
        if !pattern.contains(WILDCARD) {
            pattern.push_str(WILDCARD);
        }
        pattern
    }

    /// Returns the physical pattern matching keys of this region.
    #[must_use]
    pub fn pattern_key(&self, pattern: Option<&str>) -> String {
        format!("{}{}", self.prefix, Self::normalize_pattern(pattern))
    }
}
