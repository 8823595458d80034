//! Cache strategy selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Storage layout used for cached records.
///
/// Exactly one strategy is bound at startup; every cache-backed service in
/// the process then shares the same layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CacheStrategy {
    /// One physical key per record, prefixed with `<region>.`.
    #[default]
    #[serde(alias = "redis-region")]
    Region,
    /// All records stored as fields of a single hash named after the region.
    #[serde(alias = "redis-hash")]
    Hash,
}

impl CacheStrategy {
    /// Returns true if records live in a flat, prefixed keyspace.
    #[must_use]
    pub const fn is_region(&self) -> bool {
        matches!(self, Self::Region)
    }

    /// Returns true if records live inside one hash.
    #[must_use]
    pub const fn is_hash(&self) -> bool {
        matches!(self, Self::Hash)
    }
}

impl fmt::Display for CacheStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Region => write!(f, "region"),
            Self::Hash => write!(f, "hash"),
        }
    }
}

impl FromStr for CacheStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "region" | "redis-region" => Ok(Self::Region),
            "hash" | "redis-hash" => Ok(Self::Hash),
            other => Err(format!("Unknown cache strategy: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_region() {
        assert_eq!(CacheStrategy::default(), CacheStrategy::Region);
        assert!(CacheStrategy::default().is_region());
    }

    #[test]
    fn test_from_str_accepts_profile_names() {
        assert_eq!("redis-hash".parse::<CacheStrategy>(), Ok(CacheStrategy::Hash));
        assert_eq!("Region".parse::<CacheStrategy>(), Ok(CacheStrategy::Region));
        assert!("memcached".parse::<CacheStrategy>().is_err());
    }

    #[test]
    fn test_serde_names() {
        let strategy: CacheStrategy = serde_json::from_str("\"hash\"").unwrap();
        assert!(strategy.is_hash());
        let aliased: CacheStrategy = serde_json::from_str("\"redis-region\"").unwrap();
        assert!(aliased.is_region());
        assert_eq!(serde_json::to_string(&CacheStrategy::Hash).unwrap(), "\"hash\"");
    }
}
