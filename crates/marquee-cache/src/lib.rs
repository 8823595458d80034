//! # Marquee Cache
//!
//! Typed cache backends over a key/value store.
//!
//! Two storage layouts are provided behind one [`CacheBackend`] contract:
//!
//! - [`RegionBackend`]: every record is its own key, prefixed with `<region>.`
//! - [`HashBackend`]: every record is a field of one hash named after the region
//!
//! Both talk to the store through [`KeyValueStore`], implemented for Redis by
//! [`RedisStore`] and in process by [`MemoryStore`]. The layout is chosen once
//! at startup with [`build_backend`].

mod assemble;
mod backend;
mod codec;
mod factory;
mod hash;
mod key;
mod region;
pub mod store;

pub use assemble::assemble;
pub use backend::CacheBackend;
pub use codec::{KeyCodec, WILDCARD};
pub use factory::{build_backend, connect_store};
pub use hash::HashBackend;
pub use key::{CacheKey, CacheValue};
pub use marquee_config::CacheStrategy;
pub use region::RegionBackend;
pub use store::{KeyValueStore, MemoryStore, RedisStore};

#[cfg(any(test, feature = "mock"))]
pub use store::MockKeyValueStore;
