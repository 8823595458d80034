//! Redis container for store integration tests.

use marquee_cache::{KeyValueStore, RedisStore};
use marquee_config::RedisConfig;
use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::redis::{Redis, REDIS_PORT};

/// A throwaway Redis server, stopped when dropped.
pub struct TestRedis {
    _container: ContainerAsync<Redis>,
    config: RedisConfig,
}

impl TestRedis {
    /// Starts a fresh container, or returns `None` when no Docker daemon is
    /// reachable so the calling test can bail out.
    pub async fn start() -> Option<Self> {
        let container = match Redis::default().start().await {
            Ok(container) => container,
            Err(e) => {
                eprintln!("skipping Redis integration test, container did not start: {e}");
                return None;
            }
        };

        let port = container
            .get_host_port_ipv4(REDIS_PORT)
            .await
            .expect("Failed to get Redis port");

        let config = RedisConfig {
            url: format!("redis://127.0.0.1:{}", port),
            pool_size: 4,
            enabled: true,
        };

        Some(Self {
            _container: container,
            config,
        })
    }

    pub fn config(&self) -> &RedisConfig {
        &self.config
    }

    /// Connects a store to the container.
    pub async fn store(&self) -> Arc<dyn KeyValueStore> {
        let store = RedisStore::connect(&self.config)
            .await
            .expect("Failed to connect to Redis container");
        Arc::new(store)
    }
}
