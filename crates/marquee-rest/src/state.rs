//! Application state for Axum handlers.

use marquee_service::{MovieRecordRedisHashService, MovieRecordService, UserService};
use shaku::{HasComponent, Module};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub movie_record_service: Arc<dyn MovieRecordService>,
    pub movie_record_redis_hash_service: Arc<dyn MovieRecordRedisHashService>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        user_service: Arc<dyn UserService>,
        movie_record_service: Arc<dyn MovieRecordService>,
        movie_record_redis_hash_service: Arc<dyn MovieRecordRedisHashService>,
    ) -> Self {
        Self {
            user_service,
            movie_record_service,
            movie_record_redis_hash_service,
        }
    }

    /// Resolves every service from a Shaku module.
    pub fn from_module<M>(module: &M) -> Self
    where
        M: Module
            + HasComponent<dyn UserService>
            + HasComponent<dyn MovieRecordService>
            + HasComponent<dyn MovieRecordRedisHashService>,
    {
        Self {
            user_service: module.resolve(),
            movie_record_service: module.resolve(),
            movie_record_redis_hash_service: module.resolve(),
        }
    }
}
