//! HTTP controllers.

pub mod health_controller;
pub mod movie_record_controller;
pub mod movie_record_redis_hash_controller;
pub mod user_controller;
