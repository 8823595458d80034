//! Service implementations.
//!
//! Trait definitions live in the parent module (e.g. `user_service.rs`).

mod memory_user_service;
mod movie_record_redis_hash_service_impl;
mod movie_record_service_impl;

pub use memory_user_service::{MemoryUserService, MemoryUserServiceParameters};
pub use movie_record_redis_hash_service_impl::{
    in_memory_movie_record_hash, MovieRecordRedisHashServiceComponent,
    MovieRecordRedisHashServiceComponentParameters,
};
pub use movie_record_service_impl::{
    in_memory_movie_record_cache, MovieRecordServiceComponent, MovieRecordServiceComponentParameters,
};
