//! # Marquee Service
//!
//! Business logic service layer for Marquee: the in-memory user directory,
//! the cache-backed movie record catalogue, and the v2 movie records kept in
//! a Redis hash.

pub mod dto;
mod service_impl;
pub mod movie_record_redis_hash_service;
pub mod movie_record_service;
pub mod user_service;

pub use dto::*;
pub use movie_record_redis_hash_service::*;
pub use movie_record_service::*;
pub use service_impl::*;
pub use user_service::*;
