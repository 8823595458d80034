//! Response payloads returned by the services.

mod movie_record_dto;
mod movie_record_redis_hash_dto;
mod user_dto;

pub use movie_record_dto::*;
pub use movie_record_redis_hash_dto::*;
pub use user_dto::*;
