//! Domain entities.

mod movie_record;
mod movie_record_redis_hash;
mod user;

pub use movie_record::MovieRecord;
pub use movie_record_redis_hash::MovieRecordRedisHash;
pub use user::User;
