//! DTOs of the v2 movie record API.

use marquee_core::MovieRecordRedisHash;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Every v2 movie record with the hash size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecordsRedisHashResponse {
    pub count: u64,
    pub movie_records: Vec<MovieRecordRedisHash>,
}

/// A single v2 movie record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecordRedisHashResponse {
    pub movie_record: MovieRecordRedisHash,
}

impl From<MovieRecordRedisHash> for MovieRecordRedisHashResponse {
    fn from(movie_record: MovieRecordRedisHash) -> Self {
        Self { movie_record }
    }
}
