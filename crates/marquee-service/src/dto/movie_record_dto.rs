//! Movie record DTOs.

use marquee_core::MovieRecord;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Cached movie records with the region's record count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecordsResponse {
    pub count: u64,
    pub movie_records: Vec<MovieRecord>,
}

/// A single movie record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecordResponse {
    pub movie_record: MovieRecord,
}

impl From<MovieRecord> for MovieRecordResponse {
    fn from(movie_record: MovieRecord) -> Self {
        Self { movie_record }
    }
}
