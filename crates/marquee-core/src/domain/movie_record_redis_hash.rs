//! Movie record kept as a field of the v2 Redis hash.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Movie record served by the v2 API.
///
/// Same shape as [`MovieRecord`](super::MovieRecord), but stored in the hash
/// layout under its own name and with a later earliest year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MovieRecordRedisHash {
    #[serde(default)]
    #[validate(length(min = 1, message = "Movie Record Id is mandatory"))]
    pub id: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Movie Record Title is mandatory"))]
    pub title: String,

    #[serde(default)]
    #[validate(range(min = 1900, max = 9999, message = "Movie Record Year must be between 1900 and 9999"))]
    pub year: i32,

    #[serde(default)]
    #[validate(length(min = 1, message = "Movie Record Genre is mandatory"))]
    pub genre: String,
}

impl MovieRecordRedisHash {
    /// Creates a movie record.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            year,
            genre: genre.into(),
        }
    }
}
