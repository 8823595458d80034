//! Movie record entity kept in the cache region.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Movie record information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MovieRecord {
    #[serde(default)]
    #[validate(length(min = 1, message = "Movie Record Id is mandatory"))]
    pub id: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Movie Record Title is mandatory"))]
    pub title: String,

    #[serde(default)]
    #[validate(range(min = 1888, max = 9999, message = "Movie Record Year is mandatory"))]
    pub year: i32,

    #[serde(default)]
    #[validate(length(min = 1, message = "Movie Record Genre is mandatory"))]
    pub genre: String,
}

impl MovieRecord {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_record() {
        let record = MovieRecord::new("42", "Matrix", 1999, "Sci-Fi");
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_missing_year_is_rejected() {
        let record: MovieRecord =
            serde_json::from_str(r#"{"id":"42","title":"Matrix","genre":"Sci-Fi"}"#).unwrap();
        let errors = record.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("year"));
    }
}
