//! User entity kept by the in-memory user service.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A registered user.
///
/// `id` is optional on input; the user service assigns one on insert when
/// it is missing. Missing `name`/`address` deserialize as empty strings so
/// that validation can report them field by field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "User Name is mandatory"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "User Address is mandatory"))]
    pub address: String,
}

impl User {
    /// Creates a user without an id.
    #[must_use]
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            address: address.into(),
        }
    }

    /// Returns a copy of this user carrying the given id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}
