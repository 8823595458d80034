//! User-related DTOs.

use marquee_core::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Every stored user with the total count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UsersDataResponse {
    pub count: u64,
    pub users: Vec<User>,
}

/// A single user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDataResponse {
    pub user: User,
}

impl From<User> for UserDataResponse {
    fn from(user: User) -> Self {
        Self { user }
    }
}
