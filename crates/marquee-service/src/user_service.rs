//! User service trait definition.

use marquee_core::{Interface, MarqueeResult, User};
use async_trait::async_trait;

/// User directory.
///
/// Lookups report absence through `Option`/`bool`; callers decide whether
/// that is an error.
#[async_trait]
pub trait UserService: Interface + Send + Sync {
    /// Checks if a user with this id exists.
    async fn exists(&self, id: &str) -> MarqueeResult<bool>;

    /// Stores a user, assigning a fresh id when none was supplied.
    async fn insert(&self, user: User) -> MarqueeResult<User>;

    /// Gets a user by id.
    async fn retrieve(&self, id: &str) -> MarqueeResult<Option<User>>;

    /// Deletes a user. Returns false if no user had this id.
    async fn delete(&self, id: &str) -> MarqueeResult<bool>;

    /// Replaces the stored user with the same id. Returns false if there is none.
    async fn update(&self, user: User) -> MarqueeResult<bool>;

    /// Lists every user in insertion order.
    async fn retrieve_all(&self) -> MarqueeResult<Vec<User>>;

    /// Number of stored users.
    async fn count(&self) -> MarqueeResult<u64>;
}
