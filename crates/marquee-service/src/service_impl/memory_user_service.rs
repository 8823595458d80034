//! In-memory user directory.

use crate::user_service::UserService;
use async_trait::async_trait;
use marquee_core::{MarqueeResult, User};
use parking_lot::RwLock;
use shaku::Component;
use tracing::{debug, info};
use uuid::Uuid;

/// User directory held in process memory for the lifetime of the process.
#[derive(Component, Default)]
#[shaku(interface = UserService)]
pub struct MemoryUserService {
    #[shaku(default)]
    users: RwLock<Vec<User>>,
}

impl MemoryUserService {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn position(users: &[User], id: &str) -> Option<usize> {
        users.iter().position(|user| user.id.as_deref() == Some(id))
    }
}

impl std::fmt::Debug for MemoryUserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryUserService")
            .field("users", &self.users.read().len())
            .finish()
    }
}

#[async_trait]
impl UserService for MemoryUserService {
    async fn exists(&self, id: &str) -> MarqueeResult<bool> {
        Ok(Self::position(&self.users.read(), id).is_some())
    }

    async fn insert(&self, mut user: User) -> MarqueeResult<User> {
        if user.id.is_none() {
            user.id = Some(Uuid::new_v4().to_string());
        }

        self.users.write().push(user.clone());

        info!(user_id = ?user.id, "User inserted");
        Ok(user)
    }

    async fn retrieve(&self, id: &str) -> MarqueeResult<Option<User>> {
        debug!("Getting user: {}", id);

        let users = self.users.read();
        Ok(Self::position(&users, id).map(|pos| users[pos].clone()))
    }

    async fn delete(&self, id: &str) -> MarqueeResult<bool> {
        let mut users = self.users.write();
        let before = users.len();
        users.retain(|user| user.id.as_deref() != Some(id));

        let removed = users.len() != before;
        debug!("Deleted user '{}': {}", id, removed);
        Ok(removed)
    }

    async fn update(&self, user: User) -> MarqueeResult<bool> {
        let Some(id) = user.id.clone() else {
            return Ok(false);
        };

        let mut users = self.users.write();
        match Self::position(&users, &id) {
            Some(pos) => {
                users[pos] = user;
                info!(user_id = %id, "User updated");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn retrieve_all(&self) -> MarqueeResult<Vec<User>> {
        Ok(self.users.read().clone())
    }

    async fn count(&self) -> MarqueeResult<u64> {
        Ok(self.users.read().len() as u64)
    }
}
