use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::user::models::User;
use crate::user::errors::UserError;
use crate::user::models::Username;
use crate::user::ports::UserRepository;

/// In-memory identity store keyed by exact username.
///
/// Process-local implementation of the narrow store port; the domain only
/// ever sees the [`UserRepository`] capability, so a durable store can be
/// swapped in without touching the core.
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn add_user(&self, user: User) -> Result<User, UserError> {
        let mut users = self
            .users
            .write()
            .map_err(|e| UserError::StoreError(e.to_string()))?;

        let key = user.username.as_str().to_string();
        if users.contains_key(&key) {
            return Err(UserError::UsernameAlreadyExists(key));
        }

        users.insert(key, user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        let users = self
            .users
            .read()
            .map_err(|e| UserError::StoreError(e.to_string()))?;

        Ok(users.get(username.as_str()).cloned())
    }
}
