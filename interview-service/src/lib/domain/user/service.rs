use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use chrono::Utc;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::TokenPayload;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::models::Username;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service for identities: signup and credential verification.
///
/// Key derivation is CPU-bound and runs on the blocking thread pool so a
/// slow hash never stalls unrelated requests.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: Arc<PasswordHasher>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>, password_hasher: Arc<PasswordHasher>) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        let hasher = Arc::clone(&self.password_hasher);
        let password = command.password;
        let record = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| UserError::Unknown(e.to_string()))??;

        let user = User {
            id: UserId::new(),
            username: command.username,
            email: command.email,
            password: record,
            created_at: Utc::now(),
        };

        self.repository.add_user(user).await
    }

    async fn check_credentials(&self, username: &str, password: &str) -> Result<User, UserError> {
        // A name that fails validation cannot belong to a stored identity.
        let username = Username::new(username.to_string())
            .map_err(|_| UserError::InvalidCredentials)?;

        let user = self
            .repository
            .find_by_username(&username)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        let hasher = Arc::clone(&self.password_hasher);
        let record = user.password.clone();
        let password = password.to_string();
        let matches = tokio::task::spawn_blocking(move || hasher.verify(&record, &password))
            .await
            .map_err(|e| UserError::Unknown(e.to_string()))??;

        if matches {
            Ok(user)
        } else {
            Err(UserError::InvalidCredentials)
        }
    }

    fn token_payload_for(&self, user: &User) -> TokenPayload {
        TokenPayload::from(user)
    }
}
