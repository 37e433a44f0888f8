use async_trait::async_trait;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::TokenPayload;
use crate::domain::user::models::User;
use crate::user::errors::UserError;
use crate::user::models::Username;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Create a new identity with a hashed password.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `Password` - Key derivation failed
    /// * `StoreError` - Persistence unavailable
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError>;

    /// Check a username/password pair and return the matching identity.
    ///
    /// An unknown username returns `InvalidCredentials` without any key
    /// derivation; a wrong password returns the same error after
    /// verification, so the two cases are indistinguishable to callers.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password
    /// * `Password` - Key derivation failed
    /// * `StoreError` - Persistence unavailable
    async fn check_credentials(&self, username: &str, password: &str) -> Result<User, UserError>;

    /// Build the data embedded in tokens issued for this identity.
    ///
    /// Never includes the password record or the plaintext password.
    fn token_payload_for(&self, user: &User) -> TokenPayload;
}

/// Persistence capability the user domain depends on.
///
/// Deliberately narrow: a lookup by exact username and an insert. Any
/// key-value shaped store can implement it.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new identity.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `StoreError` - Persistence unavailable
    async fn add_user(&self, user: User) -> Result<User, UserError>;

    /// Look up an identity by exact username match.
    ///
    /// Returns `None` when no identity has this username.
    ///
    /// # Errors
    /// * `StoreError` - Persistence unavailable
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
}
