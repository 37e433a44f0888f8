use thiserror::Error;

/// Error type for password operations.
///
/// Both variants wrap a failure of the underlying derivation primitive.
/// A merely-wrong password is not an error; `verify` reports it as `false`.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Key derivation failed while hashing: {0}")]
    HashingFailed(String),

    #[error("Key derivation failed while verifying: {0}")]
    VerificationFailed(String),
}
