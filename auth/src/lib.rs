//! Authentication building blocks
//!
//! Reusable authentication infrastructure for services:
//! - Password hashing (PBKDF2 with per-record salt and iteration count)
//! - Signed, time-limited bearer tokens (JWT)
//!
//! Services own their identity models and persistence; this crate only
//! provides the cryptographic leaf components they compose.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::{HashAlgorithm, HashConfig, PasswordHasher};
//!
//! let hasher = PasswordHasher::new(HashConfig {
//!     algorithm: HashAlgorithm::Sha512,
//!     hash_length: 64,
//!     iterations: 1000,
//!     salt_length: 16,
//! });
//! let record = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify(&record, "my_password").unwrap());
//! assert!(!hasher.verify(&record, "not_my_password").unwrap());
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use auth::TokenCodec;
//! use serde_json::json;
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!");
//! let token = codec.issue(json!({ "user": "alice" }), 1000).unwrap();
//! let claims = codec.verify::<serde_json::Value>(&token).unwrap();
//! assert_eq!(claims.data["user"], "alice");
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::HashAlgorithm;
pub use password::HashConfig;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use password::PasswordRecord;
pub use token::TokenClaims;
pub use token::TokenCodec;
pub use token::TokenError;
