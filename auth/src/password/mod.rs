pub mod errors;
pub mod pbkdf2;

pub use errors::PasswordError;
pub use pbkdf2::HashAlgorithm;
pub use pbkdf2::HashConfig;
pub use pbkdf2::PasswordHasher;
pub use pbkdf2::PasswordRecord;
