use std::fmt;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use hmac::Hmac;
use pbkdf2::pbkdf2;
use rand::rngs::OsRng;
use rand::RngCore;
use serde::Deserialize;
use serde::Serialize;
use sha2::Sha256;
use sha2::Sha512;

use super::errors::PasswordError;

/// Digest used as the PBKDF2 pseudo-random function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    Sha256,
    Sha512,
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashAlgorithm::Sha256 => write!(f, "sha256"),
            HashAlgorithm::Sha512 => write!(f, "sha512"),
        }
    }
}

/// Static key-derivation parameters.
///
/// Supplied once at process start; never taken from request input.
#[derive(Debug, Clone, Deserialize)]
pub struct HashConfig {
    pub algorithm: HashAlgorithm,
    /// Derived key length in bytes.
    pub hash_length: usize,
    pub iterations: u32,
    /// Raw salt length in bytes, before base64 encoding.
    pub salt_length: usize,
}

/// Stored representation of a password.
///
/// `hash` is the hex-encoded derived key; `salt` is base64-encoded. The
/// derivation consumes the encoded salt string, so records are portable
/// across processes as long as the digest and key length stay fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordRecord {
    pub hash: String,
    pub salt: String,
    pub iterations: u32,
}

/// Password hashing implementation.
///
/// Derives irreversible password records via PBKDF2 with a fresh random
/// salt per record.
pub struct PasswordHasher {
    config: HashConfig,
}

impl PasswordHasher {
    pub fn new(config: HashConfig) -> Self {
        Self { config }
    }

    /// Hash a plaintext password into a storable record.
    ///
    /// # Errors
    /// * `HashingFailed` - The derivation primitive failed
    pub fn hash(&self, password: &str) -> Result<PasswordRecord, PasswordError> {
        let mut salt_bytes = vec![0u8; self.config.salt_length];
        OsRng.fill_bytes(&mut salt_bytes);
        let salt = BASE64.encode(&salt_bytes);

        let hash = self
            .derive(password, &salt, self.config.iterations)
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))?;

        Ok(PasswordRecord {
            hash,
            salt,
            iterations: self.config.iterations,
        })
    }

    /// Verify a password against a stored record.
    ///
    /// Recomputes the derivation with the record's own salt and iteration
    /// count and compares for exact equality. A merely-wrong password
    /// yields `Ok(false)`.
    ///
    /// # Errors
    /// * `VerificationFailed` - The derivation primitive failed
    pub fn verify(&self, record: &PasswordRecord, password: &str) -> Result<bool, PasswordError> {
        let derived = self
            .derive(password, &record.salt, record.iterations)
            .map_err(|e| PasswordError::VerificationFailed(e.to_string()))?;

        Ok(derived == record.hash)
    }

    fn derive(
        &self,
        password: &str,
        salt: &str,
        iterations: u32,
    ) -> Result<String, hmac::digest::InvalidLength> {
        let mut derived_key = vec![0u8; self.config.hash_length];
        match self.config.algorithm {
            HashAlgorithm::Sha256 => pbkdf2::<Hmac<Sha256>>(
                password.as_bytes(),
                salt.as_bytes(),
                iterations,
                &mut derived_key,
            ),
            HashAlgorithm::Sha512 => pbkdf2::<Hmac<Sha512>>(
                password.as_bytes(),
                salt.as_bytes(),
                iterations,
                &mut derived_key,
            ),
        }?;
        Ok(hex::encode(derived_key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_hasher() -> PasswordHasher {
        PasswordHasher::new(HashConfig {
            algorithm: HashAlgorithm::Sha512,
            hash_length: 64,
            iterations: 1000,
            salt_length: 16,
        })
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = test_hasher();
        let password = "my_secure_password";

        let record = hasher.hash(password).expect("Failed to hash password");

        assert!(hasher
            .verify(&record, password)
            .expect("Failed to verify password"));
        assert!(!hasher
            .verify(&record, "wrong_password")
            .expect("Failed to verify password"));
    }

    #[test]
    fn test_same_password_hashes_differently() {
        let hasher = test_hasher();
        let password = "my_secure_password";

        let first = hasher.hash(password).unwrap();
        let second = hasher.hash(password).unwrap();

        assert_ne!(first.salt, second.salt);
        assert_ne!(first.hash, second.hash);
        assert!(hasher.verify(&first, password).unwrap());
        assert!(hasher.verify(&second, password).unwrap());
    }

    #[test]
    fn test_verify_is_deterministic() {
        let hasher = test_hasher();
        let record = hasher.hash("password").unwrap();

        assert!(hasher.verify(&record, "password").unwrap());
        assert!(hasher.verify(&record, "password").unwrap());
    }

    #[test]
    fn test_record_field_encodings() {
        let hasher = test_hasher();
        let record = hasher.hash("password").unwrap();

        // hex-encoded derived key of the configured length
        assert_eq!(record.hash.len(), 64 * 2);
        assert!(record.hash.chars().all(|c| c.is_ascii_hexdigit()));

        // base64-encoded salt of the configured raw length
        let salt_bytes = BASE64.decode(&record.salt).expect("salt is not base64");
        assert_eq!(salt_bytes.len(), 16);

        assert_eq!(record.iterations, 1000);
    }

    #[test]
    fn test_verify_honors_record_iterations() {
        let record = test_hasher().hash("password").unwrap();

        // A hasher configured with a different iteration count still
        // verifies, because the count is read from the record.
        let other = PasswordHasher::new(HashConfig {
            algorithm: HashAlgorithm::Sha512,
            hash_length: 64,
            iterations: 2000,
            salt_length: 16,
        });
        assert!(other.verify(&record, "password").unwrap());
    }

    #[test]
    fn test_digest_changes_hash() {
        let sha256 = PasswordHasher::new(HashConfig {
            algorithm: HashAlgorithm::Sha256,
            hash_length: 64,
            iterations: 1000,
            salt_length: 16,
        });
        let record = test_hasher().hash("password").unwrap();

        assert!(!sha256.verify(&record, "password").unwrap());
    }
}
