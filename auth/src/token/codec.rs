use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::claims::TokenClaims;
use super::errors::TokenError;

/// Issues and verifies signed, time-limited bearer tokens.
///
/// Uses HS256 (HMAC with SHA-256) with a single process-wide secret.
/// Tokens are stateless: the payload travels inside the token and nothing
/// is registered server-side, so there is no revocation.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenCodec {
    /// Create a new codec from the signing secret.
    ///
    /// The secret should be at least 256 bits and come from configuration,
    /// never from code.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Issue a signed token expiring `ttl_seconds` from now.
    ///
    /// `ttl_seconds` may be zero or negative; the resulting token is signed
    /// normally and only fails at verification time. Useful for minting
    /// deliberately expired tokens in tests.
    ///
    /// # Errors
    /// * `SigningFailed` - Token encoding failed
    pub fn issue<T: Serialize>(&self, payload: T, ttl_seconds: i64) -> Result<String, TokenError> {
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            data: payload,
            exp: now + ttl_seconds,
            iat: now,
        };

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    /// Verify a token and return its claims.
    ///
    /// The signature and structure are checked first; a token that passes
    /// those but whose expiration is not in the future is rejected as
    /// expired. On success the returned `data` is exactly the payload that
    /// was passed to [`issue`](Self::issue).
    ///
    /// # Errors
    /// * `Invalid` - Malformed token or signature mismatch
    /// * `Expired` - Valid signature, expiration reached
    pub fn verify<T: DeserializeOwned>(&self, token: &str) -> Result<TokenClaims<T>, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is checked below against the wall clock; the library check
        // has a default leeway that would let stale tokens pass.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let token_data = decode::<TokenClaims<T>>(token, &self.decoding_key, &validation)
            .map_err(|e| TokenError::Invalid(e.to_string()))?;

        if token_data.claims.exp <= Utc::now().timestamp() {
            return Err(TokenError::Expired);
        }

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestPayload {
        id: String,
        username: String,
    }

    fn test_payload() -> TestPayload {
        TestPayload {
            id: "user123".to_string(),
            username: "alice".to_string(),
        }
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let codec = TokenCodec::new(b"my_secret_key_at_least_32_bytes_long!");

        let token = codec.issue(test_payload(), 1000).expect("Failed to issue");
        assert!(!token.is_empty());

        let claims = codec
            .verify::<TestPayload>(&token)
            .expect("Failed to verify");
        assert_eq!(claims.data, test_payload());
        assert_eq!(claims.exp - claims.iat, 1000);
    }

    #[test]
    fn test_negative_ttl_issues_but_fails_verification() {
        let codec = TokenCodec::new(b"my_secret_key_at_least_32_bytes_long!");

        let token = codec
            .issue(test_payload(), -1000)
            .expect("Issuing an already-expired token must succeed");

        let result = codec.verify::<TestPayload>(&token);
        assert!(matches!(result, Err(TokenError::Expired)));
    }

    #[test]
    fn test_zero_ttl_is_expired() {
        let codec = TokenCodec::new(b"my_secret_key_at_least_32_bytes_long!");

        let token = codec.issue(test_payload(), 0).expect("Failed to issue");

        let result = codec.verify::<TestPayload>(&token);
        assert!(matches!(result, Err(TokenError::Expired)));
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let codec = TokenCodec::new(b"my_secret_key_at_least_32_bytes_long!");

        let token = codec.issue(test_payload(), 1000).expect("Failed to issue");

        // Flip one character in the middle of the token.
        let mut bytes = token.into_bytes();
        let idx = bytes.len() / 2;
        bytes[idx] = if bytes[idx] == b'x' { b'y' } else { b'x' };
        let tampered = String::from_utf8(bytes).unwrap();

        assert!(codec.verify::<TestPayload>(&tampered).is_err());
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let issuer = TokenCodec::new(b"secret_one_at_least_32_bytes_long!!!");
        let verifier = TokenCodec::new(b"secret_two_at_least_32_bytes_long!!!");

        let token = issuer.issue(test_payload(), 1000).expect("Failed to issue");

        let result = verifier.verify::<TestPayload>(&token);
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_garbage_token_is_invalid() {
        let codec = TokenCodec::new(b"my_secret_key_at_least_32_bytes_long!");

        let result = codec.verify::<TestPayload>("123.123.123");
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }
}
