use serde::Deserialize;
use serde::Serialize;

/// Claims carried by every issued token.
///
/// The caller-selected payload travels under `data`; expiration and
/// issuance instants are Unix timestamps set by the codec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims<T> {
    pub data: T,
    pub exp: i64,
    pub iat: i64,
}
