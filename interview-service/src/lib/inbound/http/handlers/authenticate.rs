use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::user::ports::UserServicePort;

/// Login endpoint: exchanges Basic credentials for a bearer token.
///
/// The credentials travel in the `Authorization` request header in Basic
/// encoding; a missing or undecodable header is a 400, rejected
/// credentials are a 403.
pub async fn authenticate(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<ApiSuccess<AuthenticateResponseData>, ApiError> {
    let credentials = basic_credentials(&headers).ok_or_else(|| {
        ApiError::BadRequest("Authentication header with Basic auth required".to_string())
    })?;

    let user = state
        .user_service
        .check_credentials(&credentials.username, &credentials.password)
        .await
        .map_err(ApiError::from)?;

    let payload = state.user_service.token_payload_for(&user);
    let expiration = state.token_ttl_seconds;
    let token = state
        .token_codec
        .issue(payload, expiration)
        .map_err(|e| {
            tracing::error!("Token issuance failed: {}", e);
            ApiError::InternalServerError("An internal error occurred".to_string())
        })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        AuthenticateResponseData {
            message: "Credentials accepted".to_string(),
            token,
            expiration_in_seconds: expiration,
        },
    ))
}

struct BasicCredentials {
    username: String,
    password: String,
}

fn basic_credentials(headers: &HeaderMap) -> Option<BasicCredentials> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let encoded = value.strip_prefix("Basic ")?;
    let decoded = BASE64.decode(encoded).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some(BasicCredentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticateResponseData {
    pub message: String,
    pub token: String,
    pub expiration_in_seconds: i64,
}
