use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::domain::user::models::TokenPayload;
use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;

/// Identity attached to the request extensions once the gate admits it.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: UserId,
    pub username: String,
}

const BEARER_PREFIX: &str = "Bearer ";
/// Shortest header that can hold the prefix plus a structurally minimal token.
const MIN_AUTH_HEADER_LEN: usize = "Bearer x.x.x".len();

/// Authorization gate for protected routes.
///
/// A missing or structurally too-short `Authorization` header is rejected
/// 401 before the token codec runs; everything that fails verification is
/// rejected 403 with a generic body. On success the decoded payload is
/// attached to the request and the downstream handler runs exactly once.
pub async fn require_authorization(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let header = match header {
        Some(value) if value.len() >= MIN_AUTH_HEADER_LEN => value,
        _ => return Err(authorization_required()),
    };

    let Some(token) = header.strip_prefix(BEARER_PREFIX) else {
        return Err(invalid_token());
    };

    let claims = match state.token_codec.verify::<TokenPayload>(token) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::warn!("Token verification failed: {}", e);
            return Err(invalid_token());
        }
    };

    let payload = claims.data;
    let user_id = match UserId::from_string(&payload.id) {
        Ok(user_id) => user_id,
        Err(e) => {
            tracing::warn!("Token payload carries an unusable user id: {}", e);
            return Err(invalid_token());
        }
    };

    req.extensions_mut().insert(CurrentUser {
        user_id,
        username: payload.username,
    });

    Ok(next.run(req).await)
}

fn authorization_required() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "message": "Authorization required" })),
    )
        .into_response()
}

fn invalid_token() -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(json!({ "message": "Invalid token" })),
    )
        .into_response()
}
