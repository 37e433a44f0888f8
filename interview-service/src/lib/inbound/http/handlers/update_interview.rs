use axum::http::StatusCode;

/// Updating an interview is not offered yet.
pub async fn update_interview() -> StatusCode {
    StatusCode::NOT_IMPLEMENTED
}
