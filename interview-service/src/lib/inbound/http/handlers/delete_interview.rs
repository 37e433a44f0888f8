use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;
use crate::interview::models::InterviewId;
use crate::interview::ports::InterviewServicePort;

pub async fn delete_interview(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(interview_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let interview_id = InterviewId::from_string(&interview_id)
        .map_err(|_| ApiError::NotFound("Interview not found".to_string()))?;

    state
        .interview_service
        .delete_interview(&current_user.user_id, &interview_id)
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}
