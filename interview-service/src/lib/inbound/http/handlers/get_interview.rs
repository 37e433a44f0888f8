use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::InterviewData;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;
use crate::interview::models::InterviewId;
use crate::interview::ports::InterviewServicePort;

pub async fn get_interview(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(interview_id): Path<String>,
) -> Result<ApiSuccess<InterviewData>, ApiError> {
    // An id that does not parse cannot match any stored interview.
    let interview_id = InterviewId::from_string(&interview_id)
        .map_err(|_| ApiError::NotFound("Interview not found".to_string()))?;

    state
        .interview_service
        .get_interview(&current_user.user_id, &interview_id)
        .await
        .map_err(ApiError::from)
        .map(|ref interview| ApiSuccess::new(StatusCode::OK, interview.into()))
}
