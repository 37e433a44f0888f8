use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::InterviewData;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;
use crate::interview::ports::InterviewServicePort;

/// All interviews of the authenticated user; an empty array when there
/// are none.
pub async fn list_interviews(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> Result<ApiSuccess<Vec<InterviewData>>, ApiError> {
    state
        .interview_service
        .list_interviews(&current_user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|interviews| {
            ApiSuccess::new(
                StatusCode::OK,
                interviews.iter().map(InterviewData::from).collect(),
            )
        })
}
