use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::InterviewData;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;
use crate::interview::errors::InterviewTitleError;
use crate::interview::models::CreateInterviewCommand;
use crate::interview::models::InterviewTitle;
use crate::interview::ports::InterviewServicePort;

pub async fn create_interview(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(body): Json<CreateInterviewRequest>,
) -> Result<ApiSuccess<InterviewData>, ApiError> {
    state
        .interview_service
        .add_interview(&current_user.user_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref interview| ApiSuccess::new(StatusCode::CREATED, interview.into()))
}

/// HTTP request body for creating an interview (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateInterviewRequest {
    title: String,
    #[serde(default)]
    questions: Vec<String>,
}

impl CreateInterviewRequest {
    fn try_into_command(self) -> Result<CreateInterviewCommand, InterviewTitleError> {
        let title = InterviewTitle::new(self.title)?;
        Ok(CreateInterviewCommand {
            title,
            questions: self.questions,
        })
    }
}

impl From<InterviewTitleError> for ApiError {
    fn from(err: InterviewTitleError) -> Self {
        ApiError::BadRequest(format!("Invalid interview object passed: {}", err))
    }
}
