use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::interview::errors::InterviewError;
use crate::interview::models::Interview;
use crate::user::errors::UserError;

pub mod authenticate;
pub mod create_interview;
pub mod create_user;
pub mod delete_interview;
pub mod get_interview;
pub mod list_interviews;
pub mod status;
pub mod update_interview;

/// Successful response: a status code and a JSON body.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<T>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Error response; always serialized as `{ "message": ... }`.
///
/// Messages are client-facing: internal detail is logged where the error
/// is mapped, never sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
    Forbidden(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
        };

        (status, Json(ApiErrorBody { message })).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidCredentials => {
                ApiError::Forbidden("Invalid credentials".to_string())
            }
            UserError::UsernameAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            UserError::InvalidUsername(_)
            | UserError::InvalidEmail(_)
            | UserError::InvalidUserId(_) => ApiError::BadRequest(err.to_string()),
            UserError::Password(ref e) => {
                tracing::error!("Password operation failed: {}", e);
                ApiError::InternalServerError("An internal error occurred".to_string())
            }
            UserError::StoreError(ref e) => {
                tracing::error!("User store unavailable: {}", e);
                ApiError::InternalServerError("A database error occurred".to_string())
            }
            UserError::Unknown(ref e) => {
                tracing::error!("Unexpected user error: {}", e);
                ApiError::InternalServerError("An internal error occurred".to_string())
            }
        }
    }
}

impl From<InterviewError> for ApiError {
    fn from(err: InterviewError) -> Self {
        match err {
            InterviewError::NotFound(_) | InterviewError::InvalidInterviewId(_) => {
                ApiError::NotFound("Interview not found".to_string())
            }
            InterviewError::InvalidTitle(_) => ApiError::BadRequest(err.to_string()),
            InterviewError::StoreError(ref e) => {
                tracing::error!("Interview store unavailable: {}", e);
                ApiError::InternalServerError("A database error occurred".to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    pub message: String,
}

/// Interview representation returned by every interview endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterviewData {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub questions: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Interview> for InterviewData {
    fn from(interview: &Interview) -> Self {
        Self {
            id: interview.id.to_string(),
            user_id: interview.user_id.to_string(),
            title: interview.title.as_str().to_string(),
            questions: interview.questions.clone(),
            created_at: interview.created_at,
        }
    }
}
