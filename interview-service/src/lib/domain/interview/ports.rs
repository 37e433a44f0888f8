use async_trait::async_trait;

use crate::domain::user::models::UserId;
use crate::interview::errors::InterviewError;
use crate::interview::models::CreateInterviewCommand;
use crate::interview::models::Interview;
use crate::interview::models::InterviewId;

/// Port for interview domain service operations.
///
/// Every operation is scoped by the owning user; an interview belonging to
/// another user behaves exactly like a missing one.
#[async_trait]
pub trait InterviewServicePort: Send + Sync + 'static {
    /// List all interviews of a user; empty when there are none.
    async fn list_interviews(&self, user_id: &UserId) -> Result<Vec<Interview>, InterviewError>;

    /// Fetch one interview of a user.
    ///
    /// # Errors
    /// * `NotFound` - Absent or owned by a different user
    async fn get_interview(
        &self,
        user_id: &UserId,
        id: &InterviewId,
    ) -> Result<Interview, InterviewError>;

    /// Create an interview with a server-assigned identifier.
    async fn add_interview(
        &self,
        user_id: &UserId,
        command: CreateInterviewCommand,
    ) -> Result<Interview, InterviewError>;

    /// Delete one interview of a user.
    ///
    /// # Errors
    /// * `NotFound` - Absent or owned by a different user
    async fn delete_interview(
        &self,
        user_id: &UserId,
        id: &InterviewId,
    ) -> Result<(), InterviewError>;
}

/// Persistence capability for interview records.
#[async_trait]
pub trait InterviewRepository: Send + Sync + 'static {
    async fn add(&self, interview: Interview) -> Result<Interview, InterviewError>;

    async fn find_all_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Interview>, InterviewError>;

    async fn find_by_id(
        &self,
        user_id: &UserId,
        id: &InterviewId,
    ) -> Result<Option<Interview>, InterviewError>;

    /// Remove the record; `false` when nothing matched.
    async fn delete(&self, user_id: &UserId, id: &InterviewId) -> Result<bool, InterviewError>;
}
