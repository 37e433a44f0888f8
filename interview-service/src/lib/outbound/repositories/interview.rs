use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::user::models::UserId;
use crate::interview::errors::InterviewError;
use crate::interview::models::Interview;
use crate::interview::models::InterviewId;
use crate::interview::ports::InterviewRepository;

/// In-memory interview store.
pub struct InMemoryInterviewStore {
    interviews: RwLock<Vec<Interview>>,
}

impl InMemoryInterviewStore {
    pub fn new() -> Self {
        Self {
            interviews: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryInterviewStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InterviewRepository for InMemoryInterviewStore {
    async fn add(&self, interview: Interview) -> Result<Interview, InterviewError> {
        let mut interviews = self
            .interviews
            .write()
            .map_err(|e| InterviewError::StoreError(e.to_string()))?;

        interviews.push(interview.clone());
        Ok(interview)
    }

    async fn find_all_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Interview>, InterviewError> {
        let interviews = self
            .interviews
            .read()
            .map_err(|e| InterviewError::StoreError(e.to_string()))?;

        Ok(interviews
            .iter()
            .filter(|interview| interview.user_id == *user_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(
        &self,
        user_id: &UserId,
        id: &InterviewId,
    ) -> Result<Option<Interview>, InterviewError> {
        let interviews = self
            .interviews
            .read()
            .map_err(|e| InterviewError::StoreError(e.to_string()))?;

        Ok(interviews
            .iter()
            .find(|interview| interview.user_id == *user_id && interview.id == *id)
            .cloned())
    }

    async fn delete(&self, user_id: &UserId, id: &InterviewId) -> Result<bool, InterviewError> {
        let mut interviews = self
            .interviews
            .write()
            .map_err(|e| InterviewError::StoreError(e.to_string()))?;

        let before = interviews.len();
        interviews.retain(|interview| !(interview.user_id == *user_id && interview.id == *id));
        Ok(interviews.len() != before)
    }
}
