use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::user::models::UserId;
use crate::interview::errors::InterviewError;
use crate::interview::models::CreateInterviewCommand;
use crate::interview::models::Interview;
use crate::interview::models::InterviewId;
use crate::interview::ports::InterviewRepository;
use crate::interview::ports::InterviewServicePort;

/// Domain service implementation for interview operations.
pub struct InterviewService<IR>
where
    IR: InterviewRepository,
{
    repository: Arc<IR>,
}

impl<IR> InterviewService<IR>
where
    IR: InterviewRepository,
{
    pub fn new(repository: Arc<IR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<IR> InterviewServicePort for InterviewService<IR>
where
    IR: InterviewRepository,
{
    async fn list_interviews(&self, user_id: &UserId) -> Result<Vec<Interview>, InterviewError> {
        self.repository.find_all_for_user(user_id).await
    }

    async fn get_interview(
        &self,
        user_id: &UserId,
        id: &InterviewId,
    ) -> Result<Interview, InterviewError> {
        self.repository
            .find_by_id(user_id, id)
            .await?
            .ok_or(InterviewError::NotFound(id.to_string()))
    }

    async fn add_interview(
        &self,
        user_id: &UserId,
        command: CreateInterviewCommand,
    ) -> Result<Interview, InterviewError> {
        let interview = Interview {
            id: InterviewId::new(),
            user_id: *user_id,
            title: command.title,
            questions: command.questions,
            created_at: Utc::now(),
        };

        self.repository.add(interview).await
    }

    async fn delete_interview(
        &self,
        user_id: &UserId,
        id: &InterviewId,
    ) -> Result<(), InterviewError> {
        if self.repository.delete(user_id, id).await? {
            Ok(())
        } else {
            Err(InterviewError::NotFound(id.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::interview::models::InterviewTitle;

    mock! {
        pub TestInterviewRepository {}

        #[async_trait]
        impl InterviewRepository for TestInterviewRepository {
            async fn add(&self, interview: Interview) -> Result<Interview, InterviewError>;
            async fn find_all_for_user(&self, user_id: &UserId) -> Result<Vec<Interview>, InterviewError>;
            async fn find_by_id(&self, user_id: &UserId, id: &InterviewId) -> Result<Option<Interview>, InterviewError>;
            async fn delete(&self, user_id: &UserId, id: &InterviewId) -> Result<bool, InterviewError>;
        }
    }

    fn sample_interview(user_id: UserId) -> Interview {
        Interview {
            id: InterviewId::new(),
            user_id,
            title: InterviewTitle::new("Backend position".to_string()).unwrap(),
            questions: vec!["Tell me about ownership".to_string()],
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_add_interview_assigns_id_and_owner() {
        let user_id = UserId::new();

        let mut repository = MockTestInterviewRepository::new();
        repository
            .expect_add()
            .withf(move |interview| {
                interview.user_id == user_id && interview.title.as_str() == "Backend position"
            })
            .times(1)
            .returning(|interview| Ok(interview));

        let service = InterviewService::new(Arc::new(repository));

        let command = CreateInterviewCommand {
            title: InterviewTitle::new("Backend position".to_string()).unwrap(),
            questions: vec![],
        };

        let created = service.add_interview(&user_id, command).await.unwrap();
        assert_eq!(created.user_id, user_id);
    }

    #[tokio::test]
    async fn test_get_interview_not_found() {
        let mut repository = MockTestInterviewRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_, _| Ok(None));

        let service = InterviewService::new(Arc::new(repository));

        let result = service
            .get_interview(&UserId::new(), &InterviewId::new())
            .await;
        assert!(matches!(result.unwrap_err(), InterviewError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_interviews_forwards_owner() {
        let user_id = UserId::new();
        let interview = sample_interview(user_id);

        let mut repository = MockTestInterviewRepository::new();
        repository
            .expect_find_all_for_user()
            .withf(move |id| *id == user_id)
            .times(1)
            .returning(move |_| Ok(vec![interview.clone()]));

        let service = InterviewService::new(Arc::new(repository));

        let interviews = service.list_interviews(&user_id).await.unwrap();
        assert_eq!(interviews.len(), 1);
        assert_eq!(interviews[0].user_id, user_id);
    }

    #[tokio::test]
    async fn test_delete_interview_not_found() {
        let mut repository = MockTestInterviewRepository::new();
        repository
            .expect_delete()
            .times(1)
            .returning(|_, _| Ok(false));

        let service = InterviewService::new(Arc::new(repository));

        let result = service
            .delete_interview(&UserId::new(), &InterviewId::new())
            .await;
        assert!(matches!(result.unwrap_err(), InterviewError::NotFound(_)));
    }
}
