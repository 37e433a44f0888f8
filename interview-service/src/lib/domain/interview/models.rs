use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::user::models::UserId;
use crate::interview::errors::InterviewIdError;
use crate::interview::errors::InterviewTitleError;

/// Interview record, always owned by exactly one user.
#[derive(Debug, Clone)]
pub struct Interview {
    pub id: InterviewId,
    pub user_id: UserId,
    pub title: InterviewTitle,
    pub questions: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Interview unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InterviewId(pub Uuid);

impl InterviewId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> Result<Self, InterviewIdError> {
        Uuid::parse_str(s)
            .map(InterviewId)
            .map_err(|e| InterviewIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for InterviewId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InterviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Interview title value type: non-empty, at most 200 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterviewTitle(String);

impl InterviewTitle {
    const MAX_LENGTH: usize = 200;

    pub fn new(title: String) -> Result<Self, InterviewTitleError> {
        if title.trim().is_empty() {
            return Err(InterviewTitleError::Empty);
        }
        if title.len() > Self::MAX_LENGTH {
            return Err(InterviewTitleError::TooLong {
                max: Self::MAX_LENGTH,
                actual: title.len(),
            });
        }
        Ok(Self(title))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InterviewTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new interview for a user.
#[derive(Debug)]
pub struct CreateInterviewCommand {
    pub title: InterviewTitle,
    pub questions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_rules() {
        assert!(InterviewTitle::new("Backend position".to_string()).is_ok());
        assert!(InterviewTitle::new("".to_string()).is_err());
        assert!(InterviewTitle::new("   ".to_string()).is_err());
        assert!(InterviewTitle::new("x".repeat(201)).is_err());
    }
}
