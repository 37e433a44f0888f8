use thiserror::Error;

/// Error for InterviewId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InterviewIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for InterviewTitle validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InterviewTitleError {
    #[error("Interview title must not be empty")]
    Empty,

    #[error("Interview title too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for all interview operations
#[derive(Debug, Clone, Error)]
pub enum InterviewError {
    #[error("Invalid interview ID: {0}")]
    InvalidInterviewId(#[from] InterviewIdError),

    #[error("Invalid interview title: {0}")]
    InvalidTitle(#[from] InterviewTitleError),

    /// Absent, or owned by a different user; the two are not distinguished.
    #[error("Interview not found: {0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    StoreError(String),
}
