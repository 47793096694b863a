//! Client error types.
//!
//! Each action surfaces one generic, user-facing message. The underlying
//! [`RequestError`] stays available through `source()` for logging.

use std::path::PathBuf;

use reqwest::StatusCode;

/// What went wrong with a single HTTP exchange.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {message}")]
    Status { status: StatusCode, message: String },
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("failed to read {}: {source}", .path.display())]
    File {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot build endpoint URL for '{0}'")]
    Endpoint(String),
}

/// Errors from syllabus service actions.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Please select a PDF file")]
    MissingPdf,
    #[error("Please select a Course Outcome")]
    MissingCourseOutcome,
    #[error("Please select a Course Outcome and enter a prompt")]
    MissingPrompt,
    #[error("Failed to upload PDF. Please try again.")]
    Upload(#[source] RequestError),
    #[error("Failed to fetch topics. Please try again.")]
    Topics(#[source] RequestError),
    #[error("Failed to generate questions. Please try again.")]
    Question(#[source] RequestError),
    #[error("Failed to load syllabus info. Please try again.")]
    SyllabusInfo(#[source] RequestError),
}

impl ApiError {
    /// True for input problems caught before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ApiError::MissingPdf | ApiError::MissingCourseOutcome | ApiError::MissingPrompt
        )
    }

    /// Underlying request failure, if any.
    pub fn request_error(&self) -> Option<&RequestError> {
        match self {
            ApiError::Upload(e)
            | ApiError::Topics(e)
            | ApiError::Question(e)
            | ApiError::SyllabusInfo(e) => Some(e),
            ApiError::MissingPdf | ApiError::MissingCourseOutcome | ApiError::MissingPrompt => {
                None
            }
        }
    }
}
