//! HTTP client for the syllabus question service.

mod client;
mod error;
mod types;

pub use client::SyllabusClient;
pub use error::{ApiError, RequestError};
pub use types::{
    ContextInfo, CourseInfo, QuestionResponse, SyllabusInfo, TopicCategories, TopicsResponse,
    UnitSummary, UploadResponse,
};
