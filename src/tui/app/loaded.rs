//! Syllabus summary shared by the Upload, Topics and Questions tabs.

use crate::core::api::{SyllabusInfo, UploadResponse};
use crate::core::course::{self, CourseOutcome};

/// What the TUI knows about the syllabus on the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedSyllabus {
    /// Server message after an upload; none when found at start-up.
    pub message: Option<String>,
    pub course_code: Option<String>,
    pub course_name: Option<String>,
    pub total_units: u32,
    pub outcomes: Vec<CourseOutcome>,
}

impl From<UploadResponse> for LoadedSyllabus {
    fn from(upload: UploadResponse) -> Self {
        Self {
            message: Some(upload.message),
            course_code: upload.course_info.course_code,
            course_name: upload.course_info.course_name,
            total_units: upload.course_info.total_units,
            outcomes: course::parse_available(&upload.available_cos),
        }
    }
}

impl LoadedSyllabus {
    /// A syllabus reported by the info endpoint. Returns `None` when the server has
    /// nothing loaded (no course outcomes and no units).
    pub fn from_info(info: SyllabusInfo) -> Option<Self> {
        if info.available_cos.is_empty() && info.units.is_empty() {
            return None;
        }
        Some(Self {
            message: None,
            course_code: info.course_code,
            course_name: info.course_name,
            total_units: info.total_units,
            outcomes: course::parse_available(&info.available_cos),
        })
    }
}
