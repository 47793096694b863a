//! Wire types for the syllabus service JSON API.

use serde::{Deserialize, Serialize};

/// Course metadata parsed by the service from the uploaded PDF.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CourseInfo {
    pub course_code: Option<String>,
    pub course_name: Option<String>,
    #[serde(default)]
    pub total_units: u32,
}

/// Response of `POST /upload-pdf`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    #[serde(default)]
    pub available_cos: Vec<String>,
    pub course_info: CourseInfo,
}

/// Response of `GET /get-co-topics/<co>`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TopicsResponse {
    pub course_outcome: String,
    pub unit_id: String,
    pub unit_title: String,
    pub periods: Option<u32>,
    /// Category name to topics, in the order the service sent them.
    #[serde(default)]
    pub topics: TopicCategories,
}

/// Ordered list of (category, topics). Deserializes from a JSON object without
/// losing key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TopicCategories(pub Vec<(String, Vec<String>)>);

impl<'de> Deserialize<'de> for TopicCategories {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct CategoriesVisitor;

        impl<'de> serde::de::Visitor<'de> for CategoriesVisitor {
            type Value = TopicCategories;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map of category names to topic lists")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((category, topics)) = map.next_entry::<String, Vec<String>>()? {
                    entries.push((category, topics));
                }
                Ok(TopicCategories(entries))
            }
        }

        deserializer.deserialize_map(CategoriesVisitor)
    }
}

impl TopicCategories {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(c, t)| (c.as_str(), t.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Body of `POST /ask-question`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionRequest<'a> {
    pub course_outcome: &'a str,
    pub prompt: &'a str,
}

/// Unit context the service used to generate questions.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContextInfo {
    pub unit_id: String,
    #[serde(default)]
    pub topics_covered: Vec<String>,
}

/// Response of `POST /ask-question`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuestionResponse {
    /// Generated question sheet; see [`crate::core::answer::format_answer`].
    pub answer: String,
    pub course_outcome: String,
    pub unit: String,
    /// Echo of the prompt.
    #[serde(default)]
    pub question: Option<String>,
    pub context_info: ContextInfo,
}

/// One unit in the syllabus summary.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UnitSummary {
    pub unit_id: Option<String>,
    pub title: Option<String>,
    pub course_outcome: Option<String>,
    pub periods: Option<u32>,
}

/// Response of `GET /get-syllabus-info`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SyllabusInfo {
    pub course_code: Option<String>,
    pub course_name: Option<String>,
    pub department: Option<String>,
    pub semester: Option<String>,
    #[serde(default)]
    pub total_units: u32,
    #[serde(default)]
    pub available_cos: Vec<String>,
    #[serde(default)]
    pub units: Vec<UnitSummary>,
}

/// Error body the service returns with non-success statuses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default, alias = "message")]
    pub error: Option<String>,
    #[serde(default)]
    pub available_cos: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_categories_keep_server_order() {
        let json = r#"{
            "course_outcome": "CO1",
            "unit_id": "UNIT I",
            "unit_title": "Basic Structure of Computers",
            "periods": 9,
            "topics": {
                "Functional Units": ["Basic operational concepts", "Bus structures"],
                "Addressing": ["Instruction formats"],
                "ALU Design": ["Ripple carry adder"]
            }
        }"#;
        let topics: TopicsResponse = serde_json::from_str(json).unwrap();
        let categories: Vec<&str> = topics.topics.iter().map(|(c, _)| c).collect();
        assert_eq!(categories, ["Functional Units", "Addressing", "ALU Design"]);
        assert_eq!(topics.periods, Some(9));
    }

    #[test]
    fn upload_response_allows_missing_course_fields() {
        let json = r#"{
            "message": "Syllabus uploaded successfully",
            "available_cos": ["CO1", "CO2"],
            "course_info": {"course_code": null, "course_name": null, "total_units": 0}
        }"#;
        let upload: UploadResponse = serde_json::from_str(json).unwrap();
        assert!(upload.course_info.course_code.is_none());
        assert_eq!(upload.available_cos, ["CO1", "CO2"]);
    }

    #[test]
    fn question_request_field_names() {
        let body = serde_json::to_value(QuestionRequest {
            course_outcome: "CO2",
            prompt: "ten 2 mark questions",
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"course_outcome": "CO2", "prompt": "ten 2 mark questions"})
        );
    }

    #[test]
    fn error_body_reads_error_or_message() {
        let e: ErrorBody = serde_json::from_str(r#"{"error": "CO 'CO9' not found."}"#).unwrap();
        assert_eq!(e.error.as_deref(), Some("CO 'CO9' not found."));
        let m: ErrorBody = serde_json::from_str(r#"{"message": "No syllabus loaded"}"#).unwrap();
        assert_eq!(m.error.as_deref(), Some("No syllabus loaded"));
    }
}
