//! Typed client for the syllabus service endpoints.

use std::path::Path;
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::core::app;
use crate::core::config::Config;
use crate::core::course::CourseOutcome;

use super::error::{ApiError, RequestError};
use super::types::{
    ErrorBody, QuestionRequest, QuestionResponse, SyllabusInfo, TopicsResponse, UploadResponse,
};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const PDF_MIME: &str = "application/pdf";
const FALLBACK_FILE_NAME: &str = "syllabus.pdf";

/// Client for one syllabus service instance. Cheap to clone.
#[derive(Debug, Clone)]
pub struct SyllabusClient {
    http: Client,
    base: Url,
}

impl SyllabusClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(CONNECT_TIMEOUT)
            .user_agent(format!("{}/{}", app::NAME, app::VERSION))
            .build()?;
        Ok(Self {
            http,
            base: config.api_url.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Upload a syllabus PDF (`POST /upload-pdf`, multipart field `file`).
    pub async fn upload(&self, path: &Path) -> Result<UploadResponse, ApiError> {
        if !is_pdf_file(path) {
            log::debug!("rejecting upload path {}", path.display());
            return Err(ApiError::MissingPdf);
        }
        log::info!("uploading {} to {}", path.display(), self.base);
        self.try_upload(path)
            .await
            .map_err(|e| failed(ApiError::Upload, e))
    }

    async fn try_upload(&self, path: &Path) -> Result<UploadResponse, RequestError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| RequestError::File {
                path: path.to_path_buf(),
                source,
            })?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(FALLBACK_FILE_NAME)
            .to_string();
        let part = Part::bytes(bytes).file_name(file_name).mime_str(PDF_MIME)?;
        let form = Form::new().part("file", part);
        let url = self.endpoint(&["upload-pdf"])?;
        send_json(self.http.post(url).multipart(form)).await
    }

    /// Topics of the unit mapped to a course outcome (`GET /get-co-topics/<co>`).
    pub async fn topics(&self, co: &CourseOutcome) -> Result<TopicsResponse, ApiError> {
        log::info!("fetching topics for {}", co);
        self.get_json(&["get-co-topics", co.as_str()])
            .await
            .map_err(|e| failed(ApiError::Topics, e))
    }

    /// Generate exam questions for a course outcome (`POST /ask-question`).
    ///
    /// The prompt is trimmed; an empty prompt is rejected before sending.
    pub async fn ask(&self, co: &CourseOutcome, prompt: &str) -> Result<QuestionResponse, ApiError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(ApiError::MissingPrompt);
        }
        log::info!("requesting questions for {} ({} chars)", co, prompt.len());
        let body = QuestionRequest {
            course_outcome: co.as_str(),
            prompt,
        };
        self.post_json(&["ask-question"], &body)
            .await
            .map_err(|e| failed(ApiError::Question, e))
    }

    /// Summary of the syllabus currently loaded on the server (`GET /get-syllabus-info`).
    pub async fn syllabus_info(&self) -> Result<SyllabusInfo, ApiError> {
        self.get_json(&["get-syllabus-info"])
            .await
            .map_err(|e| failed(ApiError::SyllabusInfo, e))
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, RequestError> {
        let url = self.endpoint(segments)?;
        send_json(self.http.get(url)).await
    }

    async fn post_json<B, T>(&self, segments: &[&str], body: &B) -> Result<T, RequestError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments)?;
        send_json(self.http.post(url).json(body)).await
    }

    /// Append path segments to the base URL (segments are percent-encoded).
    fn endpoint(&self, segments: &[&str]) -> Result<Url, RequestError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| RequestError::Endpoint(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Send a request and decode a JSON success body. Non-2xx statuses become
/// [`RequestError::Status`] carrying the server's `error` field when present.
async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, RequestError> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.bytes().await?;
    if !status.is_success() {
        let message = serde_json::from_slice::<ErrorBody>(&body)
            .ok()
            .and_then(|b| {
                if !b.available_cos.is_empty() {
                    log::debug!("server lists available outcomes: {:?}", b.available_cos);
                }
                b.error
            })
            .unwrap_or_else(|| String::from_utf8_lossy(&body).trim().to_string());
        return Err(RequestError::Status { status, message });
    }
    Ok(serde_json::from_slice(&body)?)
}

/// Log the cause (visible with -v) and wrap it in the action's generic error.
fn failed(wrap: fn(RequestError) -> ApiError, e: RequestError) -> ApiError {
    log::info!("request failed: {}", e);
    wrap(e)
}

/// Existing file with a `.pdf` extension (any case).
fn is_pdf_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
        && path.is_file()
}
