//! Spawns service requests in a background thread with a result channel.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc;

use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;

use crate::core::api::{
    ApiError, QuestionResponse, SyllabusClient, SyllabusInfo, TopicsResponse, UploadResponse,
};
use crate::core::course::CourseOutcome;

use super::super::app::Action;

/// A validated request, ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Upload(PathBuf),
    Topics(CourseOutcome),
    Question {
        co: CourseOutcome,
        prompt: String,
    },
    SyllabusInfo,
}

impl Request {
    pub fn action(&self) -> Action {
        match self {
            Request::Upload(_) => Action::Upload,
            Request::Topics(_) => Action::Topics,
            Request::Question { .. } => Action::Question,
            Request::SyllabusInfo => Action::SyllabusInfo,
        }
    }
}

/// Result of a finished request.
#[derive(Debug)]
pub enum Outcome {
    Uploaded(Result<UploadResponse, ApiError>),
    Topics(Result<TopicsResponse, ApiError>),
    Question(Result<QuestionResponse, ApiError>),
    SyllabusInfo(Result<SyllabusInfo, ApiError>),
    /// Dropped by the user before it finished.
    Cancelled,
}

/// Holds the receiver for a request in progress.
pub struct PendingRequest {
    pub action: Action,
    pub result_rx: mpsc::Receiver<Outcome>,
    /// Token to cancel the in-flight request.
    pub cancel_token: CancellationToken,
}

/// Spawn a request. Returns PendingRequest with the result channel and cancel token.
pub fn spawn_request(rt: &Arc<Runtime>, client: SyllabusClient, request: Request) -> PendingRequest {
    let (result_tx, result_rx) = mpsc::channel();
    let cancel_token = CancellationToken::new();
    let cancel_token_clone = cancel_token.clone();
    let action = request.action();
    let rt_clone = Arc::clone(rt);

    std::thread::spawn(move || {
        let outcome = rt_clone.block_on(async move {
            tokio::select! {
                _ = cancel_token_clone.cancelled() => Outcome::Cancelled,
                outcome = send(&client, request) => outcome,
            }
        });
        let _ = result_tx.send(outcome);
    });

    PendingRequest {
        action,
        result_rx,
        cancel_token,
    }
}

async fn send(client: &SyllabusClient, request: Request) -> Outcome {
    match request {
        Request::Upload(path) => Outcome::Uploaded(client.upload(&path).await),
        Request::Topics(co) => Outcome::Topics(client.topics(&co).await),
        Request::Question { co, prompt } => Outcome::Question(client.ask(&co, &prompt).await),
        Request::SyllabusInfo => Outcome::SyllabusInfo(client.syllabus_info().await),
    }
}
