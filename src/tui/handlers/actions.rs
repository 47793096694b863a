//! Tab actions: validate input into a request, and fold results back into the app.

use std::path::PathBuf;

use crate::core::api::ApiError;

use super::super::app::{Action, App, LoadedSyllabus, Tab};
use super::request::{Outcome, Request};

/// Build the request for the active tab, or set the validation message and return `None`.
pub(crate) fn submit(app: &mut App) -> Option<Request> {
    let request = match app.tab {
        Tab::Upload => resolve_path(&app.path_input)
            .map(Request::Upload)
            .ok_or(ApiError::MissingPdf),
        Tab::Topics => app
            .selected_outcome()
            .cloned()
            .map(Request::Topics)
            .ok_or(ApiError::MissingCourseOutcome),
        Tab::Questions => match app.selected_outcome() {
            Some(co) if !app.prompt.trim().is_empty() => Ok(Request::Question {
                co: co.clone(),
                prompt: app.prompt.trim().to_string(),
            }),
            _ => Err(ApiError::MissingPrompt),
        },
    };
    match request {
        Ok(request) => Some(request),
        Err(e) => {
            app.error = Some(e.to_string());
            None
        }
    }
}

/// Turn typed text into a path: trims, drops surrounding quotes, expands a leading `~/`.
pub(crate) fn resolve_path(input: &str) -> Option<PathBuf> {
    let trimmed = input.trim();
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|q| {
            trimmed
                .strip_prefix(*q)
                .and_then(|rest| rest.strip_suffix(*q))
        })
        .unwrap_or(trimmed)
        .trim();
    if unquoted.is_empty() {
        return None;
    }
    if let Some(rest) = unquoted.strip_prefix("~/")
        && let Some(dirs) = directories::BaseDirs::new()
    {
        return Some(dirs.home_dir().join(rest));
    }
    Some(PathBuf::from(unquoted))
}

/// Apply a finished request to the app state.
pub(crate) fn apply_outcome(app: &mut App, action: Action, outcome: Outcome) {
    app.loading = None;
    match outcome {
        Outcome::Uploaded(Ok(upload)) => {
            log::info!("syllabus uploaded: {}", upload.message);
            app.load_syllabus(LoadedSyllabus::from(upload));
            app.set_tab(Tab::Topics);
        }
        Outcome::Topics(Ok(topics)) => {
            app.topics = Some(topics);
            app.scroll = 0;
        }
        Outcome::Question(Ok(response)) => {
            app.question = Some(response);
            app.scroll = 0;
        }
        Outcome::SyllabusInfo(Ok(info)) => match LoadedSyllabus::from_info(info) {
            Some(loaded) if app.syllabus.is_none() => {
                log::info!("found a syllabus already loaded on the server");
                app.load_syllabus(loaded);
            }
            _ => {}
        },
        // The start-up probe is best effort; a server with nothing loaded answers 404.
        Outcome::SyllabusInfo(Err(e)) => {
            log::info!("no syllabus loaded on the server: {}", detail(&e));
        }
        Outcome::Uploaded(Err(e)) | Outcome::Topics(Err(e)) | Outcome::Question(Err(e)) => {
            if e.is_validation() {
                log::debug!("{} rejected: {}", action.label(), e);
            } else {
                log::warn!("{} failed: {}", action.label(), detail(&e));
            }
            app.error = Some(e.to_string());
        }
        Outcome::Cancelled => {
            log::info!("{} cancelled", action.label());
        }
    }
}

fn detail(e: &ApiError) -> String {
    e.request_error()
        .map(|r| r.to_string())
        .unwrap_or_else(|| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::{
        ContextInfo, CourseInfo, QuestionResponse, RequestError, SyllabusInfo, UploadResponse,
    };

    fn loaded_app() -> App {
        let mut app = App::new("http://127.0.0.1:5000/".to_string());
        apply_outcome(
            &mut app,
            Action::Upload,
            Outcome::Uploaded(Ok(UploadResponse {
                message: "Syllabus uploaded successfully".to_string(),
                available_cos: vec!["CO1".to_string(), "CO2".to_string()],
                course_info: CourseInfo {
                    course_code: Some("CS3401".to_string()),
                    course_name: None,
                    total_units: 5,
                },
            })),
        );
        app
    }

    #[test]
    fn empty_path_needs_a_pdf() {
        let mut app = App::new(String::new());
        app.path_input = "   ".to_string();
        assert!(submit(&mut app).is_none());
        assert_eq!(app.error.as_deref(), Some("Please select a PDF file"));
    }

    #[test]
    fn upload_request_uses_resolved_path() {
        let mut app = App::new(String::new());
        app.path_input = "\"/tmp/My Syllabus.pdf\"".to_string();
        assert_eq!(
            submit(&mut app),
            Some(Request::Upload(PathBuf::from("/tmp/My Syllabus.pdf")))
        );
        assert!(app.error.is_none());
    }

    #[test]
    fn resolve_path_expands_home() {
        let path = resolve_path("~/syllabus.pdf").expect("path");
        assert!(path.ends_with("syllabus.pdf"));
        assert!(!path.starts_with("~"));
        assert_eq!(resolve_path("''"), None);
    }

    #[test]
    fn successful_upload_unlocks_topics() {
        let app = loaded_app();
        assert_eq!(app.tab, Tab::Topics);
        assert!(app.loading.is_none());
        assert_eq!(app.outcomes().len(), 2);
    }

    #[test]
    fn topics_need_a_selected_outcome() {
        let mut app = loaded_app();
        assert!(submit(&mut app).is_none());
        assert_eq!(app.error.as_deref(), Some("Please select a Course Outcome"));

        app.select_next_co();
        let request = submit(&mut app).expect("request");
        assert_eq!(request.action(), Action::Topics);
    }

    #[test]
    fn questions_need_outcome_and_prompt() {
        let mut app = loaded_app();
        app.set_tab(Tab::Questions);
        app.prompt = "ten 2 mark questions".to_string();
        assert!(submit(&mut app).is_none());
        assert_eq!(
            app.error.as_deref(),
            Some("Please select a Course Outcome and enter a prompt")
        );

        app.select_next_co();
        app.prompt = "  ".to_string();
        assert!(submit(&mut app).is_none());

        app.prompt = "  ten 2 mark questions \n".to_string();
        match submit(&mut app) {
            Some(Request::Question { co, prompt }) => {
                assert_eq!(co.as_str(), "CO1");
                assert_eq!(prompt, "ten 2 mark questions");
            }
            other => panic!("expected question request, got {:?}", other),
        }
    }

    #[test]
    fn failed_request_shows_generic_message() {
        let mut app = loaded_app();
        app.begin(Action::Topics);
        apply_outcome(
            &mut app,
            Action::Topics,
            Outcome::Topics(Err(ApiError::Topics(RequestError::Endpoint(
                "boom".to_string(),
            )))),
        );
        assert!(app.loading.is_none());
        assert_eq!(
            app.error.as_deref(),
            Some("Failed to fetch topics. Please try again.")
        );
    }

    #[test]
    fn question_result_resets_scroll() {
        let mut app = loaded_app();
        app.scroll = 7;
        apply_outcome(
            &mut app,
            Action::Question,
            Outcome::Question(Ok(QuestionResponse {
                answer: "1. Define cache.".to_string(),
                course_outcome: "CO1".to_string(),
                unit: "Memory".to_string(),
                question: None,
                context_info: ContextInfo {
                    unit_id: "UNIT II".to_string(),
                    topics_covered: vec![],
                },
            })),
        );
        assert_eq!(app.scroll, 0);
        assert!(app.question.is_some());
    }

    #[test]
    fn startup_probe_failure_is_silent() {
        let mut app = App::new(String::new());
        app.begin(Action::SyllabusInfo);
        apply_outcome(
            &mut app,
            Action::SyllabusInfo,
            Outcome::SyllabusInfo(Err(ApiError::SyllabusInfo(RequestError::Endpoint(
                "404".to_string(),
            )))),
        );
        assert!(app.error.is_none());
        assert!(app.syllabus.is_none());
        assert_eq!(app.tab, Tab::Upload);
    }

    #[test]
    fn startup_probe_does_not_replace_upload() {
        let mut app = loaded_app();
        let info = SyllabusInfo {
            course_code: Some("OTHER".to_string()),
            course_name: None,
            department: None,
            semester: None,
            total_units: 1,
            available_cos: vec!["CO9".to_string()],
            units: vec![],
        };
        apply_outcome(&mut app, Action::SyllabusInfo, Outcome::SyllabusInfo(Ok(info)));
        let loaded = app.syllabus.as_ref().expect("syllabus");
        assert_eq!(loaded.course_code.as_deref(), Some("CS3401"));
    }

    #[test]
    fn cancelled_request_keeps_previous_results() {
        let mut app = loaded_app();
        app.begin(Action::Upload);
        apply_outcome(&mut app, Action::Upload, Outcome::Cancelled);
        assert!(app.loading.is_none());
        assert!(app.error.is_none());
        assert!(app.syllabus.is_some());
    }
}
