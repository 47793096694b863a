use super::*;
use crate::core::api::{CourseInfo, SyllabusInfo, UploadResponse};

fn upload(cos: &[&str]) -> UploadResponse {
    UploadResponse {
        message: "Syllabus uploaded successfully".to_string(),
        available_cos: cos.iter().map(|s| s.to_string()).collect(),
        course_info: CourseInfo {
            course_code: Some("CS3401".to_string()),
            course_name: Some("Computer Architecture".to_string()),
            total_units: 5,
        },
    }
}

fn loaded_app(cos: &[&str]) -> App {
    let mut app = App::new("http://127.0.0.1:5000/".to_string());
    app.load_syllabus(LoadedSyllabus::from(upload(cos)));
    app
}

#[test]
fn tabs_disabled_until_syllabus_loaded() {
    let mut app = App::new(String::new());
    assert!(!app.is_enabled(Tab::Topics));
    assert!(!app.is_enabled(Tab::Questions));
    app.next_tab();
    assert_eq!(app.tab, Tab::Upload);
    app.set_tab(Tab::Questions);
    assert_eq!(app.tab, Tab::Upload);
}

#[test]
fn tab_cycling_wraps_both_ways() {
    let mut app = loaded_app(&["CO1"]);
    app.next_tab();
    assert_eq!(app.tab, Tab::Topics);
    app.next_tab();
    assert_eq!(app.tab, Tab::Questions);
    app.next_tab();
    assert_eq!(app.tab, Tab::Upload);
    app.prev_tab();
    assert_eq!(app.tab, Tab::Questions);
}

#[test]
fn switching_tab_resets_scroll() {
    let mut app = loaded_app(&["CO1"]);
    app.max_scroll = 20;
    app.scroll_down(10);
    assert_eq!(app.scroll, 10);
    app.set_tab(Tab::Topics);
    assert_eq!(app.scroll, 0);
}

#[test]
fn scroll_is_clamped() {
    let mut app = App::new(String::new());
    app.max_scroll = 4;
    app.scroll_down(10);
    assert_eq!(app.scroll, 4);
    app.scroll_up(10);
    assert_eq!(app.scroll, 0);
}

#[test]
fn outcome_selection_starts_empty_and_wraps() {
    let mut app = loaded_app(&["CO1", "co2", "bogus", "CO3"]);
    // Invalid codes from the server are skipped, the rest normalized.
    let codes: Vec<&str> = app.outcomes().iter().map(|c| c.as_str()).collect();
    assert_eq!(codes, vec!["CO1", "CO2", "CO3"]);
    assert!(app.selected_outcome().is_none());

    app.select_next_co();
    assert_eq!(app.selected_outcome().map(|c| c.as_str()), Some("CO1"));
    app.select_prev_co();
    assert_eq!(app.selected_outcome().map(|c| c.as_str()), Some("CO3"));
    app.select_next_co();
    assert_eq!(app.selected_outcome().map(|c| c.as_str()), Some("CO1"));
}

#[test]
fn selection_is_noop_without_outcomes() {
    let mut app = loaded_app(&[]);
    app.select_next_co();
    app.select_prev_co();
    assert!(app.selected_co.is_none());
}

#[test]
fn loading_new_syllabus_clears_results() {
    let mut app = loaded_app(&["CO1"]);
    app.select_next_co();
    app.prompt = "kept".to_string();
    app.load_syllabus(LoadedSyllabus::from(upload(&["CO4"])));
    assert!(app.selected_co.is_none());
    assert!(app.topics.is_none());
    assert!(app.question.is_none());
    assert_eq!(app.prompt, "kept");
}

#[test]
fn begin_clears_previous_error() {
    let mut app = App::new(String::new());
    app.error = Some("Failed to upload PDF. Please try again.".to_string());
    app.begin(Action::Upload);
    assert!(app.error.is_none());
    assert_eq!(app.loading, Some(Action::Upload));
}

#[test]
fn active_input_follows_tab() {
    let mut app = loaded_app(&["CO1"]);
    if let Some(input) = app.active_input() {
        input.push('a');
    }
    app.set_tab(Tab::Topics);
    assert!(app.active_input().is_none());
    app.set_tab(Tab::Questions);
    if let Some(input) = app.active_input() {
        input.push('b');
    }
    assert_eq!(app.path_input, "a");
    assert_eq!(app.prompt, "b");
}

#[test]
fn empty_info_means_nothing_loaded() {
    let info = SyllabusInfo {
        course_code: None,
        course_name: None,
        department: None,
        semester: None,
        total_units: 0,
        available_cos: vec![],
        units: vec![],
    };
    assert!(LoadedSyllabus::from_info(info.clone()).is_none());

    let info = SyllabusInfo {
        available_cos: vec!["CO2".to_string()],
        ..info
    };
    let loaded = LoadedSyllabus::from_info(info).expect("loaded");
    assert!(loaded.message.is_none());
    assert_eq!(loaded.outcomes.len(), 1);
}
