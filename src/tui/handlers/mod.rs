//! Event handlers for the TUI: keyboard and mouse.

mod actions;
mod request;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};
use std::sync::Arc;
use tokio::runtime::Runtime;

use crate::core::api::SyllabusClient;

use super::app::{App, Tab};
use super::constants;
use super::shortcuts::Shortcut;

pub(crate) use actions::apply_outcome;
pub use request::{PendingRequest, Request, spawn_request};

/// Result of handling an event: continue the loop or exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleResult {
    Continue,
    Break,
}

/// Handle a mouse event. Only the wheel is used, to scroll results.
pub fn handle_mouse(mouse: crossterm::event::MouseEvent, app: &mut App) -> HandleResult {
    match mouse.kind {
        MouseEventKind::ScrollUp => app.scroll_up(constants::SCROLL_LINES_SMALL),
        MouseEventKind::ScrollDown => app.scroll_down(constants::SCROLL_LINES_SMALL),
        _ => {}
    }
    HandleResult::Continue
}

/// Context for key event handling. Bundles mutable state to reduce parameter count.
pub struct HandleKeyContext<'a> {
    pub app: &'a mut App,
    pub client: &'a SyllabusClient,
    pub pending: &'a mut Option<PendingRequest>,
    pub rt: &'a Arc<Runtime>,
}

/// Handle a key event. Returns HandleResult::Break to exit the main loop.
pub fn handle_key(key: KeyEvent, ctx: HandleKeyContext<'_>) -> HandleResult {
    let HandleKeyContext {
        app,
        client,
        pending,
        rt,
    } = ctx;

    if let Some(shortcut) = Shortcut::match_key(&key) {
        match shortcut {
            Shortcut::Quit => return HandleResult::Break,
            Shortcut::Escape => {
                if let Some(pr) = pending.as_ref() {
                    pr.cancel_token.cancel();
                    return HandleResult::Continue;
                }
                return HandleResult::Break;
            }
            Shortcut::NextTab => app.next_tab(),
            Shortcut::PrevTab => app.prev_tab(),
            Shortcut::PageUp => app.scroll_up(constants::SCROLL_LINES_PAGE),
            Shortcut::PageDown => app.scroll_down(constants::SCROLL_LINES_PAGE),
        }
        return HandleResult::Continue;
    }

    if key.kind != KeyEventKind::Press {
        return HandleResult::Continue;
    }

    match key.code {
        KeyCode::Enter => {
            // One request at a time.
            if pending.is_some() {
                return HandleResult::Continue;
            }
            if let Some(request) = actions::submit(app) {
                app.begin(request.action());
                *pending = Some(spawn_request(rt, client.clone(), request));
            }
        }
        KeyCode::Up if app.tab != Tab::Upload => app.select_prev_co(),
        KeyCode::Down if app.tab != Tab::Upload => app.select_next_co(),
        KeyCode::Up => app.scroll_up(1),
        KeyCode::Down => app.scroll_down(1),
        KeyCode::Backspace => {
            if let Some(input) = app.active_input() {
                input.pop();
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(input) = app.active_input() {
                input.clear();
            }
        }
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            if let Some(input) = app.active_input() {
                input.push(c);
            }
            // Editing the path retracts a stale validation message.
            if app.tab == Tab::Upload {
                app.error = None;
            }
        }
        _ => {}
    }
    HandleResult::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{self, Overrides};

    struct Harness {
        app: App,
        client: SyllabusClient,
        pending: Option<PendingRequest>,
        rt: Arc<Runtime>,
    }

    impl Harness {
        fn new() -> Self {
            let overrides = Overrides {
                api_url: Some("http://127.0.0.1:1".to_string()),
            };
            let config = config::load(&overrides).unwrap();
            Self {
                app: App::new(config.api_url.to_string()),
                client: SyllabusClient::new(&config).unwrap(),
                pending: None,
                rt: Arc::new(Runtime::new().unwrap()),
            }
        }

        fn press(&mut self, code: KeyCode, modifiers: KeyModifiers) -> HandleResult {
            handle_key(
                KeyEvent::new(code, modifiers),
                HandleKeyContext {
                    app: &mut self.app,
                    client: &self.client,
                    pending: &mut self.pending,
                    rt: &self.rt,
                },
            )
        }

        fn type_text(&mut self, text: &str) {
            for c in text.chars() {
                self.press(KeyCode::Char(c), KeyModifiers::NONE);
            }
        }
    }

    #[test]
    fn typing_edits_the_path() {
        let mut h = Harness::new();
        h.type_text("notes.pdf");
        h.press(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(h.app.path_input, "notes.pd");
        h.press(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert!(h.app.path_input.is_empty());
    }

    #[test]
    fn enter_with_empty_path_sets_error_without_request() {
        let mut h = Harness::new();
        assert_eq!(h.press(KeyCode::Enter, KeyModifiers::NONE), HandleResult::Continue);
        assert!(h.pending.is_none());
        assert_eq!(h.app.error.as_deref(), Some("Please select a PDF file"));
        // Typing clears the stale message.
        h.type_text("a");
        assert!(h.app.error.is_none());
    }

    #[test]
    fn enter_spawns_a_single_request() {
        let mut h = Harness::new();
        h.type_text("/definitely/missing/syllabus.pdf");
        h.press(KeyCode::Enter, KeyModifiers::NONE);
        assert!(h.pending.is_some());
        assert_eq!(h.app.loading, Some(super::super::app::Action::Upload));

        let first = h.pending.as_ref().map(|p| p.action);
        h.press(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(h.pending.as_ref().map(|p| p.action), first);
    }

    #[test]
    fn esc_cancels_before_quitting() {
        let mut h = Harness::new();
        h.type_text("/definitely/missing/syllabus.pdf");
        h.press(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(h.press(KeyCode::Esc, KeyModifiers::NONE), HandleResult::Continue);
        assert!(h.pending.as_ref().is_some_and(|p| p.cancel_token.is_cancelled()));

        h.pending = None;
        assert_eq!(h.press(KeyCode::Esc, KeyModifiers::NONE), HandleResult::Break);
    }

    #[test]
    fn ctrl_c_always_quits() {
        let mut h = Harness::new();
        assert_eq!(
            h.press(KeyCode::Char('c'), KeyModifiers::CONTROL),
            HandleResult::Break
        );
    }

    #[test]
    fn tab_is_locked_until_upload() {
        let mut h = Harness::new();
        h.press(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(h.app.tab, Tab::Upload);
    }
}
