//! Centralized keyboard shortcuts.
//!
//! Complete reference:
//!
//! | Action          | Keys                                  |
//! |-----------------|---------------------------------------|
//! | Run tab action  | Enter                                 |
//! | Switch tab      | Tab, Shift+Tab                        |
//! | Course outcome  | ↑ ↓                                   |
//! | Scroll results  | PageUp PageDown, mouse wheel          |
//! | Cancel request  | Esc (while a request is running)      |
//! | Quit            | Ctrl+C, Esc                           |
//!
//! Text typed on the Upload and Generate Questions tabs goes to their input field.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Detected shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Next enabled tab (Tab)
    NextTab,
    /// Previous enabled tab (Shift+Tab)
    PrevTab,
    /// Page scroll (PageUp / PageDown)
    PageUp,
    PageDown,
    /// Cancel the running request, or quit when idle (Esc)
    Escape,
    /// Quit (Ctrl+C)
    Quit,
}

impl Shortcut {
    /// Returns the shortcut if the key matches. Only key presses count.
    pub fn match_key(key: &KeyEvent) -> Option<Shortcut> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Shortcut::Quit)
            }
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
                Some(Shortcut::PrevTab)
            }
            KeyCode::Tab => Some(Shortcut::NextTab),
            KeyCode::BackTab => Some(Shortcut::PrevTab),
            KeyCode::PageUp => Some(Shortcut::PageUp),
            KeyCode::PageDown => Some(Shortcut::PageDown),
            KeyCode::Esc => Some(Shortcut::Escape),
            _ => None,
        }
    }
}
