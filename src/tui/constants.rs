//! TUI constants: colors, timing, and labels.

use ratatui::style::Color;

/// Accent color (#667EEA).
pub(super) const ACCENT: Color = Color::Rgb(102, 126, 234);

/// Secondary accent (#764BA2), used for the selected tab and badges.
pub(super) const ACCENT_SECONDARY: Color = Color::Rgb(118, 75, 162);

/// Error text color.
pub(super) const ERROR: Color = Color::Rgb(204, 51, 51);

/// Event poll timeout in milliseconds (main loop).
pub(crate) const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// Scroll amount for arrow keys and mouse wheel.
pub(crate) const SCROLL_LINES_SMALL: u16 = 3;

/// Scroll amount for PageUp/PageDown.
pub(crate) const SCROLL_LINES_PAGE: u16 = 10;

/// Tab titles, in display order.
pub(super) const TAB_TITLES: [&str; 3] = ["Upload Syllabus", "View Topics", "Generate Questions"];

/// Placeholder shown in the empty prompt field.
pub(super) const PROMPT_PLACEHOLDER: &str = "E.g., I want ten 5 marks questions";

/// Spinner frames for the loading indicator (braille pattern, 4 frames).
pub(super) const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸"];
