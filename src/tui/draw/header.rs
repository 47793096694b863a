//! Header: spinner while a request runs, title, service URL.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::app::NAME;

use super::super::app::App;
use super::super::constants::{ACCENT, SPINNER};

/// Max width for the server URL; longer URLs are truncated with "…".
const SERVER_HEADER_WIDTH: usize = 40;

fn truncate_left(s: &str, max: usize) -> String {
    if s.chars().count() <= max || max < 2 {
        return s.to_string();
    }
    let tail: Vec<char> = s.chars().rev().take(max - 1).collect();
    format!("…{}", tail.into_iter().rev().collect::<String>())
}

pub(crate) fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(SERVER_HEADER_WIDTH as u16),
        ])
        .split(area);

    let mut title = vec![Span::styled(
        format!("{} ", NAME),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )];
    if let Some(action) = app.loading {
        let frame = SPINNER[app.tick % SPINNER.len()];
        title.push(Span::styled(
            format!("{} {}…", frame, action.label()),
            Style::default().fg(ACCENT),
        ));
        title.push(Span::styled(
            "  (Esc to cancel)",
            Style::default().fg(Color::DarkGray),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(title)), chunks[0]);

    let server = truncate_left(app.server.trim_end_matches('/'), SERVER_HEADER_WIDTH);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            server,
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Right),
        chunks[1],
    );
}

#[cfg(test)]
mod tests {
    use super::truncate_left;

    #[test]
    fn truncate_left_keeps_the_tail() {
        assert_eq!(truncate_left("http://localhost:5000", 40), "http://localhost:5000");
        assert_eq!(truncate_left("abcdefgh", 5), "…efgh");
    }
}
