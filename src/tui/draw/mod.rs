//! TUI rendering: layout and widgets for the three tabs.

mod header;
mod questions;
mod topics;
mod upload;
mod widgets;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};

use super::app::{App, Tab};
use super::constants::{ACCENT, ACCENT_SECONDARY, ERROR, TAB_TITLES};

pub(super) fn draw(f: &mut Frame, app: &mut App, area: Rect) {
    let error_height = if app.error.is_some() { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(error_height),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    header::draw_header(f, app, chunks[0]);
    draw_tabs(f, app, chunks[1]);
    if let Some(error) = &app.error {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("✗ {}", error),
                Style::default().fg(ERROR).add_modifier(Modifier::BOLD),
            ))),
            chunks[2],
        );
    }
    match app.tab {
        Tab::Upload => upload::draw_upload(f, app, chunks[3]),
        Tab::Topics => topics::draw_topics(f, app, chunks[3]),
        Tab::Questions => questions::draw_questions(f, app, chunks[3]),
    }
    draw_footer(f, app, chunks[4]);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line<'static>> = Tab::ALL
        .iter()
        .zip(TAB_TITLES)
        .map(|(tab, title)| {
            let style = if app.is_enabled(*tab) {
                Style::default()
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(Span::styled(title, style))
        })
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.tab.index())
        .highlight_style(
            Style::default()
                .fg(ACCENT_SECONDARY)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(Span::styled("│", Style::default().fg(Color::DarkGray)))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(ACCENT)),
        );
    f.render_widget(tabs, area);
}

fn footer_hints(app: &App) -> &'static str {
    if app.loading.is_some() {
        return "Esc cancel · Ctrl+C quit";
    }
    match app.tab {
        Tab::Upload => "Enter upload · Tab switch · Esc quit",
        Tab::Topics => "↑/↓ course outcome · Enter view topics · PgUp/PgDn scroll · Tab switch · Esc quit",
        Tab::Questions => {
            "↑/↓ course outcome · Enter generate · PgUp/PgDn scroll · Tab switch · Esc quit"
        }
    }
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            footer_hints(app),
            Style::default().fg(Color::DarkGray),
        ))),
        area,
    );
}
