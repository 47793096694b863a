//! View Topics tab: outcome selector and the topics of the mapped unit.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::api::TopicsResponse;

use super::super::app::App;
use super::super::constants::ACCENT;
use super::super::text::{Piece, wrap_pieces};
use super::widgets;

const BULLET: &str = "  • ";
const BULLET_INDENT: &str = "    ";

pub(crate) fn topic_lines(topics: &TopicsResponse, width: usize) -> Vec<Line<'static>> {
    let heading = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    let mut lines = vec![Line::from(Span::styled(
        format!("{} - {}", topics.course_outcome, topics.unit_title),
        heading,
    ))];
    let meta = match topics.periods {
        Some(p) => format!("{} | {} Periods", topics.unit_id, p),
        None => topics.unit_id.clone(),
    };
    lines.push(Line::from(Span::styled(
        meta,
        Style::default().fg(Color::DarkGray),
    )));

    if topics.topics.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "No topics listed for this unit.",
            Style::default().fg(Color::DarkGray),
        )));
        return lines;
    }
    let inner = width.saturating_sub(BULLET.chars().count());
    for (category, items) in topics.topics.iter() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(category.to_string(), heading)));
        for item in items {
            let rows = wrap_pieces(&[Piece::new(item, Style::default())], inner);
            for (idx, row) in rows.into_iter().enumerate() {
                let lead = if idx == 0 {
                    Span::styled(BULLET, Style::default().fg(ACCENT))
                } else {
                    Span::raw(BULLET_INDENT)
                };
                let mut spans = vec![lead];
                spans.extend(row);
                lines.push(Line::from(spans));
            }
        }
    }
    lines
}

pub(crate) fn draw_topics(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    widgets::draw_outcome_selector(f, app, chunks[0]);

    let width = widgets::inner_width(chunks[1]);
    let lines = match &app.topics {
        Some(topics) => topic_lines(topics, width),
        None => vec![Line::from(Span::styled(
            "Select a course outcome and press Enter to view its topics.",
            Style::default().fg(Color::DarkGray),
        ))],
    };
    widgets::draw_scrolling(f, app, chunks[1], "Topics", lines);
}
