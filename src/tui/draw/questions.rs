//! Generate Questions tab: outcome selector, prompt, formatted answer.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::api::QuestionResponse;

use super::super::app::{Action, App};
use super::super::constants::{ACCENT, PROMPT_PLACEHOLDER};
use super::super::text::{answer_lines, plain_lines};
use super::widgets;

/// Response header (outcome, unit, topics covered) followed by the formatted answer.
pub(crate) fn response_lines(response: &QuestionResponse, width: usize) -> Vec<Line<'static>> {
    let dim = Style::default().fg(Color::DarkGray);
    let mut lines = vec![Line::from(Span::styled(
        format!("{} - {}", response.course_outcome, response.unit),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    ))];
    lines.push(Line::from(Span::styled(
        format!("Unit: {}", response.context_info.unit_id),
        dim,
    )));
    let covered = format!(
        "Topics Covered: {}",
        response.context_info.topics_covered.join(", ")
    );
    lines.extend(
        plain_lines(&covered, width)
            .into_iter()
            .map(|l| l.style(dim)),
    );
    lines.push(Line::default());
    lines.extend(answer_lines(&response.answer, width));
    lines
}

pub(crate) fn draw_questions(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    widgets::draw_outcome_selector(f, app, chunks[0]);
    widgets::draw_input(
        f,
        chunks[1],
        "Prompt",
        &app.prompt,
        PROMPT_PLACEHOLDER,
        app.loading.is_none(),
    );

    let width = widgets::inner_width(chunks[2]);
    let lines = match (&app.question, app.loading) {
        (_, Some(Action::Question)) => vec![Line::from(Span::styled(
            "Generating questions…",
            Style::default().fg(ACCENT),
        ))],
        (Some(response), _) => response_lines(response, width),
        (None, _) => vec![Line::from(Span::styled(
            "Pick a course outcome, describe the questions you want, and press Enter.",
            Style::default().fg(Color::DarkGray),
        ))],
    };
    widgets::draw_scrolling(f, app, chunks[2], "Questions", lines);
}
