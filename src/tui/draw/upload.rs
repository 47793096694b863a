//! Upload Syllabus tab: path field and course information.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use super::super::app::{App, LoadedSyllabus};
use super::super::constants::ACCENT;
use super::widgets;

const MISSING: &str = "—";

fn field(label: &str, value: Option<&str>) -> Line<'static> {
    let value = value.filter(|v| !v.trim().is_empty()).unwrap_or(MISSING);
    Line::from(vec![
        Span::styled(format!("{:<14}", label), Style::default().fg(Color::DarkGray)),
        Span::raw(value.to_string()),
    ])
}

pub(crate) fn course_lines(loaded: &LoadedSyllabus) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if let Some(message) = &loaded.message {
        lines.push(Line::from(Span::styled(
            format!("✓ {}", message),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::default());
    }
    lines.push(field("Course Code", loaded.course_code.as_deref()));
    lines.push(field("Course Name", loaded.course_name.as_deref()));
    lines.push(field("Total Units", Some(&loaded.total_units.to_string())));
    let cos = loaded
        .outcomes
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(
            "Available Course Outcomes: ",
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            if cos.is_empty() { MISSING.to_string() } else { cos },
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]));
    lines
}

pub(crate) fn draw_upload(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    widgets::draw_input(
        f,
        chunks[0],
        "Syllabus PDF path",
        &app.path_input,
        "/path/to/syllabus.pdf",
        app.loading.is_none(),
    );

    let lines = match &app.syllabus {
        Some(loaded) => course_lines(loaded),
        None => vec![Line::from(Span::styled(
            "Type the path to a syllabus PDF and press Enter to upload it.",
            Style::default().fg(Color::DarkGray),
        ))],
    };
    widgets::draw_scrolling(f, app, chunks[1], "Course Information", lines);
}
