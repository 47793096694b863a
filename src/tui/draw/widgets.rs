//! Building blocks shared by the tab bodies: input field, outcome selector, scrolling panel.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use textwrap::core::display_width;

use super::super::app::App;
use super::super::constants::{ACCENT, ACCENT_SECONDARY};

fn panel(title: &str, focused: bool) -> Block<'_> {
    let border = if focused { ACCENT } else { Color::DarkGray };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(border).add_modifier(Modifier::BOLD),
        ))
}

/// Longest suffix of `s` that fits in `width` columns.
pub(crate) fn tail_fit(s: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = s.len();
    for (idx, c) in s.char_indices().rev() {
        let mut buf = [0u8; 4];
        let w = display_width(c.encode_utf8(&mut buf));
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &s[start..]
}

/// Single-line text field. Shows the tail when the text is wider than the field,
/// and places the terminal cursor at the end when `cursor` is set.
pub(crate) fn draw_input(
    f: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    placeholder: &str,
    cursor: bool,
) {
    let block = panel(title, cursor);
    let inner = block.inner(area);
    // Keep one column free for the cursor.
    let visible = tail_fit(value, (inner.width as usize).saturating_sub(1));
    let line = if value.is_empty() {
        Line::from(Span::styled(
            placeholder.to_string(),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(visible.to_string())
    };
    f.render_widget(Paragraph::new(line).block(block), area);
    if cursor && inner.width > 0 && inner.height > 0 {
        let x = inner.x + display_width(visible) as u16;
        f.set_cursor_position(Position::new(x.min(inner.right().saturating_sub(1)), inner.y));
    }
}

/// Course outcome choices for the selector; the selected one is bracketed.
pub(crate) fn outcome_line(app: &App) -> Line<'static> {
    let outcomes = app.outcomes();
    if outcomes.is_empty() {
        return Line::from(Span::styled(
            "No course outcomes in this syllabus",
            Style::default().fg(Color::DarkGray),
        ));
    }
    let mut spans = Vec::with_capacity(outcomes.len() * 2 + 1);
    if app.selected_co.is_none() {
        spans.push(Span::styled(
            "Select CO (↑/↓)  ",
            Style::default().fg(Color::DarkGray),
        ));
    }
    for (idx, co) in outcomes.iter().enumerate() {
        if app.selected_co == Some(idx) {
            spans.push(Span::styled(
                format!("[{}]", co),
                Style::default()
                    .fg(ACCENT_SECONDARY)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::raw(format!(" {} ", co)));
        }
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

pub(crate) fn draw_outcome_selector(f: &mut Frame, app: &App, area: Rect) {
    f.render_widget(
        Paragraph::new(outcome_line(app)).block(panel("Course Outcome", false)),
        area,
    );
}

/// Bordered panel of pre-wrapped lines, scrolled by `app.scroll`.
///
/// Records the largest useful offset in `app.max_scroll` and clamps the current one.
pub(crate) fn draw_scrolling(f: &mut Frame, app: &mut App, area: Rect, title: &str, lines: Vec<Line<'static>>) {
    let block = panel(title, false);
    let inner = block.inner(area);
    let total = lines.len().min(u16::MAX as usize) as u16;
    app.max_scroll = total.saturating_sub(inner.height);
    app.scroll = app.scroll.min(app.max_scroll);
    f.render_widget(
        Paragraph::new(lines).block(block).scroll((app.scroll, 0)),
        area,
    );
}

/// Inner width of a bordered panel drawn in `area`.
pub(crate) fn inner_width(area: Rect) -> usize {
    area.width.saturating_sub(2) as usize
}
