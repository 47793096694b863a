//! Text utilities: answer rendering and styled line wrapping for the results panels.

mod wrap;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::answer::{BlockCategory, DisplayBlock, format_answer};

use super::constants::ACCENT;

pub(crate) use wrap::{Piece, wrap_pieces};

/// Prefix drawn before every row of a question item.
const ITEM_BAR: &str = "│ ";

fn heading_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Format an answer and lay it out as display lines no wider than `width` columns.
///
/// Section headers are accented and separated from preceding content by a blank
/// line. Question items carry a bar on every wrapped row. Emphasized spans stay
/// bold across wraps.
pub(crate) fn answer_lines(answer: &str, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (idx, block) in format_answer(answer).iter().enumerate() {
        match block.category {
            BlockCategory::SectionHeader => {
                if idx > 0 {
                    lines.push(Line::default());
                }
                let pieces: Vec<Piece<'_>> = block
                    .spans
                    .iter()
                    .map(|s| Piece::new(s.text, heading_style()))
                    .collect();
                lines.extend(wrap_pieces(&pieces, width).into_iter().map(Line::from));
            }
            BlockCategory::QuestionItem => {
                let inner = width.saturating_sub(ITEM_BAR.chars().count());
                for row in wrap_pieces(&span_pieces(block), inner) {
                    let mut spans = vec![Span::styled(ITEM_BAR, Style::default().fg(ACCENT))];
                    spans.extend(row);
                    lines.push(Line::from(spans));
                }
            }
            BlockCategory::Plain => {
                lines.extend(
                    wrap_pieces(&span_pieces(block), width)
                        .into_iter()
                        .map(Line::from),
                );
            }
        }
    }
    lines
}

fn span_pieces<'a>(block: &DisplayBlock<'a>) -> Vec<Piece<'a>> {
    block
        .spans
        .iter()
        .map(|s| {
            let style = if s.emphasized {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Piece::new(s.text, style)
        })
        .collect()
}

/// Wrap plain text into unstyled lines, keeping blank lines between paragraphs.
pub(crate) fn plain_lines(text: &str, width: usize) -> Vec<Line<'static>> {
    text.split('\n')
        .flat_map(|line| {
            if line.trim().is_empty() {
                vec![Line::default()]
            } else {
                wrap_pieces(&[Piece::new(line, Style::default())], width)
                    .into_iter()
                    .map(Line::from)
                    .collect()
            }
        })
        .collect()
}
