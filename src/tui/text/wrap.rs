//! Greedy word wrap over styled text.
//!
//! `textwrap::wrap` works on plain strings, so styled pieces are split into
//! words here and measured with `textwrap::core::display_width` to keep
//! double-width characters aligned. A word may span several pieces
//! (`Define **cache**.` keeps `cache.` together).

use ratatui::style::Style;
use ratatui::text::Span;
use textwrap::core::display_width;

/// A run of text sharing one style.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Piece<'a> {
    pub text: &'a str,
    pub style: Style,
}

impl<'a> Piece<'a> {
    pub fn new(text: &'a str, style: Style) -> Self {
        Self { text, style }
    }
}

/// Text up to and including its trailing whitespace.
#[derive(Default)]
struct Word<'a> {
    parts: Vec<Piece<'a>>,
}

impl Word<'_> {
    /// Columns without trailing whitespace.
    fn visible_width(&self) -> usize {
        let full: usize = self.parts.iter().map(|p| display_width(p.text)).sum();
        let trailing = self
            .parts
            .last()
            .map(|p| display_width(p.text) - display_width(p.text.trim_end()))
            .unwrap_or(0);
        full - trailing
    }

    fn is_blank(&self) -> bool {
        self.parts.iter().all(|p| p.text.trim().is_empty())
    }
}

fn split_words<'a>(pieces: &[Piece<'a>]) -> Vec<Word<'a>> {
    let mut words = Vec::new();
    let mut current = Word::default();
    for piece in pieces {
        for segment in piece.text.split_inclusive(char::is_whitespace) {
            current.parts.push(Piece::new(segment, piece.style));
            if segment.ends_with(char::is_whitespace) {
                words.push(std::mem::take(&mut current));
            }
        }
    }
    if !current.parts.is_empty() {
        words.push(current);
    }
    words
}

/// Row under construction.
#[derive(Default)]
struct Row {
    spans: Vec<Span<'static>>,
    width: usize,
}

impl Row {
    fn push(&mut self, text: &str, style: Style) {
        self.width += display_width(text);
        match self.spans.last_mut() {
            Some(last) if last.style == style => last.content.to_mut().push_str(text),
            _ => self.spans.push(Span::styled(text.to_string(), style)),
        }
    }

    fn finish(mut self) -> Vec<Span<'static>> {
        if let Some(last) = self.spans.last_mut() {
            let trimmed = last.content.trim_end().len();
            last.content.to_mut().truncate(trimmed);
        }
        self.spans.retain(|s| !s.content.is_empty());
        self.spans
    }
}

/// Wrap styled pieces to rows of at most `width` columns. Width 0 disables wrapping.
///
/// Words longer than the width are broken at character boundaries. Whitespace
/// at a break is dropped; leading whitespace on the first row is kept.
pub(crate) fn wrap_pieces(pieces: &[Piece<'_>], width: usize) -> Vec<Vec<Span<'static>>> {
    let width = if width == 0 { usize::MAX } else { width };
    let mut rows = Vec::new();
    let mut row = Row::default();

    for word in split_words(pieces) {
        let visible = word.visible_width();
        if row.width > 0 && row.width + visible > width {
            rows.push(std::mem::take(&mut row).finish());
        }
        if row.width == 0 && !rows.is_empty() && word.is_blank() {
            continue;
        }
        if visible <= width {
            for part in &word.parts {
                row.push(part.text, part.style);
            }
            continue;
        }
        // Hard-break an overlong word.
        for part in &word.parts {
            for c in part.text.chars() {
                let mut buf = [0u8; 4];
                let ch: &str = c.encode_utf8(&mut buf);
                if row.width > 0 && row.width + display_width(ch) > width {
                    rows.push(std::mem::take(&mut row).finish());
                }
                row.push(ch, part.style);
            }
        }
    }
    if row.width > 0 || rows.is_empty() {
        rows.push(row.finish());
    }
    rows
}
