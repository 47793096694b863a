//! Answer formatting: turns the raw `answer` text returned by the question
//! service into classified display blocks.
//!
//! Every non-blank line of the answer becomes one [`DisplayBlock`]. A block
//! carries the line split into plain and emphasized spans (`**bold**`
//! markers) and a [`BlockCategory`] used by renderers to pick a style.

mod classify;
mod spans;


use std::fmt;

/// Kind of line in a generated answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockCategory {
    Plain,
    /// Numbered line such as `1. What is an ALU?`.
    QuestionItem,
    /// Group title such as `**FIVE MARK QUESTIONS**`.
    SectionHeader,
}

/// A piece of a line, optionally marked for bold rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSpan<'a> {
    pub text: &'a str,
    pub emphasized: bool,
}

impl<'a> TextSpan<'a> {
    pub fn plain(text: &'a str) -> Self {
        Self {
            text,
            emphasized: false,
        }
    }

    pub fn emphasized(text: &'a str) -> Self {
        Self {
            text,
            emphasized: true,
        }
    }
}

/// One rendered unit per non-blank answer line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayBlock<'a> {
    pub spans: Vec<TextSpan<'a>>,
    pub category: BlockCategory,
}

impl<'a> DisplayBlock<'a> {
    /// Build a block from a single answer line (no newline inside).
    pub fn from_line(line: &'a str) -> Self {
        Self {
            spans: spans::scan_emphasis(line),
            category: classify::classify(line),
        }
    }

    /// Span texts joined without markers.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text).collect()
    }

    pub fn has_emphasis(&self) -> bool {
        self.spans.iter().any(|s| s.emphasized)
    }
}

impl fmt::Display for DisplayBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for span in &self.spans {
            f.write_str(span.text)?;
        }
        Ok(())
    }
}

/// Split an answer into display blocks, one per non-blank line, in order.
///
/// Never fails: empty or malformed input yields an empty or plain result.
pub fn format_answer(answer: &str) -> Vec<DisplayBlock<'_>> {
    answer
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(DisplayBlock::from_line)
        .collect()
}
