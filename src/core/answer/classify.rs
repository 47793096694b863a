//! Line classification heuristics for generated question sheets.
//!
//! These rules are tuned to the service's output ("2-MARK QUESTIONS:",
//! "**FIVE MARK QUESTIONS**", "1. ...") and are kept literal.

use super::BlockCategory;

const QUESTIONS: &str = "QUESTIONS";
const MARK_QUESTIONS: &str = "MARK QUESTIONS";

/// Classify a raw line (markers included). Section headers win over question items.
pub(super) fn classify(line: &str) -> BlockCategory {
    if is_section_header(line) {
        BlockCategory::SectionHeader
    } else if is_question_item(line) {
        BlockCategory::QuestionItem
    } else {
        BlockCategory::Plain
    }
}

fn is_section_header(line: &str) -> bool {
    line.contains(MARK_QUESTIONS) || starts_with_bold_questions(line)
}

/// `**` at line start, then `QUESTIONS`, then a later `**`.
fn starts_with_bold_questions(line: &str) -> bool {
    let Some(rest) = line.strip_prefix("**") else {
        return false;
    };
    match rest.find(QUESTIONS) {
        Some(idx) => rest[idx + QUESTIONS.len()..].contains("**"),
        None => false,
    }
}

/// One or more ASCII digits followed by a period at line start.
fn is_question_item(line: &str) -> bool {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    digits > 0 && line.as_bytes().get(digits) == Some(&b'.')
}
