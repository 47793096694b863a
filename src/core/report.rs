//! Plain-text and ANSI rendering of service responses for the CLI.
//!
//! Every function returns a `String` so output can be tested without a terminal.

use std::fmt::Write as _;
use std::io::IsTerminal;

use crossterm::style::{Color, Stylize, style as styled};

use crate::core::answer::{BlockCategory, DisplayBlock, format_answer};
use crate::core::api::{QuestionResponse, SyllabusInfo, TopicsResponse, UploadResponse};

/// Accent color (#667EEA).
const ACCENT: Color = Color::Rgb {
    r: 102,
    g: 126,
    b: 234,
};

const MISSING: &str = "—";
const LABEL_WIDTH: usize = 14;

/// Whether to emit ANSI styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Plain,
    Styled,
}

impl Output {
    /// Styled only when stdout is a terminal, `--plain` is off, and `NO_COLOR` is unset.
    pub fn detect(plain: bool) -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        if plain || no_color || !std::io::stdout().is_terminal() {
            Output::Plain
        } else {
            Output::Styled
        }
    }

    fn bold(self, s: &str) -> String {
        match self {
            Output::Plain => s.to_string(),
            Output::Styled => styled(s).bold().to_string(),
        }
    }

    fn accent(self, s: &str) -> String {
        match self {
            Output::Plain => s.to_string(),
            Output::Styled => styled(s).with(ACCENT).to_string(),
        }
    }

    fn heading(self, s: &str) -> String {
        match self {
            Output::Plain => s.to_string(),
            Output::Styled => styled(s).with(ACCENT).bold().to_string(),
        }
    }

    fn dim(self, s: &str) -> String {
        match self {
            Output::Plain => s.to_string(),
            Output::Styled => styled(s).dark_grey().to_string(),
        }
    }
}

fn or_missing(value: Option<&str>) -> &str {
    value.filter(|v| !v.trim().is_empty()).unwrap_or(MISSING)
}

fn field(out: &mut String, style: Output, label: &str, value: &str) {
    let _ = writeln!(
        out,
        "  {}{}",
        style.dim(&format!("{:<LABEL_WIDTH$}", label)),
        value
    );
}

fn join_or_missing(items: &[String]) -> String {
    if items.is_empty() {
        MISSING.to_string()
    } else {
        items.join(", ")
    }
}

/// Result of a successful upload: message, course fields, available outcomes.
pub fn course_info(upload: &UploadResponse, style: Output) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", style.heading(&format!("✓ {}", upload.message)));
    let info = &upload.course_info;
    field(
        &mut out,
        style,
        "Course Code",
        or_missing(info.course_code.as_deref()),
    );
    field(
        &mut out,
        style,
        "Course Name",
        or_missing(info.course_name.as_deref()),
    );
    field(&mut out, style, "Total Units", &info.total_units.to_string());
    let _ = writeln!(
        out,
        "  {} {}",
        style.dim("Available Course Outcomes:"),
        style.bold(&join_or_missing(&upload.available_cos))
    );
    out
}

/// Topics for one course outcome, categories in server order.
pub fn topics(topics: &TopicsResponse, style: Output) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}",
        style.heading(&format!("{} - {}", topics.course_outcome, topics.unit_title))
    );
    let meta = match topics.periods {
        Some(p) => format!("{} | {} Periods", topics.unit_id, p),
        None => topics.unit_id.clone(),
    };
    let _ = writeln!(out, "{}", style.dim(&meta));

    if topics.topics.is_empty() {
        let _ = writeln!(out, "\n{}", style.dim("No topics listed for this unit."));
        return out;
    }
    for (category, items) in topics.topics.iter() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", style.heading(category));
        for item in items {
            let _ = writeln!(out, "  {} {}", style.accent("•"), item);
        }
    }
    out
}

/// Question response header followed by the formatted answer.
pub fn question(response: &QuestionResponse, style: Output) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}",
        style.heading(&format!("{} - {}", response.course_outcome, response.unit))
    );
    let _ = writeln!(
        out,
        "{}",
        style.dim(&format!("Unit: {}", response.context_info.unit_id))
    );
    let _ = writeln!(
        out,
        "{}",
        style.dim(&format!(
            "Topics Covered: {}",
            response.context_info.topics_covered.join(", ")
        ))
    );
    let _ = writeln!(out);
    out.push_str(&answer(&format_answer(&response.answer), style));
    out
}

/// Render formatted answer blocks: headers underlined, question items barred.
pub fn answer(blocks: &[DisplayBlock<'_>], style: Output) -> String {
    let mut out = String::new();
    for (idx, block) in blocks.iter().enumerate() {
        match block.category {
            BlockCategory::SectionHeader => {
                if idx > 0 {
                    let _ = writeln!(out);
                }
                let text = block.plain_text();
                let _ = writeln!(out, "{}", style.heading(&text));
                let width = text.trim_end().chars().count().max(3);
                let _ = writeln!(out, "{}", style.accent(&"─".repeat(width)));
            }
            BlockCategory::QuestionItem => {
                let _ = writeln!(out, "{} {}", style.accent("│"), spans(block, style));
            }
            BlockCategory::Plain => {
                let _ = writeln!(out, "{}", spans(block, style));
            }
        }
    }
    out
}

fn spans(block: &DisplayBlock<'_>, style: Output) -> String {
    if style == Output::Plain || !block.has_emphasis() {
        return block.plain_text();
    }
    block
        .spans
        .iter()
        .map(|s| {
            if s.emphasized {
                style.bold(s.text)
            } else {
                s.text.to_string()
            }
        })
        .collect()
}

/// Summary of the syllabus loaded on the server.
pub fn syllabus_info(info: &SyllabusInfo, style: Output) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", style.heading("Loaded syllabus"));
    field(
        &mut out,
        style,
        "Course Code",
        or_missing(info.course_code.as_deref()),
    );
    field(
        &mut out,
        style,
        "Course Name",
        or_missing(info.course_name.as_deref()),
    );
    field(
        &mut out,
        style,
        "Department",
        or_missing(info.department.as_deref()),
    );
    field(
        &mut out,
        style,
        "Semester",
        or_missing(info.semester.as_deref()),
    );
    field(&mut out, style, "Total Units", &info.total_units.to_string());
    let _ = writeln!(
        out,
        "  {} {}",
        style.dim("Available Course Outcomes:"),
        style.bold(&join_or_missing(&info.available_cos))
    );
    if info.units.is_empty() {
        return out;
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", style.heading("Units"));
    let id_w = info
        .units
        .iter()
        .map(|u| or_missing(u.unit_id.as_deref()).chars().count())
        .max()
        .unwrap_or(0);
    for unit in &info.units {
        let co = or_missing(unit.course_outcome.as_deref());
        let periods = unit
            .periods
            .map(|p| format!("{} periods", p))
            .unwrap_or_else(|| MISSING.to_string());
        let _ = writeln!(
            out,
            "  {:<id_w$}  {}  {}",
            or_missing(unit.unit_id.as_deref()),
            or_missing(unit.title.as_deref()),
            style.dim(&format!("({}, {})", co, periods))
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::{
        ContextInfo, CourseInfo, TopicCategories, UnitSummary, UploadResponse,
    };

    fn sample_topics() -> TopicsResponse {
        TopicsResponse {
            course_outcome: "CO1".to_string(),
            unit_id: "UNIT I".to_string(),
            unit_title: "Basic Structure of Computers".to_string(),
            periods: Some(9),
            topics: TopicCategories(vec![
                (
                    "Functional Units".to_string(),
                    vec!["Bus structures".to_string(), "Performance".to_string()],
                ),
                ("ALU Design".to_string(), vec!["Adders".to_string()]),
            ]),
        }
    }

    #[test]
    fn topics_keep_category_order() {
        let text = topics(&sample_topics(), Output::Plain);
        assert!(text.starts_with("CO1 - Basic Structure of Computers\nUNIT I | 9 Periods\n"));
        let functional = text.find("Functional Units").unwrap();
        let alu = text.find("ALU Design").unwrap();
        assert!(functional < alu);
        assert!(text.contains("  • Bus structures\n"));
    }

    #[test]
    fn topics_without_periods_show_unit_only() {
        let mut t = sample_topics();
        t.periods = None;
        t.topics = TopicCategories::default();
        let text = topics(&t, Output::Plain);
        assert!(text.contains("\nUNIT I\n"));
        assert!(text.contains("No topics listed"));
    }

    #[test]
    fn course_info_marks_missing_fields() {
        let upload = UploadResponse {
            message: "Syllabus uploaded successfully".to_string(),
            available_cos: vec![],
            course_info: CourseInfo {
                course_code: None,
                course_name: Some("  ".to_string()),
                total_units: 0,
            },
        };
        let text = course_info(&upload, Output::Plain);
        assert!(text.starts_with("✓ Syllabus uploaded successfully\n"));
        assert!(text.contains("Course Code   —"));
        assert!(text.contains("Course Name   —"));
        assert!(text.contains("Available Course Outcomes: —"));
    }

    #[test]
    fn plain_answer_has_no_escape_codes() {
        let blocks = format_answer("**TWO MARK QUESTIONS**\n1. Define **cache**.\nGood luck");
        let text = answer(&blocks, Output::Plain);
        assert!(!text.contains('\u{1b}'));
        assert_eq!(
            text,
            "TWO MARK QUESTIONS\n──────────────────\n│ 1. Define cache.\nGood luck\n"
        );
    }

    #[test]
    fn styled_answer_bolds_emphasis() {
        let blocks = format_answer("See **this**");
        let text = answer(&blocks, Output::Styled);
        assert!(text.contains('\u{1b}'));
        assert!(text.contains("this"));
    }

    #[test]
    fn headers_after_first_get_blank_line() {
        let blocks = format_answer("Intro\n2-MARK QUESTIONS:\n1. Q");
        let text = answer(&blocks, Output::Plain);
        assert!(text.starts_with("Intro\n\n2-MARK QUESTIONS:\n"));
    }

    #[test]
    fn question_header_lists_topics() {
        let response = QuestionResponse {
            answer: "1. Define latency.".to_string(),
            course_outcome: "CO2".to_string(),
            unit: "Memory".to_string(),
            question: None,
            context_info: ContextInfo {
                unit_id: "UNIT II".to_string(),
                topics_covered: vec!["Cache".to_string(), "Paging".to_string()],
            },
        };
        let text = question(&response, Output::Plain);
        assert_eq!(
            text,
            "CO2 - Memory\nUnit: UNIT II\nTopics Covered: Cache, Paging\n\n│ 1. Define latency.\n"
        );
    }

    #[test]
    fn syllabus_info_lists_units() {
        let info = SyllabusInfo {
            course_code: Some("CS3401".to_string()),
            course_name: Some("Computer Architecture".to_string()),
            department: None,
            semester: Some("IV".to_string()),
            total_units: 2,
            available_cos: vec!["CO1".to_string(), "CO2".to_string()],
            units: vec![
                UnitSummary {
                    unit_id: Some("UNIT I".to_string()),
                    title: Some("Basics".to_string()),
                    course_outcome: Some("CO1".to_string()),
                    periods: Some(9),
                },
                UnitSummary {
                    unit_id: Some("UNIT II".to_string()),
                    title: Some("Memory".to_string()),
                    course_outcome: None,
                    periods: None,
                },
            ],
        };
        let text = syllabus_info(&info, Output::Plain);
        assert!(text.contains("Department    —"));
        assert!(text.contains("Available Course Outcomes: CO1, CO2"));
        assert!(text.contains("  UNIT I   Basics  (CO1, 9 periods)\n"));
        assert!(text.contains("  UNIT II  Memory  (—, —)\n"));
    }
}
