//! TUI application state: active tab, inputs, loaded syllabus, results.

mod loaded;

pub use loaded::LoadedSyllabus;

use crate::core::api::{QuestionResponse, TopicsResponse};
use crate::core::course::CourseOutcome;

/// Tabs in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Upload,
    Topics,
    Questions,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Upload, Tab::Topics, Tab::Questions];

    pub fn index(self) -> usize {
        match self {
            Tab::Upload => 0,
            Tab::Topics => 1,
            Tab::Questions => 2,
        }
    }
}

/// Request kinds, one in flight at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Upload,
    Topics,
    Question,
    SyllabusInfo,
}

impl Action {
    /// Label for the loading indicator.
    pub fn label(self) -> &'static str {
        match self {
            Action::Upload => "Uploading syllabus",
            Action::Topics => "Loading topics",
            Action::Question => "Generating questions",
            Action::SyllabusInfo => "Checking for a loaded syllabus",
        }
    }
}

pub struct App {
    pub tab: Tab,
    /// Path typed on the Upload tab.
    pub path_input: String,
    pub syllabus: Option<LoadedSyllabus>,
    /// Index into `syllabus.outcomes`; none until the user picks one.
    pub selected_co: Option<usize>,
    pub topics: Option<TopicsResponse>,
    pub prompt: String,
    pub question: Option<QuestionResponse>,
    /// Request in flight, if any.
    pub loading: Option<Action>,
    /// Last action's user-facing error.
    pub error: Option<String>,
    /// Scroll offset of the results panel on the active tab.
    pub scroll: u16,
    /// Largest useful scroll offset, set while drawing.
    pub max_scroll: u16,
    /// Service base URL, shown in the header.
    pub server: String,
    /// Frame counter for the spinner.
    pub tick: usize,
}

impl App {
    pub fn new(server: String) -> Self {
        Self {
            tab: Tab::Upload,
            path_input: String::new(),
            syllabus: None,
            selected_co: None,
            topics: None,
            prompt: String::new(),
            question: None,
            loading: None,
            error: None,
            scroll: 0,
            max_scroll: 0,
            server,
            tick: 0,
        }
    }

    /// Topics and Questions need a loaded syllabus.
    pub fn is_enabled(&self, tab: Tab) -> bool {
        tab == Tab::Upload || self.syllabus.is_some()
    }

    pub fn set_tab(&mut self, tab: Tab) {
        if self.is_enabled(tab) && self.tab != tab {
            self.tab = tab;
            self.scroll = 0;
        }
    }

    /// Move to the next enabled tab, wrapping around.
    pub fn next_tab(&mut self) {
        self.cycle_tab(1);
    }

    pub fn prev_tab(&mut self) {
        self.cycle_tab(Tab::ALL.len() - 1);
    }

    fn cycle_tab(&mut self, step: usize) {
        let len = Tab::ALL.len();
        let mut idx = self.tab.index();
        for _ in 0..len {
            idx = (idx + step) % len;
            if self.is_enabled(Tab::ALL[idx]) {
                self.set_tab(Tab::ALL[idx]);
                return;
            }
        }
    }

    pub fn outcomes(&self) -> &[CourseOutcome] {
        self.syllabus
            .as_ref()
            .map(|s| s.outcomes.as_slice())
            .unwrap_or(&[])
    }

    pub fn selected_outcome(&self) -> Option<&CourseOutcome> {
        self.selected_co.and_then(|i| self.outcomes().get(i))
    }

    /// Select the previous course outcome. From no selection, picks the last one.
    pub fn select_prev_co(&mut self) {
        let len = self.outcomes().len();
        if len == 0 {
            return;
        }
        self.selected_co = Some(match self.selected_co {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        });
    }

    /// Select the next course outcome. From no selection, picks the first one.
    pub fn select_next_co(&mut self) {
        let len = self.outcomes().len();
        if len == 0 {
            return;
        }
        self.selected_co = Some(match self.selected_co {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        });
    }

    /// Text input on the active tab, if it has one.
    pub fn active_input(&mut self) -> Option<&mut String> {
        match self.tab {
            Tab::Upload => Some(&mut self.path_input),
            Tab::Questions => Some(&mut self.prompt),
            Tab::Topics => None,
        }
    }

    /// Install a newly loaded syllabus. Clears results that belonged to the previous one.
    pub fn load_syllabus(&mut self, syllabus: LoadedSyllabus) {
        self.syllabus = Some(syllabus);
        self.selected_co = None;
        self.topics = None;
        self.question = None;
        self.scroll = 0;
    }

    /// Mark an action as started: clears the previous error.
    pub fn begin(&mut self, action: Action) {
        self.loading = Some(action);
        self.error = None;
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines).min(self.max_scroll);
    }
}

#[cfg(test)]
mod tests;
