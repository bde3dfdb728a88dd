//! Session state: scrollback, input line and command history.
//!
//! Scrollback is append-only apart from a full wipe. Line ids come from a
//! counter that is never rewound, so an id is never reused for the life of
//! the session, across clears and theme resets included.

use crate::rich::RichBlock;

/// Identifier of a scrollback line. Strictly increasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineId(u64);

impl LineId {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// How a line is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Echo of a submitted line (rendered after the prompt).
    Input,
    Output,
    Error,
    Success,
    Info,
}

/// What a line shows.
#[derive(Debug, Clone, PartialEq)]
pub enum LineContent {
    Text(String),
    Rich(RichBlock),
    /// Live cell mounted in this slot; its state lives in the cell table
    /// under the line's own id.
    Cell,
}

/// One rendered line of the scrollback.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollbackLine {
    pub id: LineId,
    pub kind: LineKind,
    pub content: LineContent,
}

impl ScrollbackLine {
    /// Text content, if this is a text line.
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            LineContent::Text(t) => Some(t),
            LineContent::Rich(_) | LineContent::Cell => None,
        }
    }
}

/// Scrollback, input buffer and history of the single terminal.
#[derive(Debug, Clone, Default)]
pub struct Session {
    scrollback: Vec<ScrollbackLine>,
    pub(crate) input: String,
    pub(crate) history: Vec<String>,
    /// Steps back from the newest history entry; `None` while editing live.
    pub(crate) history_cursor: Option<usize>,
    next_id: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scrollback(&self) -> &[ScrollbackLine] {
        &self.scrollback
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Submitted commands, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// `None` while editing live, otherwise how many steps back from the
    /// newest entry the input line shows.
    pub fn history_cursor(&self) -> Option<usize> {
        self.history_cursor
    }

    /// Append a line and return its id.
    pub fn push(&mut self, kind: LineKind, content: LineContent) -> LineId {
        let id = LineId(self.next_id);
        self.next_id += 1;
        self.scrollback.push(ScrollbackLine { id, kind, content });
        id
    }

    pub fn push_text(&mut self, kind: LineKind, text: impl Into<String>) -> LineId {
        self.push(kind, LineContent::Text(text.into()))
    }

    /// Look up a line by id.
    pub fn line(&self, id: LineId) -> Option<&ScrollbackLine> {
        self.scrollback
            .binary_search_by_key(&id, |l| l.id)
            .ok()
            .map(|i| &self.scrollback[i])
    }

    /// Drop every scrollback line. History and input are untouched.
    pub fn clear_scrollback(&mut self) {
        self.scrollback.clear();
    }

    /// Replace the scrollback with a single welcome line.
    pub fn reset(&mut self, welcome: &str) {
        self.clear_scrollback();
        self.push_text(LineKind::Output, welcome);
    }

    /// Record a submitted command and leave history browsing.
    pub(crate) fn record_history(&mut self, entry: String) {
        self.history.push(entry);
        self.history_cursor = None;
    }

    /// History entry `steps` back from the newest.
    pub(crate) fn history_entry(&self, steps: usize) -> Option<&str> {
        let idx = self.history.len().checked_sub(steps + 1)?;
        self.history.get(idx).map(String::as_str)
    }
}
