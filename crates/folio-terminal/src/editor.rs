//! Input line editing: typing, history navigation and tab completion.
//!
//! The history cursor counts steps back from the newest entry and always
//! stays within `None ..= Some(history.len() - 1)`.

use crate::interpreter::CommandRegistry;
use crate::session::Session;

/// Outcome of a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The input line was submitted to the dispatcher.
    Submitted,
    /// The input line or history cursor changed.
    Edited,
    /// The scrollback was wiped by the clear-screen shortcut.
    Cleared,
    /// Nothing changed.
    Ignored,
}

pub(crate) fn insert_char(session: &mut Session, ch: char) -> KeyOutcome {
    if ch.is_control() {
        return KeyOutcome::Ignored;
    }
    session.input.push(ch);
    KeyOutcome::Edited
}

pub(crate) fn backspace(session: &mut Session) -> KeyOutcome {
    match session.input.pop() {
        Some(_) => KeyOutcome::Edited,
        None => KeyOutcome::Ignored,
    }
}

/// Step toward older entries, stopping at the oldest.
pub(crate) fn history_up(session: &mut Session) -> KeyOutcome {
    let Some(oldest) = session.history.len().checked_sub(1) else {
        return KeyOutcome::Ignored;
    };
    let steps = session.history_cursor.map_or(0, |c| (c + 1).min(oldest));
    session.history_cursor = Some(steps);
    session.input = session.history_entry(steps).unwrap_or_default().to_string();
    KeyOutcome::Edited
}

/// Step toward newer entries; past the newest the input line is emptied.
pub(crate) fn history_down(session: &mut Session) -> KeyOutcome {
    match session.history_cursor {
        None => KeyOutcome::Ignored,
        Some(0) => {
            session.history_cursor = None;
            session.input.clear();
            KeyOutcome::Edited
        }
        Some(steps) => {
            let steps = steps - 1;
            session.history_cursor = Some(steps);
            session.input = session.history_entry(steps).unwrap_or_default().to_string();
            KeyOutcome::Edited
        }
    }
}

/// Complete the input line when exactly one command matches it.
pub(crate) fn tab_complete(session: &mut Session, registry: &CommandRegistry) -> KeyOutcome {
    match registry.completions(&session.input).as_slice() {
        [only] => {
            log::debug!("completed '{}' to '{only}'", session.input);
            session.input = (*only).to_string();
            KeyOutcome::Edited
        }
        _ => KeyOutcome::Ignored,
    }
}

/// Take the input line for submission, leaving it empty.
pub(crate) fn take_input(session: &mut Session) -> String {
    std::mem::take(&mut session.input)
}
