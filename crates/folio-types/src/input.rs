//! Platform-agnostic input event types.
//!
//! Hosts map their native keyboard/pointer input to these enums. The
//! terminal and window manager never see raw platform input.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// A key the terminal input line reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Printable character typed at the end of the input line.
    Char(char),
    /// Delete the last character.
    Backspace,
    /// Submit the input line.
    Enter,
    /// Walk history towards older entries.
    Up,
    /// Walk history towards newer entries.
    Down,
    /// Complete the command name.
    Tab,
    /// Clear-screen shortcut.
    CtrlL,
}

/// A platform-agnostic input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Key pressed while the terminal has focus.
    Key(Key),
    /// Pointer pressed at absolute position.
    PointerDown(Point),
    /// Pointer moved to absolute position.
    PointerMove(Point),
    /// Pointer released.
    PointerUp,
    /// User requested quit.
    Quit,
}
