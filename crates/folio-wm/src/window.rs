//! Window lifecycle mode and in-flight pointer gestures.

use folio_types::geometry::{Point, Size};

/// Lifecycle mode of the terminal window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WindowMode {
    /// Floating at its own position and size.
    #[default]
    Normal,
    /// Hidden; only the taskbar affordance is shown.
    Minimized,
    /// Fills the viewport; drag and resize are ignored.
    Maximized,
}

/// Pointer gesture currently being tracked.
///
/// Dragging and resizing are mutually exclusive; starting one replaces the
/// other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Interaction {
    #[default]
    Idle,
    Dragging {
        /// Pointer position minus window position at drag start.
        offset: Point,
    },
    Resizing {
        /// Pointer position at resize start.
        anchor: Point,
        /// Window size at resize start.
        anchor_size: Size,
    },
}

impl Interaction {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Interaction::Dragging { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Interaction::Resizing { .. })
    }
}
