//! Hit testing: which part of the window chrome a pointer lands on.

use folio_types::geometry::{Point, Rect, Size};

/// Title bar height in pixels.
pub const TITLEBAR_HEIGHT: u32 = 32;
/// Width of each title bar button.
pub const BUTTON_WIDTH: u32 = 32;
/// Square grab area in the bottom-right corner.
pub const RESIZE_HANDLE_SIZE: u32 = 16;
/// Taskbar height at the bottom of the viewport.
pub const TASKBAR_HEIGHT: u32 = 40;
/// Size of the "minimized terminal" affordance above the taskbar.
pub const AFFORDANCE_SIZE: Size = Size::new(260, 32);
/// Gap between the affordance and the right edge of the viewport.
pub const AFFORDANCE_MARGIN: u32 = 16;

/// Region of the window chrome under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitZone {
    /// Draggable title bar.
    TitleBar,
    MinimizeButton,
    MaximizeButton,
    /// Bottom-right resize grip (absent while maximized).
    ResizeHandle,
    /// Terminal body; clicks focus the input line.
    Content,
    /// Taskbar affordance of a minimized window.
    Affordance,
    Outside,
}

/// Locate `p` within a visible window `frame`.
pub(crate) fn hit_frame(frame: Rect, p: Point, resizable: bool) -> HitZone {
    if !frame.contains(p) {
        return HitZone::Outside;
    }
    let local = p - frame.origin;
    let width = i64::from(frame.size.width);
    let height = i64::from(frame.size.height);
    let (lx, ly) = (i64::from(local.x), i64::from(local.y));

    if ly < i64::from(TITLEBAR_HEIGHT) {
        let from_right = width - lx;
        if from_right <= i64::from(BUTTON_WIDTH) {
            return HitZone::MaximizeButton;
        }
        if from_right <= 2 * i64::from(BUTTON_WIDTH) {
            return HitZone::MinimizeButton;
        }
        return HitZone::TitleBar;
    }
    let grip = i64::from(RESIZE_HANDLE_SIZE);
    if resizable && width - lx <= grip && height - ly <= grip {
        return HitZone::ResizeHandle;
    }
    HitZone::Content
}

/// Where the minimized affordance sits for a given viewport.
pub fn affordance_rect(viewport: Size) -> Rect {
    let x = i64::from(viewport.width)
        - i64::from(AFFORDANCE_SIZE.width)
        - i64::from(AFFORDANCE_MARGIN);
    let y = i64::from(viewport.height)
        - i64::from(TASKBAR_HEIGHT)
        - i64::from(AFFORDANCE_SIZE.height);
    Rect::new(
        Point::new(saturate(x), saturate(y)),
        AFFORDANCE_SIZE,
    )
}

fn saturate(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
