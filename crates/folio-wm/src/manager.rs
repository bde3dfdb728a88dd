//! Window state machine and pointer routing.

use folio_types::config::MIN_WINDOW_SIZE;
use folio_types::geometry::{Point, Rect, Size};
use folio_types::input::InputEvent;

use crate::hit::{self, HitZone};
use crate::window::{Interaction, WindowMode};

/// A window manager transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WmEvent {
    Minimize,
    Restore,
    ToggleMaximize,
    DragStart(Point),
    DragMove(Point),
    DragEnd,
    ResizeStart(Point),
    ResizeMove(Point),
    ResizeEnd,
}

/// Whether an event changed anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WmOutcome {
    Changed,
    Ignored,
}

impl WmOutcome {
    fn from_bool(changed: bool) -> Self {
        if changed {
            WmOutcome::Changed
        } else {
            WmOutcome::Ignored
        }
    }
}

/// Owns the geometry and lifecycle of the single terminal window.
#[derive(Debug, Clone)]
pub struct WindowManager {
    position: Point,
    size: Size,
    mode: WindowMode,
    interaction: Interaction,
    viewport: Size,
}

impl WindowManager {
    /// Create a `Normal` window. `size` is clamped to the minimum.
    pub fn new(position: Point, size: Size, viewport: Size) -> Self {
        Self {
            position,
            size: size.at_least(MIN_WINDOW_SIZE),
            mode: WindowMode::Normal,
            interaction: Interaction::Idle,
            viewport,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn mode(&self) -> WindowMode {
        self.mode
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Whether the terminal accepts keyboard input (anything but minimized).
    pub fn is_interactive(&self) -> bool {
        self.mode != WindowMode::Minimized
    }

    /// The on-screen frame, or `None` while minimized.
    pub fn frame(&self) -> Option<Rect> {
        match self.mode {
            WindowMode::Normal => Some(Rect::new(self.position, self.size)),
            WindowMode::Maximized => Some(Rect::new(Point::default(), self.viewport)),
            WindowMode::Minimized => None,
        }
    }

    /// Set the size of the normal frame, clamped to the minimum.
    pub fn set_size(&mut self, size: Size) {
        self.size = size.at_least(MIN_WINDOW_SIZE);
    }

    /// Update the area a maximized window fills (host resized).
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Apply a transition.
    pub fn apply(&mut self, event: WmEvent) -> WmOutcome {
        let outcome = match event {
            WmEvent::Minimize => self.minimize(),
            WmEvent::Restore => self.restore(),
            WmEvent::ToggleMaximize => self.toggle_maximize(),
            WmEvent::DragStart(p) => self.drag_start(p),
            WmEvent::DragMove(p) => self.drag_move(p),
            WmEvent::DragEnd => self.drag_end(),
            WmEvent::ResizeStart(p) => self.resize_start(p),
            WmEvent::ResizeMove(p) => self.resize_move(p),
            WmEvent::ResizeEnd => self.resize_end(),
        };
        if outcome == WmOutcome::Changed {
            log::trace!("wm: {event:?} -> {:?}", self.mode);
        }
        outcome
    }

    /// `Normal|Maximized -> Minimized`.
    pub fn minimize(&mut self) -> WmOutcome {
        if self.mode == WindowMode::Minimized {
            return WmOutcome::Ignored;
        }
        self.mode = WindowMode::Minimized;
        self.interaction = Interaction::Idle;
        log::debug!("Terminal window minimized");
        WmOutcome::Changed
    }

    /// `Minimized -> Normal`.
    pub fn restore(&mut self) -> WmOutcome {
        if self.mode != WindowMode::Minimized {
            return WmOutcome::Ignored;
        }
        self.mode = WindowMode::Normal;
        log::debug!("Terminal window restored");
        WmOutcome::Changed
    }

    /// `Normal <-> Maximized`. Ignored while minimized.
    pub fn toggle_maximize(&mut self) -> WmOutcome {
        self.mode = match self.mode {
            WindowMode::Normal => WindowMode::Maximized,
            WindowMode::Maximized => WindowMode::Normal,
            WindowMode::Minimized => return WmOutcome::Ignored,
        };
        self.interaction = Interaction::Idle;
        log::debug!("Terminal window now {:?}", self.mode);
        WmOutcome::Changed
    }

    pub fn drag_start(&mut self, pointer: Point) -> WmOutcome {
        if self.mode != WindowMode::Normal {
            return WmOutcome::Ignored;
        }
        self.interaction = Interaction::Dragging {
            offset: pointer - self.position,
        };
        WmOutcome::Changed
    }

    pub fn drag_move(&mut self, pointer: Point) -> WmOutcome {
        let Interaction::Dragging { offset } = self.interaction else {
            return WmOutcome::Ignored;
        };
        if self.mode != WindowMode::Normal {
            return WmOutcome::Ignored;
        }
        let next = pointer - offset;
        let changed = next != self.position;
        self.position = next;
        WmOutcome::from_bool(changed)
    }

    pub fn drag_end(&mut self) -> WmOutcome {
        if !self.interaction.is_dragging() {
            return WmOutcome::Ignored;
        }
        self.interaction = Interaction::Idle;
        WmOutcome::Changed
    }

    pub fn resize_start(&mut self, pointer: Point) -> WmOutcome {
        if self.mode != WindowMode::Normal {
            return WmOutcome::Ignored;
        }
        self.interaction = Interaction::Resizing {
            anchor: pointer,
            anchor_size: self.size,
        };
        WmOutcome::Changed
    }

    pub fn resize_move(&mut self, pointer: Point) -> WmOutcome {
        let Interaction::Resizing {
            anchor,
            anchor_size,
        } = self.interaction
        else {
            return WmOutcome::Ignored;
        };
        if self.mode != WindowMode::Normal {
            return WmOutcome::Ignored;
        }
        let next = anchor_size.resized_by(pointer - anchor, MIN_WINDOW_SIZE);
        let changed = next != self.size;
        self.size = next;
        WmOutcome::from_bool(changed)
    }

    pub fn resize_end(&mut self) -> WmOutcome {
        if !self.interaction.is_resizing() {
            return WmOutcome::Ignored;
        }
        self.interaction = Interaction::Idle;
        WmOutcome::Changed
    }

    /// Which chrome region `p` falls on.
    pub fn hit_test(&self, p: Point) -> HitZone {
        match self.frame() {
            Some(frame) => hit::hit_frame(frame, p, self.mode == WindowMode::Normal),
            None if hit::affordance_rect(self.viewport).contains(p) => HitZone::Affordance,
            None => HitZone::Outside,
        }
    }

    /// Route a raw pointer event: press on chrome starts a gesture or
    /// triggers a button, moves feed the active gesture, release ends it.
    pub fn handle_input(&mut self, event: &InputEvent) -> WmOutcome {
        match *event {
            InputEvent::PointerDown(p) => match self.hit_test(p) {
                HitZone::TitleBar => self.drag_start(p),
                HitZone::ResizeHandle => self.resize_start(p),
                HitZone::MinimizeButton => self.minimize(),
                HitZone::MaximizeButton => self.toggle_maximize(),
                HitZone::Affordance => self.restore(),
                HitZone::Content | HitZone::Outside => WmOutcome::Ignored,
            },
            InputEvent::PointerMove(p) => match self.interaction {
                Interaction::Dragging { .. } => self.drag_move(p),
                Interaction::Resizing { .. } => self.resize_move(p),
                Interaction::Idle => WmOutcome::Ignored,
            },
            InputEvent::PointerUp => match self.interaction {
                Interaction::Dragging { .. } => self.drag_end(),
                Interaction::Resizing { .. } => self.resize_end(),
                Interaction::Idle => WmOutcome::Ignored,
            },
            InputEvent::Key(_) | InputEvent::Quit => WmOutcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn wm() -> WindowManager {
        WindowManager::new(Point::new(0, 0), Size::new(800, 500), Size::new(1280, 720))
    }

    #[test]
    fn starts_normal_and_idle() {
        let wm = wm();
        assert_eq!(wm.mode(), WindowMode::Normal);
        assert_eq!(wm.interaction(), Interaction::Idle);
        assert!(wm.is_interactive());
    }

    #[test]
    fn new_clamps_initial_size() {
        let wm = WindowManager::new(Point::default(), Size::new(10, 10), Size::new(1280, 720));
        assert_eq!(wm.size(), MIN_WINDOW_SIZE);
    }

    #[test]
    fn minimize_from_normal_and_maximized() {
        let mut w = wm();
        assert_eq!(w.minimize(), WmOutcome::Changed);
        assert_eq!(w.mode(), WindowMode::Minimized);
        assert!(!w.is_interactive());
        assert_eq!(w.minimize(), WmOutcome::Ignored);

        let mut w = wm();
        w.toggle_maximize();
        assert_eq!(w.minimize(), WmOutcome::Changed);
        assert_eq!(w.mode(), WindowMode::Minimized);
    }

    #[test]
    fn restore_only_from_minimized() {
        let mut w = wm();
        assert_eq!(w.restore(), WmOutcome::Ignored);
        w.minimize();
        assert_eq!(w.restore(), WmOutcome::Changed);
        assert_eq!(w.mode(), WindowMode::Normal);
    }

    #[test]
    fn restore_after_maximized_minimize_returns_normal() {
        let mut w = wm();
        w.toggle_maximize();
        w.minimize();
        w.restore();
        assert_eq!(w.mode(), WindowMode::Normal);
    }

    #[test]
    fn toggle_maximize_round_trip() {
        let mut w = wm();
        assert_eq!(w.toggle_maximize(), WmOutcome::Changed);
        assert_eq!(w.mode(), WindowMode::Maximized);
        assert_eq!(w.toggle_maximize(), WmOutcome::Changed);
        assert_eq!(w.mode(), WindowMode::Normal);
    }

    #[test]
    fn toggle_maximize_ignored_while_minimized() {
        let mut w = wm();
        w.minimize();
        assert_eq!(w.toggle_maximize(), WmOutcome::Ignored);
        assert_eq!(w.mode(), WindowMode::Minimized);
    }

    #[test]
    fn drag_moves_by_pointer_delta() {
        let mut w = wm();
        w.drag_start(Point::new(100, 10));
        assert!(w.interaction().is_dragging());
        w.drag_move(Point::new(150, 40));
        assert_eq!(w.position(), Point::new(50, 30));
        w.drag_move(Point::new(90, 5));
        assert_eq!(w.position(), Point::new(-10, -5));
        assert_eq!(w.drag_end(), WmOutcome::Changed);
        assert_eq!(w.interaction(), Interaction::Idle);
    }

    #[test]
    fn drag_while_maximized_leaves_position_unchanged() {
        let mut w = wm();
        w.apply(WmEvent::ToggleMaximize);
        let before = w.position();
        assert_eq!(w.apply(WmEvent::DragStart(Point::new(10, 10))), WmOutcome::Ignored);
        assert_eq!(w.apply(WmEvent::DragMove(Point::new(300, 200))), WmOutcome::Ignored);
        assert_eq!(w.apply(WmEvent::DragEnd), WmOutcome::Ignored);
        assert_eq!(w.position(), before);
    }

    #[test]
    fn maximizing_mid_drag_cancels_gesture() {
        let mut w = wm();
        w.drag_start(Point::new(10, 10));
        w.toggle_maximize();
        assert_eq!(w.interaction(), Interaction::Idle);
        assert_eq!(w.drag_move(Point::new(500, 500)), WmOutcome::Ignored);
        w.toggle_maximize();
        assert_eq!(w.position(), Point::new(0, 0));
    }

    #[test]
    fn move_without_start_is_ignored() {
        let mut w = wm();
        assert_eq!(w.drag_move(Point::new(5, 5)), WmOutcome::Ignored);
        assert_eq!(w.resize_move(Point::new(5, 5)), WmOutcome::Ignored);
        assert_eq!(w.position(), Point::new(0, 0));
        assert_eq!(w.size(), Size::new(800, 500));
    }

    #[test]
    fn resize_grows_from_anchor() {
        let mut w = wm();
        w.resize_start(Point::new(800, 500));
        w.resize_move(Point::new(900, 560));
        assert_eq!(w.size(), Size::new(900, 560));
        w.resize_move(Point::new(850, 510));
        assert_eq!(w.size(), Size::new(850, 510));
        w.resize_end();
        assert_eq!(w.interaction(), Interaction::Idle);
    }

    #[test]
    fn resize_request_below_minimum_is_clamped() {
        let mut w = wm();
        // Ask for 100x100: delta of -700,-400 from the 800x500 anchor.
        w.resize_start(Point::new(800, 500));
        w.resize_move(Point::new(100, 100));
        assert_eq!(w.size(), Size::new(400, 300));
    }

    #[test]
    fn set_size_clamps() {
        let mut w = wm();
        w.set_size(Size::new(100, 100));
        assert_eq!(w.size(), Size::new(400, 300));
    }

    #[test]
    fn resize_ignored_while_maximized() {
        let mut w = wm();
        w.toggle_maximize();
        assert_eq!(w.resize_start(Point::new(0, 0)), WmOutcome::Ignored);
        assert_eq!(w.resize_move(Point::new(900, 900)), WmOutcome::Ignored);
        assert_eq!(w.size(), Size::new(800, 500));
    }

    #[test]
    fn frame_per_mode() {
        let mut w = wm();
        assert_eq!(w.frame(), Some(Rect::new(Point::new(0, 0), Size::new(800, 500))));
        w.toggle_maximize();
        assert_eq!(w.frame(), Some(Rect::new(Point::new(0, 0), Size::new(1280, 720))));
        w.minimize();
        assert_eq!(w.frame(), None);
    }

    #[test]
    fn pointer_routing_drags_via_title_bar() {
        let mut w = WindowManager::new(Point::new(100, 100), Size::new(800, 500), Size::new(1280, 720));
        w.handle_input(&InputEvent::PointerDown(Point::new(200, 110)));
        assert!(w.interaction().is_dragging());
        w.handle_input(&InputEvent::PointerMove(Point::new(250, 130)));
        w.handle_input(&InputEvent::PointerUp);
        assert_eq!(w.position(), Point::new(150, 120));
        assert_eq!(w.interaction(), Interaction::Idle);
    }

    #[test]
    fn pointer_routing_buttons_and_affordance() {
        let mut w = WindowManager::new(Point::new(100, 100), Size::new(800, 500), Size::new(1280, 720));
        w.handle_input(&InputEvent::PointerDown(Point::new(850, 110)));
        assert_eq!(w.mode(), WindowMode::Minimized);

        let aff = hit::affordance_rect(w.viewport());
        w.handle_input(&InputEvent::PointerDown(aff.origin));
        assert_eq!(w.mode(), WindowMode::Normal);

        w.handle_input(&InputEvent::PointerDown(Point::new(890, 110)));
        assert_eq!(w.mode(), WindowMode::Maximized);
    }

    #[test]
    fn pointer_routing_resize_grip() {
        let mut w = WindowManager::new(Point::new(0, 0), Size::new(800, 500), Size::new(1280, 720));
        w.handle_input(&InputEvent::PointerDown(Point::new(795, 495)));
        assert!(w.interaction().is_resizing());
        w.handle_input(&InputEvent::PointerMove(Point::new(895, 545)));
        w.handle_input(&InputEvent::PointerUp);
        assert_eq!(w.size(), Size::new(900, 550));
    }

    proptest! {
        #[test]
        fn size_never_below_minimum(moves in proptest::collection::vec((-3000i32..3000, -3000i32..3000), 1..20)) {
            let mut w = wm();
            w.resize_start(Point::new(800, 500));
            for (x, y) in moves {
                w.resize_move(Point::new(x, y));
                prop_assert!(w.size().width >= MIN_WINDOW_SIZE.width);
                prop_assert!(w.size().height >= MIN_WINDOW_SIZE.height);
            }
        }

        #[test]
        fn maximized_drag_never_moves(points in proptest::collection::vec((-3000i32..3000, -3000i32..3000), 1..20)) {
            let mut w = wm();
            w.toggle_maximize();
            for (x, y) in points {
                w.apply(WmEvent::DragStart(Point::new(x, y)));
                w.apply(WmEvent::DragMove(Point::new(y, x)));
                w.apply(WmEvent::DragEnd);
            }
            prop_assert_eq!(w.position(), Point::new(0, 0));
        }
    }
}
