//! Window manager for the floating terminal window.
//!
//! Exactly one window exists and it lives for the whole process. The
//! manager owns its geometry and a small state machine
//! (Normal/Minimized/Maximized) plus the in-flight drag or resize gesture.
//! Every transition is a plain method call, so the whole lifecycle can be
//! driven without a rendering surface.

pub mod hit;
pub mod manager;
pub mod window;

pub use hit::HitZone;
pub use manager::{WindowManager, WmEvent, WmOutcome};
pub use window::{Interaction, WindowMode};
