//! Canvas input for the planner.
//!
//! Split into sub-modules by concern:
//! - `cursor`: cursor ray tracking and pointer events (press, move, release)
//! - `keyboard`: delete, escape and gizmo mode shortcuts
//!
//! Nothing here mutates the session; every system only sends planner
//! events for the `Apply` phase to consume.

mod cursor;
mod keyboard;

pub use cursor::{emit_pointer_events, update_cursor_ray, CursorRay};
pub use keyboard::{planner_shortcuts, shortcut_command};
