//! Placement session: the item collection plus the drag and selection
//! state machines.
//!
//! The session is a plain resource with a view-scoped lifetime (see
//! [`crate::view`]). All mutation goes through its methods; Bevy systems in
//! [`crate::systems`] translate inbound events into those calls.

mod placement;
mod state;

pub use placement::PlacementSession;
pub use state::{DragState, Selection, SelectionChanged};
