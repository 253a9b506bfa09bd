//! Transform-gizmo attachment.
//!
//! The gizmo follows the selection: it is attached to the selected item and
//! detached when the selection clears. Attach/detach happens only in
//! [`react_to_selection`], which runs once per published
//! [`SelectionChanged`] event.
//!
//! Every attachment gets a fresh [`GizmoBinding`]. The interactive gizmo
//! stamps its change events with the binding it was attached under, so a
//! change produced for a previous attachment (or after detach) can never
//! land on the wrong item.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::item::ItemId;
use crate::session::SelectionChanged;

/// Generation of one gizmo attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GizmoBinding(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GizmoMode {
    /// Move along the horizontal axes.
    #[default]
    Translate,
    /// Spin around the vertical axis in fixed steps.
    Rotate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GizmoAttachment {
    pub target: ItemId,
    pub binding: GizmoBinding,
}

#[derive(Resource, Debug, Default)]
pub struct TransformGizmo {
    attachment: Option<GizmoAttachment>,
    generation: u32,
    dragging: bool,
    pub mode: GizmoMode,
}

impl TransformGizmo {
    pub fn attachment(&self) -> Option<GizmoAttachment> {
        self.attachment
    }

    pub fn target(&self) -> Option<ItemId> {
        self.attachment.map(|a| a.target)
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Attach to `target` under a fresh binding.
    pub fn attach(&mut self, target: ItemId) -> GizmoBinding {
        debug_assert!(
            self.attachment.is_none(),
            "gizmo attached twice without detach"
        );
        if self.attachment.is_some() {
            self.detach();
        }
        self.generation = self.generation.wrapping_add(1);
        let binding = GizmoBinding(self.generation);
        self.attachment = Some(GizmoAttachment { target, binding });
        debug!("Gizmo attached to {} (binding {})", target, binding.0);
        binding
    }

    /// Release the current attachment. Any in-flight drag ends with it.
    pub fn detach(&mut self) {
        if let Some(prev) = self.attachment.take() {
            debug!("Gizmo detached from {} (binding {})", prev.target, prev.binding.0);
        }
        self.dragging = false;
    }

    /// Resolve the item a change stamped with `binding` applies to.
    ///
    /// Returns `None` when the binding is stale or the gizmo is detached.
    pub fn resolve(&self, binding: GizmoBinding) -> Option<ItemId> {
        self.attachment
            .filter(|a| a.binding == binding)
            .map(|a| a.target)
    }

    /// Track the gizmo's dragging-changed callback. Ignored while detached.
    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging && self.attachment.is_some();
    }
}

/// Detach on leaving `Item(_)`, attach on entering `Item(id)`.
pub fn react_to_selection(
    mut events: EventReader<SelectionChanged>,
    mut gizmo: ResMut<TransformGizmo>,
) {
    for change in events.read() {
        if change.previous.id().is_some() {
            gizmo.detach();
        }
        if let Some(id) = change.current.id() {
            gizmo.attach(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_issues_fresh_bindings() {
        let mut gizmo = TransformGizmo::default();
        let first = gizmo.attach(ItemId(1));
        gizmo.detach();
        let second = gizmo.attach(ItemId(1));
        assert_ne!(first, second);
        assert_eq!(gizmo.target(), Some(ItemId(1)));
    }

    #[test]
    fn test_resolve_rejects_stale_binding() {
        let mut gizmo = TransformGizmo::default();
        let old = gizmo.attach(ItemId(1));
        gizmo.detach();
        let new = gizmo.attach(ItemId(2));
        assert_eq!(gizmo.resolve(old), None);
        assert_eq!(gizmo.resolve(new), Some(ItemId(2)));
    }

    #[test]
    fn test_resolve_after_detach() {
        let mut gizmo = TransformGizmo::default();
        let binding = gizmo.attach(ItemId(7));
        gizmo.detach();
        assert_eq!(gizmo.resolve(binding), None);
        assert_eq!(gizmo.target(), None);
    }

    #[test]
    fn test_detach_clears_dragging() {
        let mut gizmo = TransformGizmo::default();
        gizmo.attach(ItemId(3));
        gizmo.set_dragging(true);
        assert!(gizmo.is_dragging());
        gizmo.detach();
        assert!(!gizmo.is_dragging());
    }

    #[test]
    fn test_dragging_ignored_while_detached() {
        let mut gizmo = TransformGizmo::default();
        gizmo.set_dragging(true);
        assert!(!gizmo.is_dragging());
    }

    #[test]
    fn test_mode_defaults_to_translate() {
        assert_eq!(TransformGizmo::default().mode, GizmoMode::Translate);
    }
}
