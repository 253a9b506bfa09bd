//! Serializable view of the whole planner state.
//!
//! Used as the agent-mode response body and by tests that compare state
//! across frames.

use bevy::prelude::World;
use serde::Serialize;

use crate::furniture::FurnitureKind;
use crate::gizmo::{GizmoMode, TransformGizmo};
use crate::item::{ItemId, PlacedItem};
use crate::room::RoomDimensions;
use crate::session::{DragState, PlacementSession, Selection};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemSnapshot {
    pub id: ItemId,
    pub kind: FurnitureKind,
    pub position: [f32; 3],
    pub rotation: [f32; 3],
    pub scale: [f32; 3],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_scale: Option<f32>,
}

impl From<&PlacedItem> for ItemSnapshot {
    fn from(item: &PlacedItem) -> Self {
        Self {
            id: item.id,
            kind: item.kind,
            position: item.position.to_array(),
            rotation: item.rotation.to_array(),
            scale: item.scale.to_array(),
            model_scale: item.model_scale,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GizmoSnapshot {
    pub target: Option<ItemId>,
    pub mode: GizmoMode,
    pub dragging: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannerSnapshot {
    pub items: Vec<ItemSnapshot>,
    pub selection: Selection,
    pub drag: DragState,
    pub preview: [f32; 3],
    pub snap: f32,
    pub room: RoomDimensions,
    pub gizmo: GizmoSnapshot,
}

impl PlannerSnapshot {
    pub fn capture(
        session: &PlacementSession,
        room: &RoomDimensions,
        gizmo: &TransformGizmo,
    ) -> Self {
        Self {
            items: session.items().iter().map(ItemSnapshot::from).collect(),
            selection: session.selection(),
            drag: session.drag(),
            preview: session.preview().to_array(),
            snap: session.snap(),
            room: *room,
            gizmo: GizmoSnapshot {
                target: gizmo.target(),
                mode: gizmo.mode,
                dragging: gizmo.is_dragging(),
            },
        }
    }

    /// Capture from a world with a mounted view. `None` while closed.
    pub fn from_world(world: &World) -> Option<Self> {
        Some(Self::capture(
            world.get_resource::<PlacementSession>()?,
            world.get_resource::<RoomDimensions>()?,
            world.get_resource::<TransformGizmo>()?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use bevy::math::Vec3;

    use super::*;

    #[test]
    fn test_snapshot_json_shape() {
        let mut session = PlacementSession::default();
        let id = session.add_item(FurnitureKind::Table, Vec3::new(1.0, 0.0, -0.5));
        let mut gizmo = TransformGizmo::default();
        gizmo.attach(id);

        let snapshot = PlannerSnapshot::capture(&session, &RoomDimensions::default(), &gizmo);
        let json = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(json["items"][0]["id"], 1);
        assert_eq!(json["items"][0]["kind"], "table");
        assert_eq!(json["items"][0]["position"][0], 1.0);
        assert_eq!(json["selection"]["state"], "item");
        assert_eq!(json["selection"]["id"], 1);
        assert_eq!(json["drag"]["state"], "idle");
        assert_eq!(json["room"]["width"], 6.0);
        assert_eq!(json["gizmo"]["target"], 1);
        assert_eq!(json["gizmo"]["mode"], "translate");
    }

    #[test]
    fn test_snapshot_of_empty_session() {
        let snapshot = PlannerSnapshot::capture(
            &PlacementSession::default(),
            &RoomDimensions::default(),
            &TransformGizmo::default(),
        );
        assert!(snapshot.items.is_empty());
        assert_eq!(snapshot.selection, Selection::None);
        assert_eq!(snapshot.gizmo.target, None);
    }
}
