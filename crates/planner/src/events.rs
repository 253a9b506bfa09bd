//! Inbound events consumed by the planner core.
//!
//! `rendering`, `ui` and the headless agent loop never touch the session
//! directly; they send these events and the `Apply` systems translate them
//! into session calls. The outbound [`crate::session::SelectionChanged`]
//! lives next to the session that produces it.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::furniture::FurnitureKind;
use crate::gizmo::{GizmoBinding, GizmoMode};
use crate::item::{ItemId, TransformPatch};

/// Pointer callbacks from the canvas surface.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Cursor ray hit the floor plane at `world_point`.
    Moved { world_point: Vec3 },
    /// Primary button released. `over_canvas` is false when the release
    /// happened over UI or outside any valid drop target.
    Released { over_canvas: bool },
    /// Primary button pressed on empty canvas.
    BackgroundPressed,
    /// Primary button pressed on a placed item.
    ItemPressed(ItemId),
}

/// Callbacks from the interactive transform gizmo.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum GizmoEvent {
    /// The attached object was moved or rotated by the gizmo.
    ObjectChanged {
        binding: GizmoBinding,
        transform: TransformPatch,
    },
    DraggingChanged(bool),
}

/// Discrete user commands from the UI, keyboard shortcuts and agent mode.
///
/// Also the agent-mode wire format: one JSON object per line, tagged by
/// `"cmd"`.
#[derive(Event, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum PlannerCommand {
    AddItem {
        kind: FurnitureKind,
        #[serde(default)]
        position: Option<[f32; 3]>,
    },
    RemoveSelected,
    RemoveItem {
        id: ItemId,
    },
    ClearItems,
    Select {
        #[serde(default)]
        id: Option<ItemId>,
    },
    StartDrag {
        kind: FurnitureKind,
    },
    UpdatePreview {
        point: [f32; 3],
    },
    CommitDrag,
    CancelDrag,
    TransformItem {
        id: ItemId,
        position: [f32; 3],
        rotation: [f32; 3],
        scale: [f32; 3],
    },
    SetSnap {
        quantum: f32,
    },
    ResizeRoom {
        #[serde(default)]
        width: Option<f32>,
        #[serde(default)]
        depth: Option<f32>,
        #[serde(default)]
        height: Option<f32>,
    },
    SetGizmoMode {
        mode: GizmoMode,
    },
}
