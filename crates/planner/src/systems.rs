//! Systems that apply inbound events to the session and publish the
//! resulting selection transitions.
//!
//! These are the only writers of [`PlacementSession`] while a view is open.

use bevy::prelude::*;
use bevy::window::WindowFocused;

use crate::events::{GizmoEvent, PlannerCommand, PointerEvent};
use crate::gizmo::TransformGizmo;
use crate::item::TransformPatch;
use crate::room::RoomDimensions;
use crate::session::{PlacementSession, SelectionChanged};

// ---------------------------------------------------------------------------
// Apply phase
// ---------------------------------------------------------------------------

/// Apply discrete commands from the UI, keyboard and agent mode.
pub fn apply_planner_commands(
    mut requests: EventReader<PlannerCommand>,
    mut session: ResMut<PlacementSession>,
    mut room: ResMut<RoomDimensions>,
    mut gizmo: ResMut<TransformGizmo>,
) {
    for request in requests.read() {
        match *request {
            PlannerCommand::AddItem { kind, position } => {
                session.add_item(kind, position.map(Vec3::from_array).unwrap_or(Vec3::ZERO));
            }
            PlannerCommand::RemoveSelected => {
                session.remove_selected();
            }
            PlannerCommand::RemoveItem { id } => {
                session.remove_item(id);
            }
            PlannerCommand::ClearItems => session.clear_items(),
            PlannerCommand::Select { id } => session.select(id),
            PlannerCommand::StartDrag { kind } => session.start_drag(kind),
            PlannerCommand::UpdatePreview { point } => {
                session.update_preview(Vec3::from_array(point));
            }
            PlannerCommand::CommitDrag => {
                session.commit_drag();
            }
            PlannerCommand::CancelDrag => session.cancel_drag(),
            PlannerCommand::TransformItem {
                id,
                position,
                rotation,
                scale,
            } => {
                let patch = TransformPatch {
                    position: Vec3::from_array(position),
                    rotation: Vec3::from_array(rotation),
                    scale: Vec3::from_array(scale),
                };
                session.on_transform_change(id, patch);
            }
            PlannerCommand::SetSnap { quantum } => session.set_snap(quantum),
            PlannerCommand::ResizeRoom {
                width,
                depth,
                height,
            } => {
                if let Some(width) = width {
                    room.set_width(width);
                }
                if let Some(depth) = depth {
                    room.set_depth(depth);
                }
                if let Some(height) = height {
                    room.set_height(height);
                }
            }
            PlannerCommand::SetGizmoMode { mode } => gizmo.mode = mode,
        }
    }
}

/// Apply gizmo callbacks. Changes stamped with a stale binding are dropped.
pub fn apply_gizmo_events(
    mut events: EventReader<GizmoEvent>,
    mut gizmo: ResMut<TransformGizmo>,
    mut session: ResMut<PlacementSession>,
) {
    for event in events.read() {
        match *event {
            GizmoEvent::ObjectChanged { binding, transform } => {
                let Some(target) = gizmo.resolve(binding) else {
                    debug!("Dropping gizmo change for stale binding {}", binding.0);
                    continue;
                };
                session.on_transform_change(target, transform);
            }
            GizmoEvent::DraggingChanged(dragging) => gizmo.set_dragging(dragging),
        }
    }
}

/// Apply canvas pointer callbacks.
pub fn apply_pointer_events(
    mut events: EventReader<PointerEvent>,
    gizmo: Res<TransformGizmo>,
    mut session: ResMut<PlacementSession>,
) {
    for event in events.read() {
        match *event {
            PointerEvent::Moved { world_point } => {
                if session.drag().is_active() {
                    session.update_preview(world_point);
                }
            }
            PointerEvent::Released { over_canvas } => {
                if !session.drag().is_active() {
                    continue;
                }
                if over_canvas {
                    session.commit_drag();
                } else {
                    session.cancel_drag();
                }
            }
            PointerEvent::BackgroundPressed => {
                if !gizmo.is_dragging() && session.selection().id().is_some() {
                    session.select(None);
                }
            }
            PointerEvent::ItemPressed(id) => session.select(Some(id)),
        }
    }
}

/// Cancel a drag that survived a primary-button release or a focus loss.
///
/// Runs after [`apply_pointer_events`], so a release over the canvas has
/// already committed by the time this looks at the drag state.
pub fn release_drag_fallback(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    mut focus: EventReader<WindowFocused>,
    mut session: ResMut<PlacementSession>,
) {
    let released = buttons.is_some_and(|b| b.just_released(MouseButton::Left));
    let unfocused = focus.read().fold(false, |lost, f| lost || !f.focused);
    if (released || unfocused) && session.drag().is_active() {
        debug!("Cancelling stuck palette drag");
        session.cancel_drag();
    }
}

// ---------------------------------------------------------------------------
// React phase
// ---------------------------------------------------------------------------

/// Publish the session's recorded selection transitions as events.
pub fn publish_selection_changes(
    mut session: ResMut<PlacementSession>,
    mut writer: EventWriter<SelectionChanged>,
) {
    for change in session.bypass_change_detection().drain_transitions() {
        writer.send(change);
    }
}
