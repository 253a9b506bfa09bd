use bevy::prelude::*;
use bevy_egui::EguiContexts;

use planner::events::PlannerCommand;
use planner::gizmo::GizmoMode;
use planner::session::PlacementSession;

use crate::egui_input_guard::egui_wants_keyboard;

/// Map one key press to a planner command given the current session state.
///
/// Escape cancels a pending drag first and only clears the selection when
/// no drag is in progress.
pub fn shortcut_command(key: KeyCode, session: &PlacementSession) -> Option<PlannerCommand> {
    match key {
        KeyCode::Delete | KeyCode::Backspace => session
            .selection()
            .id()
            .map(|_| PlannerCommand::RemoveSelected),
        KeyCode::Escape => {
            if session.drag().is_active() {
                Some(PlannerCommand::CancelDrag)
            } else if session.selection().id().is_some() {
                Some(PlannerCommand::Select { id: None })
            } else {
                None
            }
        }
        KeyCode::KeyW => Some(PlannerCommand::SetGizmoMode {
            mode: GizmoMode::Translate,
        }),
        KeyCode::KeyE => Some(PlannerCommand::SetGizmoMode {
            mode: GizmoMode::Rotate,
        }),
        _ => None,
    }
}

/// Keyboard shortcuts. Skipped while an egui text field has focus, so
/// Backspace in a dimension field never deletes an item.
pub fn planner_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    session: Res<PlacementSession>,
    mut contexts: EguiContexts,
    mut commands: EventWriter<PlannerCommand>,
) {
    if keys.get_just_pressed().next().is_none() || egui_wants_keyboard(&mut contexts) {
        return;
    }
    for &key in keys.get_just_pressed() {
        if let Some(command) = shortcut_command(key, &session) {
            commands.send(command);
        }
    }
}
