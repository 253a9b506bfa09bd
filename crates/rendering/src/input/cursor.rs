use bevy::prelude::*;
use bevy_egui::EguiContexts;

use planner::events::PointerEvent;
use planner::picking::{pick_item, ray_plane_hit};
use planner::session::PlacementSession;

use crate::egui_input_guard::{egui_wants_pointer, pointer_over_egui};
use crate::transform_gizmo::GizmoDrag;

/// World-space ray under the cursor, refreshed every frame.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct CursorRay(pub Option<Ray3d>);

impl CursorRay {
    /// Point where the ray meets the floor, if it does.
    pub fn floor_hit(&self) -> Option<Vec3> {
        self.0.and_then(|ray| ray_plane_hit(ray, 0.0))
    }
}

pub fn update_cursor_ray(
    windows: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    mut cursor: ResMut<CursorRay>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Ok((camera, cam_transform)) = camera_q.get_single() else {
        return;
    };
    cursor.0 = window
        .cursor_position()
        .and_then(|screen_pos| camera.viewport_to_world(cam_transform, screen_pos).ok());
}

/// Translate mouse input over the canvas into `PointerEvent`s.
///
/// Moves are reported only while a palette drag is pending. A release
/// always reports whether it landed on the floor outside any egui area.
/// Presses over egui or on a gizmo handle are ignored.
pub fn emit_pointer_events(
    buttons: Res<ButtonInput<MouseButton>>,
    cursor: Res<CursorRay>,
    session: Res<PlacementSession>,
    gizmo_drag: Res<GizmoDrag>,
    mut contexts: EguiContexts,
    mut last_moved: Local<Option<Vec3>>,
    mut pointer: EventWriter<PointerEvent>,
) {
    let floor = cursor.floor_hit();
    let dragging = session.drag().is_active();

    if dragging {
        if let Some(point) = floor {
            if *last_moved != Some(point) {
                pointer.send(PointerEvent::Moved { world_point: point });
                *last_moved = Some(point);
            }
        }
    } else {
        *last_moved = None;
    }

    if buttons.just_released(MouseButton::Left) && dragging {
        let over_canvas = floor.is_some() && !pointer_over_egui(&mut contexts);
        pointer.send(PointerEvent::Released { over_canvas });
    }

    if buttons.just_pressed(MouseButton::Left)
        && !dragging
        && !gizmo_drag.is_active()
        && !egui_wants_pointer(&mut contexts)
    {
        let Some(ray) = cursor.0 else {
            return;
        };
        match pick_item(session.items(), ray) {
            Some(id) => pointer.send(PointerEvent::ItemPressed(id)),
            None => pointer.send(PointerEvent::BackgroundPressed),
        };
    }
}
