//! Interactive transform gizmo drawn around the selected item.
//!
//! Translate mode shows X and Z axis handles plus a plane handle in the
//! corner between them; there is no vertical handle. Rotate mode shows a
//! single ring for rotation about Y, snapped to eighth turns. Translation is
//! not snapped.
//!
//! Handles are hit-tested on the horizontal plane through the item origin.
//! Every change is sent as a `GizmoEvent` stamped with the binding that was
//! current when the handle was grabbed, so a drag that outlives its
//! attachment has no effect.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use planner::config::{GIZMO_SIZE, GRID_LIFT, ROTATION_SNAP};
use planner::events::GizmoEvent;
use planner::gizmo::{GizmoBinding, GizmoMode, TransformGizmo};
use planner::item::{PlacedItem, TransformPatch};
use planner::picking::ray_plane_hit;
use planner::session::PlacementSession;
use planner::snap::snap_angle;

use crate::egui_input_guard::egui_wants_pointer;
use crate::input::CursorRay;

/// Distance from a handle line that still counts as a hit.
const HANDLE_TOLERANCE: f32 = 0.08;
/// Clearance between the item footprint and the handles.
const HANDLE_MARGIN: f32 = 0.2;
/// Plane handle side as a fraction of the handle length.
const PLANE_HANDLE_FRACTION: f32 = 0.3;
const RING_SEGMENTS: usize = 48;

const X_COLOR: Color = Color::srgb(0.9, 0.25, 0.25);
const Z_COLOR: Color = Color::srgb(0.25, 0.45, 0.95);
const PLANE_COLOR: Color = Color::srgb(0.95, 0.8, 0.2);
const RING_COLOR: Color = Color::srgb(0.3, 0.85, 0.4);
const ACTIVE_COLOR: Color = Color::WHITE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GizmoHandle {
    AxisX,
    AxisZ,
    Plane,
    Ring,
}

/// State captured when a handle is grabbed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GizmoGrab {
    pub handle: GizmoHandle,
    pub binding: GizmoBinding,
    pub start_hit: Vec3,
    pub start: TransformPatch,
    last_sent: Option<TransformPatch>,
}

impl GizmoGrab {
    /// Start a grab from the item's stored transform.
    pub fn new(
        handle: GizmoHandle,
        binding: GizmoBinding,
        start_hit: Vec3,
        item: &PlacedItem,
    ) -> Self {
        Self {
            handle,
            binding,
            start_hit,
            start: item.patch(),
            last_sent: None,
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct GizmoDrag {
    grab: Option<GizmoGrab>,
}

impl GizmoDrag {
    pub fn is_active(&self) -> bool {
        self.grab.is_some()
    }

    pub fn handle(&self) -> Option<GizmoHandle> {
        self.grab.map(|g| g.handle)
    }
}

/// Handle length for an item: the default size, pushed out past large
/// footprints so the handles never hide inside the model.
pub fn handle_extent(item: &PlacedItem) -> f32 {
    let he = item.kind.half_extents() * item.scale.abs() * item.effective_model_scale();
    (Vec2::new(he.x, he.z).length() + HANDLE_MARGIN).max(GIZMO_SIZE)
}

/// Which handle, if any, sits under `offset` (hit point minus item origin,
/// on the item's horizontal plane).
pub fn hit_handle(mode: GizmoMode, extent: f32, offset: Vec3) -> Option<GizmoHandle> {
    match mode {
        GizmoMode::Translate => {
            let plane = extent * PLANE_HANDLE_FRACTION;
            let along = -HANDLE_TOLERANCE..=extent + HANDLE_TOLERANCE;
            if (0.0..=plane).contains(&offset.x) && (0.0..=plane).contains(&offset.z) {
                Some(GizmoHandle::Plane)
            } else if along.contains(&offset.x) && offset.z.abs() <= HANDLE_TOLERANCE {
                Some(GizmoHandle::AxisX)
            } else if along.contains(&offset.z) && offset.x.abs() <= HANDLE_TOLERANCE {
                Some(GizmoHandle::AxisZ)
            } else {
                None
            }
        }
        GizmoMode::Rotate => {
            let radius = Vec2::new(offset.x, offset.z).length();
            ((radius - extent).abs() <= HANDLE_TOLERANCE).then_some(GizmoHandle::Ring)
        }
    }
}

/// Angle of a horizontal offset, matching the sense of a rotation about +Y.
fn yaw_of(offset: Vec3) -> f32 {
    (-offset.z).atan2(offset.x)
}

/// Transform produced by dragging `grab` to `hit`.
pub fn drag_patch(grab: &GizmoGrab, hit: Vec3) -> TransformPatch {
    let mut patch = grab.start;
    let delta = hit - grab.start_hit;
    match grab.handle {
        GizmoHandle::AxisX => patch.position.x += delta.x,
        GizmoHandle::AxisZ => patch.position.z += delta.z,
        GizmoHandle::Plane => {
            patch.position.x += delta.x;
            patch.position.z += delta.z;
        }
        GizmoHandle::Ring => {
            let origin = grab.start.position;
            let turned = yaw_of(hit - origin) - yaw_of(grab.start_hit - origin);
            patch.rotation.y = snap_angle(grab.start.rotation.y + turned, ROTATION_SNAP);
        }
    }
    patch
}

/// Grab a handle under the cursor on left press.
pub fn grab_gizmo_handle(
    buttons: Res<ButtonInput<MouseButton>>,
    cursor: Res<CursorRay>,
    gizmo: Res<TransformGizmo>,
    session: Res<PlacementSession>,
    mut drag: ResMut<GizmoDrag>,
    mut contexts: EguiContexts,
    mut events: EventWriter<GizmoEvent>,
) {
    if !buttons.just_pressed(MouseButton::Left) || drag.is_active() || session.drag().is_active()
    {
        return;
    }
    let Some(attachment) = gizmo.attachment() else {
        return;
    };
    let Some(item) = session.item(attachment.target) else {
        return;
    };
    let Some(hit) = cursor.0.and_then(|ray| ray_plane_hit(ray, item.position.y)) else {
        return;
    };
    let Some(handle) = hit_handle(gizmo.mode, handle_extent(item), hit - item.position) else {
        return;
    };
    if egui_wants_pointer(&mut contexts) {
        return;
    }

    drag.grab = Some(GizmoGrab::new(handle, attachment.binding, hit, item));
    events.send(GizmoEvent::DraggingChanged(true));
}

/// Follow the cursor while a handle is held, and release on mouse up.
pub fn drive_gizmo_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    cursor: Res<CursorRay>,
    gizmo: Res<TransformGizmo>,
    mut drag: ResMut<GizmoDrag>,
    mut events: EventWriter<GizmoEvent>,
) {
    let Some(mut grab) = drag.grab else {
        return;
    };

    // Detached or re-attached underneath us: the drag is over.
    if gizmo.attachment().map(|a| a.binding) != Some(grab.binding) {
        drag.grab = None;
        return;
    }

    if !buttons.pressed(MouseButton::Left) {
        drag.grab = None;
        events.send(GizmoEvent::DraggingChanged(false));
        return;
    }

    let Some(hit) = cursor.0.and_then(|ray| ray_plane_hit(ray, grab.start.position.y)) else {
        return;
    };
    let patch = drag_patch(&grab, hit);
    if grab.last_sent != Some(patch) {
        events.send(GizmoEvent::ObjectChanged {
            binding: grab.binding,
            transform: patch,
        });
        grab.last_sent = Some(patch);
        drag.grab = Some(grab);
    }
}

/// Draw the handles for the current mode around the attached item.
pub fn draw_transform_gizmo(
    mut gizmos: Gizmos,
    gizmo: Res<TransformGizmo>,
    session: Res<PlacementSession>,
    drag: Res<GizmoDrag>,
) {
    let Some(item) = gizmo.target().and_then(|id| session.item(id)) else {
        return;
    };
    let origin = item.position + Vec3::Y * GRID_LIFT * 2.0;
    let extent = handle_extent(item);
    let color_for = |handle: GizmoHandle, base: Color| {
        if drag.handle() == Some(handle) {
            ACTIVE_COLOR
        } else {
            base
        }
    };

    match gizmo.mode {
        GizmoMode::Translate => {
            for (handle, dir, side, base) in [
                (GizmoHandle::AxisX, Vec3::X, Vec3::Z, X_COLOR),
                (GizmoHandle::AxisZ, Vec3::Z, Vec3::X, Z_COLOR),
            ] {
                let color = color_for(handle, base);
                let tip = origin + dir * extent;
                let head = dir * extent * 0.12;
                let wing = side * extent * 0.06;
                gizmos.line(origin, tip, color);
                gizmos.line(tip, tip - head + wing, color);
                gizmos.line(tip, tip - head - wing, color);
            }
            let s = extent * PLANE_HANDLE_FRACTION;
            let color = color_for(GizmoHandle::Plane, PLANE_COLOR);
            let corners = [
                origin,
                origin + Vec3::X * s,
                origin + Vec3::new(s, 0.0, s),
                origin + Vec3::Z * s,
            ];
            for i in 0..corners.len() {
                gizmos.line(corners[i], corners[(i + 1) % corners.len()], color);
            }
        }
        GizmoMode::Rotate => {
            let color = color_for(GizmoHandle::Ring, RING_COLOR);
            let point = |angle: f32| origin + Vec3::new(angle.cos(), 0.0, -angle.sin()) * extent;
            for i in 0..RING_SEGMENTS {
                let a0 = i as f32 / RING_SEGMENTS as f32 * std::f32::consts::TAU;
                let a1 = (i + 1) as f32 / RING_SEGMENTS as f32 * std::f32::consts::TAU;
                gizmos.line(point(a0), point(a1), color);
            }
            // Heading marker for the current yaw.
            gizmos.line(origin, point(item.rotation.y), color);
        }
    }
}

/// Forget any held handle when the view closes.
pub fn reset_gizmo_drag(mut drag: ResMut<GizmoDrag>) {
    drag.grab = None;
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use planner::furniture::FurnitureKind;
    use planner::item::ItemId;

    use super::*;

    fn grab(handle: GizmoHandle, start_hit: Vec3) -> GizmoGrab {
        GizmoGrab {
            handle,
            binding: GizmoBinding(1),
            start_hit,
            start: TransformPatch {
                position: Vec3::new(1.0, 0.0, 1.0),
                rotation: Vec3::ZERO,
                scale: Vec3::ONE,
            },
            last_sent: None,
        }
    }

    #[test]
    fn test_translate_handles_hit() {
        let e = GIZMO_SIZE;
        let mode = GizmoMode::Translate;
        assert_eq!(hit_handle(mode, e, Vec3::new(0.1, 0.0, 0.1)), Some(GizmoHandle::Plane));
        assert_eq!(hit_handle(mode, e, Vec3::new(0.7, 0.0, 0.02)), Some(GizmoHandle::AxisX));
        assert_eq!(hit_handle(mode, e, Vec3::new(-0.03, 0.0, 0.6)), Some(GizmoHandle::AxisZ));
        assert_eq!(hit_handle(mode, e, Vec3::new(0.6, 0.0, 0.6)), None);
        assert_eq!(hit_handle(mode, e, Vec3::new(-0.5, 0.0, 0.0)), None);
    }

    #[test]
    fn test_ring_hit() {
        let e = GIZMO_SIZE;
        let on_ring = Vec3::new(0.0, 0.0, -e);
        assert_eq!(hit_handle(GizmoMode::Rotate, e, on_ring), Some(GizmoHandle::Ring));
        assert_eq!(hit_handle(GizmoMode::Rotate, e, Vec3::ZERO), None);
    }

    #[test]
    fn test_axis_drag_moves_one_axis_only() {
        let g = grab(GizmoHandle::AxisX, Vec3::new(1.5, 0.0, 1.0));
        let patch = drag_patch(&g, Vec3::new(2.0, 0.0, 3.0));
        assert_eq!(patch.position, Vec3::new(1.5, 0.0, 1.0));

        let g = grab(GizmoHandle::AxisZ, Vec3::new(1.0, 0.0, 1.5));
        let patch = drag_patch(&g, Vec3::new(4.0, 0.0, 2.5));
        assert_eq!(patch.position, Vec3::new(1.0, 0.0, 2.0));
    }

    #[test]
    fn test_plane_drag_is_unsnapped_and_horizontal() {
        let g = grab(GizmoHandle::Plane, Vec3::new(1.1, 0.0, 1.1));
        let patch = drag_patch(&g, Vec3::new(1.23, 0.0, 0.97));
        assert!((patch.position - Vec3::new(1.13, 0.0, 0.87)).length() < 1e-5);
        assert_eq!(patch.position.y, 0.0);
    }

    #[test]
    fn test_ring_drag_snaps_to_eighth_turns() {
        // Grab due +X of the item, drag to roughly 50 degrees around.
        let g = grab(GizmoHandle::Ring, Vec3::new(1.8, 0.0, 1.0));
        let angle = 50.0_f32.to_radians();
        let hit = Vec3::new(1.0 + angle.cos() * 0.8, 0.0, 1.0 - angle.sin() * 0.8);
        let patch = drag_patch(&g, hit);
        assert!((patch.rotation.y - FRAC_PI_4).abs() < 1e-5);
        assert_eq!(patch.position, g.start.position);
    }

    /// Ring grab on an item at (1, 0, 1) with the given yaw, grabbed due +X
    /// and dragged `degrees` around (positive is counter-clockwise from above).
    fn ring_drag_from_yaw(yaw: f32, degrees: f32) -> TransformPatch {
        let mut item = PlacedItem::new(ItemId(5), FurnitureKind::Bed, Vec3::new(1.0, 0.0, 1.0));
        item.rotation = Vec3::new(0.0, yaw, 0.0);
        let start_hit = Vec3::new(1.8, 0.0, 1.0);
        let g = GizmoGrab::new(GizmoHandle::Ring, GizmoBinding(1), start_hit, &item);
        let angle = degrees.to_radians();
        let hit = Vec3::new(1.0 + angle.cos() * 0.8, 0.0, 1.0 - angle.sin() * 0.8);
        drag_patch(&g, hit)
    }

    #[test]
    fn test_ring_drag_past_quarter_turn_keeps_direction() {
        let patch = ring_drag_from_yaw(3.0 * FRAC_PI_4, 50.0);
        assert!((patch.rotation.y - PI).abs() < 1e-5, "yaw {}", patch.rotation.y);
        assert_eq!(patch.rotation.x, 0.0);
        assert_eq!(patch.rotation.z, 0.0);
    }

    #[test]
    fn test_ring_drag_from_non_zero_yaws() {
        for (yaw, degrees, expected) in [
            (FRAC_PI_2, 50.0, 3.0 * FRAC_PI_4),
            (FRAC_PI_2, -50.0, FRAC_PI_4),
            (3.0 * FRAC_PI_4, -50.0, FRAC_PI_2),
            (-3.0 * FRAC_PI_4, 50.0, -FRAC_PI_2),
            (-3.0 * FRAC_PI_4, -50.0, -PI),
        ] {
            let patch = ring_drag_from_yaw(yaw, degrees);
            assert!(
                (patch.rotation.y - expected).abs() < 1e-5,
                "from {yaw} by {degrees} deg: got {}, want {expected}",
                patch.rotation.y
            );
            assert_eq!(patch.rotation.x, 0.0);
            assert_eq!(patch.rotation.z, 0.0);
            assert_eq!(patch.position, Vec3::new(1.0, 0.0, 1.0));
        }
    }

    #[test]
    fn test_handle_extent_grows_for_large_items() {
        let chair = PlacedItem::new(ItemId(1), FurnitureKind::Chair, Vec3::ZERO);
        let bed = PlacedItem::new(ItemId(2), FurnitureKind::Bed, Vec3::ZERO);
        assert_eq!(handle_extent(&chair), GIZMO_SIZE);
        assert!(handle_extent(&bed) > GIZMO_SIZE);
    }
}
