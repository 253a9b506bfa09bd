use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy_egui::EguiContexts;

use planner::config::{CAMERA_EYE, CAMERA_FOV_DEG};
use planner::gizmo::TransformGizmo;

use crate::egui_input_guard::egui_wants_pointer;

const ZOOM_SPEED: f32 = 0.1;
const MIN_DISTANCE: f32 = 2.0;
const MAX_DISTANCE: f32 = 30.0;
const MIN_PITCH: f32 = 5.0 * std::f32::consts::PI / 180.0; // 5 degrees, almost level with the floor
const MAX_PITCH: f32 = 85.0 * std::f32::consts::PI / 180.0; // 85 degrees, nearly top-down
const ORBIT_SENSITIVITY: f32 = 0.005;
/// Metres of focus travel per pixel of middle-drag, per metre of distance.
const PAN_SENSITIVITY: f32 = 0.0015;
/// How far the focus may wander from the room center.
const FOCUS_LIMIT: f32 = 25.0;

/// Orbital camera model: camera orbits around a focus point on the floor.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    /// Floor point the camera looks at
    pub focus: Vec3,
    /// Horizontal rotation in radians
    pub yaw: f32,
    /// Elevation angle in radians (clamped between MIN_PITCH and MAX_PITCH)
    pub pitch: f32,
    /// Distance from focus point
    pub distance: f32,
}

impl Default for OrbitCamera {
    /// Looking at the room center from the default eye position.
    fn default() -> Self {
        Self::from_eye(Vec3::from_array(CAMERA_EYE), Vec3::ZERO)
    }
}

impl OrbitCamera {
    pub fn from_eye(eye: Vec3, focus: Vec3) -> Self {
        let offset = eye - focus;
        let distance = offset.length().clamp(MIN_DISTANCE, MAX_DISTANCE);
        Self {
            focus,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / offset.length().max(f32::EPSILON))
                .asin()
                .clamp(MIN_PITCH, MAX_PITCH),
            distance,
        }
    }
}

/// Cursor tracking for one mouse-button camera gesture.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DragTrack {
    active: bool,
    last_pos: Vec2,
}

impl DragTrack {
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Feed one frame of button and cursor state. Returns the cursor motion
    /// in pixels while the gesture is held. A gesture only starts when
    /// `can_start` holds on the press frame.
    pub fn step(
        &mut self,
        just_pressed: bool,
        just_released: bool,
        can_start: bool,
        cursor: Option<Vec2>,
    ) -> Option<Vec2> {
        if just_pressed && can_start {
            if let Some(pos) = cursor {
                self.active = true;
                self.last_pos = pos;
            }
        }
        if just_released {
            self.active = false;
        }
        if !self.active {
            return None;
        }
        let pos = cursor?;
        let delta = pos - self.last_pos;
        self.last_pos = pos;
        Some(delta)
    }
}

/// Middle-button pan and right-button orbit gestures.
#[derive(Resource, Default, Debug)]
pub struct CameraDrags {
    pub pan: DragTrack,
    pub orbit: DragTrack,
}

/// Run condition: camera controls are live unless the transform gizmo is
/// being dragged.
pub fn gizmo_idle(gizmo: Option<Res<TransformGizmo>>) -> bool {
    !gizmo.is_some_and(|g| g.is_dragging())
}

pub fn setup_camera(mut commands: Commands) {
    let orbit = OrbitCamera::default();
    let (pos, look_at) = orbit_to_transform(&orbit);

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEG.to_radians(),
            ..default()
        }),
        Transform::from_translation(pos).looking_at(look_at, Vec3::Y),
    ));
    commands.insert_resource(orbit);
}

fn clamp_focus(focus: &mut Vec3) {
    focus.x = focus.x.clamp(-FOCUS_LIMIT, FOCUS_LIMIT);
    focus.z = focus.z.clamp(-FOCUS_LIMIT, FOCUS_LIMIT);
}

/// Eye position and look-at target. Yaw 0 puts the eye on the +Z side of
/// the focus, facing the back wall.
pub(crate) fn orbit_to_transform(orbit: &OrbitCamera) -> (Vec3, Vec3) {
    let (sin_pitch, cos_pitch) = orbit.pitch.sin_cos();
    let (sin_yaw, cos_yaw) = orbit.yaw.sin_cos();
    let offset = Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw) * orbit.distance;
    (orbit.focus + offset, orbit.focus)
}

/// Move the camera when the orbit changed.
pub fn apply_orbit_camera(
    orbit: Res<OrbitCamera>,
    mut query: Query<&mut Transform, With<Camera3d>>,
) {
    if !orbit.is_changed() {
        return;
    }
    let (pos, look_at) = orbit_to_transform(&orbit);
    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };
    *transform = Transform::from_translation(pos).looking_at(look_at, Vec3::Y);
}

/// Slide the focus across the floor by a cursor motion in pixels. The room
/// follows the cursor, so dragging right moves the focus left on screen.
pub fn pan_focus(orbit: &mut OrbitCamera, delta: Vec2) {
    let metres = orbit.distance * PAN_SENSITIVITY;
    let (sin_yaw, cos_yaw) = orbit.yaw.sin_cos();
    orbit.focus.x += (-delta.x * cos_yaw - delta.y * sin_yaw) * metres;
    orbit.focus.z += (delta.x * sin_yaw - delta.y * cos_yaw) * metres;
    clamp_focus(&mut orbit.focus);
}

/// Turn the camera around the focus: horizontal motion spins, vertical
/// motion tilts between eye level and top-down.
pub fn orbit_by(orbit: &mut OrbitCamera, delta: Vec2) {
    orbit.yaw -= delta.x * ORBIT_SENSITIVITY;
    orbit.pitch = (orbit.pitch + delta.y * ORBIT_SENSITIVITY).clamp(MIN_PITCH, MAX_PITCH);
}

/// Middle-drag pans, right-drag orbits. Gestures never start over egui.
pub fn camera_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut contexts: EguiContexts,
    mut drags: ResMut<CameraDrags>,
    mut orbit: ResMut<OrbitCamera>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let cursor = window.cursor_position();
    let starting = buttons.just_pressed(MouseButton::Middle)
        || buttons.just_pressed(MouseButton::Right);
    let can_start = !starting || !egui_wants_pointer(&mut contexts);

    if let Some(delta) = drags.pan.step(
        buttons.just_pressed(MouseButton::Middle),
        buttons.just_released(MouseButton::Middle),
        can_start,
        cursor,
    ) {
        if delta != Vec2::ZERO {
            pan_focus(&mut orbit, delta);
        }
    }
    if let Some(delta) = drags.orbit.step(
        buttons.just_pressed(MouseButton::Right),
        buttons.just_released(MouseButton::Right),
        can_start,
        cursor,
    ) {
        if delta != Vec2::ZERO {
            orbit_by(&mut orbit, delta);
        }
    }
}

/// Scale the orbit distance by one wheel step, in lines.
pub fn zoom_by(orbit: &mut OrbitCamera, lines: f32) {
    let factor = 1.0 - lines * ZOOM_SPEED;
    orbit.distance = (orbit.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
}

/// Wheel zoom, ignored while the cursor is over egui.
pub fn camera_zoom(
    mut wheel: EventReader<MouseWheel>,
    mut contexts: EguiContexts,
    mut orbit: ResMut<OrbitCamera>,
) {
    if egui_wants_pointer(&mut contexts) {
        wheel.clear();
        return;
    }
    for event in wheel.read() {
        let lines = match event.unit {
            MouseScrollUnit::Line => event.y,
            MouseScrollUnit::Pixel => event.y / 100.0,
        };
        zoom_by(&mut orbit, lines);
    }
}
