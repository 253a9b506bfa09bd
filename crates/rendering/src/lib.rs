use bevy::prelude::*;

use planner::view::PlannerView;
use planner::PlannerSet;

pub mod camera;
pub mod cursor_preview;
pub mod egui_input_guard;
pub mod input;
pub mod item_render;
pub mod room_render;
pub mod selection_highlight;
pub mod transform_gizmo;

use camera::CameraDrags;
use input::CursorRay;
use transform_gizmo::GizmoDrag;

/// Systems that mirror planner state into the scene. They run after the
/// session has settled for the frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenderSyncSet;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraDrags>()
            .init_resource::<CursorRay>()
            .init_resource::<GizmoDrag>()
            .add_systems(
                Startup,
                (
                    camera::setup_camera,
                    setup_lighting,
                    room_render::setup_room_materials,
                    cursor_preview::spawn_drag_preview,
                    item_render::load_furniture_models,
                ),
            )
            .add_systems(
                Update,
                (camera::camera_drag, camera::camera_zoom)
                    .run_if(camera::gizmo_idle)
                    .before(camera::apply_orbit_camera),
            )
            .add_systems(Update, camera::apply_orbit_camera);

        // Input: raw mouse/keyboard -> planner events
        app.add_systems(
            Update,
            (
                input::update_cursor_ray,
                transform_gizmo::grab_gizmo_handle,
                transform_gizmo::drive_gizmo_drag,
                input::emit_pointer_events,
                input::planner_shortcuts,
            )
                .chain()
                .in_set(PlannerSet::Input),
        );

        // Sync: planner state -> scene
        app.configure_sets(
            Update,
            RenderSyncSet
                .after(PlannerSet::React)
                .run_if(in_state(PlannerView::Open)),
        )
        .add_systems(
            Update,
            (
                room_render::rebuild_room_geometry,
                room_render::draw_floor_grid,
                item_render::sync_item_visuals,
                item_render::ground_loaded_models,
                cursor_preview::update_drag_preview,
                selection_highlight::draw_selection_highlight,
                transform_gizmo::draw_transform_gizmo,
            )
                .in_set(RenderSyncSet),
        )
        .add_systems(
            OnExit(PlannerView::Open),
            (
                room_render::despawn_room_geometry,
                item_render::despawn_item_visuals,
                cursor_preview::hide_drag_preview,
                transform_gizmo::reset_gizmo_drag,
            ),
        );
    }
}

fn setup_lighting(mut commands: Commands) {
    // Ambient light for baseline illumination
    commands.insert_resource(AmbientLight {
        color: Color::srgb(1.0, 0.98, 0.95),
        brightness: 400.0,
    });

    // Key light from above the front-right corner of the room
    commands.spawn((
        DirectionalLight {
            illuminance: 8000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(6.0, 10.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
