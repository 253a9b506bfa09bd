//! Floor, walls and the snap grid.
//!
//! Geometry is rebuilt whenever `RoomDimensions` changes. The grid is drawn
//! with immediate-mode gizmo lines so it follows snap changes for free.

use bevy::prelude::*;

use planner::config::GRID_LIFT;
use planner::room::RoomDimensions;
use planner::session::PlacementSession;

const FLOOR_COLOR: Color = Color::srgb(0.86, 0.84, 0.80);
const WALL_COLOR: Color = Color::srgb(0.95, 0.95, 0.93);
const GRID_COLOR: Color = Color::srgba(0.35, 0.35, 0.40, 0.35);

/// Marker on every floor and wall entity.
#[derive(Component)]
pub struct RoomGeometry;

/// Shared materials for the room shell.
#[derive(Resource)]
pub struct RoomMaterials {
    pub floor: Handle<StandardMaterial>,
    pub wall: Handle<StandardMaterial>,
}

pub fn setup_room_materials(
    mut commands: Commands,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let floor = materials.add(StandardMaterial {
        base_color: FLOOR_COLOR,
        perceptual_roughness: 0.9,
        ..default()
    });
    let wall = materials.add(StandardMaterial {
        base_color: WALL_COLOR,
        perceptual_roughness: 0.95,
        ..default()
    });
    commands.insert_resource(RoomMaterials { floor, wall });
}

/// Respawn the floor and walls when the room dimensions change.
pub fn rebuild_room_geometry(
    mut commands: Commands,
    room: Res<RoomDimensions>,
    existing: Query<Entity, With<RoomGeometry>>,
    room_materials: Res<RoomMaterials>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    if !room.is_changed() {
        return;
    }
    for entity in &existing {
        commands.entity(entity).despawn_recursive();
    }

    let floor = room.floor_size();
    commands.spawn((
        RoomGeometry,
        Mesh3d(meshes.add(Plane3d::default().mesh().size(floor.x, floor.y))),
        MeshMaterial3d(room_materials.floor.clone()),
        Transform::IDENTITY,
    ));

    for wall in room.walls() {
        commands.spawn((
            RoomGeometry,
            Mesh3d(meshes.add(Cuboid::new(wall.size.x, wall.size.y, wall.size.z))),
            MeshMaterial3d(room_materials.wall.clone()),
            Transform::from_translation(wall.center),
        ));
    }
    debug!(
        "Room geometry rebuilt: {}x{}x{}",
        room.width(),
        room.depth(),
        room.height()
    );
}

/// Draw the floor grid, one cell per snap step.
pub fn draw_floor_grid(
    mut gizmos: Gizmos,
    room: Res<RoomDimensions>,
    session: Res<PlacementSession>,
) {
    let grid = room.grid_layout(session.snap());
    let half = grid.size / 2.0;
    let cell = grid.cell_size();
    for i in 0..=grid.divisions {
        let t = -half + i as f32 * cell;
        gizmos.line(
            Vec3::new(t, GRID_LIFT, -half),
            Vec3::new(t, GRID_LIFT, half),
            GRID_COLOR,
        );
        gizmos.line(
            Vec3::new(-half, GRID_LIFT, t),
            Vec3::new(half, GRID_LIFT, t),
            GRID_COLOR,
        );
    }
}

/// Remove the room shell when the view closes.
pub fn despawn_room_geometry(mut commands: Commands, existing: Query<Entity, With<RoomGeometry>>) {
    for entity in &existing {
        commands.entity(entity).despawn_recursive();
    }
}
