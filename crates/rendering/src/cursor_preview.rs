use bevy::prelude::*;

use planner::session::PlacementSession;
use planner::settings::PlannerSettings;

const PREVIEW_ALPHA: f32 = 0.45;

/// Marker for the translucent ghost shown while a palette drag is pending.
#[derive(Component)]
pub struct DragPreview;

pub fn spawn_drag_preview(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mesh = meshes.add(Cuboid::new(1.0, 1.0, 1.0));
    let material = materials.add(StandardMaterial {
        base_color: Color::srgba(1.0, 1.0, 1.0, PREVIEW_ALPHA),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });

    commands.spawn((
        DragPreview,
        Mesh3d(mesh),
        MeshMaterial3d(material),
        Transform::IDENTITY,
        Visibility::Hidden,
    ));
}

/// Show the ghost at the snapped preview position, sized and tinted for the
/// dragged kind.
pub fn update_drag_preview(
    session: Res<PlacementSession>,
    settings: Res<PlannerSettings>,
    mut query: Query<
        (
            &mut Transform,
            &mut Visibility,
            &MeshMaterial3d<StandardMaterial>,
        ),
        With<DragPreview>,
    >,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Ok((mut transform, mut vis, mat_handle)) = query.get_single_mut() else {
        return;
    };

    let Some(kind) = session.drag().kind() else {
        *vis = Visibility::Hidden;
        return;
    };

    let he = kind.half_extents() * settings.model_scales.for_kind(kind);
    transform.translation = session.preview() + Vec3::Y * he.y;
    transform.scale = he * 2.0;
    *vis = Visibility::Visible;

    let [r, g, b] = kind.palette_color();
    let color = Color::srgba_u8(r, g, b, (PREVIEW_ALPHA * 255.0) as u8);
    if let Some(mat) = materials.get_mut(mat_handle.0.id()) {
        if mat.base_color != color {
            mat.base_color = color;
        }
    }
}

pub fn hide_drag_preview(mut query: Query<&mut Visibility, With<DragPreview>>) {
    for mut vis in &mut query {
        *vis = Visibility::Hidden;
    }
}
