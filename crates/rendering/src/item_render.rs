//! Item visuals mirrored from the placement session.
//!
//! Each placed item gets one `ItemVisual` entity carrying the item's
//! transform. Its children are the glTF model root, scaled by the item's
//! model scale, and a tinted placeholder box shown until the model loads.
//! Once the model's meshes have bounds the root is lifted so the lowest
//! point of the model rests on the floor.

use std::collections::HashMap;

use bevy::prelude::*;
use bevy::render::primitives::Aabb;

use planner::furniture::FurnitureKind;
use planner::item::{ItemId, PlacedItem};
use planner::session::PlacementSession;

/// Links a visual entity to its session item.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemVisual {
    pub id: ItemId,
}

/// Model root still waiting for its meshes to report bounds.
#[derive(Component)]
pub struct PendingGrounding;

/// Stand-in box removed once the model is grounded.
#[derive(Component)]
pub struct ModelPlaceholder;

/// Loaded glTF scenes and placeholder assets, per kind.
#[derive(Resource, Default)]
pub struct FurnitureAssets {
    pub scenes: HashMap<FurnitureKind, Handle<Scene>>,
    pub placeholder_materials: HashMap<FurnitureKind, Handle<StandardMaterial>>,
    pub unit_cube: Handle<Mesh>,
}

/// Startup system: load one GLB per furniture kind from assets/models/.
pub fn load_furniture_models(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut assets = FurnitureAssets {
        unit_cube: meshes.add(Cuboid::new(1.0, 1.0, 1.0)),
        ..default()
    };
    for kind in FurnitureKind::ALL {
        let scene =
            asset_server.load(bevy::gltf::GltfAssetLabel::Scene(0).from_asset(kind.model_path()));
        assets.scenes.insert(kind, scene);

        let [r, g, b] = kind.palette_color();
        let material = materials.add(StandardMaterial {
            base_color: Color::srgb_u8(r, g, b),
            perceptual_roughness: 0.8,
            ..default()
        });
        assets.placeholder_materials.insert(kind, material);
    }
    info!("Loading {} furniture models", FurnitureKind::ALL.len());
    commands.insert_resource(assets);
}

fn spawn_item_visual(commands: &mut Commands, assets: &FurnitureAssets, item: &PlacedItem) {
    let model_scale = item.effective_model_scale();
    let he = item.kind.half_extents() * model_scale;
    let scene = assets.scenes.get(&item.kind).cloned().unwrap_or_default();
    let material = assets
        .placeholder_materials
        .get(&item.kind)
        .cloned()
        .unwrap_or_default();

    commands
        .spawn((
            ItemVisual { id: item.id },
            item.transform(),
            Visibility::default(),
        ))
        .with_children(|parent| {
            parent.spawn((
                PendingGrounding,
                SceneRoot(scene),
                Transform::from_scale(Vec3::splat(model_scale)),
                Visibility::default(),
            ));
            parent.spawn((
                ModelPlaceholder,
                Mesh3d(assets.unit_cube.clone()),
                MeshMaterial3d(material),
                Transform::from_translation(Vec3::Y * he.y).with_scale(he * 2.0),
            ));
        });
}

/// Spawn, move and despawn visuals so they match the session items.
pub fn sync_item_visuals(
    mut commands: Commands,
    session: Res<PlacementSession>,
    assets: Option<Res<FurnitureAssets>>,
    mut visuals: Query<(Entity, &ItemVisual, &mut Transform)>,
) {
    if !session.is_changed() {
        return;
    }
    let Some(assets) = assets else {
        return;
    };

    let mut present: HashMap<ItemId, Entity> = HashMap::new();
    for (entity, visual, mut transform) in &mut visuals {
        match session.item(visual.id) {
            Some(item) => {
                let target = item.transform();
                if *transform != target {
                    *transform = target;
                }
                present.insert(visual.id, entity);
            }
            None => commands.entity(entity).despawn_recursive(),
        }
    }

    for item in session.items() {
        if !present.contains_key(&item.id) {
            spawn_item_visual(&mut commands, &assets, item);
        }
    }
}

/// Lift each freshly loaded model so it sits on the floor, then drop its
/// placeholder box.
pub fn ground_loaded_models(
    mut commands: Commands,
    mut roots: Query<(Entity, &mut Transform, &GlobalTransform, &Parent), With<PendingGrounding>>,
    children: Query<&Children>,
    bounds: Query<(&Aabb, &GlobalTransform)>,
    placeholders: Query<Entity, With<ModelPlaceholder>>,
) {
    for (root, mut transform, root_global, parent) in &mut roots {
        let to_local = root_global.affine().inverse();
        let mut lowest: Option<f32> = None;
        for descendant in children.iter_descendants(root) {
            let Ok((aabb, global)) = bounds.get(descendant) else {
                continue;
            };
            let min = Vec3::from(aabb.min());
            let max = Vec3::from(aabb.max());
            for corner in box_corners(min, max) {
                let local = to_local.transform_point3(global.transform_point(corner));
                lowest = Some(lowest.map_or(local.y, |y: f32| y.min(local.y)));
            }
        }
        // Not loaded yet, or failed to load and the placeholder stays.
        let Some(lowest) = lowest else {
            continue;
        };

        transform.translation.y = -lowest * transform.scale.y;
        commands.entity(root).remove::<PendingGrounding>();
        if let Ok(siblings) = children.get(parent.get()) {
            for &sibling in siblings {
                if placeholders.contains(sibling) {
                    commands.entity(sibling).despawn_recursive();
                }
            }
        }
    }
}

fn box_corners(min: Vec3, max: Vec3) -> [Vec3; 8] {
    [
        Vec3::new(min.x, min.y, min.z),
        Vec3::new(max.x, min.y, min.z),
        Vec3::new(min.x, max.y, min.z),
        Vec3::new(max.x, max.y, min.z),
        Vec3::new(min.x, min.y, max.z),
        Vec3::new(max.x, min.y, max.z),
        Vec3::new(min.x, max.y, max.z),
        Vec3::new(max.x, max.y, max.z),
    ]
}

/// Remove every item visual when the view closes.
pub fn despawn_item_visuals(mut commands: Commands, visuals: Query<Entity, With<ItemVisual>>) {
    for entity in &visuals {
        commands.entity(entity).despawn_recursive();
    }
}
