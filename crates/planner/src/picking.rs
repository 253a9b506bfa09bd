//! Ray tests against the floor plane and placed items.
//!
//! Item bounds are yaw-invariant: the horizontal half extent is the length
//! of the footprint diagonal, so a box always covers the model whatever its
//! rotation about Y.

use bevy::math::bounding::{Aabb3d, RayCast3d};
use bevy::prelude::*;

use crate::item::{ItemId, PlacedItem};

/// Rays flatter than this never hit a horizontal plane.
const MIN_VERTICAL_COMPONENT: f32 = 0.001;

/// Farthest distance an item pick is considered, in metres.
const MAX_PICK_DISTANCE: f32 = 1000.0;

/// Intersect a ray with the horizontal plane `y = plane_y`.
pub fn ray_plane_hit(ray: Ray3d, plane_y: f32) -> Option<Vec3> {
    let dir = *ray.direction;
    if dir.y.abs() <= MIN_VERTICAL_COMPONENT {
        return None;
    }
    let t = (plane_y - ray.origin.y) / dir.y;
    if t <= 0.0 {
        return None;
    }
    Some(ray.origin + dir * t)
}

/// Bounding box of an item, resting on its position.
pub fn item_bounds(item: &PlacedItem) -> Aabb3d {
    let he = item.kind.half_extents() * item.scale.abs() * item.effective_model_scale();
    let radius = Vec2::new(he.x, he.z).length();
    let half = Vec3::new(radius, he.y, radius);
    Aabb3d::new(item.position + Vec3::Y * he.y, half)
}

/// Nearest item hit by the ray, if any.
pub fn pick_item(items: &[PlacedItem], ray: Ray3d) -> Option<ItemId> {
    let cast = RayCast3d::from_ray(ray, MAX_PICK_DISTANCE);
    items
        .iter()
        .filter_map(|item| {
            cast.aabb_intersection_at(&item_bounds(item))
                .map(|t| (t, item.id))
        })
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, id)| id)
}
