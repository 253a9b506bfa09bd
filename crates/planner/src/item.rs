use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::furniture::FurnitureKind;

/// Stable identity of a placed item, unique within one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Position, XYZ Euler rotation (radians) and scale of one item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformPatch {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedItem {
    pub id: ItemId,
    pub kind: FurnitureKind,
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
    /// Per-kind multiplier applied to the loaded model, independent of `scale`.
    pub model_scale: Option<f32>,
}

impl PlacedItem {
    pub fn new(id: ItemId, kind: FurnitureKind, position: Vec3) -> Self {
        Self {
            id,
            kind,
            position,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            model_scale: None,
        }
    }

    pub fn effective_model_scale(&self) -> f32 {
        self.model_scale.unwrap_or(1.0)
    }

    /// The item's stored transform fields. Euler angles are copied as-is,
    /// not decomposed from `transform()`.
    pub fn patch(&self) -> TransformPatch {
        TransformPatch {
            position: self.position,
            rotation: self.rotation,
            scale: self.scale,
        }
    }

    pub fn apply(&mut self, patch: TransformPatch) {
        self.position = patch.position;
        self.rotation = patch.rotation;
        self.scale = patch.scale;
    }

    pub fn transform(&self) -> Transform {
        Transform {
            translation: self.position,
            rotation: Quat::from_euler(
                EulerRot::XYZ,
                self.rotation.x,
                self.rotation.y,
                self.rotation.z,
            ),
            scale: self.scale,
        }
    }

    /// Short label for lists: the kind plus the last four digits of the id.
    pub fn short_label(&self) -> String {
        format!("{} {:04}", self.kind.label(), self.id.0 % 10_000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_has_identity_transform() {
        let item = PlacedItem::new(ItemId(1), FurnitureKind::Chair, Vec3::new(1.0, 0.0, 2.0));
        assert_eq!(item.rotation, Vec3::ZERO);
        assert_eq!(item.scale, Vec3::ONE);
        assert_eq!(item.effective_model_scale(), 1.0);
    }

    #[test]
    fn test_patch_round_trips_past_quarter_turn() {
        for yaw in [
            std::f32::consts::FRAC_PI_4,
            3.0 * std::f32::consts::FRAC_PI_4,
            -3.0 * std::f32::consts::FRAC_PI_4,
            std::f32::consts::PI,
        ] {
            let mut item = PlacedItem::new(ItemId(2), FurnitureKind::Bed, Vec3::ZERO);
            item.rotation = Vec3::new(0.0, yaw, 0.0);
            item.position = Vec3::new(0.5, 0.0, -1.0);
            let patch = item.patch();
            assert_eq!(patch.rotation, Vec3::new(0.0, yaw, 0.0));
            assert_eq!(patch.position, item.position);

            let mut copy = PlacedItem::new(ItemId(3), FurnitureKind::Bed, Vec3::ZERO);
            copy.apply(patch);
            assert_eq!(copy.rotation, item.rotation);
        }
    }

    #[test]
    fn test_short_label() {
        let item = PlacedItem::new(ItemId(123_456), FurnitureKind::Table, Vec3::ZERO);
        assert_eq!(item.short_label(), "Table 3456");
    }
}
