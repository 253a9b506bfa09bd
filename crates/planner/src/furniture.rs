//! Furniture catalog: the fixed set of placeable kinds.
//!
//! Every kind carries its model path, palette color and an approximate
//! footprint. The footprint is only used for picking and the selection
//! highlight; it never constrains placement.

use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FurnitureKind {
    Chair,
    Table,
    Bed,
}

impl FurnitureKind {
    /// Palette order, as shown in the dock and the quick-add buttons.
    pub const ALL: [FurnitureKind; 3] = [Self::Chair, Self::Table, Self::Bed];

    /// Stable lowercase key, also used on the agent wire format.
    pub fn key(self) -> &'static str {
        match self {
            Self::Chair => "chair",
            Self::Table => "table",
            Self::Bed => "bed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Chair => "Chair",
            Self::Table => "Table",
            Self::Bed => "Bed",
        }
    }

    /// Asset path of the glTF model, relative to the asset root.
    pub fn model_path(self) -> &'static str {
        match self {
            Self::Chair => "models/chair.glb",
            Self::Table => "models/table.glb",
            Self::Bed => "models/bed1.glb",
        }
    }

    /// Tint of the drag card in the palette dock.
    pub fn palette_color(self) -> [u8; 3] {
        match self {
            Self::Chair => [0xff, 0xed, 0xd5],
            Self::Table => [0xdb, 0xea, 0xfe],
            Self::Bed => [0xe0, 0xe7, 0xff],
        }
    }

    /// Approximate half extents of the unscaled model, in metres.
    pub fn half_extents(self) -> Vec3 {
        match self {
            Self::Chair => Vec3::new(0.25, 0.45, 0.25),
            Self::Table => Vec3::new(0.6, 0.375, 0.4),
            Self::Bed => Vec3::new(0.8, 0.3, 1.0),
        }
    }
}

impl fmt::Display for FurnitureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
