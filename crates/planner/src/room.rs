//! Room dimensions and the derived wall/floor/grid layout.
//!
//! Dimensions are presentational only: they shape the walls and floor but
//! never constrain where items may be placed.

use bevy::prelude::*;
use serde::Serialize;

use crate::config::{ROOM_DIMENSION_FALLBACK, WALL_THICKNESS};
use crate::settings::RoomSettings;

#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoomDimensions {
    width: f32,
    depth: f32,
    height: f32,
}

impl Default for RoomDimensions {
    fn default() -> Self {
        Self::from_settings(&RoomSettings::default())
    }
}

/// Replace zero, negative and non-finite input with the fallback dimension.
fn sanitize_dimension(value: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        ROOM_DIMENSION_FALLBACK
    }
}

impl RoomDimensions {
    pub fn new(width: f32, depth: f32, height: f32) -> Self {
        Self {
            width: sanitize_dimension(width),
            depth: sanitize_dimension(depth),
            height: sanitize_dimension(height),
        }
    }

    pub fn from_settings(room: &RoomSettings) -> Self {
        Self::new(room.width, room.depth, room.height)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn depth(&self) -> f32 {
        self.depth
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = sanitize_dimension(width);
    }

    pub fn set_depth(&mut self, depth: f32) {
        self.depth = sanitize_dimension(depth);
    }

    pub fn set_height(&mut self, height: f32) {
        self.height = sanitize_dimension(height);
    }

    /// Floor size on the X/Z plane.
    pub fn floor_size(&self) -> Vec2 {
        Vec2::new(self.width, self.depth)
    }

    /// Back, left and right walls. The front stays open toward the camera.
    pub fn walls(&self) -> [WallSlab; 3] {
        let (w, d, h) = (self.width, self.depth, self.height);
        [
            WallSlab {
                side: WallSide::Back,
                center: Vec3::new(0.0, h / 2.0, -d / 2.0),
                size: Vec3::new(w, h, WALL_THICKNESS),
            },
            WallSlab {
                side: WallSide::Left,
                center: Vec3::new(-w / 2.0, h / 2.0, 0.0),
                size: Vec3::new(WALL_THICKNESS, h, d),
            },
            WallSlab {
                side: WallSide::Right,
                center: Vec3::new(w / 2.0, h / 2.0, 0.0),
                size: Vec3::new(WALL_THICKNESS, h, d),
            },
        ]
    }

    /// Square floor grid covering the larger room side, one cell per snap
    /// step. A zero quantum falls back to one-metre cells.
    pub fn grid_layout(&self, snap: f32) -> GridLayout {
        let size = self.width.max(self.depth);
        let step = if snap > 0.0 { snap } else { 1.0 };
        let divisions = ((size / step).round() as u32).max(1);
        GridLayout { size, divisions }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallSide {
    Back,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallSlab {
    pub side: WallSide,
    pub center: Vec3,
    pub size: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub size: f32,
    pub divisions: u32,
}

impl GridLayout {
    pub fn cell_size(&self) -> f32 {
        self.size / self.divisions as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_ROOM_DEPTH, DEFAULT_ROOM_HEIGHT, DEFAULT_ROOM_WIDTH};

    #[test]
    fn test_default_dimensions() {
        let room = RoomDimensions::default();
        assert_eq!(room.width(), DEFAULT_ROOM_WIDTH);
        assert_eq!(room.depth(), DEFAULT_ROOM_DEPTH);
        assert_eq!(room.height(), DEFAULT_ROOM_HEIGHT);
    }

    #[test]
    fn test_invalid_dimensions_fall_back() {
        let mut room = RoomDimensions::default();
        room.set_width(0.0);
        room.set_depth(f32::NAN);
        room.set_height(-3.0);
        assert_eq!(room.width(), ROOM_DIMENSION_FALLBACK);
        assert_eq!(room.depth(), ROOM_DIMENSION_FALLBACK);
        assert_eq!(room.height(), ROOM_DIMENSION_FALLBACK);
    }

    #[test]
    fn test_dimensions_edit_independently() {
        let mut room = RoomDimensions::default();
        room.set_depth(7.5);
        assert_eq!(room.width(), DEFAULT_ROOM_WIDTH);
        assert_eq!(room.depth(), 7.5);
        assert_eq!(room.height(), DEFAULT_ROOM_HEIGHT);
    }

    #[test]
    fn test_wall_layout() {
        let room = RoomDimensions::new(6.0, 4.0, 3.0);
        let [back, left, right] = room.walls();
        assert_eq!(back.side, WallSide::Back);
        assert_eq!(back.center, Vec3::new(0.0, 1.5, -2.0));
        assert_eq!(back.size, Vec3::new(6.0, 3.0, WALL_THICKNESS));
        assert_eq!(left.center, Vec3::new(-3.0, 1.5, 0.0));
        assert_eq!(left.size, Vec3::new(WALL_THICKNESS, 3.0, 4.0));
        assert_eq!(right.center, Vec3::new(3.0, 1.5, 0.0));
    }

    #[test]
    fn test_grid_layout_follows_snap() {
        let room = RoomDimensions::new(6.0, 4.0, 3.0);
        let grid = room.grid_layout(0.25);
        assert_eq!(grid.size, 6.0);
        assert_eq!(grid.divisions, 24);
        assert!((grid.cell_size() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_grid_layout_zero_snap_uses_metres() {
        let room = RoomDimensions::new(3.0, 5.0, 3.0);
        assert_eq!(room.grid_layout(0.0).divisions, 5);
    }

    #[test]
    fn test_grid_layout_never_zero_divisions() {
        let room = RoomDimensions::new(1.0, 1.0, 1.0);
        assert_eq!(room.grid_layout(10.0).divisions, 1);
    }
}
