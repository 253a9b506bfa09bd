pub const DEFAULT_ROOM_WIDTH: f32 = 6.0;
pub const DEFAULT_ROOM_DEPTH: f32 = 4.0;
pub const DEFAULT_ROOM_HEIGHT: f32 = 3.0;

/// Dimension used when a room edit produces zero, a negative number, or NaN.
pub const ROOM_DIMENSION_FALLBACK: f32 = 1.0;

/// Wall slab thickness in metres.
pub const WALL_THICKNESS: f32 = 0.1;

/// Default horizontal grid-snap quantum in metres.
pub const DEFAULT_SNAP_QUANTUM: f32 = 0.25;

/// Smallest snap quantum kept; anything finer disables snapping.
pub const MIN_SNAP_QUANTUM: f32 = 1e-3;

/// Gizmo rotation step: an eighth of a full turn.
pub const ROTATION_SNAP: f32 = std::f32::consts::FRAC_PI_4;

/// World-space length of the gizmo handles.
pub const GIZMO_SIZE: f32 = 0.8;

/// Height of the floor grid lines above the floor, avoids z-fighting.
pub const GRID_LIFT: f32 = 0.01;

pub const CAMERA_EYE: [f32; 3] = [5.0, 4.0, 6.0];
pub const CAMERA_FOV_DEG: f32 = 50.0;
