//! Grid and rotation snapping.
//!
//! Quantization is `round(value / quantum) * quantum` with `f32::round`,
//! which rounds half-way cases away from zero. A quantum of zero disables
//! snapping and passes the value through.

use bevy::prelude::*;

use crate::config::MIN_SNAP_QUANTUM;

/// Snap `value` to the nearest multiple of `quantum`.
///
/// Passes `value` through when the quantum is zero or the step count
/// overflows.
pub fn quantize(value: f32, quantum: f32) -> f32 {
    if quantum == 0.0 {
        return value;
    }
    let steps = (value / quantum).round();
    let snapped = steps * quantum;
    if snapped.is_finite() {
        snapped
    } else {
        value
    }
}

/// Project a world-space point onto the floor and snap its horizontal axes.
///
/// The vertical coordinate is always 0.
pub fn snap_to_floor(point: Vec3, quantum: f32) -> Vec3 {
    Vec3::new(quantize(point.x, quantum), 0.0, quantize(point.z, quantum))
}

/// Snap an angle in radians to a fixed step.
pub fn snap_angle(angle: f32, step: f32) -> f32 {
    quantize(angle, step)
}

/// Sanitize a user-entered snap quantum: negative, non-finite or
/// vanishingly small input disables snapping.
pub fn sanitize_quantum(quantum: f32) -> f32 {
    if quantum.is_finite() && quantum >= MIN_SNAP_QUANTUM {
        quantum
    } else {
        0.0
    }
}
