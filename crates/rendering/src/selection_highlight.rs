use bevy::prelude::*;

use planner::picking::item_bounds;
use planner::session::PlacementSession;

/// Highlight color used for the selected item's wire box.
const HIGHLIGHT_COLOR: Srgba = Srgba::new(0.2, 0.7, 1.0, 1.0);

/// Wire box slightly larger than the item bounds so it never z-fights.
const HIGHLIGHT_PADDING: f32 = 1.05;

/// Alpha of the highlight at time `t`: a 2 Hz pulse between 0.5 and 1.0.
pub fn highlight_alpha(t: f32) -> f32 {
    let sine = (t * 2.0 * std::f32::consts::TAU).sin(); // -1 to 1
    0.75 + sine * 0.25
}

/// Draw a pulsing wire box around the selected item.
pub fn draw_selection_highlight(
    mut gizmos: Gizmos,
    time: Res<Time>,
    session: Res<PlacementSession>,
) {
    let Some(item) = session.selected_item() else {
        return;
    };
    let bounds = item_bounds(item);
    let min = Vec3::from(bounds.min);
    let max = Vec3::from(bounds.max);
    let size = (max - min) * HIGHLIGHT_PADDING;
    let center = (min + max) / 2.0;

    let color = HIGHLIGHT_COLOR.with_alpha(highlight_alpha(time.elapsed_secs()));
    gizmos.cuboid(
        Transform::from_translation(center).with_scale(size),
        color,
    );
}
