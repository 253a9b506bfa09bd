//! Planner view lifecycle.
//!
//! A view owns exactly one [`PlacementSession`]. Entering
//! [`PlannerView::Open`] mounts a fresh session, room and gizmo from the
//! loaded [`PlannerSettings`]; leaving it detaches the gizmo and drops all
//! three, so nothing survives into the next view.

use bevy::prelude::*;

use crate::gizmo::TransformGizmo;
use crate::room::RoomDimensions;
use crate::session::PlacementSession;
use crate::settings::PlannerSettings;

/// Whether the planner view is mounted.
///
/// Every planner system is gated behind `in_state(PlannerView::Open)`.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlannerView {
    /// The planner is showing and owns a live session.
    #[default]
    Open,
    /// The planner was closed. Only the launcher is shown.
    Closed,
}

pub fn mount_session(mut commands: Commands, settings: Res<PlannerSettings>) {
    commands.insert_resource(PlacementSession::from_settings(&settings));
    commands.insert_resource(RoomDimensions::from_settings(&settings.room));
    commands.insert_resource(TransformGizmo::default());
    info!(
        "Planner view opened ({}x{}x{} m room, snap {})",
        settings.room.width, settings.room.depth, settings.room.height, settings.snap_quantum
    );
}

pub fn unmount_session(
    mut commands: Commands,
    session: Option<Res<PlacementSession>>,
    gizmo: Option<ResMut<TransformGizmo>>,
) {
    if let Some(mut gizmo) = gizmo {
        gizmo.detach();
    }
    let discarded = session.map_or(0, |s| s.items().len());
    commands.remove_resource::<PlacementSession>();
    commands.remove_resource::<RoomDimensions>();
    commands.remove_resource::<TransformGizmo>();
    info!("Planner view closed, discarded {} items", discarded);
}
