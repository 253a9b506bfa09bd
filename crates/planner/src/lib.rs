//! Headless core of the room planner.
//!
//! Owns the placement session, room dimensions and gizmo attachment, and the
//! systems that apply inbound events to them. Rendering and UI live in their
//! own crates and talk to this one only through events and read access.

use bevy::prelude::*;
use bevy::window::WindowFocused;

pub mod config;
pub mod events;
pub mod furniture;
pub mod gizmo;
pub mod item;
pub mod picking;
pub mod room;
pub mod session;
pub mod settings;
pub mod snap;
pub mod snapshot;
pub mod systems;
pub mod view;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
pub mod test_harness;

use events::{GizmoEvent, PlannerCommand, PointerEvent};
use session::SelectionChanged;
use settings::PlannerSettings;
use view::PlannerView;

/// Ordered phases for planner systems in the `Update` schedule.
///
/// ```text
/// Input  →  Apply  →  React
/// ```
///
/// * **Input** – Rendering and UI turn raw input into planner events.
/// * **Apply** – The session consumes those events. Nothing else writes it.
/// * **React** – Selection transitions are published and the gizmo follows.
///
/// All three only run while the view is open.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PlannerSet {
    Input,
    Apply,
    React,
}

pub struct PlannerPlugin;

impl Plugin for PlannerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlannerSettings>()
            .init_state::<PlannerView>()
            .add_event::<PlannerCommand>()
            .add_event::<PointerEvent>()
            .add_event::<GizmoEvent>()
            .add_event::<SelectionChanged>()
            .add_event::<WindowFocused>();

        app.configure_sets(
            Update,
            (PlannerSet::Input, PlannerSet::Apply, PlannerSet::React).chain(),
        );
        for set in [PlannerSet::Input, PlannerSet::Apply, PlannerSet::React] {
            app.configure_sets(Update, set.run_if(in_state(PlannerView::Open)));
        }

        app.add_systems(OnEnter(PlannerView::Open), view::mount_session)
            .add_systems(OnExit(PlannerView::Open), view::unmount_session)
            .add_systems(
                Update,
                (
                    systems::apply_planner_commands,
                    systems::apply_gizmo_events,
                    systems::apply_pointer_events,
                    systems::release_drag_fallback,
                )
                    .chain()
                    .in_set(PlannerSet::Apply),
            )
            .add_systems(
                Update,
                (systems::publish_selection_changes, gizmo::react_to_selection)
                    .chain()
                    .in_set(PlannerSet::React),
            );
    }
}
