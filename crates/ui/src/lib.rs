use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use planner::view::PlannerView;
use planner::PlannerSet;

pub mod dock;
pub mod hud;
pub mod launcher;
pub mod sidebar;
pub mod theme;
pub mod widgets;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_systems(Startup, theme::apply_planner_theme)
            .add_systems(
                Update,
                (
                    sidebar::planner_sidebar_ui,
                    dock::palette_dock_ui,
                    hud::snap_hud_ui,
                )
                    .chain()
                    .in_set(PlannerSet::Input),
            )
            .add_systems(
                Update,
                launcher::launcher_ui.run_if(in_state(PlannerView::Closed)),
            );
    }
}
