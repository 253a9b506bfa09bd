//! Launcher window shown while the planner view is closed.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use planner::view::PlannerView;

pub fn launcher_ui(mut contexts: EguiContexts, mut next_view: ResMut<NextState<PlannerView>>) {
    egui::Window::new("Room Planner")
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .collapsible(false)
        .resizable(false)
        .show(contexts.ctx_mut(), |ui| {
            ui.label("The planner is closed. Unsaved layouts are discarded on close.");
            ui.add_space(8.0);
            if ui.button("Open planner").clicked() {
                next_view.set(PlannerView::Open);
            }
        });
}
